use serde_json::Value;

use std::{
    fmt::{self, Display},
    fs, io,
    path::{Path, PathBuf},
};

/// The ways loading an input document can fail.
///
/// Each variant carries the path of the offending file, and the [`Display`]
/// implementation produces the user-facing diagnostic, so callers can simply
/// propagate the error to report it.
#[derive(Debug)]
pub enum LoadError {
    /// The file does not exist.
    NotFound(PathBuf),
    /// The file exists but could not be read.
    Io(PathBuf, io::Error),
    /// The file was read but is not a JSON array of records.
    Parse(PathBuf, serde_json::Error),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(path) => {
                write!(f, "File not found - {}", path.display())
            }
            LoadError::Io(path, err) => {
                write!(f, "Cannot read file {} - {err}", path.display())
            }
            LoadError::Parse(path, _) => {
                write!(f, "Invalid JSON format in file - {}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::NotFound(_) => None,
            LoadError::Io(_, err) => Some(err),
            LoadError::Parse(_, err) => Some(err),
        }
    }
}

/// Reads the file at `path` and parses it as a JSON array of records.
///
/// The records themselves are returned as raw [`Value`]s; field-level
/// validation is the normalizers' job, so a document full of junk entries
/// still loads successfully here.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file is missing, unreadable, not valid
/// JSON, or valid JSON that is not an array.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Value>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io(path.to_path_buf(), err),
    })?;
    serde_json::from_str(&text).map_err(|err| LoadError::Parse(path.to_path_buf(), err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_fn_parses_an_array_of_records() {
        let entries = load("testdata/prices.json").unwrap();
        assert_eq!(entries.len(), 3, "wrong number of entries");
        assert_eq!(entries[0]["title"], "Widget");
    }

    #[test]
    fn load_fn_reports_a_missing_file_as_not_found() {
        let err = load("testdata/no_such_file.json").unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)), "got {err:?}");
        assert_eq!(
            err.to_string(),
            "File not found - testdata/no_such_file.json"
        );
    }

    #[test]
    fn load_fn_reports_bad_json_as_a_parse_error() {
        let err = load("testdata/invalid.json").unwrap_err();
        assert!(matches!(err, LoadError::Parse(..)), "got {err:?}");
        assert_eq!(
            err.to_string(),
            "Invalid JSON format in file - testdata/invalid.json"
        );
    }

    #[test]
    fn load_fn_rejects_a_document_that_is_not_an_array() {
        let err = load("testdata/not_an_array.json").unwrap_err();
        assert!(matches!(err, LoadError::Parse(..)), "got {err:?}");
    }
}
