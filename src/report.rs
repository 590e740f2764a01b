use anyhow::{Context, Result};

use std::{
    fmt::{self, Display},
    fs,
    path::Path,
    time::Duration,
};

use crate::{catalogue::PriceList, sales::Sale, usd::Usd};

/// Name of the report file written in the current working directory.
pub const RESULTS_FILE: &str = "SalesResults.txt";

/// A sale line that could not be priced because its product is not in the
/// catalogue.
#[derive(Debug, PartialEq, Eq)]
pub struct UnknownProduct(pub String);

impl Display for UnknownProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: Product '{}' not in catalogue.", self.0)
    }
}

/// The outcome of pricing a list of sales against a catalogue.
#[derive(Debug, Default)]
pub struct Totals {
    pub amount: Usd,
    pub errors: Vec<UnknownProduct>,
}

/// Prices each sale against the catalogue and sums the results.
///
/// Sales whose product is not in `prices` contribute nothing to the total and
/// produce one [`UnknownProduct`] error each, in input order. Everything else
/// contributes price times quantity, so negative quantities or prices reduce
/// the total rather than being rejected.
#[must_use]
pub fn aggregate(prices: &PriceList, sales: &[Sale]) -> Totals {
    let mut totals = Totals::default();
    for sale in sales {
        match prices.price(&sale.product) {
            Some(price) => totals.amount += price * sale.quantity,
            None => totals.errors.push(UnknownProduct(sale.product.clone())),
        }
    }
    totals
}

/// The final sales report.
///
/// To get a printable version of the report, use its [`Display`]
/// implementation; to write it to disk, use [`Report::save`]. Both produce
/// the same text.
#[derive(Debug)]
pub struct Report {
    totals: Totals,
    elapsed: Duration,
}

impl Report {
    #[must_use]
    pub fn new(totals: Totals, elapsed: Duration) -> Self {
        Self { totals, elapsed }
    }

    /// Writes the report text to the file at `path`, replacing any previous
    /// contents.
    ///
    /// # Errors
    ///
    /// Returns any error from creating or writing the file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(&path, self.to_string())
            .with_context(|| format!("writing {}", path.as_ref().display()))
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sales Report")?;
        writeln!(f, "{:=<30}", "")?;
        writeln!(f, "Total Sales Amount: {}", self.totals.amount)?;
        writeln!(f, "Execution Time: {:.4} sec", self.elapsed.as_secs_f64())?;
        writeln!(f)?;
        write!(f, "Errors:")?;
        if self.totals.errors.is_empty() {
            write!(f, "\nNo errors encountered.")?;
        } else {
            for error in &self.totals.errors {
                write!(f, "\n{error}")?;
            }
        }
        Ok(())
    }
}
