#![doc = include_str!("../README.md")]
use serde_json::Value;

use std::fmt::{self, Display};

pub mod catalogue;
pub mod loader;
pub mod report;
pub mod sales;
pub mod usd;

pub use catalogue::PriceList;
pub use loader::{load, LoadError};
pub use report::{aggregate, Report, Totals, UnknownProduct, RESULTS_FILE};
pub use sales::{normalize, Sale};
pub use usd::Usd;

/// A defect found in an input record during normalization.
///
/// Warnings are returned to the caller rather than printed, so the
/// normalizers stay pure; the CLI prints each one as it is produced. They are
/// not part of the final [`Report`].
#[derive(Debug)]
pub enum Warning {
    /// A catalogue entry missing `title` or `price`, dropped entirely.
    InvalidProductEntry(Value),
    /// A catalogue entry whose `price` is not a number, kept at $0.00.
    InvalidPrice { title: String },
    /// A sales entry missing `Product` or `Quantity`, dropped entirely.
    InvalidSalesEntry(Value),
    /// A sales entry whose `Quantity` is not a number, kept at quantity 0.
    InvalidQuantity { product: String },
}

impl Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::InvalidProductEntry(entry) => {
                write!(f, "Warning: Invalid product entry {entry}")
            }
            Warning::InvalidPrice { title } => {
                write!(f, "Warning: {title} has an invalid price")
            }
            Warning::InvalidSalesEntry(entry) => {
                write!(f, "Warning: Invalid sales entry {entry}")
            }
            Warning::InvalidQuantity { product } => {
                write!(f, "Warning: Invalid quantity for {product}")
            }
        }
    }
}
