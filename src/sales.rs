use serde::Deserialize;
use serde_json::Value;

use crate::Warning;

/// A sales entry as it appears on disk, before validation.
#[derive(Debug, Deserialize)]
struct RawSale {
    #[serde(rename = "Product")]
    product: Option<String>,
    #[serde(rename = "Quantity")]
    quantity: Option<Value>,
}

/// A single validated sale line.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub product: String,
    pub quantity: f64,
}

/// Normalizes raw sales entries into an ordered list of [`Sale`]s.
///
/// Entries missing `Product` or `Quantity`, or whose `Product` is not a
/// string, are dropped with a warning. Entries whose `Quantity` is not a
/// number are kept with a quantity of zero, also with a warning. Input order
/// is preserved, and the same product may appear any number of times.
///
/// Returns the sales together with the warnings, in the order the offending
/// entries appeared.
#[must_use]
pub fn normalize(entries: &[Value]) -> (Vec<Sale>, Vec<Warning>) {
    let mut sales = Vec::new();
    let mut warnings = Vec::new();
    for entry in entries {
        let raw: RawSale = match serde_json::from_value(entry.clone()) {
            Ok(raw) => raw,
            Err(_) => {
                warnings.push(Warning::InvalidSalesEntry(entry.clone()));
                continue;
            }
        };
        let (Some(product), Some(quantity)) = (raw.product, raw.quantity) else {
            warnings.push(Warning::InvalidSalesEntry(entry.clone()));
            continue;
        };
        let quantity = match quantity.as_f64() {
            Some(quantity) => quantity,
            None => {
                warnings.push(Warning::InvalidQuantity {
                    product: product.clone(),
                });
                0.0
            }
        };
        sales.push(Sale { product, quantity });
    }
    (sales, warnings)
}
