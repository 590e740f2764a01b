use serde::Deserialize;
use serde_json::Value;

use std::collections::HashMap;

use crate::{usd::Usd, Warning};

/// A catalogue entry as it appears on disk, before validation.
///
/// Both fields are optional so that a record missing one of them still
/// deserializes, and can be warned about by name rather than rejected by
/// serde.
#[derive(Debug, Deserialize)]
struct RawProduct {
    title: Option<String>,
    price: Option<Value>,
}

/// Maps product titles to their unit prices.
///
/// Build one from the raw entries of a price catalogue document with
/// [`PriceList::from_raw`], then look prices up with [`PriceList::price`].
#[derive(Debug, Default)]
pub struct PriceList(HashMap<String, Usd>);

impl PriceList {
    /// Normalizes raw catalogue entries into a price list.
    ///
    /// Entries missing `title` or `price`, or whose `title` is not a string,
    /// are dropped with a warning. Entries whose `price` is not a number are
    /// kept with a price of zero, also with a warning. A title appearing more
    /// than once keeps the last price seen.
    ///
    /// Returns the price list together with the warnings, in the order the
    /// offending entries appeared.
    #[must_use]
    pub fn from_raw(entries: &[Value]) -> (Self, Vec<Warning>) {
        let mut prices = HashMap::new();
        let mut warnings = Vec::new();
        for entry in entries {
            let raw: RawProduct = match serde_json::from_value(entry.clone()) {
                Ok(raw) => raw,
                Err(_) => {
                    warnings.push(Warning::InvalidProductEntry(entry.clone()));
                    continue;
                }
            };
            let (Some(title), Some(price)) = (raw.title, raw.price) else {
                warnings.push(Warning::InvalidProductEntry(entry.clone()));
                continue;
            };
            let price = match price.as_f64() {
                Some(dollars) => Usd::from(dollars),
                None => {
                    warnings.push(Warning::InvalidPrice {
                        title: title.clone(),
                    });
                    Usd::default()
                }
            };
            prices.insert(title, price);
        }
        (Self(prices), warnings)
    }

    /// Returns the unit price for `title`, if it is in the catalogue.
    #[must_use]
    pub fn price(&self, title: &str) -> Option<Usd> {
        self.0.get(title).copied()
    }

    /// Returns the number of catalogued products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
