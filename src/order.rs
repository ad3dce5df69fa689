use serde::{Deserialize, Serialize};

/// Quantity used when the model leaves it out or sends `null`.
pub const DEFAULT_QUANTITY: u32 = 1;

/// A single `{item, quantity}` entry extracted from an order text.
///
/// `item` keeps the casing the model produced; catalog lookups normalize it
/// later. `quantity` is optional on the wire and resolved through
/// [`OrderLine::quantity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item: String,
    #[serde(default)]
    pub quantity: Option<u32>,
}

impl OrderLine {
    pub fn new(item: impl Into<String>, quantity: Option<u32>) -> Self {
        Self {
            item: item.into(),
            quantity,
        }
    }

    /// Quantity to bill, falling back to [`DEFAULT_QUANTITY`].
    pub fn quantity(&self) -> u32 {
        self.quantity.unwrap_or(DEFAULT_QUANTITY)
    }
}

/// Result of turning a model reply into order lines.
///
/// A reply that cannot be read as order lines is not an error: it carries the
/// raw text so the user can see what the model said.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Parsed(Vec<OrderLine>),
    Failed { raw: String, message: String },
}

impl Extraction {
    pub fn is_parsed(&self) -> bool {
        matches!(self, Extraction::Parsed(_))
    }
}
