use tracing::debug;

use crate::menu::PriceCatalog;
use crate::order::OrderLine;
use crate::text_utils::{normalize_item, title_case};

/// Priced result for one order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bill {
    pub total: f64,
    /// One formatted line per resolved item, in order.
    pub details: Vec<String>,
    /// Normalized names with no catalog entry, in order.
    pub not_found: Vec<String>,
}

/// Price order lines against the catalog.
///
/// Unknown items never fail the bill; they are listed in
/// [`Bill::not_found`] and do not contribute to the total.
pub fn price(catalog: &PriceCatalog, items: &[OrderLine], currency: &str) -> Bill {
    let mut bill = Bill::default();

    for line in items {
        let name = normalize_item(&line.item);
        let quantity = line.quantity();
        match catalog.unit_price(&name) {
            Some(unit) => {
                let line_price = unit * f64::from(quantity);
                bill.details.push(format!(
                    "{} x{} = {} {}",
                    title_case(&name),
                    quantity,
                    line_price,
                    currency
                ));
                bill.total += line_price;
            }
            None => {
                debug!(item = %name, "Item not on the menu");
                bill.not_found.push(name);
            }
        }
    }

    bill
}
