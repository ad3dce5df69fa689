//! The static price catalog.
//!
//! The menu is a CSV file with `item` and `price` columns. It is read once at
//! startup and never changes afterwards; every session shares the same
//! [`PriceCatalog`].

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::text_utils::normalize_item;

#[derive(Debug, Deserialize)]
struct MenuRow {
    item: String,
    price: f64,
}

#[derive(Debug, Clone, Default)]
pub struct PriceCatalog {
    prices: HashMap<String, f64>,
    // Normalized names in file order, for listing the menu.
    order: Vec<String>,
}

impl PriceCatalog {
    /// Load the catalog from a CSV file on disk.
    #[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("failed to open menu {}", path.display()))?;
        let catalog = Self::from_reader(file)
            .with_context(|| format!("failed to read menu {}", path.display()))?;
        debug!(items = catalog.len(), "menu loaded");
        Ok(catalog)
    }

    /// Read CSV menu rows from any reader.
    ///
    /// Names are normalized, the first row for a name wins and prices must be
    /// finite and non-negative.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut catalog = Self::default();
        for (idx, row) in rdr.deserialize::<MenuRow>().enumerate() {
            // Row 1 is the header.
            let line = idx + 2;
            let row = row.with_context(|| format!("invalid menu row {line}"))?;
            catalog
                .insert(&row.item, row.price)
                .with_context(|| format!("invalid menu row {line}"))?;
        }
        Ok(catalog)
    }

    /// Build a catalog from `(name, price)` pairs with the same rules as
    /// [`PriceCatalog::from_reader`].
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut catalog = Self::default();
        for (name, price) in pairs {
            catalog.insert(name.as_ref(), price)?;
        }
        Ok(catalog)
    }

    fn insert(&mut self, name: &str, price: f64) -> Result<()> {
        let key = normalize_item(name);
        if key.is_empty() {
            bail!("menu item name is empty");
        }
        if !price.is_finite() || price < 0.0 {
            bail!("price for {key:?} must be a non-negative number, got {price}");
        }
        if self.prices.contains_key(&key) {
            warn!(item = %key, price, "Duplicate menu item ignored, keeping the first price");
            return Ok(());
        }
        self.prices.insert(key.clone(), price);
        self.order.push(key);
        Ok(())
    }

    /// Unit price for an item name in any casing.
    pub fn unit_price(&self, name: &str) -> Option<f64> {
        self.prices.get(&normalize_item(name)).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Menu entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.order
            .iter()
            .map(move |name| (name.as_str(), self.prices[name]))
    }
}
