use std::collections::HashMap;

use tracing::trace;

use crate::order::OrderLine;

/// Maximum number of names returned by [`OrderHistory::suggest`].
pub const SUGGESTION_LIMIT: usize = 3;

/// Append-only log of the item names ordered during one session.
///
/// Each entry is one submission, with names exactly as extracted: raw casing,
/// duplicates kept, items missing from the menu included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderHistory {
    entries: Vec<Vec<String>>,
}

impl OrderHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the item names of one order.
    pub fn record(&mut self, items: &[OrderLine]) {
        let names: Vec<String> = items.iter().map(|line| line.item.clone()).collect();
        trace!(?names, "Recording order");
        self.entries.push(names);
    }

    /// Most frequently ordered names, highest count first.
    ///
    /// Equal counts keep the order in which the names were first ordered.
    /// Returns `None` when nothing has been ordered yet.
    pub fn suggest(&self) -> Option<Vec<String>> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for name in self.entries.iter().flatten() {
            match index.get(name.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(name.as_str(), counts.len());
                    counts.push((name.as_str(), 1));
                }
            }
        }

        if counts.is_empty() {
            return None;
        }

        // Stable sort keeps first-seen order among ties.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        Some(
            counts
                .into_iter()
                .take(SUGGESTION_LIMIT)
                .map(|(name, _)| name.to_string())
                .collect(),
        )
    }

    pub fn entries(&self) -> &[Vec<String>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
