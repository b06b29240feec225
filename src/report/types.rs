//! Report type definitions for the rendering model.
//!
//! Rows are plain string cells handed to the table renderer; the tallies
//! carry the per-category counts the summary tables are built from.

use std::collections::HashMap;

/// One table row: marker, severity + category, message, location block.
pub type Row = Vec<String>;

/// Occurrence count per category (rule id, "" when unclassified).
///
/// Iteration follows first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTally {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl CategoryTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `category`.
    pub fn record(&mut self, category: &str) {
        if let Some(&position) = self.index.get(category) {
            self.entries[position].1 += 1;
        } else {
            self.index.insert(category.to_string(), self.entries.len());
            self.entries.push((category.to_string(), 1));
        }
    }

    pub fn count(&self, category: &str) -> usize {
        self.index.get(category).map_or(0, |&position| self.entries[position].1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(category, count)| (category.as_str(), *count))
    }

    /// Entries by descending count; equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Rows plus the counters accumulated while building them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuiltRows {
    pub rows: Vec<Row>,
    pub errors: usize,
    pub warnings: usize,
    pub error_tally: CategoryTally,
    pub warning_tally: CategoryTally,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_and_order() {
        let mut tally = CategoryTally::new();
        tally.record("semi");
        tally.record("quotes");
        tally.record("semi");
        tally.record("");

        assert_eq!(tally.count("semi"), 2);
        assert_eq!(tally.count("missing"), 0);
        assert_eq!(tally.len(), 3);
        let order: Vec<&str> = tally.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec!["semi", "quotes", ""]);
    }

    #[test]
    fn test_ranked_is_descending_with_stable_ties() {
        let mut tally = CategoryTally::new();
        for category in ["b", "a", "c", "c", "a"] {
            tally.record(category);
        }
        // "a" was seen before "c", both have 2
        assert_eq!(tally.ranked(), vec![("a", 2), ("c", 2), ("b", 1)]);
    }
}
