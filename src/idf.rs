//! Inverse document frequency over a collection of tokenized items.
//!
//! The same calculator serves both the document corpus and the per-query
//! sentence set; an item is whatever the caller keyed the map by.
//!
//!   IDF(t) = ln(N / df(t))
//!
//! where N is the number of items and df(t) the number of items whose unique
//! term set contains t.

use std::collections::{BTreeMap, HashMap, HashSet};

/// Term → rarity weight for one collection.
///
/// Every term seen in at least one item has an entry, including terms that
/// occur everywhere (weight 0). A missing entry means the term never occurred.
#[derive(Clone, Debug, Default)]
pub struct IdfTable {
    weights: HashMap<String, f64>,
    item_count: usize,
}

impl IdfTable {
    /// The weight of `term`, or `None` if the collection never contained it.
    pub fn get(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    /// The weight of `term`, with unseen terms weighing 0.
    pub fn weight(&self, term: &str) -> f64 {
        self.get(term).unwrap_or(0.0)
    }

    /// Number of items the table was computed over.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Compute IDF weights for every term in `items`.
///
/// An empty collection yields an empty table.
pub fn compute_idfs(items: &BTreeMap<String, Vec<String>>) -> IdfTable {
    let n_items = items.len();
    let mut df: HashMap<&str, usize> = HashMap::new();

    for tokens in items.values() {
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for term in unique {
            *df.entry(term).or_insert(0) += 1;
        }
    }

    let weights = df
        .into_iter()
        .map(|(term, count)| (term.to_string(), (n_items as f64 / count as f64).ln()))
        .collect();

    IdfTable {
        weights,
        item_count: n_items,
    }
}
