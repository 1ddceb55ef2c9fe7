use std::collections::HashMap;
use std::hash::Hash;

/// Rate samples grouped by key, remembering first-encounter order so ties in
/// later sorting stay deterministic.
#[derive(Debug)]
pub(crate) struct OrderedBuckets<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, Vec<f64>)>,
}

impl<K: Eq + Hash + Clone> OrderedBuckets<K> {
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, key: K, rate: f64) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1.push(rate);
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, vec![rate]));
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Buckets holding at least `min_samples` rates, in encounter order.
    pub(crate) fn qualifying(self, min_samples: usize) -> impl Iterator<Item = (K, Vec<f64>)> {
        self.entries
            .into_iter()
            .filter(move |(_, rates)| rates.len() >= min_samples)
    }
}
