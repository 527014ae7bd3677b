use indexmap::IndexMap;
use std::hash::Hash;

/// State values, `0.0` for any state never written. Reads never insert.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTable<S: Eq + Hash> {
    values: IndexMap<S, f64>,
}

impl<S: Eq + Hash> Default for ValueTable<S> {
    fn default() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }
}

impl<S: Eq + Hash> ValueTable<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, s: &S) -> f64 {
        self.values.get(s).copied().unwrap_or_default()
    }

    pub fn set(&mut self, s: S, v: f64) {
        self.values.insert(s, v);
    }

    /// Written entries, in first-write order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, f64)> {
        self.values.iter().map(|(s, &v)| (s, v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
