use std::collections::HashMap;

/// Occurrence count of every distinct symbol of a text.
///
/// Symbols are kept in the order of their first occurrence, the tree builder
/// inserts leaves in exactly that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(char, u64)>,
    index: HashMap<char, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// counts all symbols of `text`
    pub fn of(text: &str) -> Self {
        let mut table = Self::new();
        for symbol in text.chars() {
            table.add(symbol, 1);
        }
        table
    }

    /// adds `count` occurrences of `symbol`, a new symbol is appended at the end
    pub fn add(&mut self, symbol: char, count: u64) {
        match self.index.get(&symbol) {
            Some(&i) => self.entries[i].1 = self.entries[i].1.saturating_add(count),
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push((symbol, count));
            }
        }
    }

    pub fn get(&self, symbol: char) -> Option<u64> {
        self.index.get(&symbol).map(|&i| self.entries[i].1)
    }

    /// number of distinct symbols
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// sum of all counts, that is the symbol count of the counted text
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0, |sum: u64, (_, count)| sum.saturating_add(*count))
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.entries.iter().copied()
    }
}

impl FromIterator<(char, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (char, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (symbol, count) in iter {
            table.add(symbol, count);
        }
        table
    }
}
