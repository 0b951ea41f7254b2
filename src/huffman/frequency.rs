use std::collections::btree_map;
use std::collections::BTreeMap;

use super::Symbol;
use crate::error::Error;
use crate::Result;

/// Occurrence count of every distinct symbol of one input sequence
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable<S: Symbol> {
    counts: BTreeMap<S, usize>,
    total: usize,
}

impl<S: Symbol> FrequencyTable<S> {
    pub fn from_sequence(sequence: &[S]) -> Result<Self> {
        if sequence.is_empty() {
            return Err(Error::EmptyInput);
        }
        let counts = sequence
            .iter()
            .fold(BTreeMap::new(), |mut counts, symbol| {
                *counts.entry(symbol.clone()).or_insert(0) += 1;
                counts
            });
        Ok(FrequencyTable {
            counts,
            total: sequence.len(),
        })
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the length of the counted sequence
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn get(&self, symbol: &S) -> Option<usize> {
        self.counts.get(symbol).copied()
    }

    /// Symbols in ascending order together with their counts
    pub fn iter(&self) -> Iter<'_, S> {
        Iter {
            inner: self.counts.iter(),
        }
    }

    /// Shannon entropy in bits per symbol
    pub fn entropy(&self) -> f64 {
        let total = self.total as f64;
        self.counts
            .values()
            .map(|&count| {
                let probability = count as f64 / total;
                -probability * probability.log2()
            })
            .sum()
    }
}

pub struct Iter<'a, S> {
    inner: btree_map::Iter<'a, S, usize>,
}

impl<'a, S> Iterator for Iter<'a, S> {
    type Item = (&'a S, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(symbol, &count)| (symbol, count))
    }
}

impl<'a, S: Symbol> IntoIterator for &'a FrequencyTable<S> {
    type Item = (&'a S, usize);
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::FrequencyTable;
    use crate::error::Error;

    #[test]
    fn counts_each_symbol() {
        let sequence: Vec<char> = "AABBBCCCC".chars().collect();
        let table = FrequencyTable::from_sequence(&sequence).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 9);
        assert_eq!(table.get(&'A'), Some(2));
        assert_eq!(table.get(&'B'), Some(3));
        assert_eq!(table.get(&'C'), Some(4));
        assert_eq!(table.get(&'D'), None);
    }

    #[test]
    fn iterates_in_ascending_symbol_order() {
        let table = FrequencyTable::from_sequence(&[9u8, 3, 7, 3, 9, 9]).unwrap();
        let entries: Vec<(u8, usize)> = table.iter().map(|(&s, c)| (s, c)).collect();
        assert_eq!(entries, vec![(3, 2), (7, 1), (9, 3)]);
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let result = FrequencyTable::<u8>::from_sequence(&[]);
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn entropy_of_uniform_distribution() {
        let table = FrequencyTable::from_sequence(&[0u8, 1, 2, 3]).unwrap();
        assert!((table.entropy() - 2.0).abs() < 1e-12);
        let single = FrequencyTable::from_sequence(&[5u8; 10]).unwrap();
        assert_eq!(single.entropy(), 0.0);
    }
}
