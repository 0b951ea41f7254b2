use std::collections::btree_map;
use std::collections::BTreeMap;

use super::frequency::FrequencyTable;
use super::tree::{HuffmanTree, NodeKind};
use super::Symbol;
use crate::binary_stream::BitString;

/// Codeword of every symbol of a tree, derived once and never changed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable<S: Symbol> {
    codes: BTreeMap<S, BitString>,
}

impl<S: Symbol> CodeTable<S> {
    /// Walk the tree with an explicit stack, 0 for every left and 1 for every
    /// right branch taken. A tree consisting of one leaf gets the code 0.
    pub fn from_tree(tree: &HuffmanTree<S>) -> Self {
        let mut codes = BTreeMap::new();
        if let Some(symbol) = tree.root().symbol() {
            codes.insert(symbol.clone(), BitString::from_iter([false]));
            return CodeTable { codes };
        }

        let mut node_index_stack = vec![(tree.root_index(), BitString::new())];
        while let Some((index, pattern)) = node_index_stack.pop() {
            let Some(node) = tree.node(index) else {
                continue;
            };
            match node.kind() {
                NodeKind::Leaf { symbol } => {
                    codes.insert(symbol.clone(), pattern);
                }
                NodeKind::Inner { left, right } => {
                    if let Some(right) = *right {
                        let mut right_pattern = pattern.clone();
                        right_pattern.push(true);
                        node_index_stack.push((right, right_pattern));
                    }
                    if let Some(left) = *left {
                        let mut left_pattern = pattern;
                        left_pattern.push(false);
                        node_index_stack.push((left, left_pattern));
                    }
                }
            }
        }
        CodeTable { codes }
    }

    pub fn get(&self, symbol: &S) -> Option<&BitString> {
        self.codes.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, S, BitString> {
        self.codes.iter()
    }

    /// No code is a prefix of another one
    pub fn is_prefix_free(&self) -> bool {
        // after sorting, a code that prefixes any other one prefixes its successor
        let mut patterns: Vec<Vec<bool>> = self
            .codes
            .values()
            .map(|code| code.iter().collect())
            .collect();
        patterns.sort();
        patterns
            .windows(2)
            .all(|pair| !pair[1].starts_with(&pair[0]))
    }

    /// Length of the encoding of the sequence the frequencies were counted on.
    ///
    /// Symbols without a code are not counted.
    pub fn encoded_bit_length(&self, frequencies: &FrequencyTable<S>) -> usize {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| code.len() * count))
            .sum()
    }

    /// Code length in bits averaged over all symbol occurrences
    pub fn average_code_length(&self, frequencies: &FrequencyTable<S>) -> f64 {
        if frequencies.total() == 0 {
            return 0.0;
        }
        self.encoded_bit_length(frequencies) as f64 / frequencies.total() as f64
    }
}

impl<S: Symbol> FromIterator<(S, BitString)> for CodeTable<S> {
    fn from_iter<I: IntoIterator<Item = (S, BitString)>>(iter: I) -> Self {
        CodeTable {
            codes: iter.into_iter().collect(),
        }
    }
}

impl<'a, S: Symbol> IntoIterator for &'a CodeTable<S> {
    type Item = (&'a S, &'a BitString);
    type IntoIter = btree_map::Iter<'a, S, BitString>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
