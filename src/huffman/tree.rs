use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};

use super::code::CodeTable;
use super::frequency::FrequencyTable;
use super::min_heap::MinHeap;
use super::Symbol;
use crate::binary_stream::BitString;
use crate::error::Error;
use crate::Result;

pub type NodeIndex = usize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind<S> {
    Leaf {
        symbol: S,
    },
    // children are only ever missing in trees rebuilt from an incomplete code table
    Inner {
        left: Option<NodeIndex>,
        right: Option<NodeIndex>,
    },
}

#[derive(Clone, Debug)]
pub struct Node<S> {
    weight: usize,
    index: NodeIndex,
    kind: NodeKind<S>,
}

impl<S> Node<S> {
    pub fn weight(&self) -> usize {
        self.weight
    }

    pub fn index(&self) -> NodeIndex {
        self.index
    }

    pub fn kind(&self) -> &NodeKind<S> {
        &self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<&S> {
        match &self.kind {
            NodeKind::Leaf { symbol } => Some(symbol),
            NodeKind::Inner { .. } => None,
        }
    }

    /// Child reached by consuming `bit`; 0 goes left, 1 goes right
    pub fn child(&self, bit: bool) -> Option<NodeIndex> {
        match self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Inner { left, right } => {
                if bit {
                    right
                } else {
                    left
                }
            }
        }
    }
}

/// Heap entry referencing a node of the arena, ordered by weight only
#[derive(Clone, Copy, Debug)]
struct Pending {
    weight: usize,
    index: NodeIndex,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight
    }
}

impl Eq for Pending {}

/// Binary code tree stored as an arena of nodes addressed by index.
///
/// Immutable once built. Trees produced by [`HuffmanTree::from_frequencies`] are
/// full: every inner node has two children.
#[derive(Clone, Debug)]
pub struct HuffmanTree<S> {
    nodes: Vec<Node<S>>,
    root_index: NodeIndex,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Greedy construction: repeatedly merge the two lightest nodes.
    ///
    /// Leaves enter the queue in ascending symbol order and equal weights leave
    /// it in insertion order, so the same table always yields the same tree.
    pub fn from_frequencies(frequencies: &FrequencyTable<S>) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(Error::EmptyInput);
        }
        let leaf_count = frequencies.len();
        let mut nodes: Vec<Node<S>> = Vec::with_capacity(2 * leaf_count - 1);
        let mut heap = MinHeap::with_capacity(leaf_count);
        for (symbol, frequency) in frequencies {
            let node = Node {
                weight: frequency,
                index: nodes.len(),
                kind: NodeKind::Leaf {
                    symbol: symbol.clone(),
                },
            };
            heap.insert(Pending {
                weight: node.weight,
                index: node.index,
            });
            nodes.push(node);
        }
        log::debug!("Building code tree for {} distinct symbols", leaf_count);

        let root_index = loop {
            let a = heap.extract_min().ok_or(Error::EmptyInput)?;
            let Some(b) = heap.extract_min() else {
                break a.index;
            };
            let node = Node {
                weight: a.weight + b.weight,
                index: nodes.len(),
                kind: NodeKind::Inner {
                    left: Some(a.index),
                    right: Some(b.index),
                },
            };
            log::trace!(
                "Merged node {} (w:{}) and node {} (w:{}) into node {} (w:{})",
                a.index,
                a.weight,
                b.index,
                b.weight,
                node.index,
                node.weight
            );
            heap.insert(Pending {
                weight: node.weight,
                index: node.index,
            });
            nodes.push(node);
        };
        Ok(HuffmanTree { nodes, root_index })
    }

    /// Rebuild a decoding tree from a retained code table.
    ///
    /// Weights are unknown here and reported as 0. The resulting tree is
    /// incomplete when the table does not use every branch.
    pub fn from_code_table(code_table: &CodeTable<S>) -> Result<Self> {
        if code_table.is_empty() {
            return Err(Error::EmptyInput);
        }
        if code_table.len() == 1 {
            if let Some((symbol, code)) = code_table.iter().next() {
                if code.len() == 1 && code.get(0) == Some(false) {
                    return Ok(HuffmanTree {
                        nodes: vec![Node {
                            weight: 0,
                            index: 0,
                            kind: NodeKind::Leaf {
                                symbol: symbol.clone(),
                            },
                        }],
                        root_index: 0,
                    });
                }
            }
        }

        let mut tree = HuffmanTree {
            nodes: vec![Node {
                weight: 0,
                index: 0,
                kind: NodeKind::Inner {
                    left: None,
                    right: None,
                },
            }],
            root_index: 0,
        };
        for (symbol, code) in code_table {
            tree.insert_code(symbol, code)?;
        }
        Ok(tree)
    }

    fn insert_code(&mut self, symbol: &S, code: &BitString) -> Result<()> {
        if code.is_empty() {
            return Err(Error::InvalidCodeTable(format!(
                "symbol {:?} has an empty code",
                symbol
            )));
        }
        let last_bit_position = code.len() - 1;
        let mut current_index = self.root_index;
        for (position, bit) in code.iter().enumerate() {
            let is_last_bit = position == last_bit_position;
            let next_index = match self.nodes[current_index].kind {
                NodeKind::Leaf { .. } => None,
                NodeKind::Inner { left, right } => Some(if bit { right } else { left }),
            };
            current_index = match next_index {
                // an already assigned codeword is a prefix of this one
                None => return Err(Self::prefix_conflict(symbol, code)),
                Some(Some(_)) if is_last_bit => return Err(Self::prefix_conflict(symbol, code)),
                Some(Some(child_index)) => child_index,
                Some(None) => {
                    let kind = if is_last_bit {
                        NodeKind::Leaf {
                            symbol: symbol.clone(),
                        }
                    } else {
                        NodeKind::Inner {
                            left: None,
                            right: None,
                        }
                    };
                    let child_index = self.push_node(kind);
                    if let NodeKind::Inner { left, right } = &mut self.nodes[current_index].kind {
                        if bit {
                            *right = Some(child_index);
                        } else {
                            *left = Some(child_index);
                        }
                    }
                    child_index
                }
            };
        }
        Ok(())
    }

    fn push_node(&mut self, kind: NodeKind<S>) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(Node {
            weight: 0,
            index,
            kind,
        });
        index
    }

    fn prefix_conflict(symbol: &S, code: &BitString) -> Error {
        Error::InvalidCodeTable(format!(
            "code {} of symbol {:?} conflicts with another code",
            code, symbol
        ))
    }
}

impl<S> HuffmanTree<S> {
    pub fn root_index(&self) -> NodeIndex {
        self.root_index
    }

    pub fn root(&self) -> &Node<S> {
        &self.nodes[self.root_index]
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node<S>> {
        self.nodes.get(index)
    }

    /// All nodes of the arena, leaves first for greedily built trees
    pub fn nodes(&self) -> &[Node<S>] {
        &self.nodes
    }

    /// Total weight, equal to the length of the input the tree was built from
    pub fn weight(&self) -> usize {
        self.root().weight
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    pub fn internal_count(&self) -> usize {
        self.nodes.len() - self.leaf_count()
    }

    /// Length of the longest root to leaf path, 0 for a single leaf
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut node_index_stack = vec![(self.root_index, 0)];
        while let Some((index, depth)) = node_index_stack.pop() {
            match self.nodes[index].kind {
                NodeKind::Leaf { .. } => max_depth = max_depth.max(depth),
                NodeKind::Inner { left, right } => {
                    node_index_stack.extend(left.into_iter().map(|i| (i, depth + 1)));
                    node_index_stack.extend(right.into_iter().map(|i| (i, depth + 1)));
                }
            }
        }
        max_depth
    }
}
