use std::fmt::Debug;
use std::hash::Hash;

pub mod code;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod min_heap;
pub mod tree;

pub use code::CodeTable;
pub use decoder::HuffmanDecoder;
pub use encoder::HuffmanEncoder;
pub use frequency::FrequencyTable;
pub use min_heap::MinHeap;
pub use tree::{HuffmanTree, Node, NodeIndex, NodeKind};

/// Unit of the alphabet. Ordering only fixes the iteration order of tables.
pub trait Symbol: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Symbol for T {}
