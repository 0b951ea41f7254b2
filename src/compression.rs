use crate::binary_stream::BitString;
use crate::huffman::{
    CodeTable, FrequencyTable, HuffmanDecoder, HuffmanEncoder, HuffmanTree, Symbol,
};
use crate::Result;

/// Width of one symbol in the fixed width baseline
pub const BITS_PER_SYMBOL: usize = 8;

/// Everything one compression call produces. The caller keeps the tree (or
/// the code table) next to the encoded bits to be able to decode them.
#[derive(Clone, Debug)]
pub struct Compression<S: Symbol> {
    frequencies: FrequencyTable<S>,
    tree: HuffmanTree<S>,
    code_table: CodeTable<S>,
    encoded_bits: BitString,
}

impl<S: Symbol> Compression<S> {
    pub fn frequencies(&self) -> &FrequencyTable<S> {
        &self.frequencies
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    pub fn code_table(&self) -> &CodeTable<S> {
        &self.code_table
    }

    pub fn encoded_bits(&self) -> &BitString {
        &self.encoded_bits
    }

    pub fn into_parts(self) -> (BitString, HuffmanTree<S>) {
        (self.encoded_bits, self.tree)
    }

    /// Length of the input in symbols
    pub fn original_length(&self) -> usize {
        self.frequencies.total()
    }

    pub fn original_bit_length(&self) -> usize {
        self.original_length() * BITS_PER_SYMBOL
    }

    pub fn encoded_bit_length(&self) -> usize {
        self.encoded_bits.len()
    }

    /// Encoded size relative to the fixed width baseline
    pub fn ratio(&self) -> f64 {
        self.encoded_bit_length() as f64 / self.original_bit_length() as f64
    }

    pub fn space_saving(&self) -> f64 {
        1.0 - self.ratio()
    }

    pub fn average_code_length(&self) -> f64 {
        self.encoded_bit_length() as f64 / self.original_length() as f64
    }

    pub fn decode(&self) -> Result<Vec<S>> {
        decode(&self.encoded_bits, &self.tree)
    }
}

pub fn compress<S: Symbol>(input: &[S]) -> Result<Compression<S>> {
    let frequencies = FrequencyTable::from_sequence(input)?;
    let tree = HuffmanTree::from_frequencies(&frequencies)?;
    let code_table = CodeTable::from_tree(&tree);
    let encoded_bits = HuffmanEncoder::new(&code_table).encode(input)?;
    let compression = Compression {
        frequencies,
        tree,
        code_table,
        encoded_bits,
    };
    log::info!(
        "Compressed {} symbols ({} distinct) from {} to {} bits",
        compression.original_length(),
        compression.code_table.len(),
        compression.original_bit_length(),
        compression.encoded_bit_length()
    );
    Ok(compression)
}

pub fn decode<S: Symbol>(encoded_bits: &BitString, tree: &HuffmanTree<S>) -> Result<Vec<S>> {
    HuffmanDecoder::new(tree).decode(encoded_bits)
}
