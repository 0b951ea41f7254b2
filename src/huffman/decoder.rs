use super::tree::{HuffmanTree, NodeIndex};
use super::Symbol;
use crate::binary_stream::BitString;
use crate::error::{Error, MalformedReason};
use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DecoderState {
    /// pristine, or a symbol was just emitted
    AtRoot,
    /// inside a codeword, cursor on an inner node
    Traversing(NodeIndex),
}

/// Walks the tree bit by bit; the tree is only read, so one tree can serve
/// any number of decoders at once.
pub struct HuffmanDecoder<'a, S> {
    tree: &'a HuffmanTree<S>,
}

impl<'a, S: Symbol> HuffmanDecoder<'a, S> {
    pub fn new(tree: &'a HuffmanTree<S>) -> Self {
        HuffmanDecoder { tree }
    }

    pub fn decode(&self, bits: &BitString) -> Result<Vec<S>> {
        let mut out = Vec::new();
        self.decode_into(bits, &mut out)?;
        Ok(out)
    }

    /// Append the decoded symbols to `out`. On failure `out` is left as it was.
    pub fn decode_into(&self, bits: &BitString, out: &mut Vec<S>) -> Result<()> {
        let initial_len = out.len();
        let result = self.decode_bits(bits, out);
        if result.is_err() {
            out.truncate(initial_len);
        }
        result
    }

    fn decode_bits(&self, bits: &BitString, out: &mut Vec<S>) -> Result<()> {
        let root_index = self.tree.root_index();
        let mut state = DecoderState::AtRoot;
        for (bit_offset, bit) in bits.iter().enumerate() {
            let current_index = match state {
                DecoderState::AtRoot => root_index,
                DecoderState::Traversing(index) => index,
            };
            let current = self
                .tree
                .node(current_index)
                .ok_or_else(|| Self::malformed(bit_offset, MalformedReason::MissingChild))?;

            // only a single leaf tree has a leaf under the cursor, its code is 0
            if let Some(symbol) = current.symbol() {
                if bit {
                    return Err(Self::malformed(bit_offset, MalformedReason::MissingChild));
                }
                out.push(symbol.clone());
                continue;
            }

            let next = current
                .child(bit)
                .and_then(|child_index| self.tree.node(child_index))
                .ok_or_else(|| Self::malformed(bit_offset, MalformedReason::MissingChild))?;
            state = match next.symbol() {
                Some(symbol) => {
                    out.push(symbol.clone());
                    DecoderState::AtRoot
                }
                None => DecoderState::Traversing(next.index()),
            };
        }
        if state != DecoderState::AtRoot {
            return Err(Self::malformed(
                bits.len(),
                MalformedReason::EndedMidCodeword,
            ));
        }
        Ok(())
    }

    fn malformed(bit_offset: usize, reason: MalformedReason) -> Error {
        log::warn!("Decoding failed at bit {}: {}", bit_offset, reason);
        Error::MalformedBitStream { bit_offset, reason }
    }
}

#[cfg(test)]
mod test {
    use super::HuffmanDecoder;
    use crate::binary_stream::BitString;
    use crate::error::{Error, MalformedReason};
    use crate::huffman::{CodeTable, FrequencyTable, HuffmanEncoder, HuffmanTree};

    fn build_tree(sequence: &[u8]) -> HuffmanTree<u8> {
        let frequencies = FrequencyTable::from_sequence(sequence).unwrap();
        HuffmanTree::from_frequencies(&frequencies).unwrap()
    }

    fn bits(text: &str) -> BitString {
        text.parse().unwrap()
    }

    #[test]
    fn test_coder_decode() {
        // C:0 A:10 B:11
        let tree = build_tree(b"AABBBCCCC");
        let decoded = HuffmanDecoder::new(&tree).decode(&bits("1011001110")).unwrap();
        assert_eq!(decoded, b"ABCCBA".to_vec());
    }

    #[test]
    fn test_round_trip() {
        let sequence = b"Round trips must reproduce every byte, even \x00 and \xff.";
        let tree = build_tree(sequence);
        let table = CodeTable::from_tree(&tree);
        let encoded = HuffmanEncoder::new(&table).encode(sequence).unwrap();
        let decoded = HuffmanDecoder::new(&tree).decode(&encoded).unwrap();
        assert_eq!(decoded, sequence.to_vec());
    }

    #[test]
    fn test_empty_bit_string_decodes_to_nothing() {
        let tree = build_tree(b"xyz");
        let decoded = HuffmanDecoder::new(&tree).decode(&BitString::new()).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_stream_ending_mid_codeword() {
        let tree = build_tree(b"AABBBCCCC");
        let result = HuffmanDecoder::new(&tree).decode(&bits("01"));
        match result {
            Err(Error::MalformedBitStream { bit_offset, reason }) => {
                assert_eq!(bit_offset, 2);
                assert_eq!(reason, MalformedReason::EndedMidCodeword);
            }
            other => panic!("Expected MalformedBitStream, got {:?}", other),
        }
    }

    #[test]
    fn test_single_leaf_tree() {
        let tree = build_tree(b"AAAA");
        let decoder = HuffmanDecoder::new(&tree);
        assert_eq!(decoder.decode(&bits("000")).unwrap(), b"AAA".to_vec());
        let result = decoder.decode(&bits("001"));
        assert!(matches!(
            result,
            Err(Error::MalformedBitStream {
                bit_offset: 2,
                reason: MalformedReason::MissingChild
            })
        ));
    }

    #[test]
    fn test_missing_child_in_incomplete_tree() {
        let table: CodeTable<u8> = [(b'a', "0"), (b'b', "10")]
            .into_iter()
            .map(|(symbol, code)| (symbol, bits(code)))
            .collect();
        let tree = HuffmanTree::from_code_table(&table).unwrap();
        let decoder = HuffmanDecoder::new(&tree);
        assert_eq!(decoder.decode(&bits("0100")).unwrap(), b"aba".to_vec());
        let result = decoder.decode(&bits("0110"));
        assert!(matches!(
            result,
            Err(Error::MalformedBitStream {
                bit_offset: 2,
                reason: MalformedReason::MissingChild
            })
        ));
    }

    #[test]
    fn test_failed_decode_leaves_output_untouched() {
        let tree = build_tree(b"AABBBCCCC");
        let mut out = b"prefix".to_vec();
        let result = HuffmanDecoder::new(&tree).decode_into(&bits("0101"), &mut out);
        assert!(result.is_err());
        assert_eq!(out, b"prefix".to_vec());
    }
}
