use std::fmt;

use crate::compression::Compression;
use crate::huffman::Symbol;

/// Summary of one compressed input, detached from its symbol type
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub source: String,
    pub original_length: usize,
    pub distinct_symbols: usize,
    pub original_bit_length: usize,
    pub encoded_bit_length: usize,
    pub entropy: f64,
    pub average_code_length: f64,
    pub tree_depth: usize,
    /// symbol label and code, empty unless codes were requested
    pub codes: Vec<(String, String)>,
}

impl Report {
    pub fn new<S: Symbol>(
        source: String,
        compression: &Compression<S>,
        show_codes: bool,
        label: impl Fn(&S) -> String,
    ) -> Self {
        let codes = if show_codes {
            compression
                .code_table()
                .iter()
                .map(|(symbol, code)| (label(symbol), code.to_string()))
                .collect()
        } else {
            Vec::new()
        };
        Report {
            source,
            original_length: compression.original_length(),
            distinct_symbols: compression.code_table().len(),
            original_bit_length: compression.original_bit_length(),
            encoded_bit_length: compression.encoded_bit_length(),
            entropy: compression.frequencies().entropy(),
            average_code_length: compression.average_code_length(),
            tree_depth: compression.tree().depth(),
            codes,
        }
    }

    pub fn ratio(&self) -> f64 {
        self.encoded_bit_length as f64 / self.original_bit_length as f64
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.source)?;
        writeln!(
            f,
            "  symbols: {} ({} distinct), tree depth: {}",
            self.original_length, self.distinct_symbols, self.tree_depth
        )?;
        writeln!(
            f,
            "  bits: {} -> {} (ratio {:.3}, saving {:.1}%)",
            self.original_bit_length,
            self.encoded_bit_length,
            self.ratio(),
            (1.0 - self.ratio()) * 100.0
        )?;
        write!(
            f,
            "  average code length: {:.3} bits, entropy: {:.3} bits",
            self.average_code_length, self.entropy
        )?;
        for (symbol, code) in &self.codes {
            write!(f, "\n    {:>8} {}", symbol, code)?;
        }
        Ok(())
    }
}

pub fn byte_label(byte: &u8) -> String {
    if byte.is_ascii_graphic() {
        format!("'{}'", *byte as char)
    } else {
        format!("0x{:02X}", byte)
    }
}

pub fn char_label(character: &char) -> String {
    format!("{:?}", character)
}
