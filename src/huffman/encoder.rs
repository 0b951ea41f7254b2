use super::code::CodeTable;
use super::Symbol;
use crate::binary_stream::BitString;
use crate::error::Error;
use crate::Result;

pub struct HuffmanEncoder<'a, S: Symbol> {
    code_table: &'a CodeTable<S>,
}

impl<'a, S: Symbol> HuffmanEncoder<'a, S> {
    pub fn new(code_table: &'a CodeTable<S>) -> Self {
        HuffmanEncoder { code_table }
    }

    /// Concatenate the codes of all symbols, failing on the first symbol the
    /// table does not know
    pub fn encode(&self, sequence: &[S]) -> Result<BitString> {
        let mut output = BitString::with_capacity(sequence.len());
        self.encode_into(sequence, &mut output)?;
        Ok(output)
    }

    pub fn encode_into(&self, sequence: &[S], output: &mut BitString) -> Result<()> {
        for symbol in sequence {
            let code = self
                .code_table
                .get(symbol)
                .ok_or_else(|| Error::UnknownSymbol(format!("{:?}", symbol)))?;
            output.append(code);
        }
        Ok(())
    }
}
