use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Growable sequence of bits, packed MSB first into bytes
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    /// packed bits, unused trailing bits of the last byte are always 0
    bytes: Vec<u8>,
    /// how many bits are stored
    len: usize,
}

impl BitString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        BitString {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Reinterpret packed bytes as a bit string of `len` bits.
    ///
    /// Bytes beyond `len` are dropped and padding bits are cleared.
    pub fn from_bytes(bytes: &[u8], len: usize) -> Self {
        let len = len.min(bytes.len() * 8);
        let mut bytes = bytes[..len.div_ceil(8)].to_vec();
        let bit_offset = len % 8;
        if bit_offset != 0 {
            if let Some(last) = bytes.last_mut() {
                *last &= 0xFF << (8 - bit_offset);
            }
        }
        BitString { bytes, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, bit: bool) {
        let bit_offset = self.len % 8;
        if bit_offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            let byte_index = self.len / 8;
            self.bytes[byte_index] |= 0b10000000_u8 >> bit_offset;
        }
        self.len += 1;
    }

    pub fn append(&mut self, other: &BitString) {
        if self.len % 8 == 0 {
            // byte aligned, copy whole bytes
            self.bytes.extend_from_slice(&other.bytes);
            self.len += other.len;
            return;
        }
        for bit in other.iter() {
            self.push(bit);
        }
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.bytes[index / 8] & (0b10000000_u8 >> (index % 8)) != 0)
    }

    pub fn iter(&self) -> Bits<'_> {
        Bits {
            bit_string: self,
            position: 0,
        }
    }

    pub fn starts_with(&self, prefix: &BitString) -> bool {
        prefix.len <= self.len && prefix.iter().zip(self.iter()).all(|(a, b)| a == b)
    }

    /// Packed representation, the last byte padded with 0 bits
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

pub struct Bits<'a> {
    bit_string: &'a BitString,
    position: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let bit = self.bit_string.get(self.position)?;
        self.position += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bit_string.len - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits<'_> {}

impl<'a> IntoIterator for &'a BitString {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bit_string = BitString::new();
        for bit in iter {
            bit_string.push(bit);
        }
        bit_string
    }
}

impl FromStr for BitString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, character)| match character {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(Error::InvalidBitCharacter(character, position)),
            })
            .collect()
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitString(\"{}\")", self)
    }
}
