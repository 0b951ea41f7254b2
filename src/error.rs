use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    EmptyInput,
    UnknownSymbol(String),
    MalformedBitStream {
        bit_offset: usize,
        reason: MalformedReason,
    },
    InvalidCodeTable(String),
    InvalidBitCharacter(char, usize),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToReadInputFile(String, std::io::Error),
    RoundTripMismatch(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    MissingChild,
    EndedMidCodeword,
}

impl Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingChild => write!(f, "the tree has no child for this bit"),
            Self::EndedMidCodeword => write!(f, "the stream ended inside a codeword"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input sequence is empty, nothing to compress"),
            Self::UnknownSymbol(symbol) => {
                write!(f, "Symbol {} not present in code table", symbol)
            }
            Self::MalformedBitStream { bit_offset, reason } => {
                write!(
                    f,
                    "Malformed bit stream at bit {}: {}",
                    bit_offset, reason
                )
            }
            Self::InvalidCodeTable(message) => write!(f, "Invalid code table: {}", message),
            Self::InvalidBitCharacter(character, position) => {
                write!(
                    f,
                    "Invalid character '{}' at position {} in bit string, expected '0' or '1'",
                    character, position
                )
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToReadInputFile(path, error) => {
                write!(f, "Unable to read input file '{}': {}", path, error)
            }
            Self::RoundTripMismatch(source) => {
                write!(f, "Decoded output of '{}' differs from its input", source)
            }
        }
    }
}

impl std::error::Error for Error {}
