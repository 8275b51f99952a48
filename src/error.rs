use std::fmt;
use std::io;

/// Everything that can go wrong while compressing or decompressing.
/// Any error aborts the whole operation; there is no partial recovery.
#[derive(Debug)]
pub enum HuffError {
    Io(io::Error),
    /// Header section failed to parse: missing sentinel, bad line shape,
    /// unknown escape sequence, or an unparsable count/padding value.
    MalformedHeader(String),
    /// Input byte outside the supported 0..=127 symbol range.
    SymbolOutOfRange(u8),
    /// Payload bits do not decode cleanly against the rebuilt tree.
    CorruptPayload(String),
}

impl fmt::Display for HuffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HuffError::Io(e) => write!(f, "i/o error: {}", e),
            HuffError::MalformedHeader(msg) => write!(f, "malformed header: {}", msg),
            HuffError::SymbolOutOfRange(byte) => {
                write!(f, "byte value {} is outside the supported 0-127 range", byte)
            }
            HuffError::CorruptPayload(msg) => write!(f, "corrupt payload: {}", msg),
        }
    }
}

impl std::error::Error for HuffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HuffError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for HuffError {
    fn from(e: io::Error) -> Self {
        HuffError::Io(e)
    }
}
