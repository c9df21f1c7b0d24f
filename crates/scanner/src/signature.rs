use std::error;
use std::fmt;

/// A known binary signature to look for.
///
/// The byte sequence is matched exactly; no wildcards and no fuzzing. Two
/// signatures may share identical bytes or differ in length — each is
/// scanned independently. Signatures are immutable once supplied for a
/// scan pass.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Signature {
    /// The exact bytes to match.
    pub bytes: Vec<u8>,
    /// Human-readable name attached to every hit of this signature.
    pub label: String,
}

impl Signature {
    /// Creates a signature from raw bytes.
    pub fn new(bytes: Vec<u8>, label: impl Into<String>) -> Signature {
        Signature { bytes, label: label.into() }
    }

    /// Creates a signature matching the 4-byte little-endian encoding of a
    /// `u32` hash.
    ///
    /// This is the common case for game-data inspection, where definition
    /// tables key their entries by 32-bit hashes that appear verbatim in
    /// binary blobs.
    pub fn from_u32_le(hash: u32, label: impl Into<String>) -> Signature {
        Signature::new(hash.to_le_bytes().to_vec(), label)
    }

    /// Parses a signature from a hex string such as `"b8b5f5e4"`.
    ///
    /// ASCII whitespace between digits is ignored, so `"b8 b5 f5 e4"` works
    /// too. The string must contain an even, non-zero number of hex digits.
    pub fn from_hex(
        hex: &str,
        label: impl Into<String>,
    ) -> Result<Signature, SignatureError> {
        let digits: Vec<char> =
            hex.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        if digits.is_empty() {
            return Err(SignatureError::Empty);
        }
        if digits.len() % 2 != 0 {
            return Err(SignatureError::OddLength);
        }
        let mut bytes = Vec::with_capacity(digits.len() / 2);
        for pair in digits.chunks(2) {
            let hi = pair[0]
                .to_digit(16)
                .ok_or(SignatureError::InvalidDigit(pair[0]))?;
            let lo = pair[1]
                .to_digit(16)
                .ok_or(SignatureError::InvalidDigit(pair[1]))?;
            bytes.push((hi as u8) << 4 | lo as u8);
        }
        Ok(Signature::new(bytes, label))
    }
}

/// An error that occurred while parsing a hex signature string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SignatureError {
    /// The string contained no hex digits.
    Empty,
    /// The string contained an odd number of hex digits.
    OddLength,
    /// The string contained a character that is not a hex digit.
    InvalidDigit(char),
}

impl fmt::Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SignatureError::Empty => {
                write!(f, "hex signature is empty")
            }
            SignatureError::OddLength => {
                write!(f, "hex signature has an odd number of digits")
            }
            SignatureError::InvalidDigit(c) => {
                write!(f, "invalid hex digit {:?} in signature", c)
            }
        }
    }
}

impl error::Error for SignatureError {}
