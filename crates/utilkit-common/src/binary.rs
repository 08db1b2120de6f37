//! Conversions between bytes, integers and their binary ('0'/'1') or hex text forms.

use std::fmt::Write as _;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BinaryError {
    #[error("length mismatch: {0} != {1}")]
    LengthMismatch(usize, usize),

    #[error("invalid length {found}, expected {expected}")]
    InvalidLength { found: usize, expected: &'static str },

    #[error("invalid digit '{0}'")]
    InvalidDigit(char),

    #[error("{0} is outside of 0..=255")]
    OutOfRange(i64),
}

/// XOR two strings of binary digits of equal length.
pub fn str_xor(s1: &str, s2: &str) -> Result<String, BinaryError> {
    if s1.len() != s2.len() {
        return Err(BinaryError::LengthMismatch(s1.len(), s2.len()));
    }

    s1.chars()
        .zip(s2.chars())
        .map(|pair| match pair {
            ('0', '0') | ('1', '1') => Ok('0'),
            ('0', '1') | ('1', '0') => Ok('1'),
            ('0' | '1', other) | (other, _) => Err(BinaryError::InvalidDigit(other)),
        })
        .collect()
}

/// XOR two byte sequences. The result is as long as the shorter input.
pub fn bytes_xor(b1: &[u8], b2: &[u8]) -> Vec<u8> {
    b1.iter().zip(b2).map(|(a, b)| a ^ b).collect()
}

/// Convert a string of binary digits (length a multiple of 8) to bytes.
pub fn str_to_bytes(s: &str) -> Result<Vec<u8>, BinaryError> {
    if s.len() % 8 != 0 {
        return Err(BinaryError::InvalidLength {
            found: s.len(),
            expected: "a multiple of 8",
        });
    }
    reject_non_ascii(s)?;

    s.as_bytes()
        .chunks(8)
        .map(|chunk| str_to_int(std::str::from_utf8(chunk).unwrap_or_default()))
        .collect()
}

/// Convert a string of hex digit pairs to bytes. Either case is accepted.
pub fn hexstr_to_bytes(s: &str) -> Result<Vec<u8>, BinaryError> {
    if s.len() % 2 != 0 {
        return Err(BinaryError::InvalidLength {
            found: s.len(),
            expected: "an even number",
        });
    }
    reject_non_ascii(s)?;

    s.as_bytes()
        .chunks(2)
        .map(|chunk| hexstr_to_int(std::str::from_utf8(chunk).unwrap_or_default()))
        .collect()
}

// byte chunks of ASCII text are always valid UTF-8
fn reject_non_ascii(s: &str) -> Result<(), BinaryError> {
    match s.chars().find(|c| !c.is_ascii()) {
        Some(c) => Err(BinaryError::InvalidDigit(c)),
        None => Ok(()),
    }
}

/// Convert bytes to a string of binary digits, 8 per byte.
pub fn bytes_to_str(b: &[u8]) -> String {
    let mut out = String::with_capacity(8 * b.len());
    for &byte in b {
        write!(&mut out, "{byte:08b}").expect("writing to a String is infallible");
    }
    out
}

/// Convert bytes to lowercase hex digit pairs.
pub fn bytes_to_hexstr(b: &[u8]) -> String {
    data_encoding::HEXLOWER.encode(b)
}

/// Convert a single byte to an integer.
pub fn bytes_to_int(b: &[u8]) -> Result<u8, BinaryError> {
    match b {
        [byte] => Ok(*byte),
        _ => Err(BinaryError::InvalidLength {
            found: b.len(),
            expected: "1",
        }),
    }
}

/// Convert an integer in `0..=255` to 8 binary digits.
pub fn int_to_str(i: i64) -> Result<String, BinaryError> {
    Ok(format!("{:08b}", to_byte(i)?))
}

/// Convert an integer in `0..=255` to 2 lowercase hex digits.
pub fn int_to_hexstr(i: i64) -> Result<String, BinaryError> {
    Ok(format!("{:02x}", to_byte(i)?))
}

/// Convert an integer in `0..=255` to a single byte.
pub fn int_to_bytes(i: i64) -> Result<[u8; 1], BinaryError> {
    Ok([to_byte(i)?])
}

/// Convert exactly 8 binary digits to an integer.
pub fn str_to_int(s: &str) -> Result<u8, BinaryError> {
    parse_radix(s, 8, 2)
}

/// Convert exactly 2 hex digits to an integer.
pub fn hexstr_to_int(s: &str) -> Result<u8, BinaryError> {
    parse_radix(s, 2, 16)
}

fn to_byte(i: i64) -> Result<u8, BinaryError> {
    u8::try_from(i).map_err(|_| BinaryError::OutOfRange(i))
}

fn parse_radix(s: &str, len: usize, radix: u32) -> Result<u8, BinaryError> {
    if s.len() != len {
        return Err(BinaryError::InvalidLength {
            found: s.len(),
            expected: if radix == 2 { "8" } else { "2" },
        });
    }

    if let Some(bad) = s.chars().find(|c| !c.is_digit(radix)) {
        return Err(BinaryError::InvalidDigit(bad));
    }

    u8::from_str_radix(s, radix).map_err(|_| BinaryError::InvalidLength {
        found: s.len(),
        expected: "a value below 256",
    })
}

/// A set of flags packed in an integer.
///
/// Adding a flag ORs it in (`ids | flag`), removing ANDs with its complement
/// (`ids & !flag`) and querying tests for any overlapping bit (`ids & flag != 0`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitField {
    ids: u64,
}

impl BitField {
    pub fn new(ids: u64) -> Self {
        Self { ids }
    }

    /// OR all `ids` together.
    pub fn create<I: IntoIterator<Item = u64>>(ids: I) -> Self {
        Self::new(ids.into_iter().fold(0, |acc, id| acc | id))
    }

    pub fn add(&mut self, value: u64) {
        self.ids |= value;
    }

    pub fn remove(&mut self, value: u64) {
        self.ids &= !value;
    }

    pub fn has(&self, value: u64) -> bool {
        self.ids & value != 0
    }

    pub fn bits(&self) -> u64 {
        self.ids
    }
}

impl FromIterator<u64> for BitField {
    fn from_iter<T: IntoIterator<Item = u64>>(iter: T) -> Self {
        BitField::create(iter)
    }
}
