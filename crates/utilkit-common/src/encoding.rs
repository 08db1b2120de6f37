//! Base64 with or without padding, and hexdumps

use std::io::Write;

use data_encoding::{
    BASE64, BASE64_NOPAD, BASE64URL, BASE64URL_NOPAD, DecodeError, DecodeKind, Encoding,
};

use crate::seq::fill_str;

/// Base64 (standard or URL-safe alphabet) with optional `=` padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base64 {
    Standard,
    UrlSafe,
}

impl Base64 {
    /// Encode `data`; `padded == false` drops the trailing `=` characters.
    pub fn encode(self, data: &[u8], padded: bool) -> String {
        self.encoding(padded).encode(data)
    }

    /// Decode `value`. With `padded == false` the input may omit its trailing `=`
    /// characters; they are restored before decoding.
    pub fn decode(self, value: &str, padded: bool) -> Result<Vec<u8>, DecodeError> {
        if padded {
            return self.encoding(true).decode(value.as_bytes());
        }

        let filled = fill_str(value, 4, '=').map_err(|_| DecodeError {
            position: 0,
            kind: DecodeKind::Length,
        })?;
        self.encoding(true).decode(filled.as_bytes())
    }

    fn encoding(self, padded: bool) -> Encoding {
        match (self, padded) {
            (Base64::Standard, true) => BASE64,
            (Base64::Standard, false) => BASE64_NOPAD,
            (Base64::UrlSafe, true) => BASE64URL,
            (Base64::UrlSafe, false) => BASE64URL_NOPAD,
        }
    }
}

/// Write a hex dump of the provided data to the writer.
///
/// The output format is similar to traditional hex dump tools:
/// - 8-digit hex offset
/// - 16 bytes per line in hex (grouped by 2 bytes)
/// - ASCII representation on the right
pub fn hexdump<W: Write>(data: &[u8], writer: &mut W) -> std::io::Result<()> {
    const BYTES_PER_LINE: usize = 16;

    for (offset, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
        write!(writer, "{:08x}: ", offset * BYTES_PER_LINE)?;

        for (i, byte) in chunk.iter().enumerate() {
            write!(writer, "{byte:02x}")?;
            if i % 2 == 1 {
                write!(writer, " ")?;
            }
        }

        let padding = BYTES_PER_LINE - chunk.len();
        for i in 0..padding {
            write!(writer, "  ")?;
            if (chunk.len() + i) % 2 == 1 {
                write!(writer, " ")?;
            }
        }

        write!(writer, " |")?;
        for byte in chunk {
            let ch = if byte.is_ascii_graphic() || *byte == b' ' {
                *byte as char
            } else {
                '.'
            };
            write!(writer, "{ch}")?;
        }
        writeln!(writer, "|")?;
    }

    Ok(())
}
