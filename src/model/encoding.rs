//! Byte encoding of layout sources.
//!
//! Sources are usually UTF-8. Anything that is not valid UTF-8 is read as
//! Windows-1252, whose decoder maps every byte to a character, so legacy
//! single-byte files (Latin-1 `café`) parse instead of being rejected.
//! Text is encoded back with the same encoding when the PDF is written,
//! which reproduces the source bytes in each show-text operand.

use std::borrow::Cow;

use encoding_rs::WINDOWS_1252;
use serde::{Deserialize, Serialize};

/// How the bytes of a layout source map to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
    /// Valid UTF-8
    #[default]
    Utf8,
    /// Single-byte Windows-1252 (a superset of printable Latin-1)
    Windows1252,
}

impl TextEncoding {
    /// Decode raw source bytes, detecting which encoding they use.
    pub fn decode(bytes: Vec<u8>) -> (String, Self) {
        match String::from_utf8(bytes) {
            Ok(text) => (text, TextEncoding::Utf8),
            Err(err) => {
                let (text, _) = WINDOWS_1252.decode_without_bom_handling(err.as_bytes());
                (text.into_owned(), TextEncoding::Windows1252)
            }
        }
    }

    /// Encode text back into bytes of this encoding.
    ///
    /// Characters Windows-1252 cannot represent come out as numeric
    /// character references; text decoded from Windows-1252 never has any.
    pub fn encode<'a>(&self, text: &'a str) -> Cow<'a, [u8]> {
        match self {
            TextEncoding::Utf8 => Cow::Borrowed(text.as_bytes()),
            TextEncoding::Windows1252 => WINDOWS_1252.encode(text).0,
        }
    }
}
