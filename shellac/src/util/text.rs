//! Text decoding for encoding-prefixed frame payloads

use crate::error::{ErrorKind, Result, ShellacError};
use crate::macros::err;

/// The text encoding for use in ID3v2 frames
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1
	Latin1 = 0,
	/// UTF-16 with a byte order mark
	UTF16 = 1,
	/// UTF-16 big endian
	UTF16BE = 2,
	/// UTF-8
	UTF8 = 3,
}

impl TextEncoding {
	/// Get a `TextEncoding` from a u8, must be 0-3 inclusive
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Latin1),
			1 => Some(Self::UTF16),
			2 => Some(Self::UTF16BE),
			3 => Some(Self::UTF8),
			_ => None,
		}
	}
}

/// Decode a text payload prefixed with its encoding byte
///
/// The first byte of `data` selects the encoding per [`TextEncoding`], the
/// remainder is the text itself. An empty buffer or an unrecognized encoding
/// byte decodes to an empty string.
///
/// [`TextEncoding::UTF16`] senses an optional byte order mark (`FE FF` big
/// endian, `FF FE` little endian) and falls back to little endian when none is
/// present. [`TextEncoding::UTF16BE`] is always big endian with no byte order
/// mark.
///
/// # Errors
///
/// * `data` contains UTF-16 of odd length or with unmatched surrogates
/// * `data` contains invalid UTF-8
///
/// # Examples
///
/// ```rust
/// use shellac::util::text::decode_frame_text;
///
/// # fn main() -> shellac::error::Result<()> {
/// // Latin-1, "né"
/// assert_eq!(decode_frame_text(&[0, b'n', 0xE9])?, "né");
///
/// // UTF-16 with a big endian byte order mark, "A"
/// assert_eq!(decode_frame_text(&[1, 0xFE, 0xFF, 0x00, 0x41])?, "A");
/// # Ok(()) }
/// ```
pub fn decode_frame_text(data: &[u8]) -> Result<String> {
	let Some((encoding_byte, payload)) = data.split_first() else {
		return Ok(String::new());
	};

	match TextEncoding::from_u8(*encoding_byte) {
		Some(TextEncoding::Latin1) => Ok(latin1_decode(payload)),
		Some(TextEncoding::UTF16) => utf16_decode_maybe_bom(payload),
		Some(TextEncoding::UTF16BE) => utf16_decode_bytes(payload, u16::from_be_bytes),
		Some(TextEncoding::UTF8) => utf8_decode(payload),
		None => Ok(String::new()),
	}
}

pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	bytes.iter().map(|c| *c as char).collect()
}

pub(crate) fn utf8_decode(bytes: &[u8]) -> Result<String> {
	std::str::from_utf8(bytes)
		.map(str::to_owned)
		.map_err(|_| ShellacError::new(ErrorKind::TextDecode("Expected a UTF-8 string")))
}

// A byte order mark is consumed when present, otherwise the
// content decodes as little endian in its entirety.
pub(crate) fn utf16_decode_maybe_bom(bytes: &[u8]) -> Result<String> {
	match bytes {
		[0xFE, 0xFF, rest @ ..] => utf16_decode_bytes(rest, u16::from_be_bytes),
		[0xFF, 0xFE, rest @ ..] => utf16_decode_bytes(rest, u16::from_le_bytes),
		_ => utf16_decode_bytes(bytes, u16::from_le_bytes),
	}
}

pub(crate) fn utf16_decode_bytes(bytes: &[u8], endianness: fn([u8; 2]) -> u16) -> Result<String> {
	if bytes.is_empty() {
		return Ok(String::new());
	}

	if bytes.len() % 2 != 0 {
		err!(TextDecode("UTF-16 string has an odd length"));
	}

	let words = bytes
		.chunks_exact(2)
		.map(|c| endianness(c.try_into().unwrap())) // Infallible
		.collect::<Vec<u16>>();

	String::from_utf16(&words)
		.map_err(|_| ShellacError::new(ErrorKind::TextDecode("Given an invalid UTF-16 string")))
}

#[cfg(test)]
mod tests {
	use super::decode_frame_text;
	use crate::error::ErrorKind;

	#[test_log::test]
	fn latin1() {
		assert_eq!(decode_frame_text(b"\x00Foo bar").unwrap(), "Foo bar");

		// Every byte above 0x7F maps to the corresponding code point
		assert_eq!(decode_frame_text(&[0, 0xC5, 0x70, 0x65]).unwrap(), "Åpe");
	}

	#[test_log::test]
	fn utf16_bom_big_endian() {
		assert_eq!(
			decode_frame_text(&[1, 0xFE, 0xFF, 0x00, 0x41]).unwrap(),
			"A"
		);
	}

	#[test_log::test]
	fn utf16_bom_little_endian() {
		assert_eq!(
			decode_frame_text(&[1, 0xFF, 0xFE, 0x41, 0x00]).unwrap(),
			"A"
		);
	}

	#[test_log::test]
	fn utf16_no_bom_defaults_to_little_endian() {
		assert_eq!(decode_frame_text(&[1, 0x41, 0x00]).unwrap(), "A");
	}

	#[test_log::test]
	fn utf16_surrogate_pair() {
		// U+1D11E (MUSICAL SYMBOL G CLEF), little endian
		assert_eq!(
			decode_frame_text(&[1, 0xFF, 0xFE, 0x34, 0xD8, 0x1E, 0xDD]).unwrap(),
			"\u{1D11E}"
		);
	}

	#[test_log::test]
	fn utf16_be_without_bom() {
		// Encoding 2 is always big endian, no byte order mark involved
		assert_eq!(decode_frame_text(&[2, 0x00, 0x41, 0x00, 0x42]).unwrap(), "AB");
	}

	#[test_log::test]
	fn utf8() {
		assert_eq!(decode_frame_text("\u{3}Füße".as_bytes()).unwrap(), "Füße");
	}

	#[test_log::test]
	fn unknown_encoding_byte_is_empty() {
		assert_eq!(decode_frame_text(&[9, 0x41, 0x42]).unwrap(), "");
		assert_eq!(decode_frame_text(&[]).unwrap(), "");
	}

	#[test_log::test]
	fn utf16_odd_length() {
		let err = decode_frame_text(&[1, 0xFF, 0xFE, 0x41]).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::TextDecode(_)));
	}

	#[test_log::test]
	fn utf16_unmatched_surrogate() {
		// A lone high surrogate (U+D834) is not valid UTF-16
		let err = decode_frame_text(&[1, 0xFF, 0xFE, 0x34, 0xD8]).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::TextDecode(_)));
	}

	#[test_log::test]
	fn invalid_utf8() {
		let err = decode_frame_text(&[3, 0xFF, 0xFE]).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::TextDecode(_)));
	}
}
