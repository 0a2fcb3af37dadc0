//! Utilities for working with synchsafe integers
//!
//! A synchsafe integer keeps the most significant bit of every byte clear,
//! so that the encoded value can never be mistaken for an MPEG audio frame
//! sync pattern (11 set bits in a row).

use crate::error::Result;
use crate::macros::err;

/// Decode a synchsafe integer from its big-endian byte representation
///
/// The last 4 bytes of `bytes` each contribute their low 7 bits to a 28-bit
/// result. When more than 4 bytes are supplied, 4 extra high bits are sourced
/// from the 5th-from-last byte.
///
/// # Errors
///
/// `bytes` is shorter than 4 bytes
///
/// # Examples
///
/// ```rust
/// use shellac::id3::v2::util::synchsafe::decode_synchsafe;
///
/// # fn main() -> shellac::error::Result<()> {
/// assert_eq!(decode_synchsafe(&[0x01, 0x7F, 0x7F, 0x7F])?, 0x3F_FFFF);
///
/// // Fewer than 4 bytes is an error, never an out of bounds read
/// assert!(decode_synchsafe(&[0x7F, 0x7F, 0x7F]).is_err());
/// # Ok(()) }
/// ```
pub fn decode_synchsafe(bytes: &[u8]) -> Result<u32> {
	let len = bytes.len();
	if len < 4 {
		err!(InvalidHeader("Synchsafe integers require at least 4 bytes"));
	}

	let mut out = 0_u32;
	for byte in &bytes[len - 4..] {
		out = (out << 7) | u32::from(byte & 0x7F);
	}

	if len > 4 {
		out |= u32::from(bytes[len - 5]) << 28;
	}

	Ok(out)
}

/// Decode a plain big-endian unsigned integer of up to 4 bytes
///
/// # Errors
///
/// `bytes` is longer than 4 bytes
pub fn decode_be_u32(bytes: &[u8]) -> Result<u32> {
	if bytes.len() > 4 {
		err!(InvalidHeader("Big-endian integers are at most 4 bytes"));
	}

	let mut out = 0_u32;
	for byte in bytes {
		out = (out << 8) | u32::from(*byte);
	}

	Ok(out)
}

/// An integer that can be converted to and from its synchsafe form
pub trait SynchsafeInteger: Sized {
	/// Create a synchsafe integer
	///
	/// # Errors
	///
	/// `self` doesn't fit in 28 bits
	fn synch(self) -> Result<Self>;

	/// Unsynchronise a synchsafe integer
	fn unsynch(self) -> Self;
}

impl SynchsafeInteger for u32 {
	fn synch(self) -> Result<Self> {
		// 7 bits are available per byte
		if self > 0xFFF_FFFF {
			err!(TooMuchData);
		}

		Ok((self & 0x7F)
			| ((self & (0x7F << 7)) << 1)
			| ((self & (0x7F << 14)) << 2)
			| ((self & (0x7F << 21)) << 3))
	}

	fn unsynch(self) -> Self {
		((self & 0x7F00_0000) >> 3)
			| ((self & 0x7F_0000) >> 2)
			| ((self & 0x7F00) >> 1)
			| (self & 0x7F)
	}
}
