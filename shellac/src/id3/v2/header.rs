//! ID3v2 header parsing

use crate::error::Result;
use crate::id3::v2::util::synchsafe::SynchsafeInteger;
use crate::macros::err;

use std::io::Read;

use byteorder::{BigEndian, ByteOrder};

/// The ID3v2 version
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Id3v2Version {
	/// ID3v2.2
	V2,
	/// ID3v2.3
	V3,
	/// ID3v2.4
	V4,
}

/// Flags that apply to the entire tag
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Id3v2TagFlags {
	/// Whether or not all frames are unsynchronised
	pub unsynchronisation: bool,
	/// Indicates that the header is followed by an extended header
	pub extended: bool,
	/// Indicates if the tag is in an experimental stage
	pub experimental: bool,
	/// Indicates that the tag includes a footer
	pub footer: bool,
}

/// An ID3v2 tag header
///
/// This is the fixed 10 byte header at the start of every ID3v2 tag. Its
/// version selects the frame header layout used by
/// [`FrameReader`](crate::id3::v2::frame::FrameReader).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Id3v2Header {
	/// The tag's major version
	pub version: Id3v2Version,
	/// The tag's revision ("minor version")
	pub revision: u8,
	/// The flags from the header's flag byte
	pub flags: Id3v2TagFlags,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER/FOOTER**)
	pub size: u32,
}

impl Id3v2Header {
	/// Parse an ID3v2 header from a reader positioned at the tag's start
	///
	/// The 3 byte `"ID3"` identifier is assumed, not re-validated here; use
	/// [`find_id3v2`](crate::id3::find_id3v2) when the presence of a tag is
	/// in question.
	///
	/// # Errors
	///
	/// * Fewer than 10 bytes could be read ([`ErrorKind::Read`](crate::error::ErrorKind::Read))
	/// * The major version is not 2, 3, or 4 ([`ErrorKind::InvalidHeader`](crate::error::ErrorKind::InvalidHeader))
	///
	/// # Examples
	///
	/// ```rust
	/// use shellac::id3::v2::header::{Id3v2Header, Id3v2Version};
	///
	/// # fn main() -> shellac::error::Result<()> {
	/// let mut reader = &[b'I', b'D', b'3', 4, 0, 0x80, 0x00, 0x00, 0x02, 0x01][..];
	///
	/// let header = Id3v2Header::parse(&mut reader)?;
	/// assert_eq!(header.version, Id3v2Version::V4);
	/// assert!(header.flags.unsynchronisation);
	/// assert_eq!(header.size, 257);
	/// # Ok(()) }
	/// ```
	pub fn parse<R>(reader: &mut R) -> Result<Self>
	where
		R: Read,
	{
		log::debug!("Parsing ID3v2 header");

		let mut header = [0; 10];
		reader.read_exact(&mut header)?;

		let version = match header[3] {
			2 => Id3v2Version::V2,
			3 => Id3v2Version::V3,
			4 => Id3v2Version::V4,
			_ => err!(InvalidHeader("Expected a major version of 2, 3, or 4")),
		};

		let revision = header[4];

		// Flag byte, high to low: unsynchronisation, extended header,
		// experimental, footer present
		let flags = header[5];
		let flags = Id3v2TagFlags {
			unsynchronisation: flags & 0x80 == 0x80,
			extended: flags & 0x40 == 0x40,
			experimental: flags & 0x20 == 0x20,
			footer: flags & 0x10 == 0x10,
		};

		// The size is stored synchsafe regardless of version
		let size = BigEndian::read_u32(&header[6..]).unsynch();

		Ok(Self {
			version,
			revision,
			flags,
			size,
		})
	}
}
