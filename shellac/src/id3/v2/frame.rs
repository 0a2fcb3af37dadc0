//! ID3v2 frame reading

use crate::error::{ErrorKind, Result, ShellacError};
use crate::id3::v2::header::Id3v2Version;
use crate::id3::v2::util::synchsafe::{decode_be_u32, decode_synchsafe};
use crate::macros::try_vec;

use std::io::Read;

// ID3v2.3/2.4 frame headers are the largest at 10 bytes
const MAX_FRAME_HEADER_LEN: usize = 10;

// How a frame header's size field is decoded.
//
// ID3v2.4 is the only version with synchsafe frame sizes. ID3v2.2 sizes are
// a plain 24 bit big-endian integer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum SizeDecode {
	Plain,
	Synchsafe,
}

// The frame header layout for a single ID3v2 version. This is closed,
// version-indexed configuration, selected once per tag.
#[derive(Copy, Clone, Debug)]
struct FrameLayout {
	header_len: usize,
	id_len: usize,
	size_len: usize,
	size_decode: SizeDecode,
}

impl FrameLayout {
	fn for_version(version: Id3v2Version) -> Self {
		match version {
			Id3v2Version::V2 => Self {
				header_len: 6,
				id_len: 3,
				size_len: 3,
				size_decode: SizeDecode::Plain,
			},
			Id3v2Version::V3 => Self {
				header_len: 10,
				id_len: 4,
				size_len: 4,
				size_decode: SizeDecode::Plain,
			},
			Id3v2Version::V4 => Self {
				header_len: 10,
				id_len: 4,
				size_len: 4,
				size_decode: SizeDecode::Synchsafe,
			},
		}
	}

	fn decode_size(self, bytes: &[u8]) -> Result<u32> {
		match self.size_decode {
			SizeDecode::Plain => decode_be_u32(bytes),
			SizeDecode::Synchsafe => decode_synchsafe(bytes),
		}
	}
}

/// A raw ID3v2 frame
///
/// Frame content is left uninterpreted; text frames can be decoded with
/// [`decode_frame_text`](crate::util::text::decode_frame_text).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Id3v2Frame {
	/// The frame identifier, 3 characters in ID3v2.2 and 4 otherwise
	pub id: String,
	/// The frame's payload bytes
	pub data: Vec<u8>,
}

/// Reads successive frames from an ID3v2 tag body
///
/// The reader should be positioned just past the tag header and, since a tag
/// is not required to end with padding, bounded to the header's `size` (with
/// [`Read::take`] or equivalent). The sequence is not restartable once
/// consumed.
///
/// # Examples
///
/// ```rust
/// use shellac::id3::v2::frame::FrameReader;
/// use shellac::id3::v2::header::Id3v2Version;
///
/// # fn main() -> shellac::error::Result<()> {
/// // An ID3v2.3 frame header, 7 bytes of content, then padding
/// let mut body = Vec::new();
/// body.extend_from_slice(b"TIT2\x00\x00\x00\x07\x00\x00");
/// body.extend_from_slice(b"\x00Dreams");
/// body.extend_from_slice(&[0; 16]);
///
/// let mut frames = FrameReader::new(&body[..], Id3v2Version::V3);
///
/// let frame = frames.read_frame()?.expect("the tag holds one frame");
/// assert_eq!(frame.id, "TIT2");
/// assert_eq!(frame.data, b"\x00Dreams");
///
/// // The next read hits the padding
/// assert!(frames.read_frame()?.is_none());
/// # Ok(()) }
/// ```
pub struct FrameReader<R> {
	reader: R,
	layout: FrameLayout,
	done: bool,
}

impl<R: Read> FrameReader<R> {
	/// Create a new `FrameReader` using the frame header layout of `version`
	pub fn new(reader: R, version: Id3v2Version) -> Self {
		Self {
			reader,
			layout: FrameLayout::for_version(version),
			done: false,
		}
	}

	/// Read the next frame
	///
	/// Returns `Ok(None)` once the padding region is reached (a frame header
	/// starting with a null byte). This is the expected end of enumeration,
	/// not a fault, and no payload is read for it.
	///
	/// # Errors
	///
	/// * The header or payload could not be read in full ([`ErrorKind::Read`](crate::error::ErrorKind::Read))
	/// * The frame identifier is not valid UTF-8 ([`ErrorKind::TextDecode`](crate::error::ErrorKind::TextDecode))
	pub fn read_frame(&mut self) -> Result<Option<Id3v2Frame>> {
		let mut header = [0_u8; MAX_FRAME_HEADER_LEN];
		let header = &mut header[..self.layout.header_len];
		self.reader.read_exact(header)?;

		// A null byte where an ID should start means we are in the padding
		if header[0] == 0 {
			return Ok(None);
		}

		let id_bytes = &header[..self.layout.id_len];
		let id = std::str::from_utf8(id_bytes)
			.map_err(|_| ShellacError::new(ErrorKind::TextDecode("Frame ID is not valid UTF-8")))?
			.to_owned();

		let size_field = &header[self.layout.id_len..self.layout.id_len + self.layout.size_len];
		let size = self.layout.decode_size(size_field)?;

		log::trace!("Reading frame {id}, size: {size}");

		let mut data = try_vec![0; size as usize];
		self.reader.read_exact(&mut data)?;

		Ok(Some(Id3v2Frame { id, data }))
	}
}

impl<R: Read> Iterator for FrameReader<R> {
	type Item = Result<Id3v2Frame>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		match self.read_frame() {
			Ok(Some(frame)) => Some(Ok(frame)),
			Ok(None) => {
				self.done = true;
				None
			},
			Err(err) => {
				self.done = true;
				Some(Err(err))
			},
		}
	}
}
