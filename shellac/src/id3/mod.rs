//! ID3 specific items
//!
//! ID3 does things differently than other tags: the two formats share
//! nothing but a name. ID3v1 is a fixed trailer at the end of a file, while
//! ID3v2 is a chunked tag normally found at the start. Check the `v1` and
//! `v2` modules for important notes and/or warnings.

pub mod v1;
pub mod v2;

use crate::error::Result;
use crate::macros::try_vec;
use v1::constants::ID3V1_TAG_MARKER;
use v1::tag::Id3v1Tag;
use v2::header::Id3v2Header;

use std::io::{Read, Seek, SeekFrom};

/// Search the end of a stream for an ID3v1 tag and parse it
///
/// The stream is left positioned at the start of the trailer when a tag is
/// found, and at its previous position otherwise. A stream shorter than 128
/// bytes, or one whose trailer lacks the `"TAG"` marker, produces `Ok(None)`.
///
/// # Errors
///
/// * Seeking or reading the source fails
pub fn find_id3v1<R>(data: &mut R) -> Result<Option<Id3v1Tag>>
where
	R: Read + Seek,
{
	log::debug!("Searching for an ID3v1 tag");

	let start = data.stream_position()?;

	// Reader is too small to contain a trailer tag
	if data.seek(SeekFrom::End(-128)).is_err() {
		data.seek(SeekFrom::Start(start))?;
		return Ok(None);
	}

	let mut trailer = [0; 128];
	data.read_exact(&mut trailer)?;

	if trailer[..3] != ID3V1_TAG_MARKER {
		data.seek(SeekFrom::Start(start))?;
		return Ok(None);
	}

	log::debug!("Found an ID3v1 tag, parsing");

	data.seek(SeekFrom::End(-128))?;

	Ok(Some(Id3v1Tag::parse(trailer)?))
}

/// Search the current position of a stream for an ID3v2 tag
///
/// When the `"ID3"` identifier is present, the header is parsed and the tag
/// body (`header.size` bytes, frames plus padding) is read out; the stream is
/// left positioned just past the tag, skipping the footer if the header
/// announces one. Otherwise the stream position is restored and `Ok(None)` is
/// returned.
///
/// # Errors
///
/// * Seeking or reading the source fails
/// * The header is malformed ([`ErrorKind::InvalidHeader`](crate::error::ErrorKind::InvalidHeader))
pub fn find_id3v2<R>(data: &mut R) -> Result<Option<(Id3v2Header, Vec<u8>)>>
where
	R: Read + Seek,
{
	log::debug!(
		"Searching for an ID3v2 tag at offset: {}",
		data.stream_position()?
	);

	let start = data.stream_position()?;

	let mut marker = [0; 3];
	if data.read_exact(&mut marker).is_err() || marker != *b"ID3" {
		data.seek(SeekFrom::Start(start))?;
		return Ok(None);
	}

	data.seek(SeekFrom::Start(start))?;

	log::debug!("Found an ID3v2 tag, parsing");

	let header = Id3v2Header::parse(data)?;

	let mut body = try_vec![0; header.size as usize];
	data.read_exact(&mut body)?;

	if header.flags.footer {
		data.seek(SeekFrom::Current(10))?;
	}

	Ok(Some((header, body)))
}
