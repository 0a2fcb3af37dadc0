use super::constants::{GENRES, ID3V1_TAG_MARKER};
use super::tag::Id3v1Tag;
use crate::error::Result;
use crate::macros::err;
use crate::util::text::latin1_decode;

impl Id3v1Tag {
	/// Parse an ID3v1 tag from the final 128 bytes of a file
	///
	/// # Errors
	///
	/// The buffer does not start with `"TAG"` ([`ErrorKind::NoTag`](crate::error::ErrorKind::NoTag)).
	/// This is the only failure mode; no partial tag is ever produced.
	///
	/// # Examples
	///
	/// ```rust
	/// use shellac::id3::v1::tag::Id3v1Tag;
	///
	/// # fn main() -> shellac::error::Result<()> {
	/// let mut trailer = [0_u8; 128];
	/// trailer[..3].copy_from_slice(b"TAG");
	/// trailer[3..3 + 9].copy_from_slice(b"Spoonful\0");
	///
	/// let tag = Id3v1Tag::parse(trailer)?;
	/// assert_eq!(tag.title, "Spoonful");
	/// # Ok(()) }
	/// ```
	pub fn parse(data: [u8; 128]) -> Result<Self> {
		if data[..3] != ID3V1_TAG_MARKER {
			err!(NoTag);
		}

		let title = decode_text(&data[3..33]);
		let artist = decode_text(&data[33..63]);
		let album = decode_text(&data[63..93]);
		let year = decode_text(&data[93..97]);

		// ID3v1.1 steals the final comment byte for a track number, marked by
		// a null at offset 125 with a non-zero byte after it
		let (comment, track) = if data[125] == 0 && data[126] != 0 {
			(decode_text(&data[97..125]), Some(data[126].to_string()))
		} else {
			(decode_text(&data[97..127]), None)
		};

		let genre = resolve_genre(data[127]);

		Ok(Self {
			title,
			artist,
			album,
			year,
			comment,
			track,
			genre,
		})
	}
}

// Fields are right-trimmed of trailing nulls, interior nulls survive
fn decode_text(data: &[u8]) -> String {
	let end = data.iter().rposition(|&b| b != 0).map_or(0, |pos| pos + 1);
	latin1_decode(&data[..end])
}

fn resolve_genre(index: u8) -> String {
	GENRES
		.get(usize::from(index))
		.map_or_else(|| String::from("Unspecified"), |genre| String::from(*genre))
}

#[cfg(test)]
mod tests {
	use super::super::tag::Id3v1Tag;
	use crate::error::ErrorKind;

	fn trailer_with(fields: &[(usize, &[u8])]) -> [u8; 128] {
		let mut data = [0_u8; 128];
		data[..3].copy_from_slice(b"TAG");
		for (offset, bytes) in fields {
			data[*offset..*offset + bytes.len()].copy_from_slice(bytes);
		}
		data
	}

	#[test_log::test]
	fn full_tag() {
		let data = trailer_with(&[
			(3, b"Dreams".as_slice()),
			(33, b"Fleetwood Mac"),
			(63, b"Rumours"),
			(93, b"1977"),
			(97, b"Classic"),
			(127, &[17]),
		]);

		let tag = Id3v1Tag::parse(data).unwrap();
		assert_eq!(tag.title, "Dreams");
		assert_eq!(tag.artist, "Fleetwood Mac");
		assert_eq!(tag.album, "Rumours");
		assert_eq!(tag.year, "1977");
		assert_eq!(tag.comment, "Classic");
		assert_eq!(tag.track, None);
		assert_eq!(tag.genre, "Rock");
	}

	#[test_log::test]
	fn missing_marker() {
		let mut data = [0_u8; 128];
		data[..3].copy_from_slice(b"MP3");

		let err = Id3v1Tag::parse(data).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::NoTag));
	}

	#[test_log::test]
	fn v1_1_track_number() {
		let mut data = trailer_with(&[(97, b"Twenty eight byte comment".as_slice())]);
		data[125] = 0;
		data[126] = 5;

		let tag = Id3v1Tag::parse(data).unwrap();
		assert_eq!(tag.track.as_deref(), Some("5"));
		assert_eq!(tag.comment, "Twenty eight byte comment");
	}

	#[test_log::test]
	fn v1_1_comment_is_cut_to_28_bytes() {
		// A comment filling all 30 bytes, then a track number stuffed into
		// the final two. Only the 28 byte region may be used.
		let mut data = trailer_with(&[(97, b"abcdefghijklmnopqrstuvwxyz12".as_slice())]);
		data[125] = 0;
		data[126] = 12;

		let tag = Id3v1Tag::parse(data).unwrap();
		assert_eq!(tag.track.as_deref(), Some("12"));
		assert_eq!(tag.comment, "abcdefghijklmnopqrstuvwxyz12");
	}

	#[test_log::test]
	fn thirty_byte_comment_without_track() {
		let data = trailer_with(&[(97, b"abcdefghijklmnopqrstuvwxyz1234".as_slice())]);

		let tag = Id3v1Tag::parse(data).unwrap();
		assert_eq!(tag.track, None);
		assert_eq!(tag.comment, "abcdefghijklmnopqrstuvwxyz1234");
	}

	#[test_log::test]
	fn genre_resolution() {
		let tag = Id3v1Tag::parse(trailer_with(&[(127, &[0])])).unwrap();
		assert_eq!(tag.genre, "Blues");

		let tag = Id3v1Tag::parse(trailer_with(&[(127, &[191])])).unwrap();
		assert_eq!(tag.genre, "Psybient");

		// Out of range indices are resolved to the sentinel
		let tag = Id3v1Tag::parse(trailer_with(&[(127, &[192])])).unwrap();
		assert_eq!(tag.genre, "Unspecified");

		let tag = Id3v1Tag::parse(trailer_with(&[(127, &[255])])).unwrap();
		assert_eq!(tag.genre, "Unspecified");
	}

	#[test_log::test]
	fn latin1_field() {
		let data = trailer_with(&[(33, &[b'S', 0xE9, b'b', b'a', b's', b't', b'i', b'e', b'n'])]);

		let tag = Id3v1Tag::parse(data).unwrap();
		assert_eq!(tag.artist, "Sébastien");
	}
}
