//! The ID3v1 tag type

/// An ID3v1 tag
///
/// ID3v1 is a severely limited format, with each field being incredibly
/// small in size. All fields have been commented with their maximum sizes
/// and any other additional restrictions.
///
/// A tag is constructed atomically from one 128 byte buffer by
/// [`Id3v1Tag::parse`] and never mutated afterwards.
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct Id3v1Tag {
	/// Track title, 30 bytes max
	pub title: String,
	/// Track artist, 30 bytes max
	pub artist: String,
	/// Album title, 30 bytes max
	pub album: String,
	/// Release year, 4 bytes max
	pub year: String,
	/// A short comment
	///
	/// The maximum size of this field is dependent on the format.
	/// ID3v1 has a max size of 30 bytes, while ID3v1.1 has 28.
	pub comment: String,
	/// The track number, in its decimal form
	///
	/// Only present in ID3v1.1, which steals the final comment byte
	/// to store it.
	pub track: Option<String>,
	/// The track's genre, resolved through [`GENRES`](super::constants::GENRES)
	///
	/// An index outside of the table resolves to `"Unspecified"`.
	pub genre: String,
}
