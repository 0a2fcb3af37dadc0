//! ID3v1 items
//!
//! ID3v1 is the fixed-layout 128 byte trailer appended to the end of a file.
//! It is parsed with [`Id3v1Tag::parse`](crate::id3::v1::tag::Id3v1Tag::parse),
//! or located and parsed in one step with [`find_id3v1`](crate::id3::find_id3v1).

pub mod constants;
mod read;
pub mod tag;
