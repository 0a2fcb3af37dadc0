//! Read ID3v1 and ID3v2 metadata from audio data.
//!
//! `shellac` decodes the two legacy tag formats: the fixed 128 byte trailer
//! appended to the end of a file ("ID3v1", with its "v1.1" track number
//! extension), and the chunked tag found at the start ("ID3v2", major
//! versions 2 through 4). ID3v2 frames are exposed as raw identifier +
//! payload bytes; mapping them to application-level metadata is left to the
//! caller.
//!
//! # Examples
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use shellac::id3::find_id3v2;
//! use shellac::id3::v2::FrameReader;
//! use shellac::util::text::decode_frame_text;
//!
//! # fn main() -> shellac::error::Result<()> {
//! // A minimal ID3v2.3 tag with a single title frame and some padding
//! let mut tag = Vec::new();
//! tag.extend_from_slice(&[b'I', b'D', b'3', 3, 0, 0, 0, 0, 0, 28]);
//! tag.extend_from_slice(b"TIT2\x00\x00\x00\x06\x00\x00");
//! tag.extend_from_slice(b"\x00Hello");
//! tag.extend_from_slice(&[0; 12]);
//!
//! let mut stream = Cursor::new(tag);
//! let (header, body) = find_id3v2(&mut stream)?.expect("stream starts with a tag");
//!
//! let mut frames = FrameReader::new(&body[..], header.version);
//! let title = frames.read_frame()?.expect("the tag has one frame");
//!
//! assert_eq!(title.id, "TIT2");
//! assert_eq!(decode_frame_text(&title.data)?, "Hello");
//!
//! // The next read lands in the padding, ending enumeration
//! assert!(frames.read_frame()?.is_none());
//! # Ok(()) }
//! ```

pub mod error;
pub mod id3;
pub(crate) mod macros;
pub mod util;
