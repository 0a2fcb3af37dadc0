//! ID3v2 items
//!
//! A tag starts with a fixed 10 byte [`Id3v2Header`](header::Id3v2Header),
//! whose major version selects the frame header layout. The rest of the tag
//! body is a sequence of frames followed by optional padding, enumerated by
//! [`FrameReader`](frame::FrameReader).

pub mod frame;
pub mod header;
pub mod util;

pub use frame::{FrameReader, Id3v2Frame};
pub use header::{Id3v2Header, Id3v2TagFlags, Id3v2Version};
