//! Contains the errors that can arise within shellac
//!
//! The primary error is [`ShellacError`]. The type of error is determined by [`ErrorKind`].

use std::collections::TryReserveError;
use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, ShellacError>`
pub type Result<T> = std::result::Result<T, ShellacError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// Arises when a buffer does not start with the expected tag marker
	NoTag,
	/// Arises when a tag or frame header is structurally malformed
	InvalidHeader(&'static str),
	/// Errors that arise while decoding text
	TextDecode(&'static str),
	/// Attempting to read an abnormally large amount of data
	TooMuchData,
	/// The underlying byte source returned fewer bytes than required, or failed entirely
	Read(std::io::Error),
	/// Failure to allocate enough memory
	Alloc(TryReserveError),
}

/// The core error type
///
/// Frame exhaustion is **not** an error. Reaching the padding region of an
/// ID3v2 tag is signaled through the `Ok(None)` return of
/// [`FrameReader::read_frame`](crate::id3::v2::frame::FrameReader::read_frame).
pub struct ShellacError {
	kind: ErrorKind,
}

impl ShellacError {
	/// Create a `ShellacError` from an [`ErrorKind`]
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for ShellacError {}

impl Debug for ShellacError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl Display for ShellacError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match &self.kind {
			ErrorKind::NoTag => write!(f, "Expected a tag marker, found none"),
			ErrorKind::InvalidHeader(reason) => write!(f, "Invalid header: {reason}"),
			ErrorKind::TextDecode(reason) => write!(f, "Text decoding: {reason}"),
			ErrorKind::TooMuchData => {
				write!(f, "An abnormally large amount of data was provided")
			},
			ErrorKind::Read(err) => write!(f, "{err}"),
			ErrorKind::Alloc(err) => write!(f, "{err}"),
		}
	}
}

impl From<ErrorKind> for ShellacError {
	fn from(kind: ErrorKind) -> Self {
		Self { kind }
	}
}

impl From<std::io::Error> for ShellacError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Read(input),
		}
	}
}

impl From<TryReserveError> for ShellacError {
	fn from(input: TryReserveError) -> Self {
		Self {
			kind: ErrorKind::Alloc(input),
		}
	}
}
