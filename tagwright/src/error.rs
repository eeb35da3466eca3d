//! Contains the errors that can arise within Tagwright
//!
//! The primary error is [`TagwrightError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

/// Alias for `Result<T, TagwrightError>`
pub type Result<T> = std::result::Result<T, TagwrightError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Value related errors
	/// Attempting to encode a value that doesn't fit in its field
	///
	/// This occurs when a size is too large to be stored as a 28-bit synchsafe integer.
	TooMuchData,
	/// Expected the data to be a different size than provided
	///
	/// This occurs when decoding a synchsafe integer from anything other than exactly 4 bytes.
	SizeMismatch,
	/// Arises when encoding a problematic [`Timestamp`](crate::tag::items::Timestamp)
	BadTimestamp(&'static str),
	/// Errors that arise while writing ID3v2 tags
	Id3v2(Id3v2Error),

	// File related errors
	/// The target file doesn't exist, or no path was provided
	NotFound(PathBuf),

	// Conversions for external errors
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
}

/// The types of errors that can occur while writing ID3v2 tags
#[derive(Debug)]
#[non_exhaustive]
pub enum Id3v2ErrorKind {
	/// Arises when a frame ID contains invalid characters (must be within `'A'..'Z'` or `'0'..'9'`)
	/// or if the ID is not exactly 4 characters long.
	BadFrameId(Vec<u8>),
}

impl Display for Id3v2ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::BadFrameId(frame_id) => write!(f, "Failed to parse a frame ID: 0x{frame_id:x?}"),
		}
	}
}

/// An error that arises while interacting with an ID3v2 tag
pub struct Id3v2Error {
	kind: Id3v2ErrorKind,
}

impl Id3v2Error {
	/// Create a new `Id3v2Error` from an [`Id3v2ErrorKind`]
	#[must_use]
	pub const fn new(kind: Id3v2ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`Id3v2ErrorKind`]
	pub fn kind(&self) -> &Id3v2ErrorKind {
		&self.kind
	}
}

impl Debug for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {:?}", self.kind)
	}
}

impl Display for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {}", self.kind)
	}
}

/// Errors that could occur within Tagwright
pub struct TagwrightError {
	pub(crate) kind: ErrorKind,
}

impl TagwrightError {
	/// Create a `TagwrightError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::error::{ErrorKind, TagwrightError};
	///
	/// let too_large = TagwrightError::new(ErrorKind::TooMuchData);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::error::{ErrorKind, TagwrightError};
	///
	/// let size_mismatch = TagwrightError::new(ErrorKind::SizeMismatch);
	/// if let ErrorKind::SizeMismatch = size_mismatch.kind() {
	/// 	println!("Wrong number of bytes!");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}

	/// Whether the error was caused by invalid input rather than the environment
	///
	/// Validation errors are never worth retrying.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::id3::v2::util::synchsafe;
	///
	/// let err = synchsafe::encode(0x1000_0000).unwrap_err();
	/// assert!(err.is_validation());
	/// ```
	pub fn is_validation(&self) -> bool {
		matches!(
			self.kind,
			ErrorKind::TooMuchData
				| ErrorKind::SizeMismatch
				| ErrorKind::BadTimestamp(_)
				| ErrorKind::Id3v2(_)
		)
	}

	/// Whether the error was caused by a missing target file
	pub fn is_not_found(&self) -> bool {
		matches!(self.kind, ErrorKind::NotFound(_))
	}
}

impl std::error::Error for TagwrightError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::Io(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for TagwrightError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<Id3v2Error> for TagwrightError {
	fn from(input: Id3v2Error) -> Self {
		Self {
			kind: ErrorKind::Id3v2(input),
		}
	}
}

impl From<std::io::Error> for TagwrightError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<tempfile::PersistError> for TagwrightError {
	fn from(input: tempfile::PersistError) -> Self {
		// Dropping the returned `NamedTempFile` removes it from disk
		Self {
			kind: ErrorKind::Io(input.error),
		}
	}
}

impl Display for TagwrightError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}"),

			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to encode a value too large for a 28-bit synchsafe integer"
			),
			ErrorKind::SizeMismatch => write!(
				f,
				"Encountered an invalid item size, a synchsafe integer must be exactly 4 bytes"
			),
			ErrorKind::BadTimestamp(message) => {
				write!(f, "Encountered an invalid timestamp: {message}")
			},
			ErrorKind::Id3v2(ref id3v2_err) => write!(f, "{id3v2_err}"),

			// Files
			ErrorKind::NotFound(ref path) if path.as_os_str().is_empty() => {
				write!(f, "No file path was provided")
			},
			ErrorKind::NotFound(ref path) => {
				write!(f, "File not found: \"{}\"", path.display())
			},
		}
	}
}
