use crate::error::Result;
use crate::id3::{v1, v2};
use crate::write::verify_path;

use std::path::Path;

/// The tag's format
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TagType {
	/// Represents an ID3v1.1 tag, stored in the final 128 bytes of a file
	Id3v1,
	/// Represents an ID3v2.4 tag, stored at the start of a file
	Id3v2,
}

impl TagType {
	/// Remove a tag from a [`Path`]
	///
	/// A file without a tag of this type is left untouched.
	///
	/// # Errors
	///
	/// * `path` is empty, or the file does not exist
	/// * It is unable to rewrite the file
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// use tagwright::tag::TagType;
	///
	/// # fn main() -> tagwright::error::Result<()> {
	/// TagType::Id3v1.remove_from_path("Test.mp3")?;
	/// # Ok(()) }
	/// ```
	pub fn remove_from_path(&self, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();
		verify_path(path)?;

		match self {
			TagType::Id3v1 => v1::remove_tag(path),
			TagType::Id3v2 => v2::remove_tag(path),
		}
	}

	/// Whether a tag of this type is present in the file at `path`
	///
	/// # Errors
	///
	/// * `path` is empty, or the file does not exist
	/// * It is unable to read the file
	pub fn is_present_in_path(&self, path: impl AsRef<Path>) -> Result<bool> {
		let path = path.as_ref();
		verify_path(path)?;

		match self {
			TagType::Id3v1 => v1::has_tag(path),
			TagType::Id3v2 => v2::has_tag(path),
		}
	}
}
