//! ID3v1.1 items
//!
//! # ID3v1 notes
//!
//! An ID3v1 tag is a fixed 128 byte block at the very end of a file. See [`encode`] for the layout.
//!
//! * Text is limited to 7-bit ASCII, anything else is written as `'?'`
//! * Fields are silently truncated to fit
//! * The genre is a single byte, any textual genre is only written to ID3v2

pub(crate) mod constants;
mod write;

pub use constants::{ID3V1_TAG_MARKER, ID3V1_TAG_SIZE};
pub use write::encode;

use crate::error::Result;
use crate::id3::{ID3FindResults, find_id3v1};
use crate::io;
use crate::tag::TagMetadata;

use std::fs::File;
use std::path::Path;

/// Whether the file at `path` ends with an ID3v1 tag
///
/// # Errors
///
/// * `path` does not exist, or can't be read
pub fn has_tag(path: impl AsRef<Path>) -> Result<bool> {
	let mut file = File::open(path)?;
	let ID3FindResults(header) = find_id3v1(&mut file)?;

	Ok(header.is_some())
}

/// Remove the ID3v1 tag from the end of the file at `path`
///
/// A file without an ID3v1 tag is left untouched.
///
/// # Errors
///
/// * `path` does not exist, or can't be written
pub fn remove_tag(path: impl AsRef<Path>) -> Result<()> {
	let path = path.as_ref();

	if !has_tag(path)? {
		log::debug!("No ID3v1 tag to remove from \"{}\"", path.display());
		return Ok(());
	}

	log::debug!("Removing the ID3v1 tag from \"{}\"", path.display());
	io::truncate_from_end(path, ID3V1_TAG_SIZE as u64)
}

/// Write an ID3v1.1 tag to the end of the file at `path`
///
/// Any existing ID3v1 tag is replaced, so a file never ends up with two.
///
/// # Errors
///
/// * `metadata` holds an invalid [`Timestamp`](crate::tag::items::Timestamp)
/// * `path` does not exist, or can't be written
///
/// # Examples
///
/// ```rust
/// use tagwright::id3::v1;
/// use tagwright::tag::TagMetadata;
///
/// # fn main() -> tagwright::error::Result<()> {
/// # let dir = tempfile::tempdir()?;
/// # let path = dir.path().join("foo.mp3");
/// std::fs::write(&path, [0; 1000])?;
///
/// let metadata = TagMetadata {
/// 	title: Some(String::from("Foo title")),
/// 	..TagMetadata::default()
/// };
///
/// v1::write_tag(&path, &metadata)?;
/// v1::write_tag(&path, &metadata)?;
/// assert_eq!(std::fs::metadata(&path)?.len(), 1128);
/// # Ok(()) }
/// ```
pub fn write_tag(path: impl AsRef<Path>, metadata: &TagMetadata) -> Result<()> {
	let path = path.as_ref();

	if let Some(recording_time) = &metadata.recording_time {
		recording_time.verify()?;
	}

	let tag = encode(metadata);

	remove_tag(path)?;
	io::append_at_end(path, &tag)
}
