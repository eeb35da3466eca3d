//! ID3v2.4 items and utilities
//!
//! An ID3v2 tag lives at the very start of a file:
//!
//! ```text
//! | Header (10) | Frames | Padding |
//! ```
//!
//! ## Notes
//!
//! * Only ID3v2.4 tags are written, with UTF-8 text.
//! * Tags of any version are detected, so they can be stripped before a new one is written. Their contents
//!   are never read.

mod frame;
pub(crate) mod header;
mod items;
pub mod util;
mod write;

pub use frame::{
	FRAME_HEADER_SIZE, Frame, FrameId, build_comment_frame, build_recording_time_frame,
	build_text_frame, build_track_frame,
};
pub use header::{ID3V2_TAG_MARKER, Id3v2Header};
pub use items::{CommentFrame, TextInformationFrame, TimestampFrame, TimestampValue};
pub use write::create_tag;

use crate::error::Result;
use crate::id3::{ID3FindResults, find_id3v2};
use crate::io;
use crate::tag::TagMetadata;

use std::fs::File;
use std::path::Path;

/// Whether the file at `path` starts with an ID3v2 tag
///
/// # Errors
///
/// * `path` does not exist, or can't be read
pub fn has_tag(path: impl AsRef<Path>) -> Result<bool> {
	let mut file = File::open(path)?;
	let ID3FindResults(header) = find_id3v2(&mut file)?;

	Ok(header.is_some())
}

/// The size of the ID3v2 tag at the start of the file at `path`, including its header
///
/// This is 0 if the file has no ID3v2 tag.
///
/// # Errors
///
/// * `path` does not exist, or can't be read
pub fn existing_tag_size(path: impl AsRef<Path>) -> Result<u64> {
	let mut file = File::open(path)?;
	let ID3FindResults(header) = find_id3v2(&mut file)?;

	Ok(header.map_or(0, |header| header.full_tag_size()))
}

/// Remove the ID3v2 tag from the start of the file at `path`
///
/// A file without an ID3v2 tag is left untouched.
///
/// # Errors
///
/// * `path` does not exist, or can't be read
/// * See [`io::remove_from_start`]
pub fn remove_tag(path: impl AsRef<Path>) -> Result<()> {
	let path = path.as_ref();

	let tag_size = existing_tag_size(path)?;
	if tag_size == 0 {
		log::debug!("No ID3v2 tag to remove from \"{}\"", path.display());
		return Ok(());
	}

	log::debug!(
		"Removing a {} byte ID3v2 tag from \"{}\"",
		tag_size,
		path.display()
	);
	io::remove_from_start(path, tag_size)
}

/// Write an ID3v2.4 tag to the start of the file at `path`
///
/// Any existing ID3v2 tag is replaced.
///
/// # Errors
///
/// * See [`create_tag`]
/// * See [`remove_tag`]
/// * See [`io::insert_at_start`]
///
/// # Examples
///
/// ```rust
/// use tagwright::id3::v2;
/// use tagwright::tag::TagMetadata;
///
/// # fn main() -> tagwright::error::Result<()> {
/// # let dir = tempfile::tempdir()?;
/// # let path = dir.path().join("foo.mp3");
/// # std::fs::write(&path, [])?;
/// let metadata = TagMetadata {
/// 	title: Some(String::from("Foo title")),
/// 	..TagMetadata::default()
/// };
///
/// v2::write_tag(&path, &metadata, 1024)?;
/// assert!(v2::has_tag(&path)?);
///
/// // Writing again replaces the tag
/// v2::write_tag(&path, &metadata, 1024)?;
/// assert_eq!(v2::existing_tag_size(&path)?, std::fs::metadata(&path)?.len());
/// # Ok(()) }
/// ```
pub fn write_tag(path: impl AsRef<Path>, metadata: &TagMetadata, padding: u32) -> Result<()> {
	let path = path.as_ref();

	// Invalid metadata must never touch the file
	let tag = create_tag(metadata, padding)?;

	remove_tag(path)?;
	io::insert_at_start(path, &tag)
}
