use crate::config::WriteOptions;
use crate::error::Result;
use crate::id3::{v1, v2};
use crate::macros::err;
use crate::tag::TagMetadata;

use std::path::Path;

// Every entry point checks the target before any mutation
pub(crate) fn verify_path(path: &Path) -> Result<()> {
	if path.as_os_str().is_empty() || !path.is_file() {
		err!(NotFound(path.to_path_buf()));
	}

	Ok(())
}

/// Write tags to the file at `path`
///
/// The ID3v2 tag is written first, then the ID3v1 tag, each replacing any existing tag of the
/// same type. Which tags are written is controlled by `write_options`.
///
/// # Errors
///
/// * `path` is empty, or the file does not exist
/// * `metadata` holds an invalid [`Timestamp`](crate::tag::items::Timestamp), see
///   [`Timestamp::verify`](crate::tag::items::Timestamp::verify)
/// * `metadata` can't be encoded, see [`v2::create_tag`]
/// * It is unable to rewrite the file
///
/// # Examples
///
/// ```rust
/// use tagwright::config::WriteOptions;
/// use tagwright::tag::{TagMetadata, TagType};
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
/// tagwright::write_to_path(&path, &metadata, WriteOptions::default())?;
///
/// assert!(TagType::Id3v1.is_present_in_path(&path)?);
/// assert!(TagType::Id3v2.is_present_in_path(&path)?);
/// # Ok(()) }
/// ```
pub fn write_to_path(
	path: impl AsRef<Path>,
	metadata: &TagMetadata,
	write_options: WriteOptions,
) -> Result<()> {
	let path = path.as_ref();
	verify_path(path)?;

	// Both tags take their year from the recording time, so it is checked before either is written
	if let Some(recording_time) = &metadata.recording_time {
		recording_time.verify()?;
	}

	log::debug!("Writing tags to \"{}\"", path.display());

	if write_options.write_id3v2 {
		v2::write_tag(path, metadata, write_options.preferred_padding)?;
	}

	if write_options.write_id3v1 {
		v1::write_tag(path, metadata)?;
	}

	Ok(())
}

/// Remove all tags from the file at `path`
///
/// The ID3v2 tag is removed first, then the ID3v1 tag. Missing tags are skipped.
///
/// # Errors
///
/// * `path` is empty, or the file does not exist
/// * It is unable to rewrite the file
pub fn remove_from_path(path: impl AsRef<Path>) -> Result<()> {
	let path = path.as_ref();
	verify_path(path)?;

	log::debug!("Removing all tags from \"{}\"", path.display());

	v2::remove_tag(path)?;
	v1::remove_tag(path)
}
