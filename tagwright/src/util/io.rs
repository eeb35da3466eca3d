//! Block-level surgery on files identified by path
//!
//! Tags live at the very start (ID3v2) or the very end (ID3v1) of a file, so every edit
//! Tagwright makes is one of four operations: insert a block at the start, remove a block from
//! the start, append a block to the end, or cut a block off the end.
//!
//! Edits at the start of a file require the rest of the file to shift. These are never done in
//! place. The new contents are streamed into a temporary file next to the original, which then
//! atomically replaces it. A failure at any point before the replacement leaves the original file
//! untouched, and the temporary file is removed on every exit path.
//!
//! Edits at the end of a file can't corrupt the existing bytes, so they operate on the file
//! directly.
//!
//! NOTE: No locks are taken. Each operation assumes it is the only writer of its target file for
//! the duration of the call. Concurrent writers to the same path produce undefined results.

use crate::error::Result;

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Seek, SeekFrom, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Buffer size used when streaming the original file into its replacement
const COPY_BUFFER_SIZE: usize = 80 * 1024;

/// Insert `block` at the start of the file at `path`
///
/// Afterwards, the file will contain `block` followed by its original contents. An empty
/// `block` is a no-op.
///
/// # Errors
///
/// * `path` does not exist, or can't be read
/// * Unable to create, write, or persist the temporary file
///
/// # Examples
///
/// ```rust
/// # fn main() -> tagwright::error::Result<()> {
/// # let dir = tempfile::tempdir()?;
/// # let path = dir.path().join("foo.mp3");
/// std::fs::write(&path, b"audio")?;
///
/// tagwright::io::insert_at_start(&path, b"tag ")?;
/// assert_eq!(std::fs::read(&path)?, b"tag audio");
/// # Ok(()) }
/// ```
pub fn insert_at_start(path: impl AsRef<Path>, block: &[u8]) -> Result<()> {
	let path = path.as_ref();
	if block.is_empty() {
		return Ok(());
	}

	log::debug!(
		"Inserting {} bytes at the start of \"{}\"",
		block.len(),
		path.display()
	);

	let source = File::open(path)?;
	rewrite(path, move |writer| {
		writer.write_all(block)?;

		let mut reader = BufReader::with_capacity(COPY_BUFFER_SIZE, source);
		std::io::copy(&mut reader, writer)?;
		Ok(())
	})
}

/// Remove the first `byte_count` bytes of the file at `path`
///
/// A `byte_count` of 0 is a no-op. If `byte_count` is greater than or equal to the file's length,
/// the file will be left in place with no contents.
///
/// # Errors
///
/// * `path` does not exist, or can't be read
/// * Unable to create, write, or persist the temporary file
///
/// # Examples
///
/// ```rust
/// # fn main() -> tagwright::error::Result<()> {
/// # let dir = tempfile::tempdir()?;
/// # let path = dir.path().join("foo.mp3");
/// std::fs::write(&path, b"tag audio")?;
///
/// tagwright::io::remove_from_start(&path, 4)?;
/// assert_eq!(std::fs::read(&path)?, b"audio");
/// # Ok(()) }
/// ```
pub fn remove_from_start(path: impl AsRef<Path>, byte_count: u64) -> Result<()> {
	let path = path.as_ref();
	if byte_count == 0 {
		return Ok(());
	}

	let mut source = File::open(path)?;
	let len = source.metadata()?.len();

	if byte_count >= len {
		log::debug!(
			"Removing all {} bytes of \"{}\" ({} requested)",
			len,
			path.display(),
			byte_count
		);

		drop(source);
		return rewrite(path, |_| Ok(()));
	}

	log::debug!(
		"Removing {} bytes from the start of \"{}\"",
		byte_count,
		path.display()
	);

	source.seek(SeekFrom::Start(byte_count))?;
	rewrite(path, move |writer| {
		let mut reader = BufReader::with_capacity(COPY_BUFFER_SIZE, source);
		std::io::copy(&mut reader, writer)?;
		Ok(())
	})
}

/// Append `block` to the end of the file at `path`
///
/// An empty `block` is a no-op.
///
/// # Errors
///
/// * `path` does not exist, or can't be opened for writing
/// * Unable to write to the file
pub fn append_at_end(path: impl AsRef<Path>, block: &[u8]) -> Result<()> {
	let path = path.as_ref();
	if block.is_empty() {
		return Ok(());
	}

	log::debug!(
		"Appending {} bytes to the end of \"{}\"",
		block.len(),
		path.display()
	);

	let mut file = OpenOptions::new().append(true).open(path)?;
	file.write_all(block)?;
	file.flush()?;

	Ok(())
}

/// Cut the last `byte_count` bytes off the file at `path`
///
/// The caller is expected to know the file holds at least `byte_count` bytes. Should it not,
/// the file is emptied rather than erroring.
///
/// # Errors
///
/// * `path` does not exist, or can't be opened for writing
/// * Unable to set the file's length
pub fn truncate_from_end(path: impl AsRef<Path>, byte_count: u64) -> Result<()> {
	let path = path.as_ref();

	let file = OpenOptions::new().write(true).open(path)?;
	let len = file.metadata()?.len();

	log::debug!(
		"Truncating {} bytes from the end of \"{}\"",
		byte_count,
		path.display()
	);

	file.set_len(len.saturating_sub(byte_count))?;

	Ok(())
}

// Streams the new contents into a sibling temporary file, then swaps it in for `path`.
//
// The `NamedTempFile` guard deletes the temporary file if anything fails before `persist`.
fn rewrite<F>(path: &Path, fill: F) -> Result<()>
where
	F: FnOnce(&mut dyn Write) -> Result<()>,
{
	let permissions = fs::metadata(path)?.permissions();
	let mut temp = temp_file_beside(path)?;

	log::trace!(
		"Rewriting \"{}\" through \"{}\"",
		path.display(),
		temp.path().display()
	);

	{
		let mut writer = BufWriter::with_capacity(COPY_BUFFER_SIZE, temp.as_file_mut());
		fill(&mut writer)?;
		writer.flush()?;
	}

	temp.as_file().sync_all()?;
	fs::set_permissions(temp.path(), permissions)?;

	temp.persist(path)?;
	Ok(())
}

// The temporary file must be on the same filesystem as `path` for the rename to be atomic
fn temp_file_beside(path: &Path) -> Result<NamedTempFile> {
	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};

	let prefix = match path.file_name() {
		Some(name) => format!(".{}.", name.to_string_lossy()),
		None => String::from(".tagwright."),
	};

	let temp = tempfile::Builder::new()
		.prefix(&prefix)
		.suffix(".tmp")
		.tempfile_in(dir)?;

	Ok(temp)
}
