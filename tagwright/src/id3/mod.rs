//! ID3 specific items
//!
//! ID3v1 tags are stored at the end of a file, ID3v2 tags at the start. The two are entirely
//! independent, and a file may hold either, both, or neither.

pub mod v1;
pub mod v2;

use crate::error::Result;
use v1::constants::ID3V1_TAG_MARKER;
use v2::header::Id3v2Header;

use std::io::{Read, Seek, SeekFrom};

pub(crate) struct ID3FindResults<Header>(pub Option<Header>);

pub(crate) fn find_id3v1<R>(data: &mut R) -> Result<ID3FindResults<()>>
where
	R: Read + Seek,
{
	log::debug!("Searching for an ID3v1 tag");

	// Reader is too small to contain an ID3v1 tag
	if data.seek(SeekFrom::End(-128)).is_err() {
		data.seek(SeekFrom::End(0))?;
		return Ok(ID3FindResults(None));
	}

	let mut id3v1_header = [0; 3];
	data.read_exact(&mut id3v1_header)?;

	data.seek(SeekFrom::Current(-3))?;

	// No ID3v1 tag found
	if id3v1_header != ID3V1_TAG_MARKER {
		data.seek(SeekFrom::End(0))?;
		return Ok(ID3FindResults(None));
	}

	log::debug!("Found an ID3v1 tag");
	Ok(ID3FindResults(Some(())))
}

pub(crate) fn find_id3v2<R>(data: &mut R) -> Result<ID3FindResults<Id3v2Header>>
where
	R: Read + Seek,
{
	log::debug!(
		"Searching for an ID3v2 tag at offset: {}",
		data.stream_position()?
	);

	let Some(header) = Id3v2Header::parse(data)? else {
		data.rewind()?;
		return Ok(ID3FindResults(None));
	};

	log::debug!(
		"Found an ID3v2.{}.{} tag, size: {}",
		header.major_version,
		header.revision,
		header.size
	);

	Ok(ID3FindResults(Some(header)))
}
