pub(super) mod frame;

use crate::error::Result;
use crate::id3::v2::Frame;
use crate::id3::v2::frame::{ALBUM_ID, ARTIST_ID, GENRE_ID, RECORDING_TIME_ID, TITLE_ID, TRACK_ID};
use crate::id3::v2::header::Id3v2Header;
use crate::id3::v2::items::{CommentFrame, TextInformationFrame, TimestampFrame};
use crate::tag::TagMetadata;

use std::io::Write;

// Frames are always written in this order:
//
// title, artist, album, recording time, track, genre, comment
fn frames_from_metadata(metadata: &TagMetadata) -> Vec<Frame<'_>> {
	let mut frames = Vec::with_capacity(7);

	let text_frames = [
		(&TITLE_ID, metadata.title()),
		(&ARTIST_ID, metadata.artist()),
		(&ALBUM_ID, metadata.album()),
	];

	for (id, value) in text_frames {
		if let Some(value) = value {
			frames.push(Frame::Text(TextInformationFrame::new(id.clone(), value)));
		}
	}

	if let Some(timestamp) = metadata.recording_time {
		frames.push(Frame::Timestamp(TimestampFrame::new(
			RECORDING_TIME_ID.clone(),
			timestamp,
		)));
	} else if let Some(year) = metadata.year() {
		frames.push(Frame::Timestamp(TimestampFrame::new(
			RECORDING_TIME_ID.clone(),
			year.into_owned(),
		)));
	}

	if metadata.track_number > 0 {
		frames.push(Frame::Text(TextInformationFrame::new(
			TRACK_ID.clone(),
			metadata.formatted_track(),
		)));
	}

	if metadata.has_genre() {
		frames.push(Frame::Text(TextInformationFrame::new(
			GENRE_ID.clone(),
			metadata.genre_string(),
		)));
	}

	if let Some(comment) = metadata.comment() {
		frames.push(Frame::Comment(CommentFrame::new(comment)));
	}

	frames
}

/// Create an ID3v2.4 tag from `metadata`
///
/// The tag is a 10 byte header, followed by a frame for every field present in `metadata`, followed by
/// `padding` zero bytes. Even when no frame is written, the header and padding are still produced.
///
/// # Errors
///
/// * The frames and padding don't fit in a synchsafe size
/// * See [`Frame::as_bytes`]
///
/// # Examples
///
/// ```rust
/// use tagwright::id3::v2::create_tag;
/// use tagwright::tag::TagMetadata;
///
/// # fn main() -> tagwright::error::Result<()> {
/// let metadata = TagMetadata {
/// 	title: Some(String::from("Test song.")),
/// 	..TagMetadata::default()
/// };
///
/// let tag = create_tag(&metadata, 1024)?;
/// assert_eq!(tag.len(), 10 + 21 + 1024);
/// assert_eq!(&tag[..6], b"ID3\x04\x00\x00");
/// # Ok(()) }
/// ```
pub fn create_tag(metadata: &TagMetadata, padding: u32) -> Result<Vec<u8>> {
	let frames = frames_from_metadata(metadata);
	log::debug!("Creating an ID3v2.4 tag with {} frame(s)", frames.len());

	let mut items = Vec::new();
	frame::create_items(&mut items, frames)?;

	let padding_len = padding as usize;
	let header = Id3v2Header::new(items.len() + padding_len)?;

	let mut id3v2 = Vec::with_capacity(Id3v2Header::SIZE + items.len() + padding_len);
	id3v2.write_all(&header.as_bytes()?)?;
	id3v2.write_all(&items)?;

	if padding_len == 0 {
		log::trace!("No padding requested, writing tag as-is");
		return Ok(id3v2);
	}

	log::trace!("Padding tag with {} bytes", padding_len);
	id3v2.resize(id3v2.len() + padding_len, 0);

	Ok(id3v2)
}
