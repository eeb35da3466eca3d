//! ID3v2 frame records
//!
//! Every frame shares the same 10 byte header:
//!
//! ```text
//! | ID (4) | Size (4, synchsafe) | Flags (2) |
//! ```
//!
//! The size covers only the frame content, and the flags are always zeroed.

use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::id3::v2::items::{CommentFrame, TextInformationFrame, TimestampFrame, TimestampValue};
use crate::id3::v2::write::frame::write_frame_header;

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// The size of an ID3v2 frame header
pub const FRAME_HEADER_SIZE: usize = 10;

/// The text encoding byte for UTF-8, the only encoding Tagwright writes
pub(crate) const UTF8_ENCODING: u8 = 0x03;

pub(crate) static TITLE_ID: FrameId<'static> = FrameId(Cow::Borrowed("TIT2"));
pub(crate) static ARTIST_ID: FrameId<'static> = FrameId(Cow::Borrowed("TPE1"));
pub(crate) static ALBUM_ID: FrameId<'static> = FrameId(Cow::Borrowed("TALB"));
pub(crate) static RECORDING_TIME_ID: FrameId<'static> = FrameId(Cow::Borrowed("TDRC"));
pub(crate) static TRACK_ID: FrameId<'static> = FrameId(Cow::Borrowed("TRCK"));
pub(crate) static GENRE_ID: FrameId<'static> = FrameId(Cow::Borrowed("TCON"));
pub(crate) static COMMENT_ID: FrameId<'static> = FrameId(Cow::Borrowed("COMM"));

/// An `ID3v2.4` frame ID
///
/// This is always exactly 4 characters, each within `'A'..='Z'` or `'0'..='9'`.
#[derive(PartialEq, Clone, Debug, Eq, Hash)]
pub struct FrameId<'a>(Cow<'a, str>);

impl<'a> FrameId<'a> {
	/// Attempts to create a `FrameId` from an ID string
	///
	/// # Errors
	///
	/// * `id` contains invalid characters (must be 'A'..='Z' and '0'..='9')
	/// * `id` is an invalid length (must be 4)
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::id3::v2::FrameId;
	///
	/// # fn main() -> tagwright::error::Result<()> {
	/// let title = FrameId::new("TIT2")?;
	/// assert_eq!(title.as_str(), "TIT2");
	///
	/// assert!(FrameId::new("tit2").is_err());
	/// assert!(FrameId::new("TT2").is_err());
	/// # Ok(()) }
	/// ```
	pub fn new<I>(id: I) -> Result<Self>
	where
		I: Into<Cow<'a, str>>,
	{
		Self::new_cow(id.into())
	}

	// Split from generic, public method to avoid code bloat by monomorphization.
	fn new_cow(id: Cow<'a, str>) -> Result<Self> {
		let valid = id.len() == 4
			&& id
				.chars()
				.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());

		if !valid {
			return Err(
				Id3v2Error::new(Id3v2ErrorKind::BadFrameId(id.into_owned().into_bytes())).into(),
			);
		}

		Ok(Self(id))
	}

	/// Extracts the string from the ID
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Display for FrameId<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Represents an `ID3v2` frame
///
/// A frame with no content is never written, see [`Frame::is_empty`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame<'a> {
	/// Represents a "T..." (excluding TXXX) frame
	Text(TextInformationFrame<'a>),
	/// Represents a timestamp for the "TDRC" frame
	Timestamp(TimestampFrame<'a>),
	/// Represents a "COMM" frame
	Comment(CommentFrame<'a>),
}

impl Frame<'_> {
	/// Get the ID of the frame
	pub fn id(&self) -> &FrameId<'_> {
		match self {
			Frame::Text(frame) => &frame.id,
			Frame::Timestamp(frame) => &frame.id,
			Frame::Comment(_) => &COMMENT_ID,
		}
	}

	/// Whether the frame has no content to write
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::id3::v2::{Frame, FrameId, TextInformationFrame};
	///
	/// # fn main() -> tagwright::error::Result<()> {
	/// let title = Frame::Text(TextInformationFrame::new(FrameId::new("TIT2")?, ""));
	/// assert!(title.is_empty());
	/// # Ok(()) }
	/// ```
	pub fn is_empty(&self) -> bool {
		match self {
			Frame::Text(frame) => frame.value.is_empty(),
			Frame::Timestamp(frame) => frame.is_empty(),
			Frame::Comment(frame) => frame.content.is_empty(),
		}
	}

	/// The content of the frame, excluding the frame header
	///
	/// # Errors
	///
	/// * The frame holds a [`Timestamp`](crate::tag::items::Timestamp) with out of range components
	pub fn content(&self) -> Result<Vec<u8>> {
		match self {
			Frame::Text(frame) => Ok(frame.as_bytes()),
			Frame::Timestamp(frame) => frame.as_bytes(),
			Frame::Comment(frame) => Ok(frame.as_bytes()),
		}
	}

	/// The complete frame record, including its header
	///
	/// Empty frames produce no bytes.
	///
	/// # Errors
	///
	/// * See [`Frame::content`]
	/// * The content is too large for a synchsafe size
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::id3::v2::{Frame, FrameId, TextInformationFrame};
	///
	/// # fn main() -> tagwright::error::Result<()> {
	/// let title = Frame::Text(TextInformationFrame::new(FrameId::new("TIT2")?, "Foo"));
	/// assert_eq!(
	/// 	title.as_bytes()?,
	/// 	b"TIT2\x00\x00\x00\x04\x00\x00\x03Foo"
	/// );
	/// # Ok(()) }
	/// ```
	pub fn as_bytes(&self) -> Result<Vec<u8>> {
		if self.is_empty() {
			log::trace!("Skipping empty frame: {}", self.id());
			return Ok(Vec::new());
		}

		let content = self.content()?;

		let mut bytes = Vec::with_capacity(FRAME_HEADER_SIZE + content.len());
		write_frame_header(&mut bytes, self.id().as_str(), content.len())?;
		bytes.extend(content);

		Ok(bytes)
	}
}

/// Build a complete text frame
///
/// An empty `text` produces no bytes, though `id` is still validated.
///
/// # Errors
///
/// * `id` is not a valid [`FrameId`]
/// * See [`Frame::as_bytes`]
///
/// # Examples
///
/// ```rust
/// use tagwright::id3::v2::build_text_frame;
///
/// # fn main() -> tagwright::error::Result<()> {
/// let artist = build_text_frame("TPE1", "Bert Berrevoets")?;
/// assert_eq!(artist.len(), 10 + 1 + 15);
///
/// assert!(build_text_frame("TPE1", "")?.is_empty());
/// assert!(build_text_frame("TPE", "").is_err());
/// # Ok(()) }
/// ```
pub fn build_text_frame(id: &str, text: &str) -> Result<Vec<u8>> {
	let id = FrameId::new(id)?;
	Frame::Text(TextInformationFrame::new(id, text)).as_bytes()
}

/// Build a complete "TRCK" frame
///
/// The value is `"N"`, or `"N/T"` when `total` is present and non-zero.
///
/// # Errors
///
/// * See [`Frame::as_bytes`]
///
/// # Examples
///
/// ```rust
/// use tagwright::id3::v2::build_track_frame;
///
/// # fn main() -> tagwright::error::Result<()> {
/// let track = build_track_frame(8, Some(12))?;
/// assert_eq!(&track[10..], b"\x038/12");
/// # Ok(()) }
/// ```
pub fn build_track_frame(track: u8, total: Option<u8>) -> Result<Vec<u8>> {
	let value = crate::tag::format_track(track, total);
	Frame::Text(TextInformationFrame::new(TRACK_ID.clone(), value)).as_bytes()
}

/// Build a complete "COMM" frame
///
/// `language` defaults to `"eng"`, and `description` defaults to an empty string. An empty
/// `comment` produces no bytes.
///
/// # Errors
///
/// * See [`Frame::as_bytes`]
///
/// # Examples
///
/// ```rust
/// use tagwright::id3::v2::build_comment_frame;
///
/// # fn main() -> tagwright::error::Result<()> {
/// let comment = build_comment_frame("Nice", None, None)?;
/// assert_eq!(&comment[10..], b"\x03eng\x00Nice");
/// # Ok(()) }
/// ```
pub fn build_comment_frame(
	comment: &str,
	language: Option<&str>,
	description: Option<&str>,
) -> Result<Vec<u8>> {
	let mut frame = CommentFrame::new(comment);
	if let Some(language) = language {
		frame.set_language(language);
	}
	if let Some(description) = description {
		frame.description = Cow::Borrowed(description);
	}

	Frame::Comment(frame).as_bytes()
}

/// Build a complete "TDRC" frame
///
/// # Errors
///
/// * See [`Frame::as_bytes`]
///
/// # Examples
///
/// ```rust
/// use tagwright::id3::v2::build_recording_time_frame;
/// use tagwright::tag::items::Timestamp;
///
/// # fn main() -> tagwright::error::Result<()> {
/// let year = build_recording_time_frame(" 2020 ")?;
/// assert_eq!(&year[10..], b"\x032020");
///
/// let date = Timestamp {
/// 	year: 2020,
/// 	month: Some(5),
/// 	day: Some(17),
/// 	..Timestamp::default()
/// };
/// assert_eq!(&build_recording_time_frame(date)?[10..], b"\x032020-05-17");
/// # Ok(()) }
/// ```
pub fn build_recording_time_frame<'a>(value: impl Into<TimestampValue<'a>>) -> Result<Vec<u8>> {
	Frame::Timestamp(TimestampFrame::new(RECORDING_TIME_ID.clone(), value)).as_bytes()
}
