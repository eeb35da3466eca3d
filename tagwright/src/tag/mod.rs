//! Utilities for generic tag handling

pub mod items;
mod tag_type;

pub use tag_type::TagType;

use items::Timestamp;

use std::borrow::Cow;

/// The metadata written to a file
///
/// The same metadata feeds both tag formats. Every field is optional, and an empty string is
/// treated the same as a missing value: it is left out of an ID3v2 tag, and its field is zero
/// filled in an ID3v1 tag.
///
/// # Examples
///
/// ```rust
/// use tagwright::tag::TagMetadata;
///
/// let metadata = TagMetadata {
/// 	title: Some(String::from("Test song.")),
/// 	artist: Some(String::from("Bert Berrevoets")),
/// 	track_number: 8,
/// 	total_tracks: Some(12),
/// 	..TagMetadata::default()
/// };
///
/// assert_eq!(metadata.formatted_track(), "8/12");
/// assert_eq!(metadata.genre_string(), "0");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagMetadata {
	/// The title of the track
	pub title: Option<String>,
	/// The performing artist
	pub artist: Option<String>,
	/// The album the track belongs to
	pub album: Option<String>,
	/// The recording year, as free text
	///
	/// ID3v1 only has room for 4 characters.
	pub year: Option<String>,
	/// A structured recording time
	///
	/// When set, this takes precedence over the `year` field.
	pub recording_time: Option<Timestamp>,
	/// A free text comment
	pub comment: Option<String>,
	/// The track number, where 0 means unknown
	pub track_number: u8,
	/// The number of tracks in the set
	pub total_tracks: Option<u8>,
	/// The numeric ID3v1 genre
	pub genre_id: u8,
	/// A textual genre
	///
	/// When empty, ID3v2 tags fall back to the decimal value of [`TagMetadata::genre_id`].
	pub genre_text: Option<String>,
}

fn present(field: Option<&String>) -> Option<&str> {
	field.map(String::as_str).filter(|value| !value.is_empty())
}

pub(crate) fn format_track(track: u8, total: Option<u8>) -> String {
	match total {
		Some(total) if total > 0 => format!("{track}/{total}"),
		_ => track.to_string(),
	}
}

impl TagMetadata {
	/// The title, if present and non-empty
	pub fn title(&self) -> Option<&str> {
		present(self.title.as_ref())
	}

	/// The artist, if present and non-empty
	pub fn artist(&self) -> Option<&str> {
		present(self.artist.as_ref())
	}

	/// The album, if present and non-empty
	pub fn album(&self) -> Option<&str> {
		present(self.album.as_ref())
	}

	/// The comment, if present and non-empty
	pub fn comment(&self) -> Option<&str> {
		present(self.comment.as_ref())
	}

	/// The recording year as text
	///
	/// This is [`TagMetadata::recording_time`] when set, otherwise the free text `year` field.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::tag::TagMetadata;
	/// use tagwright::tag::items::Timestamp;
	///
	/// let mut metadata = TagMetadata::default();
	/// assert_eq!(metadata.year(), None);
	///
	/// metadata.year = Some(String::from("2020"));
	/// assert_eq!(metadata.year().as_deref(), Some("2020"));
	///
	/// metadata.recording_time = Some(Timestamp::from_year(1999));
	/// assert_eq!(metadata.year().as_deref(), Some("1999"));
	/// ```
	pub fn year(&self) -> Option<Cow<'_, str>> {
		if let Some(timestamp) = self.recording_time {
			return Some(Cow::Owned(format!("{:04}", timestamp.year)));
		}

		present(self.year.as_ref()).map(Cow::Borrowed)
	}

	/// The track number as written to an ID3v2 tag
	///
	/// This is `"N"`, or `"N/T"` when the total number of tracks is known and non-zero.
	pub fn formatted_track(&self) -> String {
		format_track(self.track_number, self.total_tracks)
	}

	/// Whether a genre is set
	///
	/// A [`TagMetadata::genre_id`] of 0 is only considered set alongside a non-empty
	/// [`TagMetadata::genre_text`].
	pub fn has_genre(&self) -> bool {
		self.genre_id != 0 || present(self.genre_text.as_ref()).is_some()
	}

	/// The genre as written to an ID3v2 tag
	///
	/// This is [`TagMetadata::genre_text`] when non-empty, otherwise the decimal value of
	/// [`TagMetadata::genre_id`].
	pub fn genre_string(&self) -> Cow<'_, str> {
		match present(self.genre_text.as_ref()) {
			Some(genre) => Cow::Borrowed(genre),
			None => Cow::Owned(self.genre_id.to_string()),
		}
	}
}
