use crate::error::Result;
use crate::id3::v2::FrameId;
use crate::id3::v2::frame::UTF8_ENCODING;
use crate::tag::items::Timestamp;
use crate::util::text::utf8_encode;

use std::borrow::Cow;

/// The value of a [`TimestampFrame`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimestampValue<'a> {
	/// A pre-formatted timestamp, such as a bare year
	///
	/// Surrounding whitespace is trimmed when written.
	Text(Cow<'a, str>),
	/// A structured timestamp, verified when written
	Timestamp(Timestamp),
}

impl From<Timestamp> for TimestampValue<'_> {
	fn from(value: Timestamp) -> Self {
		Self::Timestamp(value)
	}
}

impl<'a> From<&'a str> for TimestampValue<'a> {
	fn from(value: &'a str) -> Self {
		Self::Text(Cow::Borrowed(value))
	}
}

impl From<String> for TimestampValue<'_> {
	fn from(value: String) -> Self {
		Self::Text(Cow::Owned(value))
	}
}

/// An `ID3v2` timestamp frame
///
/// This is a text frame restricted to ISO 8601 timestamps, such as "TDRC".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimestampFrame<'a> {
	pub(crate) id: FrameId<'a>,
	/// The timestamp
	pub value: TimestampValue<'a>,
}

impl<'a> TimestampFrame<'a> {
	/// Create a new [`TimestampFrame`]
	pub fn new(id: FrameId<'a>, value: impl Into<TimestampValue<'a>>) -> Self {
		Self {
			id,
			value: value.into(),
		}
	}

	/// Get the ID for the frame
	pub fn id(&self) -> &FrameId<'_> {
		&self.id
	}

	/// Whether the frame has nothing to write
	///
	/// Only a blank [`TimestampValue::Text`] is considered empty.
	pub fn is_empty(&self) -> bool {
		match &self.value {
			TimestampValue::Text(text) => text.trim().is_empty(),
			TimestampValue::Timestamp(_) => false,
		}
	}

	/// Convert a [`TimestampFrame`] to a byte vec
	///
	/// NOTE: This does not include a frame header
	///
	/// # Errors
	///
	/// * The value is a [`Timestamp`] with out of range components, see [`Timestamp::verify`]
	pub fn as_bytes(&self) -> Result<Vec<u8>> {
		let rendered = match &self.value {
			TimestampValue::Text(text) => Cow::Borrowed(text.trim()),
			TimestampValue::Timestamp(timestamp) => {
				timestamp.verify()?;
				Cow::Owned(timestamp.to_string())
			},
		};

		let mut content = utf8_encode(&rendered, false);
		content.insert(0, UTF8_ENCODING);
		Ok(content)
	}
}

#[cfg(test)]
mod tests {
	use super::{TimestampFrame, TimestampValue};
	use crate::id3::v2::FrameId;
	use crate::tag::items::Timestamp;

	fn tdrc() -> FrameId<'static> {
		FrameId::new("TDRC").unwrap()
	}

	#[test_log::test]
	fn text_is_trimmed() {
		let frame = TimestampFrame::new(tdrc(), "\t2020\n");
		assert_eq!(frame.as_bytes().unwrap(), b"\x032020");
	}

	#[test_log::test]
	fn blank_text_is_empty() {
		assert!(TimestampFrame::new(tdrc(), "  ").is_empty());
		assert!(TimestampFrame::new(tdrc(), String::new()).is_empty());
		assert!(!TimestampFrame::new(tdrc(), Timestamp::default()).is_empty());
	}

	#[test_log::test]
	fn structured_formats() {
		let mut timestamp = Timestamp::from_year(2020);
		let frame = |timestamp| TimestampFrame::new(tdrc(), TimestampValue::Timestamp(timestamp));

		assert_eq!(frame(timestamp).as_bytes().unwrap(), b"\x032020");

		timestamp.month = Some(1);
		timestamp.day = Some(2);
		assert_eq!(frame(timestamp).as_bytes().unwrap(), b"\x032020-01-02");

		timestamp.hour = Some(3);
		timestamp.minute = Some(4);
		assert_eq!(frame(timestamp).as_bytes().unwrap(), b"\x032020-01-02T03:04");

		timestamp.second = Some(5);
		assert_eq!(
			frame(timestamp).as_bytes().unwrap(),
			b"\x032020-01-02T03:04:05"
		);
	}
}
