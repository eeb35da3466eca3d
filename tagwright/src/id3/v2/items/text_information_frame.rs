use crate::id3::v2::FrameId;
use crate::id3::v2::frame::UTF8_ENCODING;
use crate::util::text::utf8_encode;

use std::borrow::Cow;

/// An `ID3v2` text frame
///
/// The text is always written as UTF-8, without a null terminator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextInformationFrame<'a> {
	pub(crate) id: FrameId<'a>,
	/// The text itself
	pub value: Cow<'a, str>,
}

impl<'a> TextInformationFrame<'a> {
	/// Create a new [`TextInformationFrame`]
	pub fn new(id: FrameId<'a>, value: impl Into<Cow<'a, str>>) -> Self {
		Self {
			id,
			value: value.into(),
		}
	}

	/// Get the ID for the frame
	pub fn id(&self) -> &FrameId<'_> {
		&self.id
	}

	/// Convert a [`TextInformationFrame`] to a byte vec
	///
	/// NOTE: This does not include a frame header
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::id3::v2::{FrameId, TextInformationFrame};
	///
	/// # fn main() -> tagwright::error::Result<()> {
	/// let frame = TextInformationFrame::new(FrameId::new("TPE1")?, "Foo artist");
	/// assert_eq!(frame.as_bytes(), b"\x03Foo artist");
	/// # Ok(()) }
	/// ```
	pub fn as_bytes(&self) -> Vec<u8> {
		let mut content = utf8_encode(&self.value, false);
		content.insert(0, UTF8_ENCODING);
		content
	}
}
