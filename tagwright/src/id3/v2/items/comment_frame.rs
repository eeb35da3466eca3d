use crate::id3::v2::frame::UTF8_ENCODING;
use crate::util::text::{ascii_encode, utf8_encode};

use std::borrow::Cow;

/// An `ID3v2` comment frame
///
/// Layout of the content:
///
/// ```text
/// | Encoding (1) | Language (3) | Description | 0x00 | Content |
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentFrame<'a> {
	/// ISO-639-2 language code (3 bytes)
	pub language: [u8; 3],
	/// Content description
	pub description: Cow<'a, str>,
	/// The actual frame content
	pub content: Cow<'a, str>,
}

impl<'a> CommentFrame<'a> {
	/// The language used when none is specified
	pub const DEFAULT_LANGUAGE: [u8; 3] = *b"eng";

	/// Create a new [`CommentFrame`] with the default language and an empty description
	pub fn new(content: impl Into<Cow<'a, str>>) -> Self {
		Self {
			language: Self::DEFAULT_LANGUAGE,
			description: Cow::Borrowed(""),
			content: content.into(),
		}
	}

	/// Set the language of the comment
	///
	/// The language is coerced to exactly 3 characters: longer values are truncated, shorter
	/// ones are padded with spaces. Characters outside of ASCII are replaced with `'?'`.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::id3::v2::CommentFrame;
	///
	/// let mut frame = CommentFrame::new("Foo");
	///
	/// frame.set_language("english");
	/// assert_eq!(&frame.language, b"eng");
	///
	/// frame.set_language("nl");
	/// assert_eq!(&frame.language, b"nl ");
	/// ```
	pub fn set_language(&mut self, language: &str) {
		let mut coerced = [b' '; 3];
		for (dest, b) in coerced.iter_mut().zip(ascii_encode(language)) {
			*dest = b;
		}

		self.language = coerced;
	}

	/// Convert a [`CommentFrame`] to a byte vec
	///
	/// NOTE: This does not include a frame header
	pub fn as_bytes(&self) -> Vec<u8> {
		let mut bytes = vec![UTF8_ENCODING];

		bytes.extend(self.language);
		bytes.extend(utf8_encode(&self.description, true));
		bytes.extend(utf8_encode(&self.content, false));

		bytes
	}
}
