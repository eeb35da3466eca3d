use super::constants::{
	ALBUM_LEN, ARTIST_LEN, COMMENT_LEN, GENRE_OFFSET, ID3V1_TAG_MARKER, ID3V1_TAG_SIZE,
	TITLE_LEN, TRACK_OFFSET, YEAR_LEN,
};
use crate::tag::TagMetadata;
use crate::util::text::ascii_encode;

/// Encode `metadata` as an ID3v1.1 tag
///
/// ```text
/// | "TAG" (3) | Title (30) | Artist (30) | Album (30) | Year (4) | Comment (28) | 0 (1) | Track (1) | Genre (1) |
/// ```
///
/// Text fields have their surrounding whitespace trimmed, and are then truncated to fit. Characters outside
/// of ASCII are written as `'?'`, so every character takes exactly one byte. Any unused bytes are zero.
///
/// # Examples
///
/// ```rust
/// use tagwright::id3::v1;
/// use tagwright::tag::TagMetadata;
///
/// let metadata = TagMetadata {
/// 	title: Some(String::from("  Foo title  ")),
/// 	track_number: 8,
/// 	genre_id: 12,
/// 	..TagMetadata::default()
/// };
///
/// let tag = v1::encode(&metadata);
/// assert_eq!(&tag[..3], b"TAG");
/// assert_eq!(&tag[3..13], b"Foo title\0");
/// assert_eq!(tag[126], 8);
/// assert_eq!(tag[127], 12);
/// ```
pub fn encode(metadata: &TagMetadata) -> [u8; ID3V1_TAG_SIZE] {
	fn write_field(dest: &mut [u8], value: Option<&str>) {
		let Some(value) = value else {
			return;
		};

		for (d, b) in dest.iter_mut().zip(ascii_encode(value.trim())) {
			*d = b;
		}
	}

	let mut tag = [0; ID3V1_TAG_SIZE];
	tag[..3].copy_from_slice(&ID3V1_TAG_MARKER);

	let year = metadata.year();
	let fields = [
		(TITLE_LEN, metadata.title()),
		(ARTIST_LEN, metadata.artist()),
		(ALBUM_LEN, metadata.album()),
		(YEAR_LEN, year.as_deref()),
		(COMMENT_LEN, metadata.comment()),
	];

	let mut offset = ID3V1_TAG_MARKER.len();
	for (len, value) in fields {
		write_field(&mut tag[offset..offset + len], value);
		offset += len;
	}

	// The zero byte at 125 marks this as ID3v1.1, making room for the track number
	tag[TRACK_OFFSET] = metadata.track_number;
	tag[GENRE_OFFSET] = metadata.genre_id;

	tag
}
