/// The identifier at the start of every ID3v1 tag
pub const ID3V1_TAG_MARKER: [u8; 3] = *b"TAG";

/// The size of an ID3v1 tag, which is always the final bytes of a file
pub const ID3V1_TAG_SIZE: usize = 128;

// Field widths, in the order they appear
pub(super) const TITLE_LEN: usize = 30;
pub(super) const ARTIST_LEN: usize = 30;
pub(super) const ALBUM_LEN: usize = 30;
pub(super) const YEAR_LEN: usize = 4;
pub(super) const COMMENT_LEN: usize = 28;

pub(super) const TRACK_OFFSET: usize = 126;
pub(super) const GENRE_OFFSET: usize = 127;
