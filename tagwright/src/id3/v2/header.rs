use crate::error::Result;
use crate::id3::v2::util::synchsafe::SynchsafeInteger;
use crate::macros::err;

use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

/// The identifier at the start of every ID3v2 tag
pub const ID3V2_TAG_MARKER: [u8; 3] = *b"ID3";

/// An ID3v2 tag header
///
/// ```text
/// | "ID3" (3) | Major version (1) | Revision (1) | Flags (1) | Size (4, synchsafe) |
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Id3v2Header {
	/// The major version, 4 for any tag Tagwright writes
	pub major_version: u8,
	/// The revision, 0 for any tag Tagwright writes
	pub revision: u8,
	/// The tag flags, always 0 for any tag Tagwright writes
	pub flags: u8,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER**)
	pub size: u32,
}

impl Id3v2Header {
	/// The size of an ID3v2 header
	pub const SIZE: usize = 10;

	/// Create an ID3v2.4 header for `size` bytes of tag contents
	///
	/// # Errors
	///
	/// * `size` doesn't fit in a synchsafe integer
	pub fn new(size: usize) -> Result<Self> {
		let Ok(size) = u32::try_from(size) else {
			err!(TooMuchData);
		};

		// Checked here, so a header can always be written
		size.synch()?;

		Ok(Self {
			major_version: 4,
			revision: 0,
			flags: 0,
			size,
		})
	}

	/// Whether `bytes` hold a plausible ID3v2 header
	///
	/// This requires the "ID3" marker, version bytes below `0xFF`, and none of the
	/// reserved low flag bits set.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::id3::v2::Id3v2Header;
	///
	/// assert!(Id3v2Header::is_valid(b"ID3\x04\x00\x00\x00\x00\x08\x00"));
	/// assert!(!Id3v2Header::is_valid(b"ID3\xFF\x00\x00\x00\x00\x08\x00"));
	/// assert!(!Id3v2Header::is_valid(b"ID3\x04\x00\x01\x00\x00\x08\x00"));
	/// assert!(!Id3v2Header::is_valid(b"TAG\x04\x00\x00\x00\x00\x08\x00"));
	/// assert!(!Id3v2Header::is_valid(b"ID3"));
	/// ```
	pub fn is_valid(bytes: &[u8]) -> bool {
		bytes.len() >= Self::SIZE
			&& bytes[..3] == ID3V2_TAG_MARKER
			&& bytes[3] < 0xFF
			&& bytes[4] < 0xFF
			&& bytes[5].trailing_zeros() >= 4
	}

	/// Read an ID3v2 header
	///
	/// Returns `None` if the reader holds fewer than 10 bytes, or if they aren't a valid
	/// header (see [`Id3v2Header::is_valid`]).
	///
	/// # Errors
	///
	/// * Failure to read from `reader`
	pub fn parse<R>(reader: &mut R) -> Result<Option<Self>>
	where
		R: Read,
	{
		let mut header = [0; Self::SIZE];
		match reader.read_exact(&mut header) {
			Ok(()) => {},
			Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
			Err(e) => return Err(e.into()),
		}

		if !Self::is_valid(&header) {
			return Ok(None);
		}

		let size = (&header[6..]).read_u32::<BigEndian>()?.unsynch();

		Ok(Some(Self {
			major_version: header[3],
			revision: header[4],
			flags: header[5],
			size,
		}))
	}

	/// The size of the entire tag, including this header
	pub fn full_tag_size(&self) -> u64 {
		Self::SIZE as u64 + u64::from(self.size)
	}

	/// Convert an [`Id3v2Header`] to its 10 bytes
	///
	/// # Errors
	///
	/// * `size` doesn't fit in a synchsafe integer
	pub fn as_bytes(&self) -> Result<[u8; Self::SIZE]> {
		let mut bytes = [0; Self::SIZE];

		let mut writer = &mut bytes[..];
		writer.write_all(&ID3V2_TAG_MARKER)?;
		writer.write_u8(self.major_version)?;
		writer.write_u8(self.revision)?;
		writer.write_u8(self.flags)?;
		writer.write_u32::<BigEndian>(self.size.synch()?)?;

		Ok(bytes)
	}
}

#[cfg(test)]
mod tests {
	use super::Id3v2Header;

	#[test_log::test]
	fn header_bytes() {
		let header = Id3v2Header::new(1024 + 21).unwrap();
		assert_eq!(
			header.as_bytes().unwrap(),
			*b"ID3\x04\x00\x00\x00\x00\x08\x15"
		);
		assert_eq!(header.full_tag_size(), 10 + 1024 + 21);
	}

	#[test_log::test]
	fn header_too_large() {
		assert!(Id3v2Header::new(0x0FFF_FFFF).is_ok());
		assert!(Id3v2Header::new(0x1000_0000).unwrap_err().is_validation());
	}

	#[test_log::test]
	fn parse_header() {
		let header = Id3v2Header::new(300).unwrap();
		let bytes = header.as_bytes().unwrap();

		let parsed = Id3v2Header::parse(&mut &bytes[..]).unwrap();
		assert_eq!(parsed, Some(header));
	}

	#[test_log::test]
	fn parse_foreign_version() {
		// ID3v2.3, which is still detected so that it can be stripped
		let parsed = Id3v2Header::parse(&mut &b"ID3\x03\x00\x00\x00\x00\x01\x00"[..])
			.unwrap()
			.unwrap();

		assert_eq!(parsed.major_version, 3);
		assert_eq!(parsed.size, 128);
	}

	#[test_log::test]
	fn parse_short_or_invalid() {
		assert_eq!(Id3v2Header::parse(&mut &b"ID3\x04"[..]).unwrap(), None);
		assert_eq!(Id3v2Header::parse(&mut &[0_u8; 0][..]).unwrap(), None);
		assert_eq!(
			Id3v2Header::parse(&mut &b"ID3\x04\x00\x0F\x00\x00\x00\x00"[..]).unwrap(),
			None
		);
		assert_eq!(
			Id3v2Header::parse(&mut &b"ID3\x04\xFF\x00\x00\x00\x00\x00"[..]).unwrap(),
			None
		);
	}

	#[test_log::test]
	fn only_high_flag_bits_allowed() {
		for flags in [0x00_u8, 0x10, 0x40, 0x80, 0xF0] {
			let bytes = [b'I', b'D', b'3', 4, 0, flags, 0, 0, 0, 0];
			assert!(Id3v2Header::is_valid(&bytes), "flags: {flags:#04x}");
		}

		for flags in [0x01_u8, 0x02, 0x04, 0x08, 0x8F] {
			let bytes = [b'I', b'D', b'3', 4, 0, flags, 0, 0, 0, 0];
			assert!(!Id3v2Header::is_valid(&bytes), "flags: {flags:#04x}");
		}
	}
}
