use crate::error::Result;
use crate::id3::v2::Frame;
use crate::id3::v2::util::synchsafe::SynchsafeInteger;
use crate::macros::err;

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

pub(in crate::id3::v2) fn create_items<'a, W>(
	writer: &mut W,
	frames: impl IntoIterator<Item = Frame<'a>>,
) -> Result<()>
where
	W: Write,
{
	for frame in frames {
		let value = frame.as_bytes()?;
		if value.is_empty() {
			continue;
		}

		log::trace!("Writing frame: {} ({} bytes)", frame.id(), value.len());
		writer.write_all(&value)?;
	}

	Ok(())
}

pub(in crate::id3::v2) fn write_frame_header<W>(writer: &mut W, name: &str, len: usize) -> Result<()>
where
	W: Write,
{
	let Ok(len) = u32::try_from(len) else {
		err!(TooMuchData);
	};

	writer.write_all(name.as_bytes())?;
	writer.write_u32::<BigEndian>(len.synch()?)?;
	// Flags are never set
	writer.write_u16::<BigEndian>(0)?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::write_frame_header;
	use crate::error::ErrorKind;

	#[test_log::test]
	fn frame_header() {
		let mut header = Vec::new();
		write_frame_header(&mut header, "TIT2", 200).unwrap();

		// 200 = 0b1_1001000
		assert_eq!(header, b"TIT2\x00\x00\x01\x48\x00\x00");
	}

	#[test_log::test]
	fn frame_header_too_large() {
		let mut header = Vec::new();
		let err = write_frame_header(&mut header, "TIT2", 0x1000_0000).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::TooMuchData));
	}
}
