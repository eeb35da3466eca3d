//! MPEG-1 Layer III frame headers

use super::constants::{BITRATES, FRAME_SYNC_MPEG1_LAYER3, SAMPLE_RATES, SAMPLES_PER_FRAME};

/// Channel mode
#[derive(Default, Copy, Clone, PartialEq, Eq, Debug)]
#[allow(missing_docs)]
pub enum ChannelMode {
	#[default]
	Stereo = 0,
	JointStereo = 1,
	/// Two independent mono channels
	DualChannel = 2,
	SingleChannel = 3,
}

/// An MPEG-1 Layer III frame header
///
/// ```text
/// | Sync (11 bits) | Version (2) | Layer (2) | No CRC (1) | Bitrate (4) | Sample rate (2) | Padding (1) |
/// | Private (1) | Channel mode (2) | Mode extension (2) | Copyright (1) | Original (1) | Emphasis (2) |
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameHeader {
	bitrate: u32,
	sample_rate: u32,
	padding: bool,
	channel_mode: ChannelMode,
}

impl Default for FrameHeader {
	/// The default implementation for `FrameHeader`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// FrameHeader {
	///     bitrate: 128,
	///     sample_rate: 44100,
	///     padding: false,
	///     channel_mode: ChannelMode::SingleChannel,
	/// }
	/// ```
	fn default() -> Self {
		Self {
			bitrate: 128,
			sample_rate: 44100,
			padding: false,
			channel_mode: ChannelMode::SingleChannel,
		}
	}
}

impl FrameHeader {
	/// Create a new `FrameHeader`
	///
	/// Returns `None` if `bitrate` (in kbps) or `sample_rate` (in Hz) aren't valid for
	/// MPEG-1 Layer III.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::mpeg::{ChannelMode, FrameHeader};
	///
	/// let header = FrameHeader::new(128, 44100, ChannelMode::SingleChannel).unwrap();
	/// assert_eq!(header.as_bytes(), [0xFF, 0xFB, 0x90, 0xC4]);
	/// assert_eq!(header.frame_len(), 417);
	///
	/// assert!(FrameHeader::new(100, 44100, ChannelMode::Stereo).is_none());
	/// ```
	pub fn new(bitrate: u32, sample_rate: u32, channel_mode: ChannelMode) -> Option<Self> {
		if bitrate == 0 || !BITRATES.contains(&bitrate) || !SAMPLE_RATES.contains(&sample_rate) {
			return None;
		}

		Some(Self {
			bitrate,
			sample_rate,
			padding: false,
			channel_mode,
		})
	}

	/// Read a `FrameHeader` from its big endian representation
	///
	/// Returns `None` for anything but a valid MPEG-1 Layer III header without CRC.
	pub fn read(data: u32) -> Option<Self> {
		let [sync_a, sync_b, ..] = data.to_be_bytes();
		if [sync_a, sync_b] != FRAME_SYNC_MPEG1_LAYER3 {
			return None;
		}

		let bitrate = BITRATES[((data >> 12) & 0xF) as usize];
		if bitrate == 0 {
			return None;
		}

		let sample_rate = match (data >> 10) & 0b11 {
			// This is invalid
			0b11 => return None,
			index => SAMPLE_RATES[index as usize],
		};

		let channel_mode = match (data >> 6) & 0b11 {
			0b00 => ChannelMode::Stereo,
			0b01 => ChannelMode::JointStereo,
			0b10 => ChannelMode::DualChannel,
			_ => ChannelMode::SingleChannel,
		};

		Some(Self {
			bitrate,
			sample_rate,
			padding: ((data >> 9) & 1) == 1,
			channel_mode,
		})
	}

	/// Set whether the frame carries an extra padding byte
	pub fn with_padding(mut self, padding: bool) -> Self {
		self.padding = padding;
		self
	}

	/// The bitrate in kbps
	pub fn bitrate(&self) -> u32 {
		self.bitrate
	}

	/// The sample rate in Hz
	pub fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	/// The channel mode
	pub fn channel_mode(&self) -> ChannelMode {
		self.channel_mode
	}

	/// The number of samples (per channel) held in each frame
	pub fn samples_per_frame(&self) -> u32 {
		SAMPLES_PER_FRAME
	}

	/// The length of a frame in bytes, including this header
	pub fn frame_len(&self) -> usize {
		let len = SAMPLES_PER_FRAME * self.bitrate * 125 / self.sample_rate;
		len as usize + usize::from(self.padding)
	}

	/// Convert a `FrameHeader` to its 4 bytes
	///
	/// The "original" bit is set, everything not described by the header is zeroed.
	pub fn as_bytes(&self) -> [u8; 4] {
		let mut bytes = [0; 4];
		bytes[..2].copy_from_slice(&FRAME_SYNC_MPEG1_LAYER3);

		let bitrate_index = BITRATES
			.iter()
			.position(|&b| b == self.bitrate)
			.unwrap_or_default();
		let sample_rate_index = SAMPLE_RATES
			.iter()
			.position(|&s| s == self.sample_rate)
			.unwrap_or_default();

		bytes[2] = ((bitrate_index as u8) << 4)
			| ((sample_rate_index as u8) << 2)
			| (u8::from(self.padding) << 1);
		bytes[3] = ((self.channel_mode as u8) << 6) | 0b100;

		bytes
	}
}

#[cfg(test)]
mod tests {
	use super::{ChannelMode, FrameHeader};

	#[test_log::test]
	fn default_header() {
		let header = FrameHeader::default();
		assert_eq!(
			Some(header),
			FrameHeader::new(128, 44100, ChannelMode::SingleChannel)
		);
		assert_eq!(header.as_bytes(), [0xFF, 0xFB, 0x90, 0xC4]);
	}

	#[test_log::test]
	fn frame_lengths() {
		let header = FrameHeader::new(128, 44100, ChannelMode::SingleChannel).unwrap();
		assert_eq!(header.frame_len(), 417);
		assert_eq!(header.with_padding(true).frame_len(), 418);

		let header = FrameHeader::new(320, 48000, ChannelMode::Stereo).unwrap();
		assert_eq!(header.frame_len(), 960);

		let header = FrameHeader::new(32, 32000, ChannelMode::JointStereo).unwrap();
		assert_eq!(header.frame_len(), 144);
	}

	#[test_log::test]
	fn invalid_parameters() {
		assert!(FrameHeader::new(0, 44100, ChannelMode::Stereo).is_none());
		assert!(FrameHeader::new(129, 44100, ChannelMode::Stereo).is_none());
		assert!(FrameHeader::new(128, 22050, ChannelMode::Stereo).is_none());
	}

	#[test_log::test]
	fn read_written_header() {
		for channel_mode in [
			ChannelMode::Stereo,
			ChannelMode::JointStereo,
			ChannelMode::DualChannel,
			ChannelMode::SingleChannel,
		] {
			for (bitrate, sample_rate) in [(32, 32000), (128, 44100), (320, 48000)] {
				let header = FrameHeader::new(bitrate, sample_rate, channel_mode)
					.unwrap()
					.with_padding(bitrate == 128);

				let read = FrameHeader::read(u32::from_be_bytes(header.as_bytes()));
				assert_eq!(read, Some(header));
			}
		}
	}

	#[test_log::test]
	fn read_rejects_other_streams() {
		// No sync
		assert!(FrameHeader::read(0x00FB_90C4).is_none());
		// MPEG-2
		assert!(FrameHeader::read(0xFFF3_90C4).is_none());
		// Layer II
		assert!(FrameHeader::read(0xFFFD_90C4).is_none());
		// Bad bitrate
		assert!(FrameHeader::read(0xFFFB_F0C4).is_none());
		// Bad sample rate
		assert!(FrameHeader::read(0xFFFB_9CC4).is_none());
	}
}
