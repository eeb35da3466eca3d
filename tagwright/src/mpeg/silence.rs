//! Silent MPEG-1 Layer III audio
//!
//! Each frame is a header followed by zeroed side information and main data. A zeroed side
//! information block describes granules with no coded samples, so every frame decodes to silence.

use super::header::FrameHeader;

/// Generate `duration_secs` seconds of silent 128 kbps, 44.1 kHz, mono audio
///
/// The duration is rounded up to a whole number of frames. A non-positive or non-finite
/// duration produces no audio.
///
/// # Examples
///
/// ```rust
/// use tagwright::mpeg::silence;
///
/// let audio = silence::generate(3.0);
///
/// // ceil(3.0 * 44100 / 1152) frames of 417 bytes
/// assert_eq!(audio.len(), 115 * 417);
/// assert_eq!(&audio[..4], [0xFF, 0xFB, 0x90, 0xC4]);
///
/// assert!(silence::generate(0.0).is_empty());
/// ```
pub fn generate(duration_secs: f64) -> Vec<u8> {
	generate_with(FrameHeader::default(), duration_secs)
}

/// Generate `duration_secs` seconds of silent audio, with every frame using `header`
///
/// See [`generate`].
pub fn generate_with(header: FrameHeader, duration_secs: f64) -> Vec<u8> {
	if !duration_secs.is_finite() || duration_secs <= 0.0 {
		log::warn!("Refusing to generate {duration_secs} seconds of audio");
		return Vec::new();
	}

	let samples = duration_secs * f64::from(header.sample_rate());
	let frame_count = (samples / f64::from(header.samples_per_frame())).ceil() as usize;
	let frame_len = header.frame_len();

	log::debug!(
		"Generating {} silent frames ({} bytes each)",
		frame_count,
		frame_len
	);

	let header_bytes = header.as_bytes();

	let mut frame = vec![0; frame_len];
	frame[..4].copy_from_slice(&header_bytes);

	frame.repeat(frame_count)
}

#[cfg(test)]
mod tests {
	use super::{generate, generate_with};
	use crate::mpeg::{ChannelMode, FrameHeader};

	// Walk the frames, verifying each header along the way
	fn frame_count(audio: &[u8]) -> usize {
		let mut count = 0;
		let mut remaining = audio;

		while !remaining.is_empty() {
			let data = u32::from_be_bytes(remaining[..4].try_into().unwrap());
			let header = FrameHeader::read(data).expect("every frame should start with a header");

			assert!(remaining[4..header.frame_len()].iter().all(|&b| b == 0));

			remaining = &remaining[header.frame_len()..];
			count += 1;
		}

		count
	}

	#[test_log::test]
	fn whole_frames() {
		let audio = generate(3.0);
		assert_eq!(audio.len() % 417, 0);
		assert_eq!(frame_count(&audio), 115);
	}

	#[test_log::test]
	fn rounds_up_partial_frames() {
		// A single sample still needs a frame
		assert_eq!(frame_count(&generate(1.0 / 44100.0)), 1);
		// 22050 samples, just over 19 frames
		assert_eq!(frame_count(&generate(0.5)), 20);
	}

	#[test_log::test]
	fn no_duration() {
		for duration in [0.0, -1.0, f64::NAN, f64::INFINITY] {
			assert!(generate(duration).is_empty());
		}
	}

	#[test_log::test]
	fn custom_header() {
		let header = FrameHeader::new(320, 48000, ChannelMode::Stereo).unwrap();
		let audio = generate_with(header, 1.0);

		// ceil(48000 / 1152) = 42
		assert_eq!(audio.len(), 42 * 960);
		assert_eq!(frame_count(&audio), 42);
	}
}
