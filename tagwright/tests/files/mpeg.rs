use crate::util::{file_len, sample_metadata, temp_file};

use tagwright::config::WriteOptions;
use tagwright::id3::v2;
use tagwright::mpeg::FrameHeader;
use tagwright::mpeg::silence;

#[test_log::test]
fn tagged_silence_keeps_audio_intact() {
	let audio = silence::generate(3.0);
	let (_dir, path) = temp_file(&audio);

	tagwright::write_to_path(&path, &sample_metadata(), WriteOptions::default()).unwrap();

	let tag_size = v2::existing_tag_size(&path).unwrap();
	assert_eq!(file_len(&path), tag_size + audio.len() as u64 + 128);

	let content = std::fs::read(&path).unwrap();
	let audio_start = tag_size as usize;

	// The first byte after the ID3v2 tag must be a frame sync
	let header = u32::from_be_bytes(content[audio_start..audio_start + 4].try_into().unwrap());
	assert_eq!(FrameHeader::read(header), Some(FrameHeader::default()));

	assert_eq!(&content[audio_start..content.len() - 128], &audio);
}
