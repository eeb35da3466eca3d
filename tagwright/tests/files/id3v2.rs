use crate::util::{file_len, sample_metadata, split_frames, temp_file};

use tagwright::id3::v2;
use tagwright::tag::TagMetadata;

#[test_log::test]
fn empty_file_round_trip() {
	let (_dir, path) = temp_file(&[]);

	let metadata = TagMetadata {
		title: Some(String::from("Test song.")),
		artist: Some(String::from("Bert Berrevoets")),
		track_number: 8,
		total_tracks: Some(12),
		..TagMetadata::default()
	};

	v2::write_tag(&path, &metadata, 1024).unwrap();

	// Header + TIT2 (10 + 1 + 10) + TPE1 (10 + 1 + 15) + TRCK (10 + 1 + 4) + padding
	assert_eq!(file_len(&path), 10 + 21 + 26 + 15 + 1024);
	assert!(v2::has_tag(&path).unwrap());
	assert_eq!(v2::existing_tag_size(&path).unwrap(), file_len(&path));

	v2::remove_tag(&path).unwrap();
	assert_eq!(file_len(&path), 0);
	assert!(!v2::has_tag(&path).unwrap());
}

#[test_log::test]
fn sample_frames() {
	let tag = v2::create_tag(&sample_metadata(), 1024).unwrap();

	let frames = split_frames(&tag);
	let expected: [(&str, &[u8]); 7] = [
		("TIT2", b"\x03Test song."),
		("TPE1", b"\x03Bert Berrevoets"),
		("TALB", b"\x03The Best!"),
		("TDRC", b"\x032020"),
		("TRCK", b"\x038/12"),
		("TCON", b"\x03Other"),
		("COMM", b"\x03eng\x00This is the best album ever."),
	];

	assert_eq!(frames.len(), expected.len());
	for ((id, content), (expected_id, expected_content)) in frames.iter().zip(expected) {
		assert_eq!(id, expected_id);
		assert_eq!(content.as_slice(), expected_content);
	}
}

#[test_log::test]
fn existing_size_matches_frames() {
	let (_dir, path) = temp_file(&[0xFF, 0xFB, 0x90, 0xC4]);

	for padding in [0, 100, 2048] {
		v2::write_tag(&path, &sample_metadata(), padding).unwrap();

		let tag_size = v2::existing_tag_size(&path).unwrap();
		let frames_size = split_frames(&std::fs::read(&path).unwrap())
			.iter()
			.map(|(_, content)| 10 + content.len() as u64)
			.sum::<u64>();

		assert_eq!(tag_size, 10 + u64::from(padding) + frames_size);
		assert_eq!(file_len(&path), tag_size + 4);
	}
}

#[test_log::test]
fn idempotent() {
	let (_dir, path) = temp_file(&[0x11; 2000]);

	v2::write_tag(&path, &sample_metadata(), 1024).unwrap();
	let first = std::fs::read(&path).unwrap();

	v2::write_tag(&path, &sample_metadata(), 1024).unwrap();
	assert_eq!(std::fs::read(&path).unwrap(), first);
}

#[test_log::test]
fn replaces_foreign_tag() {
	// An ID3v2.3 tag with 20 bytes of content
	let mut content = b"ID3\x03\x00\x00\x00\x00\x00\x14".to_vec();
	content.extend([0; 20]);
	content.extend([0x22; 100]);

	let (_dir, path) = temp_file(&content);
	assert_eq!(v2::existing_tag_size(&path).unwrap(), 30);

	v2::write_tag(&path, &sample_metadata(), 0).unwrap();

	let new_content = std::fs::read(&path).unwrap();
	assert_eq!(new_content[3], 4);

	let tag_size = v2::existing_tag_size(&path).unwrap() as usize;
	assert_eq!(&new_content[tag_size..], &[0x22; 100]);
}

#[test_log::test]
fn utf8_text() {
	let metadata = TagMetadata {
		title: Some(String::from("Ünïcödé ♫")),
		..TagMetadata::default()
	};

	let tag = v2::create_tag(&metadata, 0).unwrap();
	let frames = split_frames(&tag);

	assert_eq!(frames[0].0, "TIT2");
	assert_eq!(&frames[0].1[1..], "Ünïcödé ♫".as_bytes());
}
