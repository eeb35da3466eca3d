use crate::util::{file_len, sample_metadata, temp_file};

use tagwright::id3::v1;
use tagwright::tag::TagMetadata;

#[test_log::test]
fn write_and_remove() {
	let (_dir, path) = temp_file(&[0xAA; 10_000]);

	v1::write_tag(&path, &sample_metadata()).unwrap();
	assert_eq!(file_len(&path), 10_128);
	assert!(v1::has_tag(&path).unwrap());

	v1::remove_tag(&path).unwrap();
	assert_eq!(file_len(&path), 10_000);
	assert!(!v1::has_tag(&path).unwrap());
	assert_eq!(std::fs::read(&path).unwrap(), vec![0xAA; 10_000]);
}

#[test_log::test]
fn never_stacks() {
	let (_dir, path) = temp_file(&[0xAA; 10_000]);

	let mut metadata = sample_metadata();
	v1::write_tag(&path, &metadata).unwrap();

	metadata.title = Some(String::from("Another title"));
	v1::write_tag(&path, &metadata).unwrap();

	assert_eq!(file_len(&path), 10_128);

	let content = std::fs::read(&path).unwrap();
	assert_eq!(&content[10_003..10_016], b"Another title");
}

#[test_log::test]
fn sample_layout() {
	let tag = v1::encode(&sample_metadata());

	let expected_fields: [(usize, &[u8]); 5] = [
		(3, b"Test song."),
		(33, b"Bert Berrevoets"),
		(63, b"The Best!"),
		(93, b"2020"),
		(97, b"This is the best album ever."),
	];

	for (offset, value) in expected_fields {
		assert_eq!(&tag[offset..offset + value.len()], value);
	}

	// Title field padding
	assert!(tag[13..33].iter().all(|&b| b == 0));
	assert_eq!(&tag[125..], &[0, 8, 12]);
}

#[test_log::test]
fn long_fields() {
	let metadata = TagMetadata {
		title: Some(format!("   {}   ", "x".repeat(35))),
		year: Some(String::from("20")),
		..TagMetadata::default()
	};

	let tag = v1::encode(&metadata);
	assert_eq!(&tag[3..33], "x".repeat(30).as_bytes());
	assert_eq!(&tag[93..97], b"20\0\0");
}
