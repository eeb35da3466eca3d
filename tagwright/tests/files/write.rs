use crate::util::{file_len, sample_metadata, temp_file};

use tagwright::config::WriteOptions;
use tagwright::error::ErrorKind;
use tagwright::id3::{v1, v2};
use tagwright::tag::TagType;

#[test_log::test]
fn both_tags() {
	let (_dir, path) = temp_file(&[0x33; 500]);

	tagwright::write_to_path(&path, &sample_metadata(), WriteOptions::default()).unwrap();

	let tag_size = v2::existing_tag_size(&path).unwrap();
	assert_eq!(file_len(&path), tag_size + 500 + 128);
	assert!(TagType::Id3v1.is_present_in_path(&path).unwrap());
	assert!(TagType::Id3v2.is_present_in_path(&path).unwrap());

	let content = std::fs::read(&path).unwrap();
	assert_eq!(&content[..3], b"ID3");
	assert_eq!(&content[content.len() - 128..content.len() - 125], b"TAG");

	tagwright::remove_from_path(&path).unwrap();
	assert_eq!(std::fs::read(&path).unwrap(), vec![0x33; 500]);
}

#[test_log::test]
fn rewriting_is_stable() {
	let (_dir, path) = temp_file(&[0x33; 500]);

	tagwright::write_to_path(&path, &sample_metadata(), WriteOptions::default()).unwrap();
	let first = std::fs::read(&path).unwrap();

	tagwright::write_to_path(&path, &sample_metadata(), WriteOptions::default()).unwrap();
	assert_eq!(std::fs::read(&path).unwrap(), first);
}

#[test_log::test]
fn missing_file() {
	let (dir, _) = temp_file(&[]);
	let path = dir.path().join("missing.mp3");

	let err = tagwright::write_to_path(&path, &sample_metadata(), WriteOptions::default())
		.unwrap_err();
	assert!(err.is_not_found());
	assert!(!err.is_validation());
	assert!(!path.exists());

	let err = tagwright::write_to_path("", &sample_metadata(), WriteOptions::default()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::NotFound(p) if p.as_os_str().is_empty()));
}

#[test_log::test]
fn only_id3v1() {
	let (_dir, path) = temp_file(&[0x33; 500]);

	let options = WriteOptions::new().write_id3v2(false);
	tagwright::write_to_path(&path, &sample_metadata(), options).unwrap();

	assert!(!v2::has_tag(&path).unwrap());
	assert!(v1::has_tag(&path).unwrap());
	assert_eq!(file_len(&path), 628);
}
