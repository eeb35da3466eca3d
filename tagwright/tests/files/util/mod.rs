use tagwright::id3::v2::util::synchsafe;
use tagwright::tag::TagMetadata;

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Create a new temporary directory holding a single file with `content`
///
/// The directory (and file) are deleted once the returned [`TempDir`] is dropped.
pub fn temp_file(content: &[u8]) -> (TempDir, PathBuf) {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("test.mp3");
	std::fs::write(&path, content).unwrap();

	(dir, path)
}

/// The length of the file at `path`
pub fn file_len(path: &Path) -> u64 {
	std::fs::metadata(path).unwrap().len()
}

/// The metadata written by the `create_test_file` demo
pub fn sample_metadata() -> TagMetadata {
	TagMetadata {
		title: Some(String::from("Test song.")),
		artist: Some(String::from("Bert Berrevoets")),
		album: Some(String::from("The Best!")),
		year: Some(String::from("2020")),
		recording_time: None,
		comment: Some(String::from("This is the best album ever.")),
		track_number: 8,
		total_tracks: Some(12),
		genre_id: 12,
		genre_text: Some(String::from("Other")),
	}
}

/// Split an ID3v2 tag into `(id, content)` pairs, stopping at the padding
pub fn split_frames(tag: &[u8]) -> Vec<(String, Vec<u8>)> {
	let size = synchsafe::decode(&tag[6..10]).unwrap() as usize;
	let mut content = &tag[10..10 + size];

	let mut frames = Vec::new();
	while content.len() >= 10 && content[0] != 0 {
		let id = String::from_utf8(content[..4].to_vec()).unwrap();
		let len = synchsafe::decode(&content[4..8]).unwrap() as usize;

		assert_eq!(&content[8..10], &[0, 0], "frame flags must be zeroed");
		frames.push((id, content[10..10 + len].to_vec()));

		content = &content[10 + len..];
	}

	assert!(content.iter().all(|&b| b == 0), "padding must be zeroed");
	frames
}
