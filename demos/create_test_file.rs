#![allow(missing_docs)]

use tagwright::mpeg::silence;
use tagwright::prelude::*;

use structopt::StructOpt;

use std::path::PathBuf;

#[derive(Debug, StructOpt)]
#[structopt(
	name = "create_test_file",
	about = "Create a silent MP3 file with ID3v1 and ID3v2.4 tags"
)]
struct Opt {
	/// Length of the silent audio, in seconds
	#[structopt(short, long, default_value = "3.0")]
	duration: f64,

	/// Padding to reserve in the ID3v2 tag
	#[structopt(short, long, default_value = "1024")]
	padding: u32,

	#[structopt(long)]
	no_id3v1: bool,

	#[structopt(long)]
	no_id3v2: bool,

	#[structopt(parse(from_os_str), default_value = "Test.mp3")]
	path: PathBuf,
}

fn main() {
	env_logger::init();

	let opt = Opt::from_args();

	if opt.path.exists() {
		std::fs::remove_file(&opt.path).expect("ERROR: Failed to remove the existing file!");
	}

	std::fs::write(&opt.path, silence::generate(opt.duration))
		.expect("ERROR: Failed to create the file!");

	let metadata = TagMetadata {
		title: Some(String::from("Test song.")),
		artist: Some(String::from("Bert Berrevoets")),
		album: Some(String::from("The Best!")),
		year: Some(String::from("2020")),
		comment: Some(String::from("This is the best album ever.")),
		track_number: 8,
		total_tracks: Some(12),
		genre_id: 12,
		genre_text: Some(String::from("Other")),
		..TagMetadata::default()
	};

	let options = WriteOptions::new()
		.write_id3v1(!opt.no_id3v1)
		.write_id3v2(!opt.no_id3v2)
		.preferred_padding(opt.padding);

	tagwright::write_to_path(&opt.path, &metadata, options)
		.expect("ERROR: Failed to write the tags!");

	let tags = [(TagType::Id3v1, "ID3v1"), (TagType::Id3v2, "ID3v2.4")]
		.into_iter()
		.filter(|(tag_type, _)| tag_type.is_present_in_path(&opt.path).unwrap_or(false))
		.map(|(_, name)| name)
		.collect::<Vec<_>>();

	println!(
		"INFO: Created {} with tags: [{}]",
		opt.path.display(),
		tags.join(", ")
	);
	println!();
	println!("Metadata written:");
	println!("  Title:   {}", metadata.title().unwrap_or_default());
	println!("  Artist:  {}", metadata.artist().unwrap_or_default());
	println!("  Album:   {}", metadata.album().unwrap_or_default());
	println!("  Year:    {}", metadata.year().unwrap_or_default());
	println!("  Track:   {}", metadata.formatted_track());
	println!(
		"  Genre:   {} (ID: {})",
		metadata.genre_string(),
		metadata.genre_id
	);
	println!("  Comment: {}", metadata.comment().unwrap_or_default());
}
