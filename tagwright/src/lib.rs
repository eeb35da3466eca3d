//! Write byte-exact ID3v1 and ID3v2.4 tags to MPEG audio files.
//!
//! Tagwright is a tag *writer*. It builds tags from a [`TagMetadata`](tag::TagMetadata), and only ever
//! looks at a file's existing tags to find and strip them before writing new ones.
//!
//! * ID3v2.4 tags are written to the start of a file, see [`id3::v2`]
//! * ID3v1.1 tags are written to the final 128 bytes of a file, see [`id3::v1`]
//!
//! # Examples
//!
//! ## Tagging a file
//!
//! ```rust,no_run
//! # fn main() -> tagwright::error::Result<()> {
//! use tagwright::config::WriteOptions;
//! use tagwright::tag::TagMetadata;
//!
//! let metadata = TagMetadata {
//! 	title: Some(String::from("Test song.")),
//! 	artist: Some(String::from("Bert Berrevoets")),
//! 	album: Some(String::from("The Best!")),
//! 	year: Some(String::from("2020")),
//! 	track_number: 8,
//! 	total_tracks: Some(12),
//! 	genre_id: 12,
//! 	genre_text: Some(String::from("Other")),
//! 	..TagMetadata::default()
//! };
//!
//! tagwright::write_to_path("Test.mp3", &metadata, WriteOptions::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Choosing which tags to write
//!
//! ```rust,no_run
//! # fn main() -> tagwright::error::Result<()> {
//! use tagwright::config::WriteOptions;
//! use tagwright::tag::TagMetadata;
//!
//! # let metadata = TagMetadata::default();
//! // Only write an ID3v2 tag, with no padding
//! let options = WriteOptions::new().write_id3v1(false).preferred_padding(0);
//! tagwright::write_to_path("Test.mp3", &metadata, options)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Removing tags
//!
//! ```rust,no_run
//! # fn main() -> tagwright::error::Result<()> {
//! use tagwright::tag::TagType;
//!
//! // Remove a single tag type
//! TagType::Id3v1.remove_from_path("Test.mp3")?;
//!
//! // Or remove everything
//! tagwright::remove_from_path("Test.mp3")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Creating a file from nothing
//!
//! ```rust
//! # fn main() -> tagwright::error::Result<()> {
//! use tagwright::config::WriteOptions;
//! use tagwright::mpeg::silence;
//! use tagwright::tag::TagMetadata;
//!
//! # let dir = tempfile::tempdir()?;
//! # let path = dir.path().join("Test.mp3");
//! std::fs::write(&path, silence::generate(3.0))?;
//!
//! let metadata = TagMetadata {
//! 	title: Some(String::from("Test song.")),
//! 	..TagMetadata::default()
//! };
//! tagwright::write_to_path(&path, &metadata, WriteOptions::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Writing safely
//!
//! Writing an ID3v2 tag shifts the rest of the file. That is never done in place: the new file is
//! assembled next to the original, and then swapped in. See [`io`] for the details.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod config;
pub mod error;
pub(crate) mod macros;
pub mod tag;
mod util;
mod write;

pub mod id3;
pub mod mpeg;

pub use crate::write::{remove_from_path, write_to_path};

pub use util::io;

pub mod prelude {
	//! A prelude for commonly used items in the library.
	//!
	//! This module is intended to be wildcard imported.
	//!
	//! ```rust
	//! use tagwright::prelude::*;
	//! ```

	pub use crate::config::WriteOptions;
	pub use crate::tag::{TagMetadata, TagType};
}
