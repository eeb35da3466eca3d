//! MPEG audio payloads
//!
//! Tagwright never decodes audio. This module only produces silent MPEG-1 Layer III audio, so that a
//! valid file can be created from nothing and tagged.

mod constants;
pub mod header;
pub mod silence;

pub use header::{ChannelMode, FrameHeader};
