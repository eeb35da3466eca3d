//! Various generic representations of tag items

mod timestamp;

pub use timestamp::Timestamp;
