//! Various configuration options to control Tagwright

mod write_options;

pub use write_options::WriteOptions;
