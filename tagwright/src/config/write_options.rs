/// Options to control which tags Tagwright writes to a file
///
/// This replaces any notion of process-wide defaults. Build one, pass it to
/// [`write_to_path`](crate::write_to_path), and it applies to that call only.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct WriteOptions {
	pub(crate) write_id3v1: bool,
	pub(crate) write_id3v2: bool,
	pub(crate) preferred_padding: u32,
}

impl WriteOptions {
	/// Default preferred padding size in bytes
	pub const DEFAULT_PREFERRED_PADDING: u32 = 1024;

	/// Creates a new `WriteOptions`, alias for `Default` implementation
	///
	/// See also: [`WriteOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::config::WriteOptions;
	///
	/// let write_options = WriteOptions::new();
	/// ```
	pub const fn new() -> Self {
		Self {
			write_id3v1: true,
			write_id3v2: true,
			preferred_padding: Self::DEFAULT_PREFERRED_PADDING,
		}
	}

	/// Whether to write an ID3v1 tag to the end of the file
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::config::WriteOptions;
	///
	/// // Legacy players don't matter to me, only write ID3v2
	/// let options = WriteOptions::new().write_id3v1(false);
	/// ```
	pub const fn write_id3v1(mut self, write_id3v1: bool) -> Self {
		self.write_id3v1 = write_id3v1;
		self
	}

	/// Whether to write an ID3v2 tag to the start of the file
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::config::WriteOptions;
	///
	/// let options = WriteOptions::new().write_id3v2(false);
	/// ```
	pub const fn write_id3v2(mut self, write_id3v2: bool) -> Self {
		self.write_id3v2 = write_id3v2;
		self
	}

	/// Set the preferred padding size in bytes
	///
	/// This is the number of zero bytes appended after the ID3v2 frames, reserved so that
	/// the tag can later be edited in place without rewriting the whole file.
	///
	/// NOTE: ID3v1 tags have a fixed size and are unaffected by this option.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::config::WriteOptions;
	///
	/// // I really don't want my files rewritten, so I'll double the padding size!
	/// let options = WriteOptions::new().preferred_padding(2048);
	///
	/// // ...Or I don't want padding under any circumstances!
	/// let options = WriteOptions::new().preferred_padding(0);
	/// ```
	pub const fn preferred_padding(mut self, preferred_padding: u32) -> Self {
		self.preferred_padding = preferred_padding;
		self
	}

	/// Whether an ID3v1 tag will be written
	pub const fn writes_id3v1(&self) -> bool {
		self.write_id3v1
	}

	/// Whether an ID3v2 tag will be written
	pub const fn writes_id3v2(&self) -> bool {
		self.write_id3v2
	}

	/// The number of padding bytes appended to an ID3v2 tag
	pub const fn padding(&self) -> u32 {
		self.preferred_padding
	}
}

impl Default for WriteOptions {
	/// The default implementation for `WriteOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// WriteOptions {
	///     write_id3v1: true,
	///     write_id3v2: true,
	///     preferred_padding: 1024,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::WriteOptions;

	#[test_log::test]
	fn defaults() {
		let options = WriteOptions::default();
		assert!(options.writes_id3v1());
		assert!(options.writes_id3v2());
		assert_eq!(options.padding(), 1024);
		assert_eq!(options, WriteOptions::new());
	}

	#[test_log::test]
	fn builder_overrides() {
		let options = WriteOptions::new()
			.write_id3v1(false)
			.preferred_padding(0);

		assert!(!options.writes_id3v1());
		assert!(options.writes_id3v2());
		assert_eq!(options.padding(), 0);
	}
}
