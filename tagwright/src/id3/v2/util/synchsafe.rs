//! Utilities for working with synchsafe integers
//!
//! Every size field in an ID3v2.4 tag is stored as a synchsafe integer: 4 bytes with the
//! most significant bit of each byte cleared, leaving 28 usable bits. This guarantees that no size
//! field can contain a byte pattern resembling an MPEG frame sync (`0xFF` followed by a byte with
//! its 3 high bits set).

use crate::error::Result;
use crate::macros::err;

/// The largest value that can be stored in a synchsafe `u32`
pub const MAX_SYNCHSAFE_VALUE: u32 = 0x0FFF_FFFF;

/// An integer that can be converted to and from synchsafe variants
pub trait SynchsafeInteger: Sized {
	/// Create a synchsafe integer
	///
	/// # Errors
	///
	/// `self` doesn't fit in <`INTEGER_TYPE::BITS - size_of::<INTEGER_TYPE>()`> bits
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> tagwright::error::Result<()> {
	/// // Maximum value we can represent in a synchsafe u32
	/// let unsynch_number = 0xFFF_FFFF_u32;
	/// let synch_number = unsynch_number.synch()?;
	///
	/// // Our synchronized number should be something completely different
	/// assert_ne!(synch_number, unsynch_number);
	///
	/// // Each byte should have 7 set bits and an MSB of 0
	/// assert_eq!(synch_number, 0b01111111_01111111_01111111_01111111_u32);
	/// # Ok(()) }
	/// ```
	fn synch(self) -> Result<Self>;

	/// Unsynchronise a synchsafe integer
	///
	/// NOTE: This does not verify that the high bit of each byte is actually clear.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> tagwright::error::Result<()> {
	/// let unsynch_number = 0xFFF_FFFF_u32;
	/// let synch_number = unsynch_number.synch()?;
	///
	/// // Now, our re-unsynchronized number should match our original
	/// let re_unsynch_number = synch_number.unsynch();
	/// assert_eq!(re_unsynch_number, unsynch_number);
	/// # Ok(()) }
	/// ```
	fn unsynch(self) -> Self;
}

impl SynchsafeInteger for u32 {
	fn synch(self) -> Result<Self> {
		if self > MAX_SYNCHSAFE_VALUE {
			err!(TooMuchData);
		}

		let n = self;
		Ok((n & 0x7F)
			| ((n & (0x7F << 7)) << 1)
			| ((n & (0x7F << 14)) << 2)
			| ((n & (0x7F << 21)) << 3))
	}

	fn unsynch(self) -> Self {
		let u = self;
		((u & 0x7F00_0000) >> 3) | ((u & 0x7F_0000) >> 2) | ((u & 0x7F00) >> 1) | (u & 0x7F)
	}
}

/// Encode `value` into its 4 byte synchsafe representation
///
/// The bytes hold bits 27-21, 20-14, 13-7, and 6-0 of `value` respectively.
///
/// # Errors
///
/// * `value` is greater than [`MAX_SYNCHSAFE_VALUE`]
///
/// # Examples
///
/// ```rust
/// use tagwright::id3::v2::util::synchsafe;
///
/// # fn main() -> tagwright::error::Result<()> {
/// assert_eq!(synchsafe::encode(1024)?, [0x00, 0x00, 0x08, 0x00]);
/// assert!(synchsafe::encode(0x1000_0000).is_err());
/// # Ok(()) }
/// ```
pub fn encode(value: u32) -> Result<[u8; 4]> {
	Ok(value.synch()?.to_be_bytes())
}

/// Decode a 4 byte synchsafe integer
///
/// NOTE: The input is trusted, the high bit of each byte is simply ignored.
///
/// # Errors
///
/// * `bytes` is not exactly 4 bytes long
///
/// # Examples
///
/// ```rust
/// use tagwright::id3::v2::util::synchsafe;
///
/// # fn main() -> tagwright::error::Result<()> {
/// assert_eq!(synchsafe::decode(&[0x00, 0x00, 0x08, 0x00])?, 1024);
/// assert!(synchsafe::decode(&[0x00, 0x08, 0x00]).is_err());
/// # Ok(()) }
/// ```
pub fn decode(bytes: &[u8]) -> Result<u32> {
	let Ok(bytes) = <[u8; 4]>::try_from(bytes) else {
		err!(SizeMismatch);
	};

	Ok(u32::from_be_bytes(bytes).unsynch())
}
