use crate::error::Result;
use crate::macros::err;

use std::fmt::Display;

/// A subset of the ISO 8601 timestamp format
///
/// Each component depends on the one before it, a `day` without a `month` is not rendered.
///
/// # Examples
///
/// ```rust
/// use tagwright::tag::items::Timestamp;
///
/// let timestamp = Timestamp {
/// 	year: 2020,
/// 	month: Some(5),
/// 	day: Some(17),
/// 	..Timestamp::default()
/// };
///
/// assert_eq!(timestamp.to_string(), "2020-05-17");
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
#[allow(missing_docs)]
pub struct Timestamp {
	pub year: u16,
	pub month: Option<u8>,
	pub day: Option<u8>,
	pub hour: Option<u8>,
	pub minute: Option<u8>,
	pub second: Option<u8>,
}

impl Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:04}", self.year)?;

		if let Some(month) = self.month {
			write!(f, "-{month:02}")?;

			if let Some(day) = self.day {
				write!(f, "-{day:02}")?;

				if let Some(hour) = self.hour {
					write!(f, "T{hour:02}")?;

					if let Some(minute) = self.minute {
						write!(f, ":{minute:02}")?;

						if let Some(second) = self.second {
							write!(f, ":{second:02}")?;
						}
					}
				}
			}
		}

		Ok(())
	}
}

impl Timestamp {
	/// A timestamp holding only a year
	///
	/// # Examples
	///
	/// ```rust
	/// use tagwright::tag::items::Timestamp;
	///
	/// assert_eq!(Timestamp::from_year(2020).to_string(), "2020");
	/// ```
	pub fn from_year(year: u16) -> Self {
		Self {
			year,
			..Self::default()
		}
	}

	/// Verify that every present component is within its limits
	///
	/// # Errors
	///
	/// * `year` has more than 4 digits
	/// * `month` is not within `1..=12`, or `day` is not within `1..=31`
	/// * `hour`, `minute`, or `second` exceed 23, 59, and 59 respectively
	/// * A component is present while the one it depends on is not
	pub fn verify(&self) -> Result<()> {
		fn verify_field(
			field: Option<u8>,
			range: std::ops::RangeInclusive<u8>,
			has_parent: bool,
		) -> bool {
			match field {
				Some(field) => has_parent && range.contains(&field),
				None => true,
			}
		}

		if self.year > 9999
			|| !verify_field(self.month, 1..=12, true)
			|| !verify_field(self.day, 1..=31, self.month.is_some())
			|| !verify_field(self.hour, 0..=23, self.day.is_some())
			|| !verify_field(self.minute, 0..=59, self.hour.is_some())
			|| !verify_field(self.second, 0..=59, self.minute.is_some())
		{
			err!(BadTimestamp(
				"Timestamp contains segment(s) that exceed their limits"
			))
		}

		Ok(())
	}
}
