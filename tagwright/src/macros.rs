// Shorthand for return Err(TagwrightError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(TagwrightError::new(ErrorKind::Variant))
// - err!(Variant(Message)) -> return Err(TagwrightError::new(ErrorKind::Variant(Message)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::TagwrightError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:expr)) => {
		return Err(crate::error::TagwrightError::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
}

pub(crate) use err;
