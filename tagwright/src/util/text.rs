/// Written in place of any character that can't be represented in 7-bit text
pub(crate) const ASCII_REPLACEMENT: u8 = b'?';

/// Encode `s` as 7-bit text, one byte per character
///
/// Anything outside of the ASCII range is substituted with [`ASCII_REPLACEMENT`].
pub(crate) fn ascii_encode(s: &str) -> impl Iterator<Item = u8> + '_ {
	s.chars().map(|c| {
		if c.is_ascii() {
			c as u8
		} else {
			ASCII_REPLACEMENT
		}
	})
}

/// Encode `s` as UTF-8, optionally followed by a null terminator
pub(crate) fn utf8_encode(s: &str, terminated: bool) -> Vec<u8> {
	let mut out = Vec::with_capacity(s.len() + usize::from(terminated));
	out.extend_from_slice(s.as_bytes());

	if terminated {
		out.push(0);
	}

	out
}
