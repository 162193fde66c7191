//! Page title and header metadata.

/// Title/header pair for the current page.
///
/// The header mirrors the title until it is set explicitly; an explicit
/// header is never overwritten by a later title-only update.
#[derive(Clone, Debug, Default)]
pub struct PageMetadata {
	title: Box<str>,
	header: Box<str>,
	header_locked: bool,
}

impl PageMetadata {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set_title(&mut self, title: &str) -> &mut Self {
		self.title = Box::from(title);
		if !self.header_locked {
			self.header = Box::from(title);
		}
		self
	}

	pub fn set_header(&mut self, header: &str) -> &mut Self {
		self.header = Box::from(header);
		self.header_locked = true;
		self
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn header(&self) -> &str {
		&self.header
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_title_sets_header() {
		let mut page = PageMetadata::new();
		page.set_title("X");
		assert_eq!(page.title(), "X");
		assert_eq!(page.header(), "X");
	}

	#[test]
	fn test_title_keeps_header_in_sync() {
		let mut page = PageMetadata::new();
		page.set_title("X").set_title("Y");
		assert_eq!(page.header(), "Y");
	}

	#[test]
	fn test_explicit_header_survives_title_update() {
		let mut page = PageMetadata::new();
		page.set_header("H").set_title("X");
		assert_eq!(page.title(), "X");
		assert_eq!(page.header(), "H");
	}

	#[test]
	fn test_header_after_title_locks() {
		let mut page = PageMetadata::new();
		page.set_title("X").set_header("H").set_title("Y");
		assert_eq!(page.title(), "Y");
		assert_eq!(page.header(), "H");
	}
}

// vim: ts=4
