//! The `file` record: a name and its permission bits.

use reckon_record::{field, record};
use reckon_registry::register_type;

field! {
	/// Entry name, relative to the scanned directory.
	pub Name: String = "name";
	/// Permission bits (`st_mode & 0o7777`). Valid when non-zero and within
	/// the twelve permission bits.
	pub Mode: u32 = "mode", valid |mode| *mode > 0 && *mode <= 0o7777;
}

record! {
	/// A file name paired with its permission mode.
	pub struct File as "file" {
		name: Name,
		mode: Mode,
	}
}

register_type!(File);

#[cfg(unix)]
mod directory;
#[cfg(unix)]
pub use directory::{DirectoryFiles, ROOT_ENV};

#[cfg(test)]
mod tests;
