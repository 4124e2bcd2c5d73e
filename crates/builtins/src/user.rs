//! The `user` record: one account from the system user database.

use reckon_record::{field, record};
use reckon_registry::register_type;

field! {
	/// Login name.
	pub Name: String = "name";
	/// Numeric user id.
	pub Uid: u32 = "uid";
	/// Primary group id.
	pub Gid: u32 = "gid";
}

record! {
	/// An account as reported by the system user database.
	pub struct User as "user" {
		name: Name,
		uid: Uid,
		gid: Gid,
	}
}

register_type!(User);

#[cfg(unix)]
mod posix;
#[cfg(unix)]
pub use posix::PosixUsers;
