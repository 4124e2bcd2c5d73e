use std::ffi::CStr;

use parking_lot::Mutex;
use reckon_record::RecordType;
use reckon_registry::{Provider, ProviderError, register_provider};
use tracing::{debug, trace};

use super::{Gid, Name, Uid, User};

/// `getpwent` walks a process-wide cursor; one scan at a time.
static ACCOUNT_DB: Mutex<()> = Mutex::new(());

/// Reads the account database front to back on every scan.
///
/// Only the login name is decoded, lossily, so an entry whose name or GECOS
/// field is not UTF-8 never ends the scan early.
#[derive(Debug, Default, Clone, Copy)]
pub struct PosixUsers;

impl Provider<User> for PosixUsers {
	fn name(&self) -> &'static str {
		"posix"
	}

	fn list_instances(&self) -> Result<Vec<User>, ProviderError> {
		let _scan = ACCOUNT_DB.lock();
		let mut users = Vec::new();

		// SAFETY: the cursor is only touched while ACCOUNT_DB is held, and each
		// entry is copied out before the next getpwent call invalidates it.
		unsafe {
			libc::setpwent();
			loop {
				let entry = libc::getpwent();
				if entry.is_null() {
					break;
				}
				let entry = &*entry;
				if entry.pw_name.is_null() {
					debug!(uid = entry.pw_uid, "skipping account without a name");
					continue;
				}
				users.push(account(
					CStr::from_ptr(entry.pw_name),
					entry.pw_uid,
					entry.pw_gid,
				));
			}
			libc::endpwent();
		}

		trace!(count = users.len(), "scanned account database");
		Ok(users)
	}
}

/// Builds a `user` record from one account database entry.
pub(super) fn account(name: &CStr, uid: u32, gid: u32) -> User {
	User::blank()
		.with::<Name>(name.to_string_lossy().into_owned())
		.with::<Uid>(uid)
		.with::<Gid>(gid)
}

register_provider!(User => PosixUsers);
