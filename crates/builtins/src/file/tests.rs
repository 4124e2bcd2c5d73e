use pretty_assertions::assert_eq;
use reckon_record::{Field, Record, RecordType};

use super::*;

#[test]
fn mode_bounds() {
	let cases = [
		(0, false),
		(1, true),
		(0o644, true),
		(4095, true),
		(4096, false),
		(0o10000, false),
	];
	for (mode, valid) in cases {
		assert_eq!(Field::<Mode>::new(mode).is_valid(), valid, "mode {mode:#o}");
	}
}

#[test]
fn blank_file_is_invalid_until_mode_is_set() {
	let mut file = File::blank().with::<Name>("notes.txt");
	assert!(!file.is_valid());
	assert_eq!(file.first_invalid(), Some("mode"));

	file.set::<Mode>(0o600u32);
	assert!(file.is_valid());
	assert_eq!(file.to_json(), r#"{"name":"notes.txt","mode":384}"#);
}

#[cfg(unix)]
mod directory {
	use std::fs;
	use std::os::unix::fs::PermissionsExt;

	use pretty_assertions::assert_eq;
	use reckon_record::{Record, RecordType};
	use reckon_registry::{Provider, ProviderError};

	use super::super::{DirectoryFiles, File, Mode, Name, ROOT_ENV};

	fn touch(dir: &std::path::Path, name: &str, mode: u32) {
		let path = dir.join(name);
		fs::write(&path, name).expect("write fixture");
		fs::set_permissions(&path, fs::Permissions::from_mode(mode)).expect("chmod fixture");
	}

	#[test]
	fn lists_entries_sorted_with_modes() {
		let dir = tempfile::tempdir().expect("tempdir");
		touch(dir.path(), "b.sh", 0o755);
		touch(dir.path(), "a.txt", 0o640);

		let files = DirectoryFiles::new(dir.path())
			.list_instances()
			.expect("scan tempdir");
		let summary: Vec<(String, u32)> = files
			.iter()
			.map(|f: &File| (f.get::<Name>().clone(), *f.get::<Mode>()))
			.collect();
		assert_eq!(
			summary,
			[("a.txt".to_owned(), 0o640), ("b.sh".to_owned(), 0o755)]
		);
		assert!(files.iter().all(Record::is_valid));
	}

	#[test]
	fn missing_root_is_an_io_error() {
		let dir = tempfile::tempdir().expect("tempdir");
		let missing = dir.path().join("absent");

		let err = DirectoryFiles::new(&missing)
			.list_instances()
			.err()
			.expect("missing directory");
		assert!(matches!(err, ProviderError::Io { ref path, .. } if *path == missing));
	}

	struct RootVar(Option<std::ffi::OsString>);

	impl RootVar {
		fn set(value: Option<&std::path::Path>) -> Self {
			let saved = RootVar(std::env::var_os(ROOT_ENV));
			saved.apply(value.map(std::path::Path::as_os_str));
			saved
		}

		fn apply(&self, value: Option<&std::ffi::OsStr>) {
			// SAFETY: every test touching the variable holds the `env` serial lock.
			unsafe {
				match value {
					Some(value) => std::env::set_var(ROOT_ENV, value),
					None => std::env::remove_var(ROOT_ENV),
				}
			}
		}
	}

	impl Drop for RootVar {
		fn drop(&mut self) {
			self.apply(self.0.as_deref());
		}
	}

	#[test]
	#[serial_test::serial(env)]
	fn default_root_comes_from_environment() {
		let dir = tempfile::tempdir().expect("tempdir");
		touch(dir.path(), "only.txt", 0o600);
		let _root = RootVar::set(Some(dir.path()));

		let provider = DirectoryFiles::default();
		assert_eq!(provider.root(), dir.path());
		let files = provider.list_instances().expect("scan configured root");
		assert_eq!(files.len(), 1);
		assert_eq!(files[0].get::<Name>(), "only.txt");
	}

	#[test]
	#[serial_test::serial(env)]
	fn default_root_falls_back_to_working_directory() {
		let _root = RootVar::set(None);
		assert_eq!(DirectoryFiles::default().root(), std::path::Path::new("."));
	}
}
