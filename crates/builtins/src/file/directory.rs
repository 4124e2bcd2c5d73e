use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use reckon_record::RecordType;
use reckon_registry::{Provider, ProviderError, register_provider};
use tracing::{debug, trace};

use super::{File, Mode, Name};

/// Environment variable naming the directory [`DirectoryFiles::default`] scans.
pub const ROOT_ENV: &str = "RECKON_FILE_ROOT";

/// Lists the entries of one directory, sorted by name.
#[derive(Debug, Clone)]
pub struct DirectoryFiles {
	root: PathBuf,
}

impl DirectoryFiles {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}
}

/// Scans `$RECKON_FILE_ROOT`, or the working directory when unset.
impl Default for DirectoryFiles {
	fn default() -> Self {
		let root = std::env::var_os(ROOT_ENV)
			.map(PathBuf::from)
			.unwrap_or_else(|| PathBuf::from("."));
		Self::new(root)
	}
}

impl Provider<File> for DirectoryFiles {
	fn name(&self) -> &'static str {
		"directory"
	}

	fn list_instances(&self) -> Result<Vec<File>, ProviderError> {
		let entries = fs::read_dir(&self.root).map_err(|e| ProviderError::io(&self.root, e))?;

		let mut files = Vec::new();
		for entry in entries {
			let entry = entry.map_err(|e| ProviderError::io(&self.root, e))?;
			// Entries removed mid-scan are skipped.
			let metadata = match entry.metadata() {
				Ok(metadata) => metadata,
				Err(error) => {
					debug!(path = %entry.path().display(), %error, "skipping entry");
					continue;
				}
			};
			files.push(
				File::blank()
					.with::<Name>(entry.file_name().to_string_lossy().into_owned())
					.with::<Mode>(metadata.permissions().mode() & 0o7777),
			);
		}

		files.sort_by(|a, b| a.get::<Name>().cmp(b.get::<Name>()));
		trace!(root = %self.root.display(), count = files.len(), "scanned directory");
		Ok(files)
	}
}

register_provider!(File => DirectoryFiles);
