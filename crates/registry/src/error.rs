use std::io;
use std::path::PathBuf;

/// Registry assembly and lookup errors.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
	/// No record type is registered under the name.
	#[error("unknown record type: {0:?}")]
	UnknownType(String),

	/// Two registrations claimed the same name under [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject).
	#[error("record type {name:?} registered twice (first from {first}, again from {second})")]
	DuplicateType {
		name: String,
		first: &'static str,
		second: &'static str,
	},
}

/// Failure of a single provider scan.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
	#[error("failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("{0} is not available on this platform")]
	Unsupported(&'static str),
}

impl ProviderError {
	pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self::Io {
			path: path.into(),
			source,
		}
	}
}
