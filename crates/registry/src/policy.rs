/// How [`TypeRegistryBuilder::build`](crate::TypeRegistryBuilder::build)
/// resolves two registrations for the same type name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Fail the build with [`RegistryError::DuplicateType`](crate::RegistryError::DuplicateType).
	#[default]
	Reject,
	/// Keep the first registration seen for a name.
	FirstWins,
	/// Overwrite with the last registration seen.
	LastWins,
}

impl core::fmt::Display for DuplicatePolicy {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Reject => write!(f, "reject"),
			Self::FirstWins => write!(f, "first_wins"),
			Self::LastWins => write!(f, "last_wins"),
		}
	}
}
