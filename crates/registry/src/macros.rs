//! Registration macros.

/// Registers a record type with the link-time type registry.
///
/// The type is queryable under [`RecordType::NAME`](crate::RecordType::NAME)
/// unless an explicit name is given.
///
/// # Example
///
/// ```ignore
/// register_type!(User);
/// register_type!(User as "account");
/// ```
#[macro_export]
macro_rules! register_type {
	($record:ty as $name:expr) => {
		$crate::inventory::submit! {
			$crate::TypeRegistration::of::<$record>($name, env!("CARGO_PKG_NAME"))
		}
	};
	($record:ty) => {
		$crate::register_type!($record as <$record as $crate::RecordType>::NAME);
	};
}

/// Registers a provider for a record type with the link-time registry.
///
/// The provider type must implement [`Provider`](crate::Provider) for the
/// record and [`Default`]; it is constructed when the registry is built.
/// Providers with a lower `priority` (default 0) are scanned first.
///
/// # Example
///
/// ```ignore
/// register_provider!(User => PosixUsers);
/// register_provider!(User => CachedUsers, priority: 10);
/// ```
#[macro_export]
macro_rules! register_provider {
	($record:ty => $provider:ty, priority: $priority:expr) => {
		$crate::inventory::submit! {
			$crate::ProviderRegistration::of::<$record, $provider>(
				stringify!($provider),
				env!("CARGO_PKG_NAME"),
				$priority,
			)
		}
	};
	($record:ty => $provider:ty) => {
		$crate::register_provider!($record => $provider, priority: 0);
	};
}
