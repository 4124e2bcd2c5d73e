//! Link-time registrations collected with `inventory`.

use reckon_record::RecordType;

use crate::builder::TypeRegistryBuilder;
use crate::provider::Provider;

/// A record type declared with [`register_type!`](crate::register_type).
pub struct TypeRegistration {
	/// Name the type is queried by.
	pub name: &'static str,
	/// Crate that submitted the registration.
	pub origin: &'static str,
	pub install: fn(&mut TypeRegistryBuilder, &TypeRegistration),
}

inventory::collect!(TypeRegistration);

impl TypeRegistration {
	pub const fn of<R: RecordType>(name: &'static str, origin: &'static str) -> Self {
		Self {
			name,
			origin,
			install: install_type::<R>,
		}
	}
}

fn install_type<R: RecordType>(builder: &mut TypeRegistryBuilder, registration: &TypeRegistration) {
	builder.register_type_from::<R>(registration.name, registration.origin);
}

/// A data source declared with [`register_provider!`](crate::register_provider).
pub struct ProviderRegistration {
	/// [`RecordType::NAME`] of the produced records.
	pub record: &'static str,
	pub provider: &'static str,
	/// Crate that submitted the registration.
	pub origin: &'static str,
	/// Lower priorities are scanned first.
	pub priority: i16,
	pub install: fn(&mut TypeRegistryBuilder),
}

inventory::collect!(ProviderRegistration);

impl ProviderRegistration {
	pub const fn of<R, P>(provider: &'static str, origin: &'static str, priority: i16) -> Self
	where
		R: RecordType,
		P: Provider<R> + Default + 'static,
	{
		Self {
			record: R::NAME,
			provider,
			origin,
			priority,
			install: install_provider::<R, P>,
		}
	}
}

fn install_provider<R, P>(builder: &mut TypeRegistryBuilder)
where
	R: RecordType,
	P: Provider<R> + Default + 'static,
{
	builder.register_provider::<R>(P::default());
}
