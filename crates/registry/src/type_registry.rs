use std::collections::BTreeMap;
use std::sync::Arc;

use reckon_record::{Instance, RecordType};
use tracing::debug;

use crate::builder::TypeRegistryBuilder;
use crate::error::RegistryError;
use crate::provider::ProviderRegistry;

/// Mints and enumerates instances of one record type.
pub trait TypeFactory: Send + Sync {
	/// A record with every field at its default value.
	fn create_blank(&self) -> Instance;

	/// Every instance the record type's providers currently report.
	fn list_instances(&self) -> Vec<Instance>;

	/// Number of providers behind this factory.
	fn provider_count(&self) -> usize {
		0
	}
}

/// The factory installed for a statically declared record type: blank
/// records come from `R::default()`, instances from `R`'s providers.
pub struct RecordFactory<R: RecordType> {
	providers: Arc<ProviderRegistry<R>>,
}

impl<R: RecordType> RecordFactory<R> {
	pub fn new(providers: Arc<ProviderRegistry<R>>) -> Self {
		Self { providers }
	}

	pub fn providers(&self) -> &ProviderRegistry<R> {
		&self.providers
	}
}

impl<R: RecordType> TypeFactory for RecordFactory<R> {
	fn create_blank(&self) -> Instance {
		R::blank().into_instance()
	}

	fn list_instances(&self) -> Vec<Instance> {
		self.providers.list_instances()
	}

	fn provider_count(&self) -> usize {
		self.providers.len()
	}
}

pub(crate) struct TypeEntry {
	pub(crate) origin: &'static str,
	pub(crate) factory: Box<dyn TypeFactory>,
}

/// Frozen name to factory mapping.
///
/// Built once through [`TypeRegistryBuilder`]; read-only afterwards, so it
/// can be shared across threads without locking. Iteration is ordered by
/// type name.
pub struct TypeRegistry {
	entries: BTreeMap<String, TypeEntry>,
}

impl TypeRegistry {
	pub fn builder() -> TypeRegistryBuilder {
		TypeRegistryBuilder::new()
	}

	/// Assembles every record type and provider registered with
	/// [`register_type!`](crate::register_type) and
	/// [`register_provider!`](crate::register_provider) in linked crates.
	pub fn from_inventory() -> Result<Self, RegistryError> {
		Self::builder().with_inventory().build()
	}

	pub(crate) fn from_entries(entries: BTreeMap<String, TypeEntry>) -> Self {
		Self { entries }
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Registered type names, sorted.
	pub fn type_names(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Crate (or builder call site) that registered `name`.
	pub fn origin(&self, name: &str) -> Option<&'static str> {
		self.entries.get(name).map(|entry| entry.origin)
	}

	/// Number of providers behind `name`, if it is registered.
	pub fn provider_count(&self, name: &str) -> Option<usize> {
		self.entries
			.get(name)
			.map(|entry| entry.factory.provider_count())
	}

	/// Mints a blank record of the named type.
	///
	/// Unknown names are reported as [`RegistryError::UnknownType`]; the
	/// lookup never creates an entry.
	pub fn create_blank(&self, name: &str) -> Result<Instance, RegistryError> {
		self.entries
			.get(name)
			.map(|entry| entry.factory.create_blank())
			.ok_or_else(|| RegistryError::UnknownType(name.to_owned()))
	}

	/// Every instance of the named type, in provider registration order.
	/// Unknown names yield an empty vector.
	pub fn list_instances(&self, name: &str) -> Vec<Instance> {
		match self.entries.get(name) {
			Some(entry) => entry.factory.list_instances(),
			None => {
				debug!(type_name = name, "no record type registered under name");
				Vec::new()
			}
		}
	}

	/// Instances of every registered type, concatenated in name order.
	pub fn list_all_instances(&self) -> Vec<Instance> {
		self.entries
			.values()
			.flat_map(|entry| entry.factory.list_instances())
			.collect()
	}
}

impl core::fmt::Debug for TypeRegistry {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_map()
			.entries(
				self.entries
					.iter()
					.map(|(name, entry)| (name, (entry.origin, entry.factory.provider_count()))),
			)
			.finish()
	}
}
