use std::any::{Any, TypeId};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::panic::Location;
use std::sync::Arc;

use reckon_record::RecordType;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::error::RegistryError;
use crate::plugin::{ProviderRegistration, TypeRegistration};
use crate::policy::DuplicatePolicy;
use crate::provider::{Provider, ProviderRegistry};
use crate::type_registry::{RecordFactory, TypeEntry, TypeFactory, TypeRegistry};

/// Initialization phase of a [`TypeRegistry`].
///
/// Types and providers may be registered in any order; providers are
/// attached to their record type when [`TypeRegistryBuilder::build`] freezes
/// the registry.
pub struct TypeRegistryBuilder {
	policy: DuplicatePolicy,
	types: Vec<PendingType>,
	slots: ProviderSlots,
}

struct PendingType {
	name: String,
	origin: &'static str,
	factory: PendingFactory,
}

enum PendingFactory {
	Ready(Box<dyn TypeFactory>),
	Record(fn(&mut ProviderSlots) -> Box<dyn TypeFactory>),
}

impl TypeRegistryBuilder {
	pub fn new() -> Self {
		Self {
			policy: DuplicatePolicy::default(),
			types: Vec::new(),
			slots: ProviderSlots::default(),
		}
	}

	/// Sets the duplicate type name handling policy.
	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Registers a hand-written factory under `name`.
	#[track_caller]
	pub fn register(&mut self, name: impl Into<String>, factory: impl TypeFactory + 'static) {
		self.push_type(
			name.into(),
			Location::caller().file(),
			PendingFactory::Ready(Box::new(factory)),
		);
	}

	/// Registers record type `R` under [`RecordType::NAME`].
	#[track_caller]
	pub fn register_type<R: RecordType>(&mut self) {
		self.register_type_from::<R>(R::NAME, Location::caller().file());
	}

	/// Registers record type `R` under an explicit name.
	#[track_caller]
	pub fn register_type_as<R: RecordType>(&mut self, name: impl Into<String>) {
		self.register_type_from::<R>(name, Location::caller().file());
	}

	pub(crate) fn register_type_from<R: RecordType>(
		&mut self,
		name: impl Into<String>,
		origin: &'static str,
	) {
		self.push_type(name.into(), origin, PendingFactory::Record(finish_record::<R>));
	}

	/// Appends a provider to `R`'s provider list.
	pub fn register_provider<R: RecordType>(&mut self, provider: impl Provider<R> + 'static) {
		debug!(record = R::NAME, provider = provider.name(), "registered provider");
		self.slots.push::<R>(Box::new(provider));
	}

	/// Installs every link-time registration.
	///
	/// Types are installed sorted by name, then origin crate. Providers are
	/// installed sorted by priority, origin crate, then provider name, which
	/// fixes their concatenation order.
	pub fn with_inventory(mut self) -> Self {
		let mut types: Vec<&'static TypeRegistration> =
			inventory::iter::<TypeRegistration>.into_iter().collect();
		types.sort_by(|a, b| a.name.cmp(b.name).then_with(|| a.origin.cmp(b.origin)));
		for registration in types {
			(registration.install)(&mut self, registration);
		}

		let mut providers: Vec<&'static ProviderRegistration> =
			inventory::iter::<ProviderRegistration>.into_iter().collect();
		providers.sort_by(|a, b| {
			a.priority
				.cmp(&b.priority)
				.then_with(|| a.origin.cmp(b.origin))
				.then_with(|| a.provider.cmp(b.provider))
		});
		for registration in providers {
			(registration.install)(&mut self);
		}

		self
	}

	/// Freezes the registry.
	pub fn build(self) -> Result<TypeRegistry, RegistryError> {
		let (registry, orphans) = self.assemble()?;
		for orphan in &orphans {
			warn!(
				record = orphan.record,
				providers = orphan.providers,
				"providers registered for a record type that was never registered"
			);
		}
		Ok(registry)
	}

	/// Resolves duplicate names, then attaches providers to the surviving
	/// types only. Providers of a type that lost every name stay pending and
	/// are returned as orphans.
	fn assemble(self) -> Result<(TypeRegistry, Vec<Orphan>), RegistryError> {
		let Self {
			policy,
			types,
			mut slots,
		} = self;

		let mut winners: BTreeMap<String, PendingType> = BTreeMap::new();
		for pending in types {
			match winners.entry(pending.name.clone()) {
				Entry::Vacant(slot) => {
					slot.insert(pending);
				}
				Entry::Occupied(mut slot) => {
					let first = slot.get().origin;
					match policy {
						DuplicatePolicy::Reject => {
							return Err(RegistryError::DuplicateType {
								name: pending.name,
								first,
								second: pending.origin,
							});
						}
						DuplicatePolicy::FirstWins => {
							warn!(
								type_name = %pending.name,
								kept = first,
								dropped = pending.origin,
								%policy,
								"duplicate record type registration"
							);
						}
						DuplicatePolicy::LastWins => {
							warn!(
								type_name = %pending.name,
								kept = pending.origin,
								dropped = first,
								%policy,
								"duplicate record type registration"
							);
							slot.insert(pending);
						}
					}
				}
			}
		}

		let mut entries: BTreeMap<String, TypeEntry> = BTreeMap::new();
		for (name, PendingType { origin, factory, .. }) in winners {
			let factory = match factory {
				PendingFactory::Ready(factory) => factory,
				PendingFactory::Record(finish) => finish(&mut slots),
			};
			debug!(
				type_name = %name,
				origin,
				providers = factory.provider_count(),
				"registered record type"
			);
			entries.insert(name, TypeEntry { origin, factory });
		}

		debug!(types = entries.len(), "type registry frozen");
		Ok((TypeRegistry::from_entries(entries), slots.into_orphans()))
	}

	fn push_type(&mut self, name: String, origin: &'static str, factory: PendingFactory) {
		debug!(type_name = %name, origin, "queued record type");
		self.types.push(PendingType {
			name,
			origin,
			factory,
		});
	}
}

impl Default for TypeRegistryBuilder {
	fn default() -> Self {
		Self::new()
	}
}

fn finish_record<R: RecordType>(slots: &mut ProviderSlots) -> Box<dyn TypeFactory> {
	Box::new(RecordFactory::new(slots.freeze::<R>()))
}

/// Provider lists keyed by record type.
///
/// `pending` holds a `ProviderRegistry<R>` per `TypeId::of::<R>()` until the
/// first type registration for `R` freezes it into a shared `Arc`; later
/// registrations of the same type (under another name) reuse that `Arc`.
#[derive(Default)]
struct ProviderSlots {
	pending: FxHashMap<TypeId, PendingProviders>,
	frozen: FxHashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

/// Providers left unattached after the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Orphan {
	record: &'static str,
	providers: usize,
}

struct PendingProviders {
	record: &'static str,
	count: usize,
	registry: Box<dyn Any + Send + Sync>,
}

impl ProviderSlots {
	fn push<R: RecordType>(&mut self, provider: Box<dyn Provider<R>>) {
		let slot = self
			.pending
			.entry(TypeId::of::<R>())
			.or_insert_with(|| PendingProviders {
				record: R::NAME,
				count: 0,
				registry: Box::new(ProviderRegistry::<R>::new()),
			});
		slot.count += 1;
		match slot.registry.downcast_mut::<ProviderRegistry<R>>() {
			Some(registry) => registry.register_boxed(provider),
			None => unreachable!("provider slot for {} holds another record type", R::NAME),
		}
	}

	fn freeze<R: RecordType>(&mut self) -> Arc<ProviderRegistry<R>> {
		let id = TypeId::of::<R>();
		if let Some(shared) = self
			.frozen
			.get(&id)
			.and_then(|any| any.downcast_ref::<Arc<ProviderRegistry<R>>>())
		{
			return Arc::clone(shared);
		}

		let registry = self
			.pending
			.remove(&id)
			.and_then(|slot| slot.registry.downcast::<ProviderRegistry<R>>().ok())
			.map(|boxed| *boxed)
			.unwrap_or_default();
		let shared = Arc::new(registry);
		self.frozen.insert(id, Box::new(Arc::clone(&shared)));
		shared
	}

	fn into_orphans(self) -> Vec<Orphan> {
		let mut orphans: Vec<Orphan> = self
			.pending
			.into_values()
			.map(|slot| Orphan {
				record: slot.record,
				providers: slot.count,
			})
			.collect();
		orphans.sort_by_key(|orphan| orphan.record);
		orphans
	}
}
