//! Type and provider registries for reckon records.
//!
//! Record types and their data sources are declared next to their
//! definitions with [`register_type!`] and [`register_provider!`]. The entry
//! point assembles them once into a frozen [`TypeRegistry`]:
//!
//! ```ignore
//! let registry = TypeRegistry::from_inventory()?;
//! for user in registry.list_instances("user") {
//!     println!("{}", user.to_json());
//! }
//! ```
//!
//! Tests build hermetic registries with [`TypeRegistry::builder`] instead.
//!
//! # Query flow
//!
//! `list_instances(name)` finds the [`TypeFactory`] for `name`, which
//! delegates to that record type's [`ProviderRegistry`]; every provider is
//! scanned in registration order and the results concatenated.

mod builder;
mod error;
mod macros;
mod plugin;
mod policy;
mod provider;
#[cfg(test)]
mod test_fixtures;
mod type_registry;

pub use builder::TypeRegistryBuilder;
pub use error::{ProviderError, RegistryError};
pub use plugin::{ProviderRegistration, TypeRegistration};
pub use policy::DuplicatePolicy;
pub use provider::{FnProvider, Provider, ProviderRegistry, from_fn};
pub use reckon_record::{Instance, Record, RecordType};
pub use type_registry::{RecordFactory, TypeFactory, TypeRegistry};

#[doc(hidden)]
pub use inventory;
