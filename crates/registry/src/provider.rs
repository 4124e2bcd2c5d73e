use core::fmt;

use reckon_record::{Instance, RecordType};
use tracing::{trace, warn};

use crate::error::ProviderError;

/// A data source producing fully populated records of type `R`.
///
/// Every call is an independent full scan of the backing store; callers may
/// invoke it at any cadence and nothing is cached between calls.
pub trait Provider<R: RecordType>: Send + Sync {
	/// Short label used in logs.
	fn name(&self) -> &'static str;

	fn list_instances(&self) -> Result<Vec<R>, ProviderError>;
}

/// Provider backed by a closure.
pub struct FnProvider<F> {
	name: &'static str,
	scan: F,
}

/// Wraps `scan` as a [`Provider`] labelled `name`.
pub fn from_fn<R, F>(name: &'static str, scan: F) -> FnProvider<F>
where
	R: RecordType,
	F: Fn() -> Result<Vec<R>, ProviderError> + Send + Sync,
{
	FnProvider { name, scan }
}

impl<R, F> Provider<R> for FnProvider<F>
where
	R: RecordType,
	F: Fn() -> Result<Vec<R>, ProviderError> + Send + Sync,
{
	fn name(&self) -> &'static str {
		self.name
	}

	fn list_instances(&self) -> Result<Vec<R>, ProviderError> {
		(self.scan)()
	}
}

impl<F> fmt::Debug for FnProvider<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FnProvider").field("name", &self.name).finish()
	}
}

/// Ordered, append-only list of the providers for one record type.
pub struct ProviderRegistry<R: RecordType> {
	providers: Vec<Box<dyn Provider<R>>>,
}

impl<R: RecordType> ProviderRegistry<R> {
	pub fn new() -> Self {
		Self {
			providers: Vec::new(),
		}
	}

	/// Appends a provider; it is scanned after every earlier one.
	pub fn register(&mut self, provider: impl Provider<R> + 'static) {
		self.register_boxed(Box::new(provider));
	}

	pub fn register_boxed(&mut self, provider: Box<dyn Provider<R>>) {
		self.providers.push(provider);
	}

	pub fn len(&self) -> usize {
		self.providers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}

	/// Provider labels in registration order.
	pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.providers.iter().map(|p| p.name())
	}

	/// Scans every provider in registration order and concatenates the
	/// results. A failing provider is logged and contributes nothing.
	pub fn records(&self) -> Vec<R> {
		let mut out = Vec::new();
		for provider in &self.providers {
			match provider.list_instances() {
				Ok(mut records) => {
					trace!(
						record = R::NAME,
						provider = provider.name(),
						count = records.len(),
						"provider scan complete"
					);
					out.append(&mut records);
				}
				Err(error) => {
					warn!(
						record = R::NAME,
						provider = provider.name(),
						%error,
						"provider scan failed; skipping"
					);
				}
			}
		}
		out
	}

	/// [`ProviderRegistry::records`] as type-erased instances.
	pub fn list_instances(&self) -> Vec<Instance> {
		self.records()
			.into_iter()
			.map(RecordType::into_instance)
			.collect()
	}
}

impl<R: RecordType> Default for ProviderRegistry<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: RecordType> fmt::Debug for ProviderRegistry<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProviderRegistry")
			.field("record", &R::NAME)
			.field("providers", &self.names().collect::<Vec<_>>())
			.finish()
	}
}

#[cfg(test)]
mod tests;
