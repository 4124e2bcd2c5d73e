use core::any::Any;
use core::fmt;

use serde_json::Value;

use crate::field::{Field, FieldKind};
use crate::sink::ObjectSink;

/// A heap-allocated record of any registered type.
pub type Instance = Box<dyn Record>;

/// Object-safe view of a record, implemented by [`record!`](crate::record).
pub trait Record: Any + fmt::Debug + Send + Sync {
	/// Name the record type is registered under by default.
	fn type_name(&self) -> &'static str;

	/// Field names in declaration order.
	fn field_names(&self) -> &'static [&'static str];

	/// Logical AND of every field's predicate in declaration order, stopping
	/// at the first failure.
	fn is_valid(&self) -> bool;

	/// Name of the first field whose predicate fails, checked in the same
	/// order as [`Record::is_valid`].
	fn first_invalid(&self) -> Option<&'static str>;

	/// Writes one member per field, in declaration order.
	fn encode_fields(&self, sink: &mut ObjectSink);

	fn to_value(&self) -> Value {
		let mut sink = ObjectSink::new();
		self.encode_fields(&mut sink);
		sink.into_value()
	}

	/// Compact JSON object with one member per field.
	fn to_json(&self) -> String {
		let mut sink = ObjectSink::new();
		self.encode_fields(&mut sink);
		sink.render()
	}
}

impl dyn Record {
	pub fn is<R: RecordType>(&self) -> bool {
		(self as &dyn Any).is::<R>()
	}

	pub fn downcast_ref<R: RecordType>(&self) -> Option<&R> {
		(self as &dyn Any).downcast_ref::<R>()
	}

	pub fn downcast_mut<R: RecordType>(&mut self) -> Option<&mut R> {
		(self as &mut dyn Any).downcast_mut::<R>()
	}
}

/// Capability implemented once per field of a record: "this record holds a
/// field of kind `K`". Lookups through it are resolved at compile time.
pub trait HasField<K: FieldKind> {
	fn slot(&self) -> &Field<K>;
	fn slot_mut(&mut self) -> &mut Field<K>;
}

/// Statically known record type.
pub trait RecordType: Record + Default + Clone + Sized {
	const NAME: &'static str;

	/// Field names in declaration order.
	const FIELDS: &'static [&'static str];

	/// A record with every field at its default value.
	fn blank() -> Self {
		Self::default()
	}

	fn field<K: FieldKind>(&self) -> &Field<K>
	where
		Self: HasField<K>,
	{
		<Self as HasField<K>>::slot(self)
	}

	fn field_mut<K: FieldKind>(&mut self) -> &mut Field<K>
	where
		Self: HasField<K>,
	{
		<Self as HasField<K>>::slot_mut(self)
	}

	fn get<K: FieldKind>(&self) -> &K::Value
	where
		Self: HasField<K>,
	{
		self.field::<K>().get()
	}

	fn set<K: FieldKind>(&mut self, value: impl Into<K::Value>)
	where
		Self: HasField<K>,
	{
		self.field_mut::<K>().set(value);
	}

	/// Builder-style [`RecordType::set`].
	fn with<K: FieldKind>(mut self, value: impl Into<K::Value>) -> Self
	where
		Self: HasField<K>,
	{
		self.set::<K>(value);
		self
	}

	fn into_instance(self) -> Instance {
		Box::new(self)
	}
}

/// True when no two entries of `names` are equal. Evaluated at compile time
/// by [`record!`](crate::record) over [`RecordType::FIELDS`].
#[doc(hidden)]
pub const fn names_are_unique(names: &[&str]) -> bool {
	let mut i = 0;
	while i < names.len() {
		let mut j = i + 1;
		while j < names.len() {
			if bytes_eq(names[i].as_bytes(), names[j].as_bytes()) {
				return false;
			}
			j += 1;
		}
		i += 1;
	}
	true
}

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
	if a.len() != b.len() {
		return false;
	}
	let mut i = 0;
	while i < a.len() {
		if a[i] != b[i] {
			return false;
		}
		i += 1;
	}
	true
}
