use core::fmt;

use crate::sink::{ObjectSink, SinkValue};

/// Zero-sized tag describing one slot of a record.
///
/// The tag is part of the field's type, so `Field<user::Uid>` and
/// `Field<user::Gid>` are unrelated types even though both hold a `u32`.
/// Declare kinds with [`field!`](crate::field) rather than by hand.
pub trait FieldKind: 'static {
	/// Scalar stored in the slot. The [`SinkValue`] bound is what makes a
	/// missing JSON adapter a compile error.
	type Value: SinkValue + Default + Clone + PartialEq + fmt::Debug + Send + Sync + 'static;

	/// Stable member key used when the record is encoded.
	const NAME: &'static str;

	/// Validity predicate over the current value. Fields are valid unless a
	/// kind says otherwise.
	fn is_valid(_value: &Self::Value) -> bool {
		true
	}
}

/// A named value slot of kind `K`.
///
/// Writes are never checked; [`Field::is_valid`] is evaluated on demand, so a
/// record may hold invalid data between two `set` calls.
pub struct Field<K: FieldKind> {
	value: K::Value,
}

impl<K: FieldKind> Field<K> {
	pub fn new(value: K::Value) -> Self {
		Self { value }
	}

	/// Member key of this field.
	pub fn name(&self) -> &'static str {
		K::NAME
	}

	pub fn get(&self) -> &K::Value {
		&self.value
	}

	/// Replaces the stored value unconditionally.
	pub fn set(&mut self, value: impl Into<K::Value>) {
		self.value = value.into();
	}

	pub fn is_valid(&self) -> bool {
		K::is_valid(&self.value)
	}

	pub fn into_inner(self) -> K::Value {
		self.value
	}

	/// Writes `(name, value)` into an open object.
	pub fn encode(&self, sink: &mut ObjectSink) {
		self.value.write_member(K::NAME, sink);
	}
}

impl<K: FieldKind> Default for Field<K> {
	fn default() -> Self {
		Self::new(K::Value::default())
	}
}

impl<K: FieldKind> Clone for Field<K> {
	fn clone(&self) -> Self {
		Self::new(self.value.clone())
	}
}

impl<K: FieldKind> PartialEq for Field<K> {
	fn eq(&self, other: &Self) -> bool {
		self.value == other.value
	}
}

impl<K: FieldKind> fmt::Debug for Field<K> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Field")
			.field("name", &K::NAME)
			.field("value", &self.value)
			.finish()
	}
}
