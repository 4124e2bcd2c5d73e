use serde_json::{Map, Value};

/// An open JSON object that record fields are encoded into.
///
/// Members keep insertion order, so a record's encoding follows its field
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSink {
	members: Map<String, Value>,
}

impl ObjectSink {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a member. Keys are unique within a record.
	pub fn insert(&mut self, key: &'static str, value: Value) {
		debug_assert!(
			!self.members.contains_key(key),
			"member {key:?} written twice into one object"
		);
		self.members.insert(key.to_owned(), value);
	}

	pub fn len(&self) -> usize {
		self.members.len()
	}

	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	/// Member keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.members.keys().map(String::as_str)
	}

	pub fn into_value(self) -> Value {
		Value::Object(self.members)
	}

	/// Renders the object as compact JSON.
	pub fn render(self) -> String {
		self.into_value().to_string()
	}
}

/// Per-scalar adapter writing a field value into an [`ObjectSink`].
///
/// Every [`FieldKind::Value`](crate::FieldKind::Value) must implement this;
/// adding a new scalar kind means adding an impl here.
pub trait SinkValue {
	fn write_member(&self, key: &'static str, sink: &mut ObjectSink);
}

macro_rules! verbatim_sink_value {
	($($ty:ty),* $(,)?) => {
		$(
			impl SinkValue for $ty {
				fn write_member(&self, key: &'static str, sink: &mut ObjectSink) {
					sink.insert(key, Value::from(*self));
				}
			}
		)*
	};
}

verbatim_sink_value!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

// Strings are copied into storage owned by the sink.
impl SinkValue for String {
	fn write_member(&self, key: &'static str, sink: &mut ObjectSink) {
		sink.insert(key, Value::String(self.clone()));
	}
}

#[cfg(test)]
mod tests;
