//! Declaration macros for field kinds and record types.

/// Declares one or more [`FieldKind`](crate::FieldKind) tags.
///
/// Each entry names the tag type, its value type and its member key. An
/// optional `valid |value| expr` clause overrides the always-true predicate.
///
/// # Example
///
/// ```
/// use reckon_record::{Field, field};
///
/// field! {
///     /// Login name.
///     pub Name: String = "name";
///     /// Permission bits.
///     pub Mode: u32 = "mode", valid |mode| *mode > 0 && *mode <= 0o7777;
/// }
///
/// assert!(Field::<Name>::default().is_valid());
/// assert!(!Field::<Mode>::new(0).is_valid());
/// assert!(Field::<Mode>::new(0o644).is_valid());
/// ```
#[macro_export]
macro_rules! field {
	($(
		$(#[$meta:meta])*
		$vis:vis $kind:ident : $value:ty = $name:literal
		$(, valid |$arg:ident| $check:expr)?
		;
	)+) => {
		$(
			$(#[$meta])*
			#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
			$vis struct $kind;

			impl $crate::FieldKind for $kind {
				type Value = $value;

				const NAME: &'static str = $name;

				$(
					fn is_valid($arg: &Self::Value) -> bool {
						$check
					}
				)?
			}
		)+
	};
}

/// Declares a record type as an ordered list of fields.
///
/// This generates:
/// - the struct, one private [`Field`](crate::Field) per entry
/// - a [`HasField`](crate::HasField) impl per field for type-indexed access
/// - [`Record`](crate::Record) and [`RecordType`](crate::RecordType) impls
///   whose validity and encoding both walk the fields in declaration order
///
/// # Example
///
/// ```
/// use reckon_record::{Record, RecordType, field, record};
///
/// field! {
///     pub Name: String = "name";
///     pub Uid: u32 = "uid";
///     pub Gid: u32 = "gid";
/// }
///
/// record! {
///     /// An account from the system user database.
///     pub struct User as "user" {
///         name: Name,
///         uid: Uid,
///         gid: Gid,
///     }
/// }
///
/// let root = User::blank().with::<Name>("root");
/// assert_eq!(User::FIELDS, ["name", "uid", "gid"]);
/// assert_eq!(root.to_json(), r#"{"name":"root","uid":0,"gid":0}"#);
/// ```
///
/// Two entries must not share a kind; the duplicate `HasField` impl is
/// rejected by the compiler. Two kinds with the same member name are
/// rejected as well:
///
/// ```compile_fail
/// reckon_record::field! {
///     pub Label: String = "name";
///     pub Count: u32 = "name";
/// }
///
/// reckon_record::record! {
///     pub struct Twice as "twice" {
///         label: Label,
///         count: Count,
///     }
/// }
///
/// fn main() {}
/// ```
#[macro_export]
macro_rules! record {
	(
		$(#[$meta:meta])*
		$vis:vis struct $record:ident as $type_name:literal {
			$(
				$(#[$field_meta:meta])*
				$field:ident : $kind:ty
			),* $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Default, PartialEq)]
		$vis struct $record {
			$(
				$(#[$field_meta])*
				$field: $crate::Field<$kind>,
			)*
		}

		$(
			impl $crate::HasField<$kind> for $record {
				fn slot(&self) -> &$crate::Field<$kind> {
					&self.$field
				}

				fn slot_mut(&mut self) -> &mut $crate::Field<$kind> {
					&mut self.$field
				}
			}
		)*

		impl $crate::Record for $record {
			fn type_name(&self) -> &'static str {
				$type_name
			}

			fn field_names(&self) -> &'static [&'static str] {
				<Self as $crate::RecordType>::FIELDS
			}

			fn is_valid(&self) -> bool {
				true $(&& self.$field.is_valid())*
			}

			fn first_invalid(&self) -> ::core::option::Option<&'static str> {
				$(
					if !self.$field.is_valid() {
						return ::core::option::Option::Some(self.$field.name());
					}
				)*
				::core::option::Option::None
			}

			fn encode_fields(&self, sink: &mut $crate::ObjectSink) {
				let _ = &sink;
				$(self.$field.encode(sink);)*
			}
		}

		impl $crate::RecordType for $record {
			const NAME: &'static str = $type_name;

			const FIELDS: &'static [&'static str] = &[$(<$kind as $crate::FieldKind>::NAME),*];
		}

		const _: () = ::core::assert!(
			$crate::names_are_unique(<$record as $crate::RecordType>::FIELDS),
			concat!("record `", stringify!($record), "` declares two fields with the same name"),
		);
	};
}
