//! Typed record composition.
//!
//! A record type is an ordered list of [`Field`]s declared once with
//! [`record!`]. Each field is identified by a zero-sized [`FieldKind`] tag
//! declared with [`field!`], so two fields holding the same value type are
//! still distinct types and can be addressed individually:
//!
//! ```
//! use reckon_record::{Record, RecordType};
//!
//! reckon_record::field! {
//!     pub Name: String = "name";
//!     pub Mode: u32 = "mode", valid |mode| *mode > 0 && *mode <= 0o7777;
//! }
//!
//! reckon_record::record! {
//!     pub struct File as "file" {
//!         name: Name,
//!         mode: Mode,
//!     }
//! }
//!
//! let file = File::default().with::<Name>("Cargo.toml").with::<Mode>(0o644u32);
//! assert!(file.is_valid());
//! assert_eq!(file.to_json(), r#"{"name":"Cargo.toml","mode":420}"#);
//! ```
//!
//! The declaration order inside `record!` is the single source of truth for
//! the struct layout, the order validity predicates run in, and the order of
//! members in the encoded JSON object.

/// Named, typed value slots.
pub mod field;
mod macros;
/// The record traits implemented by [`record!`].
pub mod record;
/// JSON object sink and per-scalar adapters.
pub mod sink;

pub use field::{Field, FieldKind};
pub use record::{HasField, Instance, Record, RecordType};
#[doc(hidden)]
pub use record::names_are_unique;
pub use sink::{ObjectSink, SinkValue};
