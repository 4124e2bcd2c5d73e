//! Built-in record types.
//!
//! - [`user::User`]: accounts from the system user database
//! - [`file::File`]: directory entries with their permission bits
//!
//! Both types and their providers register themselves at link time; depend
//! on this crate and call
//! [`TypeRegistry::from_inventory`](reckon_registry::TypeRegistry::from_inventory).

pub mod file;
pub mod user;

pub use file::File;
pub use user::User;
