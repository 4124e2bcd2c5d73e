use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use pretty_assertions::assert_eq;

use super::*;
use crate::test_fixtures::{Name, User, json_lines, user};

fn fixed(name: &'static str, users: Vec<User>) -> impl Provider<User> {
	from_fn(name, move || Ok(users.clone()))
}

#[test]
fn concatenates_in_registration_order() {
	let mut registry = ProviderRegistry::<User>::new();
	registry.register(fixed("p1", vec![user("a", 1), user("b", 2)]));
	registry.register(fixed("p2", vec![user("c", 3)]));

	let names: Vec<String> = registry
		.records()
		.iter()
		.map(|u| u.get::<Name>().clone())
		.collect();
	assert_eq!(names, ["a", "b", "c"]);
	assert_eq!(registry.names().collect::<Vec<_>>(), ["p1", "p2"]);
	assert_eq!(registry.len(), 2);
}

#[test]
fn empty_registry_lists_nothing() {
	let registry = ProviderRegistry::<User>::default();
	assert!(registry.is_empty());
	assert!(registry.list_instances().is_empty());
}

#[test]
fn failing_provider_is_skipped() {
	let mut registry = ProviderRegistry::<User>::new();
	registry.register(fixed("before", vec![user("a", 1)]));
	registry.register(from_fn("broken", || -> Result<Vec<User>, ProviderError> {
		Err(ProviderError::Unsupported("broken provider"))
	}));
	registry.register(fixed("after", vec![user("z", 26)]));

	assert_eq!(
		json_lines(&registry.list_instances()),
		[
			r#"{"name":"a","uid":1,"gid":1}"#,
			r#"{"name":"z","uid":26,"gid":26}"#,
		]
	);
}

#[test]
fn every_call_rescans_the_source() {
	let generation = Arc::new(AtomicU32::new(0));
	let source = Arc::clone(&generation);

	let mut registry = ProviderRegistry::<User>::new();
	registry.register(from_fn("counter", move || {
		let n = source.fetch_add(1, Ordering::SeqCst);
		Ok((0..=n).map(|uid| user("u", uid)).collect())
	}));

	assert_eq!(registry.records().len(), 1);
	assert_eq!(registry.records().len(), 2);
	assert_eq!(registry.list_instances().len(), 3);
	assert_eq!(generation.load(Ordering::SeqCst), 3);
}

#[test]
fn instances_keep_their_concrete_type() {
	let mut registry = ProviderRegistry::<User>::new();
	registry.register(fixed("p", vec![user("root", 0)]));

	let instances = registry.list_instances();
	let root = instances[0].downcast_ref::<User>().expect("user record");
	assert_eq!(root.get::<Name>(), "root");
}
