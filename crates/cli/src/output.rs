use std::io::{self, Write};

use reckon_registry::TypeRegistry;
use tracing::warn;

/// Writes every instance of `type_name` as one JSON object followed by a
/// blank line. Returns the number of instances written.
pub fn print_instances(
	registry: &TypeRegistry,
	type_name: &str,
	out: &mut impl Write,
) -> io::Result<usize> {
	if !registry.contains(type_name) {
		warn!(
			type_name,
			known = ?registry.type_names().collect::<Vec<_>>(),
			"unknown record type"
		);
	}

	let instances = registry.list_instances(type_name);
	for instance in &instances {
		writeln!(out, "{}", instance.to_json())?;
		writeln!(out)?;
	}
	out.flush()?;
	Ok(instances.len())
}
