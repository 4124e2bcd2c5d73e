use clap::Parser;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "RECKON_LOG";

/// Printed when the positional arguments do not parse.
pub const USAGE_ERROR: &str = "incorrect number of arguments";

#[derive(Parser, Debug)]
#[command(name = "reckon")]
#[command(about = "List every instance of a record type as JSON")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Record type to list (e.g. user, file)
	#[arg(value_name = "TYPE")]
	pub type_name: String,

	/// Log registry assembly and provider scans to stderr
	#[arg(short, long)]
	pub verbose: bool,
}

impl Cli {
	/// Filter used when `RECKON_LOG` is unset.
	pub fn default_filter(&self) -> &'static str {
		if self.verbose { "debug" } else { "warn" }
	}
}

#[cfg(test)]
mod tests;
