use clap::error::ErrorKind;
use rstest::rstest;

use super::*;

#[test]
fn single_type_name() {
	let cli = Cli::try_parse_from(["reckon", "user"]).expect("one argument parses");
	assert_eq!(cli.type_name, "user");
	assert!(!cli.verbose);
	assert_eq!(cli.default_filter(), "warn");
}

#[test]
fn verbose_flag() {
	let cli = Cli::try_parse_from(["reckon", "-v", "file"]).expect("flag and argument parse");
	assert_eq!(cli.type_name, "file");
	assert_eq!(cli.default_filter(), "debug");
}

#[rstest]
#[case::none(&["reckon"])]
#[case::two(&["reckon", "user", "file"])]
#[case::three(&["reckon", "a", "b", "c"])]
fn wrong_argument_count_is_rejected(#[case] argv: &[&str]) {
	let err = Cli::try_parse_from(argv).expect_err("argument count is checked");
	assert!(!matches!(
		err.kind(),
		ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
	));
}

#[test]
fn help_is_not_a_usage_error() {
	let err = Cli::try_parse_from(["reckon", "--help"]).expect_err("help short-circuits");
	assert_eq!(err.kind(), ErrorKind::DisplayHelp);
}
