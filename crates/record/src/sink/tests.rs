use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;

#[test]
fn empty_sink_renders_empty_object() {
	let sink = ObjectSink::new();
	assert!(sink.is_empty());
	assert_eq!(sink.render(), "{}");
}

#[test]
fn members_keep_insertion_order() {
	let mut sink = ObjectSink::new();
	"zeta".to_owned().write_member("z", &mut sink);
	1u32.write_member("a", &mut sink);
	true.write_member("m", &mut sink);

	assert_eq!(sink.keys().collect::<Vec<_>>(), ["z", "a", "m"]);
	assert_eq!(sink.render(), r#"{"z":"zeta","a":1,"m":true}"#);
}

#[test]
fn scalars_are_written_verbatim() {
	let mut sink = ObjectSink::new();
	(-3i64).write_member("signed", &mut sink);
	u64::MAX.write_member("unsigned", &mut sink);
	1.5f64.write_member("float", &mut sink);
	false.write_member("flag", &mut sink);

	assert_eq!(
		sink.into_value(),
		json!({
			"signed": -3,
			"unsigned": u64::MAX,
			"float": 1.5,
			"flag": false,
		})
	);
}

#[test]
fn strings_are_escaped_and_owned() {
	let mut sink = ObjectSink::new();
	{
		let borrowed = String::from("quote \" and \\ backslash");
		borrowed.write_member("text", &mut sink);
	}
	assert_eq!(sink.len(), 1);
	assert_eq!(sink.render(), r#"{"text":"quote \" and \\ backslash"}"#);
}
