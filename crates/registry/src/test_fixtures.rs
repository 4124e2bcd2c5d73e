use reckon_record::{Instance, RecordType};

reckon_record::field! {
	pub Name: String = "name";
	pub Uid: u32 = "uid";
	pub Gid: u32 = "gid";
	pub Label: String = "label";
}

reckon_record::record! {
	pub struct User as "user" {
		name: Name,
		uid: Uid,
		gid: Gid,
	}
}

reckon_record::record! {
	pub struct Tag as "tag" {
		label: Label,
	}
}

pub fn user(name: &str, uid: u32) -> User {
	User::blank()
		.with::<Name>(name)
		.with::<Uid>(uid)
		.with::<Gid>(uid)
}

pub fn tag(label: &str) -> Tag {
	Tag::blank().with::<Label>(label)
}

pub fn json_lines(instances: &[Instance]) -> Vec<String> {
	instances.iter().map(|instance| instance.to_json()).collect()
}
