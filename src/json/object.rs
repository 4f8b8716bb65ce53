use super::{JsonValue, escape_json_string, stringify, stringify_pretty_multi_line, stringify_pretty_single_line};
use std::{
	collections::BTreeMap,
	fmt::{Debug, Display},
};

/// A JSON object backed by a `BTreeMap<String, JsonValue>`.
///
/// Keys serialize in sorted order, which keeps document output deterministic.
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(pub BTreeMap<String, JsonValue>);

impl JsonObject {
	#[must_use]
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Set the specified key to the given value, converting it into a `JsonValue`.
	pub fn set<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.insert(key.to_owned(), JsonValue::from(value));
	}

	/// Serialize this `JsonObject` into a compact JSON string without extra whitespace.
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self
			.0
			.iter()
			.map(|(key, value)| format!("\"{}\":{}", escape_json_string(key), stringify(value)))
			.collect::<Vec<_>>();
		format!("{{{}}}", items.join(","))
	}

	/// Serialize this `JsonObject` into a single-line, pretty-printed JSON string with spaces.
	#[must_use]
	pub fn stringify_pretty_single_line(&self) -> String {
		let items = self
			.0
			.iter()
			.map(|(key, value)| {
				format!(
					"\"{}\": {}",
					escape_json_string(key),
					stringify_pretty_single_line(value)
				)
			})
			.collect::<Vec<_>>();
		format!("{{ {} }}", items.join(", "))
	}

	/// Serialize this `JsonObject` into a multi-line, pretty-printed JSON string with indentation.
	///
	/// `max_width` controls when to wrap lines, and `depth` sets the base indentation level.
	#[must_use]
	pub fn stringify_pretty_multi_line(&self, max_width: usize, depth: usize) -> String {
		let indent = "  ".repeat(depth);
		let items = self
			.0
			.iter()
			.map(|(key, value)| {
				let key_string = format!("{}  \"{}\": ", indent, escape_json_string(key));
				format!(
					"{key_string}{}",
					stringify_pretty_multi_line(value, max_width, depth + 1, key_string.len())
				)
			})
			.collect::<Vec<_>>();
		format!("{{\n{}\n{}}}", items.join(",\n"), indent)
	}

	/// Return an iterator over key-value pairs in sorted key order.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
		self.0.iter()
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl Display for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.stringify())
	}
}

impl<T> From<Vec<(&str, T)>> for JsonObject
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonObject(
			input
				.into_iter()
				.map(|(key, value)| (key.to_string(), JsonValue::from(value)))
				.collect(),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_set_and_get() {
		let mut obj = JsonObject::new();
		obj.set("key", JsonValue::from("value"));
		assert_eq!(obj.get("key"), Some(&JsonValue::from("value")));
		assert!(obj.contains_key("key"));
		assert!(!obj.contains_key("missing"));
	}

	#[test]
	fn test_stringify() {
		let obj = JsonObject::from(vec![
			("key1", JsonValue::from("value1")),
			("key2", JsonValue::from(42.0)),
			("key3", JsonValue::from(vec![1.0, 2.0])),
		]);
		assert_eq!(obj.stringify(), r#"{"key1":"value1","key2":42,"key3":[1,2]}"#);
	}

	#[test]
	fn test_stringify_pretty_single_line() {
		let obj = JsonObject::from(vec![("a", JsonValue::from(1.0)), ("b", JsonValue::from(2.0))]);
		assert_eq!(obj.stringify_pretty_single_line(), "{ \"a\": 1, \"b\": 2 }");
	}

	#[test]
	fn test_stringify_pretty_multi_line() {
		let obj = JsonObject::from(vec![("a", JsonValue::from(1.0)), ("b", JsonValue::from(2.0))]);
		assert_eq!(obj.stringify_pretty_multi_line(0, 0), "{\n  \"a\": 1,\n  \"b\": 2\n}");
	}

	#[test]
	fn test_keys_are_sorted() {
		let obj = JsonObject::from(vec![("z", JsonValue::from(1.0)), ("a", JsonValue::from(2.0))]);
		assert_eq!(obj.stringify(), r#"{"a":2,"z":1}"#);
	}
}
