use super::{JsonValue, stringify, stringify_pretty_multi_line, stringify_pretty_single_line};
use std::fmt::Debug;

/// A JSON array, backed by a `Vec<JsonValue>`.
#[derive(Clone, Default, PartialEq)]
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	/// Serialize the JSON array to a compact string without extra whitespace.
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self.0.iter().map(stringify).collect::<Vec<_>>();
		format!("[{}]", items.join(","))
	}

	/// Serialize the array to a single-line, pretty-printed string, e.g. `[ 1, 2, 3 ]`.
	#[must_use]
	pub fn stringify_pretty_single_line(&self) -> String {
		let items = self.0.iter().map(stringify_pretty_single_line).collect::<Vec<_>>();
		format!("[ {} ]", items.join(", "))
	}

	/// Serialize the array to a multi-line, pretty-printed string.
	///
	/// `max_width` controls when to break lines, and `depth` sets the indentation level.
	#[must_use]
	pub fn stringify_pretty_multi_line(&self, max_width: usize, depth: usize) -> String {
		let indent = "  ".repeat(depth);
		let items = self
			.0
			.iter()
			.map(|value| {
				format!(
					"{indent}  {}",
					stringify_pretty_multi_line(value, max_width, depth + 1, depth * 2 + 2)
				)
			})
			.collect::<Vec<_>>();
		format!("[\n{}\n{}]", items.join(",\n"), indent)
	}

	pub fn push(&mut self, value: JsonValue) {
		self.0.push(value);
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}
}

impl Debug for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonArray(Vec::from_iter(input.into_iter().map(JsonValue::from)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_stringify() {
		let array = JsonArray(vec![
			JsonValue::from("hello"),
			JsonValue::from(42.0),
			JsonValue::from(true),
		]);
		assert_eq!(array.stringify(), r#"["hello",42,true]"#);
		assert_eq!(JsonArray::default().stringify(), "[]");
	}

	#[test]
	fn test_stringify_pretty_single_line() {
		let array = JsonArray(vec![JsonValue::from("hello"), JsonValue::from(42.0)]);
		assert_eq!(array.stringify_pretty_single_line(), "[ \"hello\", 42 ]");
	}

	#[test]
	fn test_stringify_pretty_multi_line() {
		let array = JsonArray(vec![JsonValue::from("a"), JsonValue::from("b")]);
		assert_eq!(array.stringify_pretty_multi_line(0, 0), "[\n  \"a\",\n  \"b\"\n]");
	}

	#[test]
	fn test_push_and_len() {
		let mut array = JsonArray::default();
		assert!(array.is_empty());
		array.push(JsonValue::Null);
		assert_eq!(array.len(), 1);
	}
}
