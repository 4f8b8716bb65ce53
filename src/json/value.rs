use super::{JsonArray, JsonObject, parse_json_str, stringify};
use anyhow::{Result, bail};

/// Represents any JSON data: arrays, objects, numbers, strings, booleans, and null.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
	Array(JsonArray),
	Boolean(bool),
	Null,
	Number(f64),
	Object(JsonObject),
	String(String),
}

impl JsonValue {
	/// Parse a JSON string into a `JsonValue`.
	pub fn parse_str(json: &str) -> Result<JsonValue> {
		parse_json_str(json)
	}

	/// Return the JSON type as a lowercase string (`"array"`, `"object"`, etc.).
	#[must_use]
	pub fn type_as_str(&self) -> &str {
		use JsonValue::*;
		match self {
			Array(_) => "array",
			Boolean(_) => "boolean",
			Null => "null",
			Number(_) => "number",
			Object(_) => "object",
			String(_) => "string",
		}
	}

	/// Serialize to a compact JSON string without unnecessary whitespace.
	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(self)
	}

	pub fn as_object(&self) -> Result<&JsonObject> {
		if let JsonValue::Object(object) = self {
			Ok(object)
		} else {
			bail!("expected a JSON object, found a {}", self.type_as_str())
		}
	}

	pub fn as_str(&self) -> Result<&str> {
		match self {
			JsonValue::String(text) => Ok(text),
			_ => bail!("expected a string, found a {}", self.type_as_str()),
		}
	}

	pub fn as_number(&self) -> Result<f64> {
		if let JsonValue::Number(val) = self {
			Ok(*val)
		} else {
			bail!("expected a number, found a {}", self.type_as_str())
		}
	}
}

impl From<&str> for JsonValue {
	fn from(input: &str) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<&String> for JsonValue {
	fn from(input: &String) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<String> for JsonValue {
	fn from(input: String) -> Self {
		JsonValue::String(input)
	}
}

impl From<bool> for JsonValue {
	fn from(input: bool) -> Self {
		JsonValue::Boolean(input)
	}
}

impl From<f64> for JsonValue {
	fn from(input: f64) -> Self {
		JsonValue::Number(input)
	}
}

impl From<i64> for JsonValue {
	fn from(input: i64) -> Self {
		JsonValue::Number(input as f64)
	}
}

impl From<u64> for JsonValue {
	fn from(input: u64) -> Self {
		JsonValue::Number(input as f64)
	}
}

impl From<i32> for JsonValue {
	fn from(input: i32) -> Self {
		JsonValue::Number(f64::from(input))
	}
}

impl From<JsonArray> for JsonValue {
	fn from(input: JsonArray) -> Self {
		JsonValue::Array(input)
	}
}

impl From<JsonObject> for JsonValue {
	fn from(input: JsonObject) -> Self {
		JsonValue::Object(input)
	}
}

impl<T> From<Vec<T>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonValue::Array(JsonArray::from(input))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_primitives() {
		assert_eq!(JsonValue::from("hello"), JsonValue::String("hello".to_string()));
		assert_eq!(JsonValue::from(true), JsonValue::Boolean(true));
		assert_eq!(JsonValue::from(23.42), JsonValue::Number(23.42));
		assert_eq!(JsonValue::from(42i64), JsonValue::Number(42.0));
	}

	#[test]
	fn test_from_vec() {
		let result = JsonValue::from(vec!["a", "b"]);
		assert_eq!(
			result,
			JsonValue::Array(JsonArray(vec![JsonValue::from("a"), JsonValue::from("b")]))
		);
	}

	#[test]
	fn test_type_as_str() {
		assert_eq!(JsonValue::String("value".to_string()).type_as_str(), "string");
		assert_eq!(JsonValue::Number(42.0).type_as_str(), "number");
		assert_eq!(JsonValue::Boolean(true).type_as_str(), "boolean");
		assert_eq!(JsonValue::Null.type_as_str(), "null");
		assert_eq!(JsonValue::Array(JsonArray(vec![])).type_as_str(), "array");
		assert_eq!(JsonValue::Object(JsonObject::default()).type_as_str(), "object");
	}

	#[test]
	fn test_accessors() {
		assert_eq!(JsonValue::Number(42.0).as_number().unwrap(), 42.0);
		assert!(JsonValue::Null.as_number().is_err());
		assert_eq!(JsonValue::from("x").as_str().unwrap(), "x");
		assert!(JsonValue::Number(1.0).as_str().is_err());
		assert!(JsonValue::Object(JsonObject::default()).as_object().is_ok());
		assert!(JsonValue::Null.as_object().is_err());
	}

	#[test]
	fn test_parse_str() {
		let parsed = JsonValue::parse_str(r#"{"key":"value"}"#).unwrap();
		assert_eq!(
			parsed,
			JsonValue::Object(JsonObject::from(vec![("key", JsonValue::from("value"))]))
		);
		assert!(JsonValue::parse_str(r#"{"key":}"#).is_err());
	}
}
