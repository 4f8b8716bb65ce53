use super::GeoProperties;
use crate::json::{JsonArray, JsonValue};
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use std::fmt::{Debug, Display};

/// A dynamically-typed property value.
///
/// Geobuf properties carry their type on the wire (string, double,
/// positive/negative integer, boolean, or an embedded JSON string), so the
/// decoder needs a tagged union rather than an open "any" type. `Object`
/// and `Array` only appear when an embedded JSON string parses successfully.
#[derive(Clone, PartialEq)]
pub enum GeoValue {
	Array(Vec<GeoValue>),
	Bool(bool),
	Double(f64),
	Int(i64),
	Null,
	Object(GeoProperties),
	String(String),
	UInt(u64),
}

impl Debug for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Array(v) => f.debug_tuple("Array").field(v).finish(),
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::Null => f.debug_tuple("Null").finish(),
			Self::Object(v) => f.debug_tuple("Object").field(v).finish(),
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
		}
	}
}

impl Display for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.to_json().stringify())
	}
}

impl GeoValue {
	/// Heuristically re-type a string: boolean first, then integer, then
	/// float, otherwise the string is kept as-is.
	pub fn parse_str(value: &str) -> Self {
		lazy_static! {
			static ref REG_DOUBLE: Regex = RegexBuilder::new(r"^-?\d*\.\d+$").build().unwrap();
			static ref REG_INT: Regex = RegexBuilder::new(r"^-?\d+$").build().unwrap();
		}

		match value {
			"" => GeoValue::String(String::new()),
			"true" => GeoValue::Bool(true),
			"false" => GeoValue::Bool(false),
			_ => {
				if REG_INT.is_match(value) {
					value
						.parse::<i64>()
						.map_or_else(|_| GeoValue::String(value.to_string()), GeoValue::Int)
				} else if REG_DOUBLE.is_match(value) {
					value
						.parse::<f64>()
						.map_or_else(|_| GeoValue::String(value.to_string()), GeoValue::Double)
				} else {
					GeoValue::String(value.to_string())
				}
			}
		}
	}

	/// Convert into the crate's JSON model, with total pattern matching.
	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		match self {
			GeoValue::Array(items) => JsonValue::Array(JsonArray(items.iter().map(GeoValue::to_json).collect())),
			GeoValue::Bool(v) => JsonValue::Boolean(*v),
			GeoValue::Double(v) => JsonValue::Number(*v),
			GeoValue::Int(v) => JsonValue::Number(*v as f64),
			GeoValue::Null => JsonValue::Null,
			GeoValue::Object(properties) => JsonValue::Object(properties.to_json()),
			GeoValue::String(v) => JsonValue::String(v.clone()),
			GeoValue::UInt(v) => JsonValue::Number(*v as f64),
		}
	}

	/// Convert a parsed JSON tree into a `GeoValue` tree.
	///
	/// JSON numbers map to `Int` when they are integral and in range,
	/// otherwise to `Double`.
	#[must_use]
	pub fn from_json(json: JsonValue) -> GeoValue {
		match json {
			JsonValue::Array(array) => GeoValue::Array(array.0.into_iter().map(GeoValue::from_json).collect()),
			JsonValue::Boolean(v) => GeoValue::Bool(v),
			JsonValue::Null => GeoValue::Null,
			JsonValue::Number(v) => {
				if v.fract() == 0.0 && v.abs() < 9e15 {
					GeoValue::Int(v as i64)
				} else {
					GeoValue::Double(v)
				}
			}
			JsonValue::Object(object) => GeoValue::Object(
				object
					.0
					.into_iter()
					.map(|(key, value)| (key, GeoValue::from_json(value)))
					.collect(),
			),
			JsonValue::String(v) => GeoValue::String(v),
		}
	}
}

impl From<&str> for GeoValue {
	fn from(value: &str) -> Self {
		GeoValue::String(value.to_string())
	}
}

impl From<String> for GeoValue {
	fn from(value: String) -> Self {
		GeoValue::String(value)
	}
}

impl From<i64> for GeoValue {
	fn from(value: i64) -> Self {
		GeoValue::Int(value)
	}
}

impl From<u64> for GeoValue {
	fn from(value: u64) -> Self {
		GeoValue::UInt(value)
	}
}

impl From<f64> for GeoValue {
	fn from(value: f64) -> Self {
		GeoValue::Double(value)
	}
}

impl From<bool> for GeoValue {
	fn from(value: bool) -> Self {
		GeoValue::Bool(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("42", GeoValue::Int(42))]
	#[case("-7", GeoValue::Int(-7))]
	#[case("3.14", GeoValue::Double(3.14))]
	#[case("-0.5", GeoValue::Double(-0.5))]
	#[case("true", GeoValue::Bool(true))]
	#[case("false", GeoValue::Bool(false))]
	#[case("hello", GeoValue::String("hello".to_string()))]
	#[case("", GeoValue::String(String::new()))]
	#[case("42abc", GeoValue::String("42abc".to_string()))]
	fn test_parse_str(#[case] input: &str, #[case] expected: GeoValue) {
		assert_eq!(GeoValue::parse_str(input), expected);
	}

	#[test]
	fn test_to_json() {
		assert_eq!(GeoValue::Int(-3).to_json(), JsonValue::Number(-3.0));
		assert_eq!(GeoValue::UInt(3).to_json(), JsonValue::Number(3.0));
		assert_eq!(GeoValue::Bool(true).to_json(), JsonValue::Boolean(true));
		assert_eq!(GeoValue::Null.to_json(), JsonValue::Null);
		assert_eq!(
			GeoValue::Array(vec![GeoValue::Int(1), GeoValue::from("x")]).to_json().stringify(),
			r#"[1,"x"]"#
		);
	}

	#[test]
	fn test_from_json_round_trip() {
		let json = JsonValue::parse_str(r#"{"a":[1,2.5,null],"b":{"c":true}}"#).unwrap();
		let value = GeoValue::from_json(json);
		assert_eq!(value.to_json().stringify(), r#"{"a":[1,2.5,null],"b":{"c":true}}"#);
	}

	#[test]
	fn test_from_json_number_typing() {
		assert_eq!(GeoValue::from_json(JsonValue::Number(7.0)), GeoValue::Int(7));
		assert_eq!(GeoValue::from_json(JsonValue::Number(7.5)), GeoValue::Double(7.5));
	}

	#[test]
	fn test_display() {
		assert_eq!(GeoValue::from("a").to_string(), "\"a\"");
		assert_eq!(GeoValue::Int(5).to_string(), "5");
	}
}
