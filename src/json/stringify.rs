use super::JsonValue;

/// Serialize compactly, without any whitespace.
pub fn stringify(json: &JsonValue) -> String {
	match json {
		JsonValue::Array(array) => array.stringify(),
		JsonValue::Boolean(v) => v.to_string(),
		JsonValue::Null => "null".to_string(),
		JsonValue::Number(v) => v.to_string(),
		JsonValue::Object(object) => object.stringify(),
		JsonValue::String(v) => format!("\"{}\"", escape_json_string(v)),
	}
}

/// Serialize on one line with spaces after separators.
pub fn stringify_pretty_single_line(json: &JsonValue) -> String {
	match json {
		JsonValue::Array(array) => array.stringify_pretty_single_line(),
		JsonValue::Object(object) => object.stringify_pretty_single_line(),
		_ => stringify(json),
	}
}

/// Containers render on one line while they fit within `max_width`
/// (counting the `indention` already consumed on the current line),
/// otherwise one entry per line.
pub fn stringify_pretty_multi_line(json: &JsonValue, max_width: usize, depth: usize, indention: usize) -> String {
	let single_line = stringify_pretty_single_line(json);
	if single_line.len() + indention <= max_width {
		return single_line;
	}
	match json {
		JsonValue::Array(array) => array.stringify_pretty_multi_line(max_width, depth),
		JsonValue::Object(object) => object.stringify_pretty_multi_line(max_width, depth),
		_ => single_line,
	}
}

pub fn escape_json_string(input: &str) -> String {
	let mut result = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'"' => result.push_str("\\\""),
			'\\' => result.push_str("\\\\"),
			'\u{08}' => result.push_str("\\b"),
			'\u{0c}' => result.push_str("\\f"),
			'\n' => result.push_str("\\n"),
			'\r' => result.push_str("\\r"),
			'\t' => result.push_str("\\t"),
			c if c.is_control() => result.push_str(&format!("\\u{:04x}", c as u32)),
			c => result.push(c),
		}
	}
	result
}

#[cfg(test)]
mod tests {
	use super::super::parse_json_str;
	use super::*;
	use anyhow::Result;

	#[test]
	fn test_stringify_primitives() -> Result<()> {
		assert_eq!(stringify(&parse_json_str("\"Hello, World!\"")?), "\"Hello, World!\"");
		assert_eq!(stringify(&parse_json_str("42")?), "42");
		assert_eq!(stringify(&parse_json_str("true")?), "true");
		assert_eq!(stringify(&parse_json_str("null")?), "null");
		Ok(())
	}

	#[test]
	fn test_stringify_special_characters() -> Result<()> {
		let json = parse_json_str("\"Line1\\nLine2\\rTab\\tBackslash\\\\\"")?;
		assert_eq!(stringify(&json), "\"Line1\\nLine2\\rTab\\tBackslash\\\\\"");

		let json = parse_json_str("\"Hello \\\"World\\\"\"")?;
		assert_eq!(stringify(&json), "\"Hello \\\"World\\\"\"");
		Ok(())
	}

	#[test]
	fn test_stringify_nested() -> Result<()> {
		let json = parse_json_str("{\"nested\": {\"array\": [\"value\", {\"inner_key\": 3.14}], \"boolean\": true}}")?;
		assert_eq!(
			stringify(&json),
			"{\"nested\":{\"array\":[\"value\",{\"inner_key\":3.14}],\"boolean\":true}}"
		);
		Ok(())
	}

	#[test]
	fn test_escape_control_characters() {
		assert_eq!(escape_json_string("Control:\x01\x02"), "Control:\\u0001\\u0002");
	}

	#[test]
	fn test_pretty_multi_line_wraps() -> Result<()> {
		let json = parse_json_str("[\"alpha\",\"beta\"]")?;
		assert_eq!(
			stringify_pretty_multi_line(&json, 5, 0, 0),
			"[\n  \"alpha\",\n  \"beta\"\n]"
		);
		assert_eq!(stringify_pretty_multi_line(&json, 80, 0, 0), "[ \"alpha\", \"beta\" ]");
		Ok(())
	}
}
