use super::{JsonArray, JsonObject, JsonValue};
use anyhow::{Context, Result, bail};

/// Parse a JSON string into a [`JsonValue`].
///
/// Errors carry the byte position of the offending character.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut parser = Parser::new(json);
	let value = parser.parse_value()?;
	parser.skip_whitespace();
	if let Some(c) = parser.peek() {
		bail!("unexpected trailing character '{}' at position {}", c as char, parser.pos);
	}
	Ok(value)
}

struct Parser<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Parser<'a> {
	fn new(json: &'a str) -> Self {
		Parser {
			bytes: json.as_bytes(),
			pos: 0,
		}
	}

	fn peek(&self) -> Option<u8> {
		self.bytes.get(self.pos).copied()
	}

	fn next(&mut self) -> Result<u8> {
		let byte = self
			.peek()
			.with_context(|| format!("unexpected end of JSON at position {}", self.pos))?;
		self.pos += 1;
		Ok(byte)
	}

	fn skip_whitespace(&mut self) {
		while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
			self.pos += 1;
		}
	}

	fn expect(&mut self, expected: u8) -> Result<()> {
		let byte = self.next()?;
		if byte != expected {
			bail!(
				"expected '{}' but found '{}' at position {}",
				expected as char,
				byte as char,
				self.pos - 1
			);
		}
		Ok(())
	}

	fn parse_value(&mut self) -> Result<JsonValue> {
		self.skip_whitespace();
		match self
			.peek()
			.with_context(|| format!("unexpected end of JSON at position {}", self.pos))?
		{
			b'{' => self.parse_object().map(JsonValue::Object),
			b'[' => self.parse_array().map(JsonValue::Array),
			b'"' => self.parse_string().map(JsonValue::String),
			b't' => self.parse_tag("true").map(|()| JsonValue::Boolean(true)),
			b'f' => self.parse_tag("false").map(|()| JsonValue::Boolean(false)),
			b'n' => self.parse_tag("null").map(|()| JsonValue::Null),
			b'-' | b'0'..=b'9' => self.parse_number().map(JsonValue::Number),
			c => bail!("unexpected character '{}' at position {}", c as char, self.pos),
		}
	}

	fn parse_object(&mut self) -> Result<JsonObject> {
		self.expect(b'{')?;
		let mut object = JsonObject::new();
		self.skip_whitespace();
		if self.peek() == Some(b'}') {
			self.pos += 1;
			return Ok(object);
		}
		loop {
			self.skip_whitespace();
			let key = self
				.parse_string()
				.with_context(|| format!("parsing object key at position {}", self.pos))?;
			self.skip_whitespace();
			self.expect(b':')?;
			let value = self.parse_value()?;
			object.0.insert(key, value);
			self.skip_whitespace();
			match self.next()? {
				b',' => {}
				b'}' => return Ok(object),
				c => bail!(
					"parsing object, expected ',' or '}}' but found '{}' at position {}",
					c as char,
					self.pos - 1
				),
			}
		}
	}

	fn parse_array(&mut self) -> Result<JsonArray> {
		self.expect(b'[')?;
		let mut array = JsonArray::default();
		self.skip_whitespace();
		if self.peek() == Some(b']') {
			self.pos += 1;
			return Ok(array);
		}
		loop {
			array.push(self.parse_value()?);
			self.skip_whitespace();
			match self.next()? {
				b',' => {}
				b']' => return Ok(array),
				c => bail!(
					"parsing array, expected ',' or ']' but found '{}' at position {}",
					c as char,
					self.pos - 1
				),
			}
		}
	}

	fn parse_string(&mut self) -> Result<String> {
		self.expect(b'"')?;
		let mut bytes: Vec<u8> = Vec::new();
		loop {
			match self.next()? {
				b'"' => break,
				b'\\' => match self.next()? {
					b'"' => bytes.push(b'"'),
					b'\\' => bytes.push(b'\\'),
					b'/' => bytes.push(b'/'),
					b'b' => bytes.push(0x08),
					b'f' => bytes.push(0x0c),
					b'n' => bytes.push(b'\n'),
					b'r' => bytes.push(b'\r'),
					b't' => bytes.push(b'\t'),
					b'u' => {
						let code = self.parse_hex4()?;
						let c = char::from_u32(code)
							.with_context(|| format!("invalid unicode escape at position {}", self.pos))?;
						bytes.extend_from_slice(c.to_string().as_bytes());
					}
					c => bail!("invalid escape character '{}' at position {}", c as char, self.pos - 1),
				},
				c => bytes.push(c),
			}
		}
		String::from_utf8(bytes).context("string is not valid UTF-8")
	}

	fn parse_hex4(&mut self) -> Result<u32> {
		let mut code = 0u32;
		for _ in 0..4 {
			let byte = self.next()?;
			let digit = (byte as char)
				.to_digit(16)
				.with_context(|| format!("invalid hex digit '{}' at position {}", byte as char, self.pos - 1))?;
			code = code * 16 + digit;
		}
		Ok(code)
	}

	fn parse_number(&mut self) -> Result<f64> {
		let start = self.pos;
		while matches!(
			self.peek(),
			Some(b'-' | b'+' | b'.' | b'e' | b'E' | b'0'..=b'9')
		) {
			self.pos += 1;
		}
		let text = std::str::from_utf8(&self.bytes[start..self.pos])?;
		text
			.parse::<f64>()
			.with_context(|| format!("invalid number '{text}' at position {start}"))
	}

	fn parse_tag(&mut self, tag: &str) -> Result<()> {
		for expected in tag.bytes() {
			let byte = self.next()?;
			if byte != expected {
				bail!(
					"unexpected character while parsing tag '{tag}' at position {}",
					self.pos - 1
				);
			}
		}
		Ok(())
	}
}
