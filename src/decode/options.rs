/// Options recognized by the decoder.
///
/// All options default to off; decoding is then a faithful, quiet
/// reconstruction of the message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeOptions {
	/// Heuristically re-type string property values: boolean first, then
	/// integer, then float, otherwise the string is kept.
	pub parse_string_as_type: bool,
	/// Strip surrounding whitespace and literal quote characters from
	/// string property values.
	pub trim_string_property_values: bool,
	/// Emit diagnostic traces of the decode. No behavioral effect.
	pub verbose: bool,
}

impl DecodeOptions {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_are_off() {
		let options = DecodeOptions::new();
		assert!(!options.parse_string_as_type);
		assert!(!options.trim_string_property_values);
		assert!(!options.verbose);
	}
}
