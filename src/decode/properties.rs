//! Resolves key/value index pairs into typed property maps.
//!
//! Every level of a Geobuf message (collection, feature, geometry) carries
//! its properties as a flat `[key_index, value_index, …]` array pointing
//! into the shared key table and the level's own value table. A pair whose
//! index falls outside either table is skipped silently; a trailing odd
//! index is ignored by the pairwise walk.

use super::options::DecodeOptions;
use crate::geo::{GeoProperties, GeoValue};
use crate::json::parse_json_str;
use crate::message::{Value, ValueType};
use log::{trace, warn};

/// Map index pairs to a property map.
pub(super) fn decode_properties(
	pairs: &[u32],
	keys: &[String],
	values: &[Value],
	options: &DecodeOptions,
) -> GeoProperties {
	let mut properties = GeoProperties::new();
	for pair in pairs.chunks_exact(2) {
		let (key_index, value_index) = (pair[0] as usize, pair[1] as usize);
		let (Some(key), Some(value)) = (keys.get(key_index), values.get(value_index)) else {
			trace!("property pair ({key_index}, {value_index}) points outside the tables, skipping");
			continue;
		};
		properties.insert(key.clone(), decode_value(value, options));
	}
	properties
}

/// Convert one wire value to a [`GeoValue`], applying the string
/// post-processing options where the value is a string.
pub(super) fn decode_value(value: &Value, options: &DecodeOptions) -> GeoValue {
	let Some(value_type) = &value.value_type else {
		return GeoValue::Null;
	};

	match value_type {
		ValueType::StringValue(text) => decode_string(text, options),
		ValueType::DoubleValue(v) => GeoValue::Double(*v),
		ValueType::PosIntValue(v) => GeoValue::UInt(*v),
		ValueType::NegIntValue(v) => GeoValue::Int(-(*v as i64)),
		ValueType::BoolValue(v) => GeoValue::Bool(*v),
		ValueType::JsonValue(text) => decode_json_string(text),
	}
}

/// Trim first, then infer, so that `" 42 "` can still become an integer.
fn decode_string(text: &str, options: &DecodeOptions) -> GeoValue {
	let text = if options.trim_string_property_values {
		text.trim().trim_matches(|c| c == '"' || c == '\'')
	} else {
		text
	};
	if options.parse_string_as_type {
		GeoValue::parse_str(text)
	} else {
		GeoValue::String(text.to_string())
	}
}

/// An embedded JSON document. Unparseable text falls back to the raw
/// string; this conversion never fails.
fn decode_json_string(text: &str) -> GeoValue {
	match parse_json_str(text) {
		Ok(json) => GeoValue::from_json(json),
		Err(error) => {
			warn!("embedded JSON property value is not valid JSON ({error}), keeping it as a string");
			GeoValue::String(text.to_string())
		}
	}
}
