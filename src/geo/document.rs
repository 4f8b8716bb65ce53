use super::{GeoCollection, GeoFeature, GeoGeometry, GeoProperties, Geometry};
use crate::json::JsonObject;
use log::trace;

/// Keys that belong to the fixed GeoJSON layout and must never be
/// shadowed by root-level custom properties.
const RESERVED_KEYS: [&str; 6] = ["type", "features", "id", "geometry", "properties", "coordinates"];

/// A complete decoded GeoJSON document.
///
/// One decode call produces exactly one document; an absent payload in the
/// input message yields the placeholder form (an empty Point geometry).
#[derive(Clone, Debug, PartialEq)]
pub enum GeoDocument {
	FeatureCollection(GeoCollection),
	Feature(GeoFeature),
	Geometry(GeoGeometry),
}

impl GeoDocument {
	/// The null-object document used when the input message has no payload.
	#[must_use]
	pub fn new_placeholder() -> Self {
		GeoDocument::Geometry(GeoGeometry::new(Geometry::new_empty_point()))
	}

	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		match self {
			GeoDocument::FeatureCollection(collection) => collection.to_json(),
			GeoDocument::Feature(feature) => feature.to_json(),
			GeoDocument::Geometry(geometry) => geometry.to_json(),
		}
	}

	/// Compact JSON, suitable for handing off to a GeoJSON consumer.
	#[must_use]
	pub fn to_json_string(&self) -> String {
		self.to_json().stringify()
	}

	/// Compact JSON as bytes.
	#[must_use]
	pub fn to_json_bytes(&self) -> Vec<u8> {
		self.to_json_string().into_bytes()
	}

	/// Indented JSON for diagnostics. Not performance-oriented.
	#[must_use]
	pub fn to_json_string_pretty(&self) -> String {
		self.to_json().stringify_pretty_multi_line(80, 0)
	}
}

/// Merge root-level custom properties as sibling keys.
///
/// Fixed fields are emitted first; a custom key is dropped when it is
/// reserved or already present.
pub(super) fn merge_custom_properties(obj: &mut JsonObject, custom: &GeoProperties) {
	for (key, value) in custom.iter() {
		if RESERVED_KEYS.contains(&key.as_str()) || obj.contains_key(key) {
			trace!("dropping custom property '{key}': key is reserved");
			continue;
		}
		obj.set(key, value.to_json());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geo::GeoValue;

	#[test]
	fn test_placeholder_document() {
		assert_eq!(
			GeoDocument::new_placeholder().to_json_string(),
			r#"{"coordinates":[],"type":"Point"}"#
		);
	}

	#[test]
	fn test_geometry_document_with_custom_properties() {
		let mut geometry = GeoGeometry::new(Geometry::Point(vec![1.0, 2.0]));
		geometry.custom.insert("crs".to_string(), GeoValue::from("EPSG:4326"));
		geometry.custom.insert("coordinates".to_string(), GeoValue::from("ignored"));
		let document = GeoDocument::Geometry(geometry);
		assert_eq!(
			document.to_json_string(),
			r#"{"coordinates":[1,2],"crs":"EPSG:4326","type":"Point"}"#
		);
	}

	#[test]
	fn test_pretty_output_is_indented() {
		let pretty = GeoDocument::new_placeholder().to_json_string_pretty();
		assert!(pretty.contains("\"type\": \"Point\""));
	}

	#[test]
	fn test_to_json_bytes_matches_string() {
		let document = GeoDocument::new_placeholder();
		assert_eq!(document.to_json_bytes(), document.to_json_string().into_bytes());
	}
}
