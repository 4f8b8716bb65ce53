use super::{GeoGeometry, GeoProperties, GeoValue, Geometry, document::merge_custom_properties};
use crate::json::{JsonObject, JsonValue};
use std::fmt::Debug;

/// A GeoJSON feature: a geometry plus its properties.
///
/// `custom` holds root-level extra properties that serialize as siblings of
/// the fixed `type`/`geometry`/`properties` fields. The geometry carries
/// its own extras (see [`GeoGeometry`]).
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub id: Option<GeoValue>,
	pub geometry: GeoGeometry,
	pub properties: GeoProperties,
	pub custom: GeoProperties,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry: GeoGeometry::new(geometry),
			properties: GeoProperties::new(),
			custom: GeoProperties::new(),
		}
	}

	pub fn set_id(&mut self, id: GeoValue) {
		self.id = Some(id);
	}

	pub fn set_property<T>(&mut self, key: &str, value: T)
	where
		GeoValue: From<T>,
	{
		self.properties.insert(key.to_string(), GeoValue::from(value));
	}

	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut obj = JsonObject::new();
		obj.set("type", JsonValue::from("Feature"));
		if let Some(id) = &self.id {
			obj.set("id", id.to_json());
		}
		obj.set("geometry", JsonValue::Object(self.geometry.to_json()));
		obj.set("properties", JsonValue::Object(self.properties.to_json()));
		merge_custom_properties(&mut obj, &self.custom);
		obj
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn example_feature() -> GeoFeature {
		let mut feature = GeoFeature::new(Geometry::Point(vec![13.4, 52.5]));
		feature.set_property("name", "Berlin");
		feature
	}

	#[test]
	fn test_to_json_minimal() {
		let feature = example_feature();
		assert_eq!(
			feature.to_json().stringify(),
			r#"{"geometry":{"coordinates":[13.4,52.5],"type":"Point"},"properties":{"name":"Berlin"},"type":"Feature"}"#
		);
	}

	#[test]
	fn test_to_json_with_id() {
		let mut feature = example_feature();
		feature.set_id(GeoValue::from("feature-1"));
		assert!(feature.to_json().stringify().contains(r#""id":"feature-1""#));

		feature.set_id(GeoValue::Int(7));
		assert!(feature.to_json().stringify().contains(r#""id":7"#));
	}

	#[test]
	fn test_geometry_level_custom_properties() {
		let mut feature = example_feature();
		feature.geometry.custom.insert("crs".to_string(), GeoValue::from("EPSG:4326"));
		assert_eq!(
			feature.to_json().stringify(),
			concat!(
				r#"{"geometry":{"coordinates":[13.4,52.5],"crs":"EPSG:4326","type":"Point"},"#,
				r#""properties":{"name":"Berlin"},"type":"Feature"}"#
			)
		);
	}

	#[test]
	fn test_custom_properties_never_overwrite_fixed_fields() {
		let mut feature = example_feature();
		feature.custom.insert("source".to_string(), GeoValue::from("osm"));
		feature.custom.insert("type".to_string(), GeoValue::from("Sneaky"));
		let json = feature.to_json().stringify();
		assert!(json.contains(r#""source":"osm""#));
		assert!(json.contains(r#""type":"Feature""#));
		assert!(!json.contains("Sneaky"));
	}
}
