use super::{GeoFeature, GeoProperties, document::merge_custom_properties};
use crate::json::{JsonArray, JsonObject, JsonValue};

/// A GeoJSON feature collection, order-preserving.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
	pub custom: GeoProperties,
}

impl GeoCollection {
	#[must_use]
	pub fn from(features: Vec<GeoFeature>) -> Self {
		Self {
			features,
			custom: GeoProperties::new(),
		}
	}

	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut obj = JsonObject::new();
		obj.set("type", JsonValue::from("FeatureCollection"));
		obj.set(
			"features",
			JsonValue::Array(JsonArray(
				self.features.iter().map(|f| JsonValue::Object(f.to_json())).collect(),
			)),
		);
		merge_custom_properties(&mut obj, &self.custom);
		obj
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geo::{GeoValue, Geometry};

	#[test]
	fn test_to_json_empty() {
		assert_eq!(
			GeoCollection::default().to_json().stringify(),
			r#"{"features":[],"type":"FeatureCollection"}"#
		);
	}

	#[test]
	fn test_to_json_preserves_feature_order() {
		let mut collection = GeoCollection::from(vec![
			GeoFeature::new(Geometry::Point(vec![1.0, 1.0])),
			GeoFeature::new(Geometry::Point(vec![2.0, 2.0])),
		]);
		collection.custom.insert("generator".to_string(), GeoValue::from("test"));
		let json = collection.to_json().stringify();
		let first = json.find("[1,1]").unwrap();
		let second = json.find("[2,2]").unwrap();
		assert!(first < second);
		assert!(json.contains(r#""generator":"test""#));
	}
}
