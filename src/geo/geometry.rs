use super::{GeoProperties, document::merge_custom_properties};
use crate::json::{JsonArray, JsonObject, JsonValue};
use std::fmt::Debug;

/// A single position: `[longitude, latitude]`.
///
/// Empty only for the degraded placeholder produced when a geometry could
/// not be reconstructed (or for the unsupported geometry-collection kind).
pub type Coordinates0 = Vec<f64>;
/// A sequence of positions (LineString, MultiPoint).
pub type Coordinates1 = Vec<Coordinates0>;
/// A sequence of rings or lines (Polygon, MultiLineString).
pub type Coordinates2 = Vec<Coordinates1>;
/// A sequence of polygons (MultiPolygon).
pub type Coordinates3 = Vec<Coordinates2>;

/// A GeoJSON geometry, one variant per geometry kind.
///
/// Each variant carries the nested coordinate type of exactly the right
/// depth, so the depth invariant holds at compile time.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(Coordinates0),
	MultiPoint(Coordinates1),
	LineString(Coordinates1),
	MultiLineString(Coordinates2),
	Polygon(Coordinates2),
	MultiPolygon(Coordinates3),
}

impl Geometry {
	/// The canonical placeholder: a point without coordinates.
	#[must_use]
	pub fn new_empty_point() -> Self {
		Geometry::Point(Vec::new())
	}

	#[must_use]
	pub fn get_type_name(&self) -> &str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::LineString(_) => "LineString",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPolygon(_) => "MultiPolygon",
		}
	}

	/// The geometry's coordinates as a JSON array of the matching depth.
	#[must_use]
	pub fn to_coord_json(&self) -> JsonValue {
		fn c0(coordinates: &Coordinates0) -> JsonValue {
			JsonValue::Array(JsonArray(coordinates.iter().map(|v| JsonValue::Number(*v)).collect()))
		}
		fn nested<T>(items: &[T], f: impl Fn(&T) -> JsonValue) -> JsonValue {
			JsonValue::Array(JsonArray(items.iter().map(f).collect()))
		}

		match self {
			Geometry::Point(c) => c0(c),
			Geometry::MultiPoint(c) | Geometry::LineString(c) => nested(c, c0),
			Geometry::MultiLineString(c) | Geometry::Polygon(c) => nested(c, |line| nested(line, c0)),
			Geometry::MultiPolygon(c) => nested(c, |polygon| nested(polygon, |ring| nested(ring, c0))),
		}
	}
}

/// A geometry together with its root-level extra properties.
///
/// Custom properties are allowed on every level of a message, including a
/// geometry nested inside a feature; they serialize as siblings of `type`
/// and `coordinates`.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoGeometry {
	pub geometry: Geometry,
	pub custom: GeoProperties,
}

impl GeoGeometry {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		GeoGeometry {
			geometry,
			custom: GeoProperties::new(),
		}
	}

	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut obj = JsonObject::new();
		obj.set("type", JsonValue::from(self.geometry.get_type_name()));
		obj.set("coordinates", self.geometry.to_coord_json());
		merge_custom_properties(&mut obj, &self.custom);
		obj
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let (type_name, inner): (&str, &dyn Debug) = match self {
			Geometry::Point(c) => ("Point", c),
			Geometry::MultiPoint(c) => ("MultiPoint", c),
			Geometry::LineString(c) => ("LineString", c),
			Geometry::MultiLineString(c) => ("MultiLineString", c),
			Geometry::Polygon(c) => ("Polygon", c),
			Geometry::MultiPolygon(c) => ("MultiPolygon", c),
		};
		f.debug_tuple(type_name).field(inner).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_type_names() {
		assert_eq!(Geometry::Point(vec![1.0, 2.0]).get_type_name(), "Point");
		assert_eq!(Geometry::MultiPoint(vec![]).get_type_name(), "MultiPoint");
		assert_eq!(Geometry::LineString(vec![]).get_type_name(), "LineString");
		assert_eq!(Geometry::MultiLineString(vec![]).get_type_name(), "MultiLineString");
		assert_eq!(Geometry::Polygon(vec![]).get_type_name(), "Polygon");
		assert_eq!(Geometry::MultiPolygon(vec![]).get_type_name(), "MultiPolygon");
	}

	#[test]
	fn test_empty_point_placeholder() {
		let geometry = Geometry::new_empty_point();
		assert_eq!(geometry.get_type_name(), "Point");
		assert_eq!(geometry.to_coord_json().stringify(), "[]");
	}

	#[test]
	fn test_geo_geometry_custom_properties() {
		use crate::geo::GeoValue;

		let mut geometry = GeoGeometry::new(Geometry::Point(vec![1.0, 2.0]));
		geometry.custom.insert("crs".to_string(), GeoValue::from("EPSG:4326"));
		geometry.custom.insert("coordinates".to_string(), GeoValue::from("ignored"));
		assert_eq!(
			geometry.to_json().stringify(),
			r#"{"coordinates":[1,2],"crs":"EPSG:4326","type":"Point"}"#
		);
	}

	#[test]
	fn test_to_coord_json_depths() {
		assert_eq!(Geometry::Point(vec![1.5, 2.5]).to_coord_json().stringify(), "[1.5,2.5]");
		assert_eq!(
			Geometry::LineString(vec![vec![0.0, 0.0], vec![1.0, 1.0]])
				.to_coord_json()
				.stringify(),
			"[[0,0],[1,1]]"
		);
		assert_eq!(
			Geometry::Polygon(vec![vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 0.0]]])
				.to_coord_json()
				.stringify(),
			"[[[0,0],[1,0],[0,0]]]"
		);
		assert_eq!(
			Geometry::MultiPolygon(vec![vec![vec![vec![0.0, 0.0]]]])
				.to_coord_json()
				.stringify(),
			"[[[[0,0]]]]"
		);
	}
}
