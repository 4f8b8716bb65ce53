//! Hand-written prost schema for the Geobuf wire format.
//!
//! Geobuf frames GeoJSON-like data as a protobuf message: one shared key
//! table, a dimension/precision header, and a payload that is either a
//! feature collection, a single feature, or a bare geometry. Coordinates
//! arrive as delta-encoded, precision-scaled `sint64` integers; nesting is
//! described by the parallel `lengths` array.
//!
//! Wire parsing itself is delegated to prost ([`Data::from_bytes`]); the
//! reconstruction engine in [`crate::decode`] only reads the materialized
//! structs.

use anyhow::{Context, Result};
use prost::Message;

/// Top-level Geobuf message.
#[derive(Clone, PartialEq, Message)]
pub struct Data {
	/// Shared property-name table, index-addressed by all property pairs.
	#[prost(string, repeated, tag = "1")]
	pub keys: Vec<String>,
	/// Floats per coordinate tuple. Defaults to 2.
	#[prost(uint32, optional, tag = "2", default = "2")]
	pub dimensions: Option<u32>,
	/// Decimal digits of coordinate precision. Defaults to 6.
	#[prost(uint32, optional, tag = "3", default = "6")]
	pub precision: Option<u32>,
	#[prost(oneof = "DataType", tags = "4, 5, 6")]
	pub data_type: Option<DataType>,
}

impl Data {
	/// Decode a raw Geobuf buffer.
	///
	/// Failures here are upstream deserialization errors: the buffer may be
	/// truncated or not Geobuf at all.
	pub fn from_bytes(buf: &[u8]) -> Result<Data> {
		Data::decode(buf).context("failed to decode Geobuf message; the buffer may be truncated or partial")
	}

	/// The effective coordinate dimension count.
	#[must_use]
	pub fn dimensions_or_default(&self) -> u32 {
		self.dimensions.unwrap_or(2).max(2)
	}

	/// The effective precision (decimal digits).
	#[must_use]
	pub fn precision_or_default(&self) -> u32 {
		self.precision.unwrap_or(6)
	}
}

#[derive(Clone, PartialEq, ::prost::Oneof)]
pub enum DataType {
	#[prost(message, tag = "4")]
	FeatureCollection(FeatureCollection),
	#[prost(message, tag = "5")]
	Feature(Feature),
	#[prost(message, tag = "6")]
	Geometry(Geometry),
}

#[derive(Clone, PartialEq, Message)]
pub struct FeatureCollection {
	#[prost(message, repeated, tag = "1")]
	pub features: Vec<Feature>,
	/// Value table for the collection's own custom properties.
	#[prost(message, repeated, tag = "13")]
	pub values: Vec<Value>,
	/// Index pairs into `Data::keys` / `values`.
	#[prost(uint32, repeated, tag = "15")]
	pub custom_properties: Vec<u32>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Feature {
	#[prost(message, optional, tag = "1")]
	pub geometry: Option<Geometry>,
	#[prost(oneof = "IdType", tags = "11, 12")]
	pub id_type: Option<IdType>,
	/// Value table for this feature's properties.
	#[prost(message, repeated, tag = "13")]
	pub values: Vec<Value>,
	/// Index pairs into `Data::keys` / `values`.
	#[prost(uint32, repeated, tag = "14")]
	pub properties: Vec<u32>,
	#[prost(uint32, repeated, tag = "15")]
	pub custom_properties: Vec<u32>,
}

#[derive(Clone, PartialEq, ::prost::Oneof)]
pub enum IdType {
	/// String id; an empty string means "no id".
	#[prost(string, tag = "11")]
	Id(String),
	#[prost(sint64, tag = "12")]
	IntId(i64),
}

#[derive(Clone, PartialEq, Message)]
pub struct Geometry {
	#[prost(enumeration = "GeometryType", tag = "1")]
	pub r#type: i32,
	/// Nesting descriptor; may be empty (single ring/line special case).
	#[prost(uint32, repeated, tag = "2")]
	pub lengths: Vec<u32>,
	/// Flat delta-encoded coordinates, `dimensions` integers per tuple.
	#[prost(sint64, repeated, tag = "3")]
	pub coords: Vec<i64>,
	/// Nested geometries of a geometry collection. Recognized but not
	/// supported by the decoder.
	#[prost(message, repeated, tag = "4")]
	pub geometries: Vec<Geometry>,
	#[prost(message, repeated, tag = "13")]
	pub values: Vec<Value>,
	#[prost(uint32, repeated, tag = "15")]
	pub custom_properties: Vec<u32>,
}

impl Geometry {
	#[must_use]
	pub fn geometry_type(&self) -> GeometryType {
		GeometryType::try_from(self.r#type).unwrap_or(GeometryType::Point)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ::prost::Enumeration)]
#[repr(i32)]
pub enum GeometryType {
	Point = 0,
	MultiPoint = 1,
	LineString = 2,
	MultiLineString = 3,
	Polygon = 4,
	MultiPolygon = 5,
	GeometryCollection = 6,
}

#[derive(Clone, PartialEq, Message)]
pub struct Value {
	#[prost(oneof = "ValueType", tags = "1, 2, 3, 4, 5, 6")]
	pub value_type: Option<ValueType>,
}

impl Value {
	#[must_use]
	pub fn string(text: &str) -> Value {
		Value {
			value_type: Some(ValueType::StringValue(text.to_string())),
		}
	}

	#[must_use]
	pub fn json(text: &str) -> Value {
		Value {
			value_type: Some(ValueType::JsonValue(text.to_string())),
		}
	}
}

#[derive(Clone, PartialEq, ::prost::Oneof)]
pub enum ValueType {
	#[prost(string, tag = "1")]
	StringValue(String),
	#[prost(double, tag = "2")]
	DoubleValue(f64),
	#[prost(uint64, tag = "3")]
	PosIntValue(u64),
	/// Stored as a magnitude; the decoded value is `-(v as i64)`.
	#[prost(uint64, tag = "4")]
	NegIntValue(u64),
	#[prost(bool, tag = "5")]
	BoolValue(bool),
	/// A JSON document embedded as text.
	#[prost(string, tag = "6")]
	JsonValue(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let data = Data::default();
		assert_eq!(data.dimensions_or_default(), 2);
		assert_eq!(data.precision_or_default(), 6);
		assert!(data.data_type.is_none());
	}

	#[test]
	fn test_wire_round_trip() {
		let data = Data {
			keys: vec!["name".to_string()],
			dimensions: None,
			precision: Some(5),
			data_type: Some(DataType::Geometry(Geometry {
				r#type: GeometryType::LineString as i32,
				lengths: vec![],
				coords: vec![100, 100, 50, 50],
				geometries: vec![],
				values: vec![],
				custom_properties: vec![],
			})),
		};
		let bytes = data.encode_to_vec();
		let decoded = Data::from_bytes(&bytes).unwrap();
		assert_eq!(decoded, data);
	}

	#[test]
	fn test_from_bytes_rejects_garbage() {
		assert!(Data::from_bytes(&[0xff, 0xff, 0xff]).is_err());
	}

	#[test]
	fn test_geometry_type_defaults_to_point() {
		assert_eq!(GeometryType::default(), GeometryType::Point);
		assert_eq!(Geometry::default().geometry_type(), GeometryType::Point);
	}

	#[test]
	fn test_unknown_geometry_type_falls_back_to_point() {
		let geometry = Geometry {
			r#type: 99,
			..Geometry::default()
		};
		assert_eq!(geometry.geometry_type(), GeometryType::Point);
	}
}
