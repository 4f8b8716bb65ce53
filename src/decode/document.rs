//! Dispatches on the message payload kind and assembles the final document.

use super::coords::{decode_line, decode_line_groups, decode_multi_polygon, decode_point};
use super::options::DecodeOptions;
use super::properties::decode_properties;
use crate::geo::{GeoCollection, GeoDocument, GeoFeature, GeoGeometry, GeoValue, Geometry};
use crate::message;
use crate::message::{DataType, GeometryType, IdType};
use anyhow::Result;
use log::{debug, warn};

/// Decode a raw Geobuf buffer into a GeoJSON document.
///
/// The only error path is upstream deserialization (a truncated or foreign
/// buffer). Once the message is materialized, reconstruction always
/// produces a document; see [`decode_data`].
pub fn decode_blob(buf: &[u8], options: &DecodeOptions) -> Result<GeoDocument> {
	let data = message::Data::from_bytes(buf)?;
	Ok(decode_data(&data, options))
}

/// Decode a materialized Geobuf message into a GeoJSON document.
///
/// Never fails: malformed geometry data degrades to empty or truncated
/// geometries, unresolvable property pairs are skipped, and an absent
/// payload yields the placeholder document.
#[must_use]
pub fn decode_data(data: &message::Data, options: &DecodeOptions) -> GeoDocument {
	let decoder = Decoder {
		keys: &data.keys,
		dimensions: data.dimensions_or_default(),
		precision: data.precision_or_default(),
		options,
	};

	if options.verbose {
		debug!(
			"decoding message: {} keys, {} dimensions, precision {}",
			decoder.keys.len(),
			decoder.dimensions,
			decoder.precision
		);
	}

	match &data.data_type {
		Some(DataType::FeatureCollection(collection)) => decoder.decode_collection(collection),
		Some(DataType::Feature(feature)) => GeoDocument::Feature(decoder.decode_feature(feature)),
		Some(DataType::Geometry(geometry)) => GeoDocument::Geometry(decoder.decode_geometry(geometry)),
		None => {
			warn!("message carries no payload, emitting the placeholder document");
			GeoDocument::new_placeholder()
		}
	}
}

/// Per-message decode state: the shared key table and the header fields
/// that apply to every coordinate in the message.
struct Decoder<'a> {
	keys: &'a [String],
	dimensions: u32,
	precision: u32,
	options: &'a DecodeOptions,
}

impl Decoder<'_> {
	fn decode_collection(&self, collection: &message::FeatureCollection) -> GeoDocument {
		if self.options.verbose {
			debug!("decoding a feature collection with {} features", collection.features.len());
		}
		let mut result = GeoCollection::from(
			collection
				.features
				.iter()
				.map(|feature| self.decode_feature(feature))
				.collect(),
		);
		result.custom = decode_properties(
			&collection.custom_properties,
			self.keys,
			&collection.values,
			self.options,
		);
		GeoDocument::FeatureCollection(result)
	}

	fn decode_feature(&self, feature: &message::Feature) -> GeoFeature {
		let geometry = match &feature.geometry {
			Some(geometry) => self.decode_geometry(geometry),
			None => {
				warn!("feature has no geometry, substituting an empty point");
				GeoGeometry::new(Geometry::new_empty_point())
			}
		};

		let id = match &feature.id_type {
			Some(IdType::Id(id)) if id.is_empty() => None,
			Some(IdType::Id(id)) => Some(GeoValue::String(id.clone())),
			Some(IdType::IntId(id)) => Some(GeoValue::Int(*id)),
			None => None,
		};

		GeoFeature {
			id,
			geometry,
			properties: decode_properties(&feature.properties, self.keys, &feature.values, self.options),
			custom: decode_properties(&feature.custom_properties, self.keys, &feature.values, self.options),
		}
	}

	fn decode_geometry(&self, geometry: &message::Geometry) -> GeoGeometry {
		let coords = &geometry.coords;
		let lengths = &geometry.lengths;
		let (dimensions, precision) = (self.dimensions, self.precision);

		if self.options.verbose {
			debug!(
				"decoding a {:?} geometry: {} integers, {} lengths",
				geometry.geometry_type(),
				coords.len(),
				lengths.len()
			);
		}

		let decoded = match geometry.geometry_type() {
			GeometryType::Point => Geometry::Point(decode_point(coords, dimensions, precision)),
			GeometryType::MultiPoint => Geometry::MultiPoint(decode_line(coords, dimensions, precision)),
			GeometryType::LineString => Geometry::LineString(decode_line(coords, dimensions, precision)),
			GeometryType::MultiLineString => {
				Geometry::MultiLineString(decode_line_groups(coords, lengths, dimensions, precision, false))
			}
			GeometryType::Polygon => {
				Geometry::Polygon(decode_line_groups(coords, lengths, dimensions, precision, true))
			}
			GeometryType::MultiPolygon => {
				Geometry::MultiPolygon(decode_multi_polygon(coords, lengths, dimensions, precision))
			}
			GeometryType::GeometryCollection => {
				warn!(
					"geometry collections are not supported ({} nested geometries dropped), substituting an empty point",
					geometry.geometries.len()
				);
				Geometry::new_empty_point()
			}
		};

		GeoGeometry {
			geometry: decoded,
			custom: decode_properties(&geometry.custom_properties, self.keys, &geometry.values, self.options),
		}
	}
}
