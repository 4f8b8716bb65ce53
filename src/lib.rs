//! Decode [Geobuf](https://github.com/mapbox/geobuf) buffers into GeoJSON
//! documents.
//!
//! Geobuf packs GeoJSON into a compact protobuf encoding: property names go
//! into one shared key table, coordinates become delta-encoded integers
//! scaled by a precision factor, and nesting is flattened into a `lengths`
//! array. This crate reverses that encoding.
//!
//! ```
//! use geobuf_geojson::{DecodeOptions, decode_blob};
//!
//! fn to_geojson(buf: &[u8]) -> anyhow::Result<String> {
//! 	let document = decode_blob(buf, &DecodeOptions::new())?;
//! 	Ok(document.to_json_string())
//! }
//! ```
//!
//! Decoding degrades instead of failing: the only hard error is a buffer
//! that does not deserialize as a Geobuf message at all. Malformed geometry
//! data inside a valid message produces empty or truncated geometries,
//! unresolvable property references are skipped, and the unsupported
//! geometry-collection kind becomes an empty point. See [`decode`].

mod decode;
mod geo;
mod json;
pub mod message;

pub use decode::{DecodeOptions, decode_blob, decode_data};
pub use geo::*;
pub use json::{JsonArray, JsonObject, JsonValue};
