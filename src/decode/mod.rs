//! The geometry/property reconstruction engine.
//!
//! Turns a materialized Geobuf [`crate::message::Data`] into a
//! [`crate::geo::GeoDocument`]:
//!
//! - [`lengths`]: regroups the flat `lengths` array into nested counts.
//! - [`coords`]: rebuilds nested floating-point coordinates from the flat
//!   delta-encoded integer array.
//! - [`properties`]: resolves key/value index pairs into typed property maps.
//! - [`document`]: dispatches on the payload kind and assembles the document.
//!
//! The engine never fails on malformed geometry data; it degrades to empty
//! or truncated geometries and logs instead (see the module docs of
//! [`coords`]).

mod coords;
mod document;
mod lengths;
mod options;
mod properties;

pub use document::{decode_blob, decode_data};
pub use options::DecodeOptions;
