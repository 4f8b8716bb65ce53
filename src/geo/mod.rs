// This module defines the GeoJSON document model produced by the decoder:
// the `Geometry` enum with one variant per GeoJSON geometry kind (each
// carrying the correctly-shaped nested coordinate type), typed property
// values (`GeoValue`), ordered property maps (`GeoProperties`), and the
// `GeoFeature` / `GeoCollection` / `GeoDocument` containers. Every type
// knows how to serialize itself into the crate's JSON model.

mod collection;
mod document;
mod feature;
mod geometry;
mod properties;
mod value;

pub use collection::GeoCollection;
pub use document::GeoDocument;
pub use feature::GeoFeature;
pub use geometry::{Coordinates0, Coordinates1, Coordinates2, Coordinates3, GeoGeometry, Geometry};
pub use properties::GeoProperties;
pub use value::GeoValue;
