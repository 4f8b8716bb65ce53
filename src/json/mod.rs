//! A small JSON document model used for GeoJSON output and for parsing
//! embedded JSON property strings.
//!
//! The decoder builds every GeoJSON document as a [`JsonObject`] tree and
//! serializes it with [`JsonObject::stringify`] (compact) or
//! [`JsonObject::stringify_pretty_multi_line`] (diagnostics). The parser in
//! [`parse`] is only needed for Geobuf values whose declared kind is a
//! JSON-encoded string.

mod array;
mod object;
mod parse;
mod stringify;
mod value;

pub use array::JsonArray;
pub use object::JsonObject;
pub use parse::parse_json_str;
pub use stringify::{escape_json_string, stringify, stringify_pretty_multi_line, stringify_pretty_single_line};
pub use value::JsonValue;
