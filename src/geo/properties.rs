use super::GeoValue;
use crate::json::JsonObject;
use std::{
	collections::{BTreeMap, btree_map},
	fmt::Debug,
};

/// An ordered string-keyed property map.
///
/// Backed by a `BTreeMap` so that serialized output is deterministic.
#[derive(Clone, Default, PartialEq)]
pub struct GeoProperties {
	properties: BTreeMap<String, GeoValue>,
}

impl GeoProperties {
	#[must_use]
	pub fn new() -> GeoProperties {
		GeoProperties {
			properties: BTreeMap::new(),
		}
	}

	pub fn insert(&mut self, key: String, value: GeoValue) {
		self.properties.insert(key, value);
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&GeoValue> {
		self.properties.get(key)
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.properties.len()
	}

	pub fn iter(&self) -> btree_map::Iter<'_, String, GeoValue> {
		self.properties.iter()
	}

	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut object = JsonObject::new();
		for (key, value) in &self.properties {
			object.set(key, value.to_json());
		}
		object
	}
}

impl IntoIterator for GeoProperties {
	type Item = (String, GeoValue);
	type IntoIter = btree_map::IntoIter<String, GeoValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.into_iter()
	}
}

impl FromIterator<(String, GeoValue)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, GeoValue)>>(iter: T) -> Self {
		GeoProperties {
			properties: BTreeMap::from_iter(iter),
		}
	}
}

impl From<Vec<(&str, GeoValue)>> for GeoProperties {
	fn from(value: Vec<(&str, GeoValue)>) -> Self {
		GeoProperties {
			properties: value.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
		}
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.properties.iter()).finish()
	}
}
