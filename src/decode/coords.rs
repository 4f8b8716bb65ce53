//! Rebuilds nested floating-point coordinates from Geobuf's flat integer
//! representation.
//!
//! Coordinates are delta-encoded per axis: every stored integer is the
//! difference from the previous tuple's value on the same axis, and the
//! running sum is divided by `10^precision`. The accumulators reset at the
//! start of every ring/line. Tuples are consumed at stride `dimensions`,
//! but only the first two axes end up in the output.
//!
//! Structural mismatches (a grouping that does not reconcile with its
//! declared count, or a coordinate array shorter than its grouping) degrade
//! to empty or truncated results with a warning. They never panic and never
//! fail the enclosing document.

use super::lengths::decode_groupings;
use crate::geo::{Coordinates0, Coordinates1, Coordinates2, Coordinates3};
use log::warn;

/// Cursor over the flat delta-encoded coordinate array.
pub(super) struct CoordCursor<'a> {
	coords: &'a [i64],
	dimensions: usize,
	factor: f64,
	cursor: usize,
	acc: Vec<i64>,
}

impl<'a> CoordCursor<'a> {
	pub fn new(coords: &'a [i64], dimensions: u32, precision: u32) -> CoordCursor<'a> {
		let dimensions = dimensions as usize;
		CoordCursor {
			coords,
			dimensions,
			factor: 10f64.powi(precision as i32),
			cursor: 0,
			acc: vec![0; dimensions],
		}
	}

	/// Total number of complete tuples in the array.
	pub fn point_count(&self) -> usize {
		self.coords.len() / self.dimensions
	}

	fn is_exhausted(&self) -> bool {
		self.cursor + self.dimensions > self.coords.len()
	}

	fn reset_accumulators(&mut self) {
		self.acc.fill(0);
	}

	/// Consume one tuple: add the deltas to the running sums and emit the
	/// scaled x/y pair. Extra axes are accumulated but not emitted.
	fn next_point(&mut self) -> Option<Coordinates0> {
		if self.is_exhausted() {
			return None;
		}
		for axis in 0..self.dimensions {
			self.acc[axis] += self.coords[self.cursor + axis];
		}
		self.cursor += self.dimensions;
		Some(vec![self.acc[0] as f64 / self.factor, self.acc[1] as f64 / self.factor])
	}

	/// Decode one ring/line of `count` tuples, starting fresh accumulators.
	///
	/// If the coordinate array runs out early the line is truncated. With
	/// `closed` the first position is appended again at the end.
	fn take_line(&mut self, count: usize, closed: bool) -> Coordinates1 {
		self.reset_accumulators();
		let mut line: Coordinates1 = Vec::with_capacity(count + usize::from(closed));
		for _ in 0..count {
			match self.next_point() {
				Some(point) => line.push(point),
				None => {
					warn!(
						"coordinate array ended after {} of {count} tuples, truncating",
						line.len()
					);
					break;
				}
			}
		}
		if closed && !line.is_empty() {
			line.push(line[0].clone());
		}
		line
	}

	/// Decode one group of rings/lines per entry of a count-prefixed
	/// grouping: `grouping[0]` declares the group count, the remaining
	/// entries are "ring count, then ring lengths" lists.
	fn take_line_groups(&mut self, grouping: &[u32], closed: bool) -> Vec<Coordinates2> {
		let declared = grouping[0] as usize;
		let groups = decode_groupings(&grouping[1..]);
		if groups.len() != declared {
			warn!(
				"grouping declares {declared} entries but describes {}, dropping geometry",
				groups.len()
			);
			return Vec::new();
		}

		let mut result: Vec<Coordinates2> = Vec::with_capacity(groups.len());
		for group in groups {
			let mut lines: Coordinates2 = Vec::with_capacity(group.len());
			for &length in &group {
				lines.push(self.take_line(length as usize, closed));
				if self.is_exhausted() {
					break;
				}
			}
			result.push(lines);
			if self.is_exhausted() && result.len() < declared {
				break;
			}
		}
		result
	}
}

/// Depth 1: the first tuple, decoded directly.
pub(super) fn decode_point(coords: &[i64], dimensions: u32, precision: u32) -> Coordinates0 {
	let mut cursor = CoordCursor::new(coords, dimensions, precision);
	cursor.next_point().unwrap_or_else(|| {
		warn!("point geometry has no complete coordinate tuple");
		Vec::new()
	})
}

/// Depth 2: a single implicit line over all tuples. Never closed.
pub(super) fn decode_line(coords: &[i64], dimensions: u32, precision: u32) -> Coordinates1 {
	let mut cursor = CoordCursor::new(coords, dimensions, precision);
	let count = cursor.point_count();
	cursor.take_line(count, false)
}

/// Depth 3: rings of a Polygon (`closed`) or lines of a MultiLineString.
///
/// Empty `lengths` is the single-ring special case. Otherwise `lengths` is
/// re-expanded into a count-prefixed grouping (`[l1, l2]` becomes
/// `[2, 1, l1, 1, l2]`) so that ring grouping and reconciliation follow the
/// same path as for MultiPolygons.
pub(super) fn decode_line_groups(
	coords: &[i64],
	lengths: &[u32],
	dimensions: u32,
	precision: u32,
	closed: bool,
) -> Coordinates2 {
	let mut cursor = CoordCursor::new(coords, dimensions, precision);
	if lengths.is_empty() {
		let count = cursor.point_count();
		return vec![cursor.take_line(count, closed)];
	}

	let mut expanded: Vec<u32> = Vec::with_capacity(lengths.len() * 2 + 1);
	expanded.push(lengths.len() as u32);
	for &length in lengths {
		expanded.push(1);
		expanded.push(length);
	}

	cursor.take_line_groups(&expanded, closed).into_iter().flatten().collect()
}

/// Depth 4: `lengths[0]` is the polygon count, the rest are per-polygon
/// ring-count lists. Every ring is closed. Empty `lengths` synthesizes one
/// polygon with a single ring over all tuples.
pub(super) fn decode_multi_polygon(
	coords: &[i64],
	lengths: &[u32],
	dimensions: u32,
	precision: u32,
) -> Coordinates3 {
	let mut cursor = CoordCursor::new(coords, dimensions, precision);
	if lengths.is_empty() {
		let count = cursor.point_count();
		return vec![vec![cursor.take_line(count, true)]];
	}

	cursor.take_line_groups(lengths, true)
}
