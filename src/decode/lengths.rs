/// Split a flat "count, then `count` values" sequence into groups.
///
/// This is how Geobuf packs per-polygon ring-count lists into one flat
/// `lengths` array. A count that would read past the end stops the walk
/// early; the groups collected so far are returned (malformed input is
/// tolerated, not an error).
pub(super) fn decode_groupings(lengths: &[u32]) -> Vec<Vec<u32>> {
	let mut groups: Vec<Vec<u32>> = Vec::new();
	let mut cursor = 0usize;

	while cursor < lengths.len() {
		let count = lengths[cursor] as usize;
		cursor += 1;
		if cursor + count > lengths.len() {
			break;
		}
		groups.push(lengths[cursor..cursor + count].to_vec());
		cursor += count;
	}

	groups
}
