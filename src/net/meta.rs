//! Metadata aggregation for preview rendering.

use super::types::{MetaData, MetaScalar, MetaValue};

/// Collect the distinct entity ids referenced by a metadata list, in
/// first-occurrence order.
///
/// Single string values and string members of list values count as ids;
/// numbers are plain data and are skipped. Drives one preview chip per
/// returned id, colored via the color table and labeled via the name
/// lookup.
pub fn unique_referenced_ids(meta_data: &[MetaData]) -> Vec<String> {
	let mut ids: Vec<String> = Vec::new();
	for entry in meta_data {
		match &entry.value {
			Some(MetaValue::One(scalar)) => push_unique(&mut ids, scalar),
			Some(MetaValue::Many(scalars)) => {
				for scalar in scalars {
					push_unique(&mut ids, scalar);
				}
			}
			None => {}
		}
	}
	ids
}

fn push_unique(ids: &mut Vec<String>, scalar: &MetaScalar) {
	if let MetaScalar::Text(id) = scalar {
		if !ids.iter().any(|seen| seen == id) {
			ids.push(id.clone());
		}
	}
}
