//! Transition cost schemas.
//!
//! Two net schema variants coexist on the wire: older nets carry a single
//! scalar cost per transition, cost-aware nets carry a vector of
//! (category, frequency, value) entries. [`Cost`] models the pair as a
//! discriminated union so call sites never have to inspect value shapes.

use serde::{Deserialize, Serialize};

/// What dimension a cost entry is measured in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CostCategory {
	/// Physical strain on a human agent.
	Ergonomic,
	/// Money.
	Monetary,
}

/// Whether a cost entry is paid once or per repetition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CostFrequency {
	/// Incurred a single time (e.g. tooling purchase).
	Once,
	/// Extrapolated over repeated firings.
	Extrapolated,
}

/// One cell of a cost vector.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
	/// How often the cost recurs.
	pub frequency: CostFrequency,
	/// Magnitude in the category's unit.
	pub value: f64,
	/// Dimension of the cost.
	pub category: CostCategory,
}

/// A transition's cost in either net schema variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cost {
	/// Plain scalar cost (basic schema).
	Scalar(f64),
	/// Multi-category cost vector (cost-aware schema).
	Vector(Vec<CostEntry>),
}

impl Default for Cost {
	fn default() -> Self {
		Cost::Scalar(0.0)
	}
}

impl Cost {
	/// Collapse either variant to one number: the scalar itself, or the
	/// sum over all vector entries.
	pub fn total(&self) -> f64 {
		match self {
			Cost::Scalar(value) => *value,
			Cost::Vector(entries) => entries.iter().map(|e| e.value).sum(),
		}
	}
}

/// Merge two cost vectors, summing per (frequency, category) cell.
///
/// Cells that sum to zero are dropped, so merging never manufactures
/// entries that neither input priced.
pub fn merge_cost_sets(a: &[CostEntry], b: &[CostEntry]) -> Vec<CostEntry> {
	let mut merged = Vec::new();
	for frequency in [CostFrequency::Once, CostFrequency::Extrapolated] {
		for category in [CostCategory::Ergonomic, CostCategory::Monetary] {
			let sum: f64 = a
				.iter()
				.chain(b)
				.filter(|c| c.frequency == frequency && c.category == category)
				.map(|c| c.value)
				.sum();
			if sum > 0.0 {
				merged.push(CostEntry {
					frequency,
					value: sum,
					category,
				});
			}
		}
	}
	merged
}
