//! Memoization of derived views, keyed by net identity.
//!
//! The store assigns each loaded net a monotonically increasing epoch;
//! cache entries remember the epoch they were computed under and the whole
//! cache is discarded when it changes. Entries are never evicted
//! individually: the working set is bounded by the node count of one net.

use std::collections::HashMap;
use std::rc::Rc;

use super::color::{ColorTable, color_table};
use super::neighbors::{DirectedNeighbors, directed_neighbors};
use super::types::PetriNet;

/// Epoch-scoped memo store for neighbor sets and the color table.
///
/// Entries are handed out as `Rc` so repeated lookups share one
/// allocation instead of re-cloning the underlying nodes.
#[derive(Debug, Default)]
pub(crate) struct DerivedCache {
	epoch: u64,
	neighbors: HashMap<String, Rc<DirectedNeighbors>>,
	colors: Option<Rc<ColorTable>>,
}

impl DerivedCache {
	/// Drop every entry computed under an older epoch.
	fn roll_to(&mut self, epoch: u64) {
		if self.epoch != epoch {
			self.neighbors.clear();
			self.colors = None;
			self.epoch = epoch;
		}
	}

	/// Neighbor sets for `id`, computing them on first access.
	pub(crate) fn neighbors(
		&mut self,
		epoch: u64,
		id: &str,
		net: &PetriNet,
	) -> Rc<DirectedNeighbors> {
		self.roll_to(epoch);
		if let Some(cached) = self.neighbors.get(id) {
			return Rc::clone(cached);
		}
		let computed = Rc::new(directed_neighbors(id, net));
		self.neighbors
			.insert(id.to_string(), Rc::clone(&computed));
		computed
	}

	/// The net's full color table, computing it on first access.
	pub(crate) fn colors(&mut self, epoch: u64, net: &PetriNet) -> Rc<ColorTable> {
		self.roll_to(epoch);
		match &self.colors {
			Some(cached) => Rc::clone(cached),
			None => {
				let computed = Rc::new(color_table(net));
				self.colors = Some(Rc::clone(&computed));
				computed
			}
		}
	}
}
