//! The net store: one immutable net plus its derived-view cache.

use std::cell::RefCell;
use std::rc::Rc;

use super::cache::DerivedCache;
use super::color::ColorTable;
use super::meta::unique_referenced_ids;
use super::neighbors::DirectedNeighbors;
use super::types::{NetError, NodeRef, PetriNet};

/// Owns the single live [`PetriNet`] and memoizes derived views over it.
///
/// The net is validated on the way in and read-only afterwards; swapping
/// it with [`NetStore::replace`] bumps an internal epoch, which wholesale
/// invalidates every cached derivation so no lookup can observe results
/// computed against a previous net.
#[derive(Debug)]
pub struct NetStore {
	net: PetriNet,
	epoch: u64,
	cache: RefCell<DerivedCache>,
}

impl NetStore {
	/// Validate `net` and take ownership of it.
	pub fn new(net: PetriNet) -> Result<Self, NetError> {
		net.validate()?;
		Ok(Self {
			net,
			epoch: 1,
			cache: RefCell::new(DerivedCache::default()),
		})
	}

	/// Parse, validate and store a net from its JSON interchange form.
	pub fn from_json(json: &str) -> Result<Self, NetError> {
		Self::new(PetriNet::from_json(json)?)
	}

	/// The live net.
	pub fn net(&self) -> &PetriNet {
		&self.net
	}

	/// Swap in a newly loaded net, discarding all derived views of the
	/// old one. Fails (leaving the old net live) if `net` is invalid.
	pub fn replace(&mut self, net: PetriNet) -> Result<(), NetError> {
		net.validate()?;
		self.net = net;
		self.epoch += 1;
		Ok(())
	}

	/// Resolve an id to the place or transition it names, if any.
	pub fn resolve_node(&self, id: &str) -> Option<NodeRef<'_>> {
		self.net.node(id)
	}

	/// Display name for any entity id, falling back to the raw id when
	/// the name lookup has no entry for it.
	pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
		self.net.name_lookup.get(id).map_or(id, String::as_str)
	}

	/// Initial token count of a place; places absent from the marking
	/// (or unknown ids) hold zero tokens.
	pub fn marking(&self, place_id: &str) -> u64 {
		self.net
			.initial_marking
			.get(place_id)
			.copied()
			.unwrap_or(0)
	}

	/// Directed neighbor sets of `id`, served from cache after the first
	/// computation. Unknown ids yield empty sets.
	pub fn neighbors(&self, id: &str) -> Rc<DirectedNeighbors> {
		self.cache
			.borrow_mut()
			.neighbors(self.epoch, id, &self.net)
	}

	/// The net's color table, computed once per loaded net.
	pub fn color_table(&self) -> Rc<ColorTable> {
		self.cache.borrow_mut().colors(self.epoch, &self.net)
	}

	/// Distinct entity ids referenced by a node's metadata, for preview
	/// chips. Unknown node ids yield an empty list.
	pub fn referenced_ids(&self, node_id: &str) -> Vec<String> {
		self.resolve_node(node_id)
			.map(|node| unique_referenced_ids(node.meta_data()))
			.unwrap_or_default()
	}
}
