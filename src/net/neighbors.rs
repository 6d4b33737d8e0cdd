//! Directed neighbor resolution.
//!
//! For any node id, splits the adjacent nodes into incoming and outgoing
//! sets following token flow. The tricky part is the place-centric view:
//! a transition's `input` edge is *outgoing* from the supplying place's
//! perspective, and its `output` edge is *incoming* to the produced place.

use std::collections::BTreeMap;

use log::warn;

use super::types::{PetriNet, Place, Signature, Transition};

/// An adjacent node together with the signature on the connecting edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Neighbor {
	/// The neighboring node, owned so results can outlive borrow scopes
	/// inside the derived-view cache.
	pub node: NetNode,
	/// Weight of the edge between the queried node and this neighbor.
	pub signature: Signature,
}

/// An owned copy of either node kind.
#[derive(Clone, Debug, PartialEq)]
pub enum NetNode {
	/// A place node.
	Place(Place),
	/// A transition node.
	Transition(Transition),
}

impl NetNode {
	/// The node's id.
	pub fn id(&self) -> &str {
		match self {
			NetNode::Place(p) => &p.id,
			NetNode::Transition(t) => &t.id,
		}
	}

	/// The node's display name.
	pub fn name(&self) -> &str {
		match self {
			NetNode::Place(p) => &p.name,
			NetNode::Transition(t) => &t.name,
		}
	}
}

/// Neighbor-node-id → neighbor, in canonical id order.
pub type NeighborMap = BTreeMap<String, Neighbor>;

/// The two directed neighbor sets of one node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectedNeighbors {
	/// Nodes supplying tokens to the queried node.
	pub incoming: NeighborMap,
	/// Nodes the queried node supplies tokens to.
	pub outgoing: NeighborMap,
}

/// Compute the directed neighbor sets of `id` within `net`.
///
/// Pure function of its inputs: for a transition both sets are direct map
/// reads off `input`/`output`; for a place every transition is scanned.
/// Ids naming neither node kind yield two empty maps, since navigation
/// code paths pass transient ids freely.
pub fn directed_neighbors(id: &str, net: &PetriNet) -> DirectedNeighbors {
	let mut neighbors = DirectedNeighbors::default();

	if let Some(transition) = net.transitions.get(id) {
		for (place_id, signature) in &transition.input {
			insert_place(&mut neighbors.incoming, net, place_id, signature);
		}
		for (place_id, signature) in &transition.output {
			insert_place(&mut neighbors.outgoing, net, place_id, signature);
		}
	} else if net.places.contains_key(id) {
		for transition in net.transitions.values() {
			// Input edges consume from this place, so from the place's
			// perspective the flow is outgoing; output edges invert.
			if let Some(signature) = transition.input.get(id) {
				neighbors.outgoing.insert(
					transition.id.clone(),
					Neighbor {
						node: NetNode::Transition(transition.clone()),
						signature: signature.clone(),
					},
				);
			}
			if let Some(signature) = transition.output.get(id) {
				neighbors.incoming.insert(
					transition.id.clone(),
					Neighbor {
						node: NetNode::Transition(transition.clone()),
						signature: signature.clone(),
					},
				);
			}
		}
	}

	neighbors
}

/// Insert the place behind an edge key, skipping dangling references.
/// A validated net never hits the dangling arm, but the resolver stays
/// total for hand-built nets.
fn insert_place(map: &mut NeighborMap, net: &PetriNet, place_id: &str, signature: &Signature) {
	match net.places.get(place_id) {
		Some(place) => {
			map.insert(
				place_id.to_string(),
				Neighbor {
					node: NetNode::Place(place.clone()),
					signature: signature.clone(),
				},
			);
		}
		None => warn!("edge references unknown place `{place_id}`, skipping"),
	}
}
