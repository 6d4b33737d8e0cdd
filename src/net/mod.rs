//! Petri net model and derived-view engine.
//!
//! Core of the net inspector: an immutable bipartite process graph plus
//! the derivations the browsing surface needs:
//! - Directed neighbor resolution per node, with edge signatures
//! - A deterministic entity-id → color table for metadata chips
//! - Metadata aggregation into deduplicated entity-id previews
//! - An epoch-keyed cache so each derivation runs once per loaded net
//! - Graphviz export of the whole net
//!
//! # Example
//!
//! ```
//! use petri_inspect::NetStore;
//!
//! let store = NetStore::from_json(r#"{
//!     "id": "n", "name": "Tiny",
//!     "places": {"p1": {"id": "p1", "name": "Flour", "tokens": "kg", "metaData": []}},
//!     "transitions": {"t1": {
//!         "id": "t1", "name": "Mix", "metaData": [],
//!         "input": {"p1": {"type": "qty", "value": 5}}, "output": {}
//!     }}
//! }"#).unwrap();
//!
//! let neighbors = store.neighbors("p1");
//! assert!(neighbors.outgoing.contains_key("t1"));
//! ```

mod cache;
mod color;
mod cost;
mod dot;
mod meta;
mod neighbors;
mod store;
#[cfg(test)]
mod test_net;
mod types;

pub use color::{Color, ColorTable, color_table};
pub use cost::{Cost, CostCategory, CostEntry, CostFrequency, merge_cost_sets};
pub use dot::to_dot;
pub use meta::unique_referenced_ids;
pub use neighbors::{DirectedNeighbors, Neighbor, NeighborMap, NetNode, directed_neighbors};
pub use store::NetStore;
pub use types::{
	MetaData, MetaScalar, MetaValue, NetError, NodeRef, PetriNet, Place, Signature,
	SignatureValue, Transition,
};
