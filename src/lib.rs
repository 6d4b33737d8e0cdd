//! petri-inspect: graph model and derived-view engine for annotated Petri nets.
//!
//! This crate holds the non-UI core of a Petri net inspector: one immutable
//! net (places, transitions, initial marking, entity name lookup) loaded at
//! startup, and the derived views a browsing surface asks for per node:
//! directed neighbor sets with edge weights, deterministic display colors
//! for metadata-referenced entities, and deduplicated metadata previews.
//! All derivations are pure functions of the net and are memoized per load,
//! so repeated lookups are map reads.
//!
//! Rendering, routing, search UI and net fetching live in the embedding
//! application; it hands a [`PetriNet`] in and reads derived values out via
//! [`NetStore`].

pub mod net;

pub use net::{
	Color, ColorTable, Cost, CostCategory, CostEntry, CostFrequency, DirectedNeighbors,
	MetaData, MetaScalar, MetaValue, Neighbor, NeighborMap, NetError, NetNode, NetStore,
	NodeRef, PetriNet, Place, Signature, SignatureValue, Transition, color_table,
	directed_neighbors, merge_cost_sets, to_dot, unique_referenced_ids,
};
