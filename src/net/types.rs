//! The immutable Petri net data model and its JSON interchange shape.
//!
//! A net is loaded exactly once from its serialized form and then treated as
//! read-only for the rest of the process. All mappings use `BTreeMap` so that
//! key traversal has one canonical (lexicographic) order, which downstream
//! derivations rely on for determinism.

use std::collections::BTreeMap;
use std::fmt;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cost::Cost;

/// Errors raised while constructing or validating a net.
///
/// Everything after construction is total; only loading can fail.
#[derive(Debug, Error)]
pub enum NetError {
	/// The serialized net could not be parsed. Covers malformed `cost`
	/// fields, which match neither the scalar nor the vector schema.
	#[error("invalid net JSON: {0}")]
	Parse(#[from] serde_json::Error),
	/// A transition edge references a place id that is not in `places`.
	#[error("transition `{transition}` {side} references unknown place `{place}`")]
	MissingPlace {
		/// Id of the offending transition.
		transition: String,
		/// The referenced place id.
		place: String,
		/// Which edge map held the reference (`input` or `output`).
		side: &'static str,
	},
	/// An id occurs both as a place and as a transition.
	#[error("id `{0}` is both a place and a transition")]
	DuplicateId(String),
}

/// The weight attached to one place–transition edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Signature {
	/// Free-form label for the kind of quantity (e.g. "qty", "static").
	#[serde(rename = "type")]
	pub kind: String,
	/// Fixed amount or `[min, max]` range.
	pub value: SignatureValue,
}

/// Either a fixed quantity or an inclusive `[min, max]` range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignatureValue {
	/// A single fixed quantity.
	Fixed(f64),
	/// A `[min, max]` range, serialized as a two-element array.
	Range(f64, f64),
}

impl fmt::Display for SignatureValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SignatureValue::Fixed(v) => write!(f, "{v}"),
			SignatureValue::Range(min, max) => write!(f, "{min} - {max}"),
		}
	}
}

/// A typed annotation attached to a node.
///
/// String values (single or listed) are entity ids resolvable through the
/// net's name lookup; numeric values are plain data and never color-mapped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetaData {
	/// Annotation type tag (e.g. "agent", "standing").
	#[serde(rename = "type")]
	pub kind: String,
	/// Optional payload; absent means the tag alone carries the meaning.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub value: Option<MetaValue>,
}

/// A metadata payload: one scalar or a list of scalars.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
	/// A single string or number.
	One(MetaScalar),
	/// A list of strings and/or numbers.
	Many(Vec<MetaScalar>),
}

/// One scalar inside a metadata payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaScalar {
	/// An entity id, resolvable via the name lookup.
	Text(String),
	/// A plain number, rendered as-is.
	Number(f64),
}

/// A resource/state node holding tokens of one unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
	/// Unique node id.
	pub id: String,
	/// Human-readable name.
	pub name: String,
	/// Unit or type label for the tokens this place holds (e.g. "kg").
	pub tokens: String,
	/// Annotations on this place.
	#[serde(default)]
	pub meta_data: Vec<MetaData>,
}

/// An action node consuming input places and producing output places.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
	/// Unique node id, disjoint from place ids.
	pub id: String,
	/// Human-readable name.
	pub name: String,
	/// Annotations on this transition.
	#[serde(default)]
	pub meta_data: Vec<MetaData>,
	/// Consumed places: place id → edge signature.
	#[serde(default)]
	pub input: BTreeMap<String, Signature>,
	/// Produced places: place id → edge signature.
	#[serde(default)]
	pub output: BTreeMap<String, Signature>,
	/// Duration of firing this transition.
	#[serde(default)]
	pub time: f64,
	/// Firing cost, scalar or per-category vector depending on the net
	/// schema variant.
	#[serde(default)]
	pub cost: Cost,
}

/// A complete bipartite process graph, immutable after load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetriNet {
	/// Net identifier.
	pub id: String,
	/// Net display name.
	pub name: String,
	/// All places, keyed by id.
	pub places: BTreeMap<String, Place>,
	/// All transitions, keyed by id.
	pub transitions: BTreeMap<String, Transition>,
	/// Starting token counts; places absent here hold zero tokens.
	#[serde(default)]
	pub initial_marking: BTreeMap<String, u64>,
	/// Display names for every entity id referenced anywhere in metadata.
	/// A superset of the node id space; may name external entities.
	#[serde(default)]
	pub name_lookup: BTreeMap<String, String>,
}

/// A borrowed view of one node, either kind.
#[derive(Clone, Copy, Debug)]
pub enum NodeRef<'a> {
	/// The id resolved to a place.
	Place(&'a Place),
	/// The id resolved to a transition.
	Transition(&'a Transition),
}

impl<'a> NodeRef<'a> {
	/// The node's id.
	pub fn id(&self) -> &'a str {
		match self {
			NodeRef::Place(p) => &p.id,
			NodeRef::Transition(t) => &t.id,
		}
	}

	/// The node's display name.
	pub fn name(&self) -> &'a str {
		match self {
			NodeRef::Place(p) => &p.name,
			NodeRef::Transition(t) => &t.name,
		}
	}

	/// The node's annotations.
	pub fn meta_data(&self) -> &'a [MetaData] {
		match self {
			NodeRef::Place(p) => &p.meta_data,
			NodeRef::Transition(t) => &t.meta_data,
		}
	}
}

impl PetriNet {
	/// Parse and validate a net from its JSON interchange form.
	pub fn from_json(json: &str) -> Result<Self, NetError> {
		let net: PetriNet = serde_json::from_str(json)?;
		net.validate()?;
		info!(
			"loaded net `{}`: {} places, {} transitions",
			net.name,
			net.places.len(),
			net.transitions.len()
		);
		Ok(net)
	}

	/// Check structural invariants, failing fast on the first violation.
	///
	/// Fatal: overlapping place/transition id spaces, and edge keys that
	/// reference places missing from `places`. Metadata ids missing from
	/// the name lookup are only logged; display falls back to the raw id.
	pub fn validate(&self) -> Result<(), NetError> {
		for id in self.places.keys() {
			if self.transitions.contains_key(id) {
				return Err(NetError::DuplicateId(id.clone()));
			}
		}

		for transition in self.transitions.values() {
			for (place, side) in transition
				.input
				.keys()
				.map(|p| (p, "input"))
				.chain(transition.output.keys().map(|p| (p, "output")))
			{
				if !self.places.contains_key(place) {
					return Err(NetError::MissingPlace {
						transition: transition.id.clone(),
						place: place.clone(),
						side,
					});
				}
			}
		}

		for node in self
			.places
			.values()
			.map(|p| NodeRef::Place(p))
			.chain(self.transitions.values().map(|t| NodeRef::Transition(t)))
		{
			for id in super::meta::unique_referenced_ids(node.meta_data()) {
				if !self.name_lookup.contains_key(&id) {
					warn!(
						"node `{}` metadata references `{id}` with no name lookup entry",
						node.id()
					);
				}
			}
		}

		Ok(())
	}

	/// Resolve an id to the place or transition it names, if any.
	pub fn node(&self, id: &str) -> Option<NodeRef<'_>> {
		if let Some(place) = self.places.get(id) {
			Some(NodeRef::Place(place))
		} else {
			self.transitions.get(id).map(NodeRef::Transition)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::net::cost::{CostCategory, CostEntry, CostFrequency};

	const BASIC_NET: &str = r#"{
		"id": "net-1",
		"name": "Basic",
		"places": {
			"p1": {"id": "p1", "name": "Flour", "tokens": "kg", "metaData": [
				{"type": "agent", "value": "a1"},
				{"type": "weights", "value": [2.5, "a2"]}
			]}
		},
		"transitions": {
			"t1": {
				"id": "t1", "name": "Mix", "metaData": [],
				"input": {"p1": {"type": "qty", "value": 5}},
				"output": {},
				"time": 2.0,
				"cost": 3.5
			}
		},
		"initialMarking": {"p1": 2},
		"nameLookup": {"a1": "Alice", "a2": "Robot"}
	}"#;

	#[test]
	fn parses_basic_net() {
		let net = PetriNet::from_json(BASIC_NET).unwrap();
		assert_eq!(net.places["p1"].tokens, "kg");
		assert_eq!(net.initial_marking["p1"], 2);
		let t1 = &net.transitions["t1"];
		assert_eq!(t1.input["p1"].kind, "qty");
		assert_eq!(t1.input["p1"].value, SignatureValue::Fixed(5.0));
		assert_eq!(t1.cost, Cost::Scalar(3.5));
	}

	#[test]
	fn parses_range_signature_and_vector_cost() {
		let json = r#"{
			"id": "n", "name": "n",
			"places": {"p": {"id": "p", "name": "P", "tokens": "", "metaData": []}},
			"transitions": {"t": {
				"id": "t", "name": "T", "metaData": [],
				"input": {"p": {"type": "qty", "value": [1, 3]}},
				"output": {},
				"time": 0,
				"cost": [{"frequency": "once", "value": 2.0, "category": "monetary"}]
			}}
		}"#;
		let net = PetriNet::from_json(json).unwrap();
		let t = &net.transitions["t"];
		assert_eq!(t.input["p"].value, SignatureValue::Range(1.0, 3.0));
		assert_eq!(
			t.cost,
			Cost::Vector(vec![CostEntry {
				frequency: CostFrequency::Once,
				value: 2.0,
				category: CostCategory::Monetary,
			}])
		);
	}

	#[test]
	fn missing_cost_defaults_to_zero_scalar() {
		let json = r#"{
			"id": "n", "name": "n",
			"places": {},
			"transitions": {"t": {"id": "t", "name": "T", "metaData": [], "input": {}, "output": {}}}
		}"#;
		let net = PetriNet::from_json(json).unwrap();
		assert_eq!(net.transitions["t"].cost, Cost::Scalar(0.0));
	}

	#[test]
	fn malformed_cost_fails_at_parse() {
		let json = r#"{
			"id": "n", "name": "n",
			"places": {},
			"transitions": {"t": {
				"id": "t", "name": "T", "metaData": [],
				"input": {}, "output": {}, "time": 0,
				"cost": {"oops": true}
			}}
		}"#;
		assert!(matches!(
			PetriNet::from_json(json),
			Err(NetError::Parse(_))
		));
	}

	#[test]
	fn edge_to_unknown_place_fails_validation() {
		let json = r#"{
			"id": "n", "name": "n",
			"places": {},
			"transitions": {"t": {
				"id": "t", "name": "T", "metaData": [],
				"input": {"ghost": {"type": "qty", "value": 1}},
				"output": {}, "time": 0, "cost": 0
			}}
		}"#;
		match PetriNet::from_json(json) {
			Err(NetError::MissingPlace {
				transition,
				place,
				side,
			}) => {
				assert_eq!(transition, "t");
				assert_eq!(place, "ghost");
				assert_eq!(side, "input");
			}
			other => panic!("expected MissingPlace, got {other:?}"),
		}
	}

	#[test]
	fn overlapping_id_spaces_fail_validation() {
		let json = r#"{
			"id": "n", "name": "n",
			"places": {"x": {"id": "x", "name": "P", "tokens": "", "metaData": []}},
			"transitions": {"x": {
				"id": "x", "name": "T", "metaData": [],
				"input": {}, "output": {}, "time": 0, "cost": 0
			}}
		}"#;
		assert!(matches!(
			PetriNet::from_json(json),
			Err(NetError::DuplicateId(id)) if id == "x"
		));
	}

	#[test]
	fn signature_value_display() {
		assert_eq!(SignatureValue::Fixed(5.0).to_string(), "5");
		assert_eq!(SignatureValue::Range(1.0, 3.0).to_string(), "1 - 3");
	}

	#[test]
	fn net_round_trips_through_json() {
		let net = PetriNet::from_json(BASIC_NET).unwrap();
		let json = serde_json::to_string(&net).unwrap();
		assert_eq!(PetriNet::from_json(&json).unwrap(), net);
	}
}
