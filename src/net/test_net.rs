//! Shared fixture net for unit tests: a three-place baking pipeline.

use std::collections::BTreeMap;

use super::types::{MetaData, MetaScalar, MetaValue, PetriNet, Place, Signature, SignatureValue, Transition};

/// A fixed-quantity signature.
pub(crate) fn signature(kind: &str, value: f64) -> Signature {
	Signature {
		kind: kind.to_string(),
		value: SignatureValue::Fixed(value),
	}
}

fn place(id: &str, name: &str, tokens: &str, meta_data: Vec<MetaData>) -> Place {
	Place {
		id: id.to_string(),
		name: name.to_string(),
		tokens: tokens.to_string(),
		meta_data,
	}
}

fn transition(id: &str, name: &str, input: &[(&str, f64)], output: &[(&str, f64)]) -> Transition {
	Transition {
		id: id.to_string(),
		name: name.to_string(),
		meta_data: Vec::new(),
		input: input
			.iter()
			.map(|(p, v)| (p.to_string(), signature("qty", *v)))
			.collect(),
		output: output
			.iter()
			.map(|(p, v)| (p.to_string(), signature("qty", *v)))
			.collect(),
		time: 1.0,
		cost: Default::default(),
	}
}

/// `p1 --5--> t1 --1--> p2 --1--> t2 --1--> p3`, with entity metadata on
/// `p1` and a two-entry name lookup.
pub(crate) fn sample_net() -> PetriNet {
	let p1_meta = vec![
		MetaData {
			kind: "agent".to_string(),
			value: Some(MetaValue::One(MetaScalar::Text("a1".to_string()))),
		},
		MetaData {
			kind: "weights".to_string(),
			value: Some(MetaValue::Many(vec![
				MetaScalar::Number(2.5),
				MetaScalar::Text("a2".to_string()),
			])),
		},
	];

	let places = [
		place("p1", "Flour", "kg", p1_meta),
		place("p2", "Dough", "kg", Vec::new()),
		place("p3", "Bread", "loaf", Vec::new()),
	];
	let transitions = [
		transition("t1", "Mix", &[("p1", 5.0)], &[("p2", 1.0)]),
		transition("t2", "Bake", &[("p2", 1.0)], &[("p3", 1.0)]),
	];

	PetriNet {
		id: "bakery-net".to_string(),
		name: "Bakery".to_string(),
		places: places.into_iter().map(|p| (p.id.clone(), p)).collect(),
		transitions: transitions.into_iter().map(|t| (t.id.clone(), t)).collect(),
		initial_marking: BTreeMap::from([("p1".to_string(), 2)]),
		name_lookup: BTreeMap::from([
			("a1".to_string(), "Alice".to_string()),
			("a2".to_string(), "Robot".to_string()),
		]),
	}
}
