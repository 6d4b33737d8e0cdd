//! Graphviz export of a whole net.
//!
//! Places render as circles carrying their initial marking, transitions as
//! filled boxes, and every edge is labeled with its signature. Fill and
//! edge tints come from the store's color table, so entities keep one
//! color across the graph and the per-node views.

use super::color::Color;
use super::meta::unique_referenced_ids;
use super::store::NetStore;
use super::types::Place;

const NEUTRAL: Color = Color::rgb(0x55, 0x55, 0x55);

/// Render the live net as a Graphviz digraph.
pub fn to_dot(store: &NetStore) -> String {
	let net = store.net();
	let colors = store.color_table();

	let place_color = |place: &Place| {
		unique_referenced_ids(&place.meta_data)
			.iter()
			.find_map(|id| colors.get(id))
			.copied()
			.unwrap_or(NEUTRAL)
	};

	let mut dot = format!(
		"digraph \"{}\" {{\nbgcolor=\"transparent\"\nfontname=\"helvetica\"\n",
		escape(&net.name)
	);

	for place in net.places.values() {
		dot.push_str(&format!("// Place {}\n", place.name));
		dot.push_str(&format!(
			"\t\"{}\" [label=\"{} ({} {})\",fillcolor=\"{}\",style=filled,shape=circle];\n",
			escape(&place.id),
			escape(&place.name),
			store.marking(&place.id),
			escape(&place.tokens),
			place_color(place).to_css(),
		));
	}

	for transition in net.transitions.values() {
		dot.push_str(&format!("// Transition {}\n", transition.name));
		dot.push_str(&format!(
			"\t\"{}\" [label=\"{}\",shape=box,style=filled,fillcolor=\"#000000\",fontcolor=\"#ffffff\"];\n",
			escape(&transition.id),
			escape(&transition.name),
		));
	}

	for transition in net.transitions.values() {
		for (place_id, signature) in &transition.input {
			let tint = net.places.get(place_id).map_or(NEUTRAL, &place_color);
			dot.push_str(&format!(
				"\t\"{}\" -> \"{}\" [label=\"{}\",color=\"{}\",fontcolor=\"{}\"];\n",
				escape(place_id),
				escape(&transition.id),
				signature.value,
				tint.to_css(),
				tint.to_css(),
			));
		}
		for (place_id, signature) in &transition.output {
			let tint = net.places.get(place_id).map_or(NEUTRAL, &place_color);
			dot.push_str(&format!(
				"\t\"{}\" -> \"{}\" [label=\"{}\",color=\"{}\",fontcolor=\"{}\"];\n",
				escape(&transition.id),
				escape(place_id),
				signature.value,
				tint.to_css(),
				tint.to_css(),
			));
		}
	}

	dot.push_str("}\n");
	dot
}

fn escape(text: &str) -> String {
	text.replace('"', "\\\"")
}
