//! Deterministic display colors for metadata-referenced entities.
//!
//! Every id in the net's name lookup gets a color drawn from a cyclic,
//! hue-spanning ramp. Colors are assigned per *distinct resolved display
//! name*, not per key, so two ids naming the same entity always render
//! identically. Assignment order is fixed by the net's canonical
//! (lexicographic) key order, making the table reproducible across runs.

use std::collections::BTreeMap;

use super::types::PetriNet;

/// An opaque RGB display color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
}

impl Color {
	/// Construct from raw channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Sample the rainbow ramp at `t` in `[0, 1)`.
	pub fn from_fraction(t: f64) -> Self {
		let c = colorous::RAINBOW.eval_continuous(t);
		Self::rgb(c.r, c.g, c.b)
	}

	/// CSS hex form, e.g. `#5e81ac`.
	pub fn to_css(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Entity id → display color, for every key of the net's name lookup.
pub type ColorTable = BTreeMap<String, Color>;

/// Build the full color table for a net.
///
/// The i-th of n distinct display values (first-seen order over the
/// lexicographic key traversal) gets the ramp color at `i / n`; each key
/// then inherits the color of its resolved value. An empty lookup yields
/// an empty table.
pub fn color_table(net: &PetriNet) -> ColorTable {
	let mut value_index: BTreeMap<&str, usize> = BTreeMap::new();
	for value in net.name_lookup.values() {
		let next = value_index.len();
		value_index.entry(value).or_insert(next);
	}
	let distinct = value_index.len();

	net.name_lookup
		.iter()
		.map(|(id, value)| {
			let i = value_index[value.as_str()];
			(id.clone(), Color::from_fraction(i as f64 / distinct as f64))
		})
		.collect()
}
