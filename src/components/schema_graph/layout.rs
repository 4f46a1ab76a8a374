//! Automatic layouts for the schema graph.
//!
//! The hierarchical layout is a compact Sugiyama pipeline:
//! 1. Cycle removal: DFS back edges and self loops are ignored
//! 2. Rank assignment by longest path from the sources
//! 3. Crossing reduction with alternating barycenter sweeps
//! 4. Coordinate assignment: nodes are boxes as wide as their label, packed
//!    left to right and each rank centered on the y axis
//!
//! Positions are in world units around the origin; the view transform fits
//! them to the canvas afterwards.

use serde::Deserialize;

/// Which layout to run when the element list changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
	/// Layered top-to-bottom placement, positions stay fixed.
	#[default]
	Hierarchical,
	/// Continuous physics simulation.
	Force,
}

/// Spacing parameters for [`hierarchical`].
#[derive(Clone, Debug)]
pub struct HierarchicalConfig {
	/// Horizontal gap between the boxes of neighbors in a rank.
	pub node_sep: f64,
	/// Vertical distance between ranks.
	pub rank_sep: f64,
	/// Multiplier applied to both separations.
	pub spacing_factor: f64,
	/// Number of down+up barycenter sweep pairs.
	pub sweeps: usize,
}

impl Default for HierarchicalConfig {
	fn default() -> Self {
		Self {
			node_sep: 30.0,
			rank_sep: 80.0,
			spacing_factor: 1.3,
			sweeps: 4,
		}
	}
}

/// Rough width of `text` drawn at `font_px`, used to size layout boxes.
pub fn label_width(text: &str, font_px: f64) -> f64 {
	const AVG_GLYPH_WIDTH: f64 = 0.6;
	text.chars().count() as f64 * font_px * AVG_GLYPH_WIDTH
}

/// Axis-aligned bounds of a set of positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Left edge.
	pub min_x: f64,
	/// Top edge.
	pub min_y: f64,
	/// Right edge.
	pub max_x: f64,
	/// Bottom edge.
	pub max_y: f64,
}

impl Bounds {
	/// Smallest bounds containing every position, `None` when empty.
	pub fn of(positions: &[(f64, f64)]) -> Option<Self> {
		let (&(x0, y0), rest) = positions.split_first()?;
		Some(rest.iter().fold(
			Bounds {
				min_x: x0,
				min_y: y0,
				max_x: x0,
				max_y: y0,
			},
			|b, &(x, y)| Bounds {
				min_x: b.min_x.min(x),
				min_y: b.min_y.min(y),
				max_x: b.max_x.max(x),
				max_y: b.max_y.max(y),
			},
		))
	}

	/// Horizontal extent.
	pub fn width(&self) -> f64 {
		self.max_x - self.min_x
	}

	/// Vertical extent.
	pub fn height(&self) -> f64 {
		self.max_y - self.min_y
	}

	/// Midpoint of the bounds.
	pub fn center(&self) -> (f64, f64) {
		((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
	}
}

/// Lay out one node per entry of `widths` (box width in world units),
/// connected by `edges` (index pairs, source first). Out-of-range edges are
/// ignored.
pub fn hierarchical(
	widths: &[f64],
	edges: &[(usize, usize)],
	config: &HierarchicalConfig,
) -> Vec<(f64, f64)> {
	let node_count = widths.len();
	if node_count == 0 {
		return Vec::new();
	}
	let dag = acyclic_edges(node_count, edges);
	let ranks = longest_path_ranks(node_count, &dag);
	let layers = order_layers(node_count, &dag, &ranks, config.sweeps);

	let dy = config.rank_sep * config.spacing_factor;
	let mut positions = vec![(0.0, 0.0); node_count];
	for (rank, layer) in layers.iter().enumerate() {
		let mut cursor = 0.0;
		let mut centers = Vec::with_capacity(layer.len());
		for &node in layer {
			let w = widths[node].max(0.0);
			centers.push(cursor + w / 2.0);
			cursor += w + config.node_sep;
		}
		let offset = (cursor - config.node_sep) / 2.0;
		for (&node, center) in layer.iter().zip(centers) {
			positions[node] = ((center - offset) * config.spacing_factor, rank as f64 * dy);
		}
	}
	positions
}

/// Edges that remain after removing self loops and DFS back edges.
fn acyclic_edges(n: usize, edges: &[(usize, usize)]) -> Vec<(usize, usize)> {
	let mut adjacency = vec![Vec::new(); n];
	for &(s, t) in edges {
		if s < n && t < n && s != t {
			adjacency[s].push(t);
		}
	}

	// 0 = unvisited, 1 = on stack, 2 = done
	let mut mark = vec![0u8; n];
	let mut kept = Vec::new();
	for root in 0..n {
		if mark[root] != 0 {
			continue;
		}
		let mut stack = vec![(root, 0usize)];
		mark[root] = 1;
		while let Some(top) = stack.last_mut() {
			let (node, cursor) = *top;
			top.1 += 1;
			if let Some(&child) = adjacency[node].get(cursor) {
				match mark[child] {
					0 => {
						kept.push((node, child));
						mark[child] = 1;
						stack.push((child, 0));
					}
					2 => kept.push((node, child)),
					_ => {} // back edge
				}
			} else {
				mark[node] = 2;
				stack.pop();
			}
		}
	}
	kept
}

/// Rank of each node: length of the longest path reaching it from a source.
fn longest_path_ranks(n: usize, dag: &[(usize, usize)]) -> Vec<usize> {
	let mut in_degree = vec![0usize; n];
	let mut successors = vec![Vec::new(); n];
	for &(s, t) in dag {
		in_degree[t] += 1;
		successors[s].push(t);
	}

	let mut ranks = vec![0usize; n];
	let mut queue: Vec<usize> = (0..n).filter(|&i| in_degree[i] == 0).collect();
	while let Some(node) = queue.pop() {
		for &next in &successors[node] {
			ranks[next] = ranks[next].max(ranks[node] + 1);
			in_degree[next] -= 1;
			if in_degree[next] == 0 {
				queue.push(next);
			}
		}
	}
	ranks
}

/// Group nodes by rank and reduce crossings with barycenter sweeps.
fn order_layers(
	n: usize,
	dag: &[(usize, usize)],
	ranks: &[usize],
	sweeps: usize,
) -> Vec<Vec<usize>> {
	let depth = ranks.iter().copied().max().unwrap_or(0) + 1;
	let mut layers = vec![Vec::new(); depth];
	for node in 0..n {
		layers[ranks[node]].push(node);
	}

	let mut predecessors = vec![Vec::new(); n];
	let mut successors = vec![Vec::new(); n];
	for &(s, t) in dag {
		predecessors[t].push(s);
		successors[s].push(t);
	}

	let mut slot = vec![0usize; n];
	let index_slots = |layers: &[Vec<usize>], slot: &mut [usize]| {
		for layer in layers {
			for (i, &node) in layer.iter().enumerate() {
				slot[node] = i;
			}
		}
	};
	index_slots(&layers, &mut slot);

	for _ in 0..sweeps {
		for rank in 1..depth {
			sort_by_barycenter(&mut layers[rank], &predecessors, &slot);
			index_slots(&layers[rank..=rank], &mut slot);
		}
		for rank in (0..depth.saturating_sub(1)).rev() {
			sort_by_barycenter(&mut layers[rank], &successors, &slot);
			index_slots(&layers[rank..=rank], &mut slot);
		}
	}
	layers
}

/// Stable sort by mean slot of the linked nodes; unlinked nodes keep their slot.
fn sort_by_barycenter(layer: &mut [usize], links: &[Vec<usize>], slot: &[usize]) {
	let mut keyed: Vec<(f64, usize)> = layer
		.iter()
		.map(|&node| {
			let linked = &links[node];
			let key = if linked.is_empty() {
				slot[node] as f64
			} else {
				linked.iter().map(|&m| slot[m] as f64).sum::<f64>() / linked.len() as f64
			};
			(key, node)
		})
		.collect();
	keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
	for (dst, (_, node)) in layer.iter_mut().zip(keyed) {
		*dst = node;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn points(n: usize) -> Vec<f64> {
		vec![0.0; n]
	}

	fn rank_of(positions: &[(f64, f64)], node: usize, config: &HierarchicalConfig) -> usize {
		(positions[node].1 / (config.rank_sep * config.spacing_factor)).round() as usize
	}

	#[test]
	fn chain_descends_one_rank_per_edge() {
		let config = HierarchicalConfig::default();
		let positions = hierarchical(&points(3), &[(0, 1), (1, 2)], &config);
		assert_eq!(
			(0..3).map(|i| rank_of(&positions, i, &config)).collect::<Vec<_>>(),
			vec![0, 1, 2]
		);
		assert!(positions.iter().all(|&(x, _)| x == 0.0));
	}

	#[test]
	fn diamond_uses_longest_path() {
		// 0 -> 1 -> 3, 0 -> 2 -> 3, 0 -> 3
		let config = HierarchicalConfig::default();
		let positions = hierarchical(&points(4), &[(0, 1), (0, 2), (1, 3), (2, 3), (0, 3)], &config);
		assert_eq!(rank_of(&positions, 3, &config), 2);
		assert_eq!(rank_of(&positions, 1, &config), 1);
		assert_eq!(rank_of(&positions, 2, &config), 1);
		// Siblings are centered around the axis.
		assert_eq!(positions[1].0, -positions[2].0);
	}

	#[test]
	fn cycles_and_self_loops_terminate() {
		let config = HierarchicalConfig::default();
		let positions = hierarchical(&points(3), &[(0, 1), (1, 2), (2, 0), (1, 1)], &config);
		assert_eq!(positions.len(), 3);
		assert_eq!(rank_of(&positions, 0, &config), 0);
		assert_eq!(rank_of(&positions, 2, &config), 2);
	}

	#[test]
	fn isolated_nodes_share_the_top_rank() {
		let config = HierarchicalConfig::default();
		let positions = hierarchical(&points(3), &[], &config);
		assert!(positions.iter().all(|&(_, y)| y == 0.0));
		let sep = config.node_sep * config.spacing_factor;
		assert_eq!(positions[0].0, -sep);
		assert_eq!(positions[2].0, sep);
	}

	#[test]
	fn wide_labels_do_not_overlap() {
		let config = HierarchicalConfig::default();
		let wide = label_width("MedicationAdministration", 14.0);
		let narrow = label_width("Task", 14.0);
		let widths = [wide, narrow, wide];
		let positions = hierarchical(&widths, &[], &config);

		let mut boxes: Vec<(f64, f64)> = positions
			.iter()
			.zip(widths)
			.map(|(&(x, _), w)| (x - w / 2.0, x + w / 2.0))
			.collect();
		boxes.sort_by(|a, b| a.0.total_cmp(&b.0));
		for pair in boxes.windows(2) {
			assert!(pair[1].0 - pair[0].1 >= config.node_sep - 1e-9, "{pair:?}");
		}
		// Still centered.
		assert!((positions[0].0 + positions[2].0).abs() < 1e-9);
	}

	#[test]
	fn spacing_factor_scales_distances() {
		let tight = HierarchicalConfig {
			spacing_factor: 1.0,
			..HierarchicalConfig::default()
		};
		let loose = HierarchicalConfig::default();
		let a = hierarchical(&points(2), &[(0, 1)], &tight);
		let b = hierarchical(&points(2), &[(0, 1)], &loose);
		assert!((b[1].1 - a[1].1 * 1.3).abs() < 1e-9);
	}

	#[test]
	fn barycenter_sweep_untangles_crossing() {
		// Top rank 0,1; bottom rank 2,3 with 0->3 and 1->2 crossing in input order.
		let config = HierarchicalConfig::default();
		let positions = hierarchical(&points(4), &[(0, 3), (1, 2)], &config);
		let top_left = positions[0].0 < positions[1].0;
		let bottom_left = positions[3].0 < positions[2].0;
		assert_eq!(top_left, bottom_left);
	}

	#[test]
	fn bad_edges_are_ignored() {
		let positions = hierarchical(&points(2), &[(0, 9), (5, 1)], &HierarchicalConfig::default());
		assert_eq!(positions.len(), 2);
	}

	#[test]
	fn bounds_cover_all_positions() {
		assert!(Bounds::of(&[]).is_none());
		let b = Bounds::of(&[(0.0, 5.0), (-2.0, 1.0), (4.0, 3.0)]).unwrap();
		assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (-2.0, 1.0, 4.0, 5.0));
		assert_eq!(b.center(), (1.0, 3.0));
		assert_eq!((b.width(), b.height()), (6.0, 4.0));
	}
}
