//! Zoom-dependent sizes for graph visuals.
//!
//! Sizes are given either in world units (they grow when zooming in) or in
//! screen pixels (they stay put). [`ScaledValues`] converts all of them to
//! world units for one zoom level so drawing code can use them directly after
//! the canvas transform is applied.

/// How a size responds to the zoom factor `k`.
#[derive(Clone, Debug)]
pub enum ScaleBehavior {
	/// Constant world-space size.
	World,
	/// Constant screen-space size.
	Screen,
	/// World-space size kept within screen-space bounds.
	Clamped {
		/// Lower bound in screen pixels.
		min_screen: f64,
		/// Upper bound in screen pixels.
		max_screen: f64,
	},
}

impl ScaleBehavior {
	/// World-space value for `base` at zoom `k`.
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::World => base,
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => base.clamp(min_screen / k, max_screen / k),
		}
	}
}

/// Base sizes and how each one scales.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	/// Node radius in world units at zoom 1.
	pub node_radius: f64,
	/// How the node radius follows zoom.
	pub node_behavior: ScaleBehavior,
	/// Extra pick tolerance around a node, in screen pixels.
	pub hit_slop: f64,
	/// Label font size in pixels at zoom 1.
	pub label_size: f64,
	/// How the label size follows zoom.
	pub label_behavior: ScaleBehavior,
	/// Arrowhead length.
	pub arrow_size: f64,
	/// How the arrowhead follows zoom.
	pub arrow_behavior: ScaleBehavior,
	/// Highlight ring width in screen pixels.
	pub ring_width: f64,
	/// Gap between node and highlight ring in screen pixels.
	pub ring_offset: f64,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node_radius: 15.0,
			node_behavior: ScaleBehavior::Clamped {
				min_screen: 4.0,
				max_screen: f64::INFINITY,
			},
			hit_slop: 4.0,
			label_size: 14.0,
			label_behavior: ScaleBehavior::Clamped {
				min_screen: 9.0,
				max_screen: 28.0,
			},
			arrow_size: 10.0,
			arrow_behavior: ScaleBehavior::World,
			ring_width: 3.0,
			ring_offset: 3.0,
		}
	}
}

/// Sizes for one zoom level, all in world units.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	/// Zoom factor these values were computed for.
	pub k: f64,
	/// Drawn node radius.
	pub node_radius: f64,
	/// Pick radius, node radius plus slop.
	pub hit_radius: f64,
	/// Canvas font string, e.g. `"14px sans-serif"`.
	pub label_font: String,
	/// Arrowhead length.
	pub arrow_size: f64,
	/// Highlight ring stroke width.
	pub ring_width: f64,
	/// Gap between node and highlight ring.
	pub ring_offset: f64,
}

impl ScaledValues {
	/// Convert every size in `config` to world units at zoom `k`.
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		let node_radius = config.node_behavior.apply(config.node_radius, k);
		let label_size = config.label_behavior.apply(config.label_size, k);

		Self {
			k,
			node_radius,
			hit_radius: node_radius + config.hit_slop / k,
			label_font: format!("{}px sans-serif", label_size),
			arrow_size: config.arrow_behavior.apply(config.arrow_size, k),
			ring_width: config.ring_width / k,
			ring_offset: config.ring_offset / k,
		}
	}

	/// Edge line width in world units for a width given in screen pixels at zoom 1.
	/// Edges thin out when zooming out but never vanish.
	pub fn edge_width(&self, base: f64) -> f64 {
		ScaleBehavior::Clamped {
			min_screen: 1.0,
			max_screen: f64::INFINITY,
		}
		.apply(base, self.k)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn behaviors() {
		assert_eq!(ScaleBehavior::World.apply(10.0, 2.0), 10.0);
		assert_eq!(ScaleBehavior::Screen.apply(10.0, 2.0), 5.0);
		let clamped = ScaleBehavior::Clamped {
			min_screen: 4.0,
			max_screen: 8.0,
		};
		// 10 world units at k=0.1 is 1 px on screen, raised to 4 px = 40 world units.
		assert_eq!(clamped.apply(10.0, 0.1), 40.0);
		// At k=2 it would be 20 px, capped to 8 px = 4 world units.
		assert_eq!(clamped.apply(10.0, 2.0), 4.0);
	}

	#[test]
	fn hit_radius_exceeds_node_radius() {
		let scale = ScaledValues::new(&ScaleConfig::default(), 1.0);
		assert_eq!(scale.node_radius, 15.0);
		assert_eq!(scale.hit_radius, 19.0);
		assert_eq!(scale.label_font, "14px sans-serif");
	}

	#[test]
	fn edge_width_has_screen_floor() {
		let far = ScaledValues::new(&ScaleConfig::default(), 0.1);
		assert_eq!(far.edge_width(4.5), 10.0);
		let near = ScaledValues::new(&ScaleConfig::default(), 2.0);
		assert_eq!(near.edge_width(4.5), 4.5);
	}
}
