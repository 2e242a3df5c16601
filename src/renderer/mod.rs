//! SVG renderer for board snapshots
//!
//! This module turns a [`Scene`](crate::scene::Scene) into an SVG string
//! with CSS classes for each drawn layer.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_scene_svg, SvgBuilder, SvgRenderer};
