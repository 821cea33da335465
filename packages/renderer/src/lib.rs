//! # Bloq Renderer
//!
//! Evaluates a block collection to a visual tree for one device kind.
//!
//! ## Purpose
//!
//! The renderer turns the content model into a host-agnostic visual
//! tree: device-scaled geometry, resolved style fallbacks, composed
//! background layers, one subtree per block. It is pure — the builder
//! re-runs it after every mutation and after every breakpoint change,
//! and identical inputs always produce identical trees.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bloq_renderer::{render_config, DeviceKind};
//!
//! let tree = render_config(&config, DeviceKind::for_width(viewport_width));
//! ```

pub mod device;
pub mod render;
pub mod tokens;
pub mod vnode;

#[cfg(test)]
mod tests_render;

#[cfg(test)]
mod tests_scenarios;

pub use device::{DeviceKind, MOBILE_BREAKPOINT, TABLET_BREAKPOINT};
pub use render::{render, render_block, render_config};
pub use vnode::{VisualNode, VisualTree};
