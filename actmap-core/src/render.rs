//! Rendering of heatmaps.
//!
//! A [`Renderer`] turns a sequence of [`HeatmapPanel`]s into some output.
//! [`TextRenderer`] produces a fixed-width table for terminals; graphical
//! renderers live in other crates and implement the same trait.
mod base;
mod text;

pub use base::{HeatmapPanel, Renderer};
pub use text::TextRenderer;
