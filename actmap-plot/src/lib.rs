#![warn(missing_docs)]
//! Graphical rendering of frameskip/action heatmaps.
//!
//! [`PlotRenderer`] implements [`Renderer`](actmap_core::Renderer) by drawing
//! the panels side by side with plotters. The image can be written as PNG or,
//! with the `window` feature, shown with [`HeatmapWindow`].
mod image;
mod plot;
#[cfg(feature = "window")]
mod window;

pub use image::RgbImage;
pub use plot::{PlotRenderer, MAX_IMAGE_SIDE};
#[cfg(feature = "window")]
pub use window::HeatmapWindow;
