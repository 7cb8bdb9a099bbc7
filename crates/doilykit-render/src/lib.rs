//! # DoilyKit Render
//!
//! Stateless rasteriser for doily states, built on `tiny-skia` for
//! high-quality 2D rendering.
//!
//! The engine reconstructs every stored line from its resolution-independent
//! polar representation and paints it at whatever output size the host asks
//! for, so previews, thumbnails, and exports all come from the same document.
//! A cached incremental path ([`RenderCache`]) keeps repaints during a drag
//! proportional to the active line instead of the whole history.

pub mod cache;
pub mod paths;
pub mod renderer;

pub use cache::RenderCache;
pub use doilykit_core::RenderError;
pub use paths::line_polylines;
pub use renderer::{render, render_image};
