//! # DoilyKit Core
//!
//! Geometry, line history, and capture state for a radially symmetric
//! ("doily") drawing surface. Everything drawn is stored in a
//! resolution-independent polar representation, so the same document can be
//! painted onto a thumbnail or an export-sized image without losing fidelity.
//!
//! The crate covers:
//! - Conversion between pixel space and polar/sector space ([`geometry`])
//! - The scaled point representation with sector-wrap handling ([`point`])
//! - Lines with fixed pen attributes and adaptive interpolation ([`line`])
//! - The doily document aggregate ([`state`])
//! - Pointer capture plus linear undo/redo ([`editor`])
//!
//! Rasterisation lives in the companion `doilykit-render` crate; this crate
//! has no drawing dependency.

pub mod color;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod line;
pub mod point;
pub mod settings;
pub mod state;

pub use color::Color;
pub use editor::{DoilyEditor, Gesture, PointerButton};
pub use error::{HistoryError, RenderError};
pub use geometry::{Point, SurfaceSize};
pub use line::Line;
pub use point::ScaledPoint;
pub use settings::DoilySettings;
pub use state::DoilyState;
