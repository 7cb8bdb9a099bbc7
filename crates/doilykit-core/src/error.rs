//! Error types for DoilyKit.
//!
//! The history conditions are recoverable, user-facing states (a disabled
//! menu item, a status message) rather than faults; the render error covers
//! the one target a raster surface cannot represent at all.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// History operation failures reported by the capture controller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    /// Undo was requested with no lines drawn.
    #[error("Nothing to undo")]
    NothingToUndo,

    /// Redo was requested with no undone lines pending.
    #[error("Nothing to redo")]
    NothingToRedo,
}

/// Rendering failures.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// The requested surface has no pixels to draw on.
    #[error("Cannot render to an empty {width}x{height} surface")]
    EmptySurface {
        /// Requested surface width in pixels.
        width: u32,
        /// Requested surface height in pixels.
        height: u32,
    },
}
