//! Cached incremental repaint path.
//!
//! During a drag only the newest line gains points; repainting just that line
//! and the separators on top of the previous frame keeps the hot path
//! proportional to the active line instead of the whole history. The result
//! is pixel-identical to a full render for opaque, non-anti-aliased content
//! because every layer that could differ is redrawn in the same order.

use doilykit_core::geometry::SurfaceSize;
use doilykit_core::{DoilySettings, DoilyState, RenderError};
use tiny_skia::Pixmap;

use crate::renderer;

/// Incremental renderer around a cached surface.
///
/// The cache watches the document's structural revision and settings: any
/// line added, removed, or cleared, any settings edit, and any resize forces
/// a full render, while pure point appends to the newest line take the
/// incremental path.
#[derive(Default)]
pub struct RenderCache {
    pixmap: Option<Pixmap>,
    settings: Option<DoilySettings>,
    revision: u64,
}

impl RenderCache {
    /// Creates an empty cache; the first paint always renders fully.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the cached surface so the next paint renders from scratch.
    pub fn invalidate(&mut self) {
        self.pixmap = None;
    }

    /// Paints the state, reusing the cached surface when only the newest
    /// line can have changed since the previous paint.
    pub fn paint(
        &mut self,
        state: &DoilyState,
        width: u32,
        height: u32,
    ) -> Result<&Pixmap, RenderError> {
        let size = SurfaceSize::new(width, height);
        let pixmap = match self.pixmap.take() {
            Some(mut cached) if self.reusable(&cached, state, width, height) => {
                tracing::trace!("Incremental repaint of the newest line");
                if let Some(line) = state.last_line() {
                    renderer::draw_line(&mut cached, state, line, size);
                }
                renderer::draw_separators(&mut cached, state, size);
                cached
            }
            _ => {
                tracing::debug!("Full doily render at {}x{}", width, height);
                renderer::render(state, width, height)?
            }
        };
        self.settings = Some(state.settings.clone());
        self.revision = state.revision();
        Ok(self.pixmap.insert(pixmap))
    }

    fn reusable(&self, cached: &Pixmap, state: &DoilyState, width: u32, height: u32) -> bool {
        cached.width() == width
            && cached.height() == height
            && self.revision == state.revision()
            && self.settings.as_ref() == Some(&state.settings)
    }
}
