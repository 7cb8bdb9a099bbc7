//! The aggregate doily document: settings plus drawn lines.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, SurfaceSize};
use crate::line::Line;
use crate::settings::DoilySettings;

/// The complete drawable document.
///
/// Lines are kept in insertion order, which is also z-order: later lines are
/// drawn on top. Cloning is a deep copy; a snapshot taken for a gallery never
/// shares mutable substructure with the live document.
///
/// The structural revision counter lets a render cache tell "a point was
/// appended to the newest line" apart from changes that require a full
/// repaint; it advances whenever a line is added, removed, or cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoilyState {
    pub settings: DoilySettings,
    lines: Vec<Line>,
    revision: u64,
}

impl DoilyState {
    /// Creates an empty doily with the given settings.
    pub fn new(settings: DoilySettings) -> Self {
        Self {
            settings,
            lines: Vec::new(),
            revision: 0,
        }
    }

    /// The drawn lines in z-order (oldest first).
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The most recently drawn line, if any.
    pub fn last_line(&self) -> Option<&Line> {
        self.lines.last()
    }

    /// Structural revision; unchanged by point appends to the newest line.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn push_line(&mut self, line: Line) {
        self.lines.push(line);
        self.revision += 1;
    }

    pub(crate) fn pop_line(&mut self) -> Option<Line> {
        let line = self.lines.pop();
        if line.is_some() {
            self.revision += 1;
        }
        line
    }

    pub(crate) fn clear_lines(&mut self) {
        if !self.lines.is_empty() {
            self.revision += 1;
        }
        self.lines.clear();
    }

    /// Appends a captured point to the newest line; no-op without lines.
    /// Appending does not advance the structural revision.
    pub(crate) fn append_point(&mut self, centered: Point, size: SurfaceSize) {
        let Self {
            settings, lines, ..
        } = self;
        if let Some(line) = lines.last_mut() {
            line.add_point(centered, size, settings);
        }
    }
}

impl Default for DoilyState {
    fn default() -> Self {
        Self::new(DoilySettings::default())
    }
}
