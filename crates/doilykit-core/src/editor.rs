//! Pointer capture and linear undo/redo history for a doily state.

use crate::error::HistoryError;
use crate::geometry::{self, Point, SurfaceSize};
use crate::line::Line;
use crate::settings::DoilySettings;
use crate::state::DoilyState;

/// Pointer buttons as reported by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Capture state: a gesture is active between press and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Drawing,
}

/// Turns pointer events into line history on a doily state.
///
/// The line sequence itself is the undo history; undo pops its tail onto a
/// redo stack, which is discarded as soon as a new line begins or the canvas
/// is cleared. Only primary-button events draw; everything else is ignored.
#[derive(Debug, Clone, Default)]
pub struct DoilyEditor {
    state: DoilyState,
    redo_stack: Vec<Line>,
    gesture: Gesture,
}

impl DoilyEditor {
    /// Creates an editor over a fresh doily with the given settings.
    pub fn new(settings: DoilySettings) -> Self {
        Self {
            state: DoilyState::new(settings),
            redo_stack: Vec::new(),
            gesture: Gesture::Idle,
        }
    }

    /// Creates an editor over an existing document (gallery load). The
    /// document is taken as-is; history starts empty.
    pub fn with_state(state: DoilyState) -> Self {
        Self {
            state,
            redo_stack: Vec::new(),
            gesture: Gesture::Idle,
        }
    }

    /// The document being edited.
    pub fn state(&self) -> &DoilyState {
        &self.state
    }

    /// Current capture settings.
    pub fn settings(&self) -> &DoilySettings {
        &self.state.settings
    }

    /// Mutable access to the capture settings. Changes take effect for new
    /// lines and on the next render; nothing is redrawn implicitly.
    pub fn settings_mut(&mut self) -> &mut DoilySettings {
        &mut self.state.settings
    }

    /// Current gesture state.
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Deep-copy snapshot of the current document (gallery save).
    pub fn snapshot(&self) -> DoilyState {
        self.state.clone()
    }

    /// Starts a new line seeded from the current settings and captures the
    /// first point. Pending redo lines are forgotten.
    pub fn pointer_pressed(&mut self, button: PointerButton, position: Point, size: SurfaceSize) {
        if button != PointerButton::Primary {
            return;
        }
        self.redo_stack.clear();
        self.state.push_line(Line::from_settings(&self.state.settings));
        self.state.append_point(geometry::centered(position, size), size);
        self.gesture = Gesture::Drawing;
    }

    /// Captures another point into the active line. A rejected point does
    /// not end the gesture; outside a gesture this is a no-op.
    pub fn pointer_dragged(&mut self, button: PointerButton, position: Point, size: SurfaceSize) {
        if button != PointerButton::Primary || self.gesture != Gesture::Drawing {
            return;
        }
        self.state.append_point(geometry::centered(position, size), size);
    }

    /// Ends the active gesture. A gesture whose every point was rejected
    /// leaves no empty line behind.
    pub fn pointer_released(&mut self, button: PointerButton) {
        if button != PointerButton::Primary || self.gesture != Gesture::Drawing {
            return;
        }
        if self.state.last_line().is_some_and(Line::is_empty) {
            self.state.pop_line();
        }
        self.gesture = Gesture::Idle;
    }

    /// Removes the newest line onto the redo stack.
    pub fn undo(&mut self) -> Result<(), HistoryError> {
        match self.state.pop_line() {
            Some(line) => {
                self.redo_stack.push(line);
                Ok(())
            }
            None => {
                tracing::debug!("Undo requested with no lines drawn");
                Err(HistoryError::NothingToUndo)
            }
        }
    }

    /// Re-appends the most recently undone line.
    pub fn redo(&mut self) -> Result<(), HistoryError> {
        match self.redo_stack.pop() {
            Some(line) => {
                self.state.push_line(line);
                Ok(())
            }
            None => {
                tracing::debug!("Redo requested with no undone lines pending");
                Err(HistoryError::NothingToRedo)
            }
        }
    }

    /// Discards every line along with the redo stack.
    pub fn clear(&mut self) {
        self.state.clear_lines();
        self.redo_stack.clear();
        self.gesture = Gesture::Idle;
    }
}
