//! EditSession: the explicit editing context.
//!
//! Bundles the point store, the mode state and the conjugate flag so the
//! click and clear logic can be driven (and tested) without a window. Every
//! mutation is followed by a `POINTS_CHANGED` event on the attached
//! [`EventController`], which renderers treat as a redraw request.

use crate::events::{EditorEvent, EventController, EventKind};

use super::insertion::{handle_primary_click, inserted_kind};
use super::mode::{EditMode, ModeController};
use super::points::{Point, PointKind, PointStore};
use super::selection::find_removal_candidate;

/// Pointer button of a click delivered to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickButton {
    /// Inserts markers according to the active mode.
    Primary,
    /// Removes the marker under the pointer, if any.
    Secondary,
}

#[derive(Default)]
pub struct EditSession {
    store: PointStore,
    modes: ModeController,
    conjugate: bool,
    events: Option<EventController>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: EventController) -> Self {
        Self {
            events: Some(events),
            ..Self::default()
        }
    }

    pub fn set_event_controller(&mut self, events: Option<EventController>) {
        self.events = events;
    }

    pub fn store(&self) -> &PointStore {
        &self.store
    }

    pub fn mode(&self) -> EditMode {
        self.modes.mode()
    }

    pub fn conjugate(&self) -> bool {
        self.conjugate
    }

    // ── Clicks ───────────────────────────────────────────────────────────

    /// Handle a click at plane coordinate `(x, y)`.
    ///
    /// Returns `true` if the store changed. Non-finite coordinates are
    /// dropped, matching a click outside the plotted area.
    pub fn handle_click(&mut self, button: ClickButton, x: f64, y: f64) -> bool {
        if !x.is_finite() || !y.is_finite() {
            log::debug!("dropping click with undefined coordinate ({x}, {y})");
            return false;
        }
        match button {
            ClickButton::Primary => self.insert_at(x, y),
            ClickButton::Secondary => self.remove_near(Point::new(x, y)),
        }
    }

    fn insert_at(&mut self, x: f64, y: f64) -> bool {
        let mode = self.modes.mode();
        let Some(kind) = inserted_kind(mode) else {
            return false;
        };
        let added = handle_primary_click(&mut self.store, mode, x, y, self.conjugate);
        if added == 0 {
            return false;
        }
        let points = self.store.points(kind);
        let new_points = points[points.len() - added..].to_vec();
        log::debug!("{mode}: added {added} {kind}(s) at ({x:.4}, {y:.4})");
        self.emit(
            EditorEvent::new(EventKind::POINTS_CHANGED | EventKind::added(kind))
                .with_points(kind, new_points),
        );
        true
    }

    fn remove_near(&mut self, query: Point) -> bool {
        let Some((kind, target)) = find_removal_candidate(&self.store, query) else {
            return false;
        };
        if !self.store.remove(kind, target) {
            return false;
        }
        log::debug!("removed {kind} at {target}");
        self.emit(
            EditorEvent::new(EventKind::POINTS_CHANGED | EventKind::removed(kind))
                .with_points(kind, vec![target]),
        );
        true
    }

    // ── Bulk clear ───────────────────────────────────────────────────────

    pub fn clear_zeros(&mut self) {
        self.store.clear_zeros();
        self.emit(EditorEvent::new(
            EventKind::POINTS_CHANGED | EventKind::ZEROS_CLEARED,
        ));
    }

    pub fn clear_poles(&mut self) {
        self.store.clear_poles();
        self.emit(EditorEvent::new(
            EventKind::POINTS_CHANGED | EventKind::POLES_CLEARED,
        ));
    }

    pub fn clear_all(&mut self) {
        self.store.clear_all();
        self.emit(EditorEvent::new(
            EventKind::POINTS_CHANGED | EventKind::ZEROS_CLEARED | EventKind::POLES_CLEARED,
        ));
    }

    // ── Edit state ───────────────────────────────────────────────────────

    pub fn set_mode(&mut self, mode: EditMode) {
        if self.modes.mode() == mode {
            return;
        }
        self.modes.set_mode(mode);
        self.emit(EditorEvent::new(EventKind::MODE_CHANGED).with_mode(mode));
    }

    /// Toggle-group callback; see [`ModeController::on_toggle`].
    pub fn toggle_mode(&mut self, mode: EditMode, checked: bool) {
        let before = self.modes.mode();
        self.modes.on_toggle(mode, checked);
        let after = self.modes.mode();
        if before != after {
            self.emit(EditorEvent::new(EventKind::MODE_CHANGED).with_mode(after));
        }
    }

    pub fn set_conjugate(&mut self, conjugate: bool) {
        if self.conjugate == conjugate {
            return;
        }
        self.conjugate = conjugate;
        self.emit(EditorEvent::new(EventKind::CONJUGATE_CHANGED).with_flag(conjugate));
    }

    /// Number of markers of `kind` currently placed.
    pub fn count(&self, kind: PointKind) -> usize {
        self.store.points(kind).len()
    }

    fn emit(&self, event: EditorEvent) {
        if let Some(events) = &self.events {
            events.emit(event);
        }
    }
}
