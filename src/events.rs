//! Change notifications for the editor.
//!
//! Every mutation of the zero/pole store is published through an
//! [`EventController`] so that renderers and external observers know when to
//! redraw. Each event carries a set of [`EventKind`] flags; a single removal
//! is both `POINTS_CHANGED` and `ZERO_REMOVED`, for instance.
//!
//! Subscribers pass an [`EventFilter`] (an OR mask) and receive matching
//! events on an `mpsc` channel. Emission never blocks and never waits for the
//! receiver.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::data::mode::EditMode;
use crate::data::points::{Point, PointKind};

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing the categories an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u64);

impl EventKind {
    // ── Store ────────────────────────────────────────────────────────────
    /// The zero or pole collections changed; renderers should redraw.
    pub const POINTS_CHANGED: Self = Self(1 << 0);
    /// One or more zeros were inserted.
    pub const ZERO_ADDED: Self = Self(1 << 1);
    /// One or more poles were inserted.
    pub const POLE_ADDED: Self = Self(1 << 2);
    /// A zero was removed by a proximity click.
    pub const ZERO_REMOVED: Self = Self(1 << 3);
    /// A pole was removed by a proximity click.
    pub const POLE_REMOVED: Self = Self(1 << 4);
    /// All zeros were cleared.
    pub const ZEROS_CLEARED: Self = Self(1 << 5);
    /// All poles were cleared.
    pub const POLES_CLEARED: Self = Self(1 << 6);

    // ── Edit state ───────────────────────────────────────────────────────
    /// The active edit mode changed.
    pub const MODE_CHANGED: Self = Self(1 << 7);
    /// The conjugate flag changed.
    pub const CONJUGATE_CHANGED: Self = Self(1 << 8);

    // ── Collaborators ────────────────────────────────────────────────────
    /// A signal file was loaded into the preview.
    pub const SIGNAL_LOADED: Self = Self(1 << 9);
    /// Fullscreen was toggled.
    pub const FULLSCREEN_TOGGLED: Self = Self(1 << 10);

    /// Wildcard: matches every event kind.
    pub const ALL: Self = Self(u64::MAX);

    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether `self` contains all bits in `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether `self` shares at least one bit with `other`.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn added(kind: PointKind) -> Self {
        match kind {
            PointKind::Zero => Self::ZERO_ADDED,
            PointKind::Pole => Self::POLE_ADDED,
        }
    }

    pub fn removed(kind: PointKind) -> Self {
        match kind {
            PointKind::Zero => Self::ZERO_REMOVED,
            PointKind::Pole => Self::POLE_REMOVED,
        }
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for EventKind {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == EventKind::ALL {
            return write!(f, "ALL");
        }

        let pairs: &[(EventKind, &str)] = &[
            (EventKind::POINTS_CHANGED, "POINTS_CHANGED"),
            (EventKind::ZERO_ADDED, "ZERO_ADDED"),
            (EventKind::POLE_ADDED, "POLE_ADDED"),
            (EventKind::ZERO_REMOVED, "ZERO_REMOVED"),
            (EventKind::POLE_REMOVED, "POLE_REMOVED"),
            (EventKind::ZEROS_CLEARED, "ZEROS_CLEARED"),
            (EventKind::POLES_CLEARED, "POLES_CLEARED"),
            (EventKind::MODE_CHANGED, "MODE_CHANGED"),
            (EventKind::CONJUGATE_CHANGED, "CONJUGATE_CHANGED"),
            (EventKind::SIGNAL_LOADED, "SIGNAL_LOADED"),
            (EventKind::FULLSCREEN_TOGGLED, "FULLSCREEN_TOGGLED"),
        ];

        let mut names = Vec::new();
        let mut known_bits: u64 = 0;
        for (kind, name) in pairs {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }
        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{:x}", extra));
        }
        write!(f, "{}", names.join("|"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EditorEvent
// ─────────────────────────────────────────────────────────────────────────────

/// Metadata for insertions and removals.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMeta {
    pub kind: PointKind,
    /// Points that were added or removed, in store order.
    pub points: Vec<Point>,
}

/// Metadata for a loaded signal preview.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalMeta {
    pub path: Option<String>,
    pub samples: usize,
}

/// An event emitted by the editor.
#[derive(Debug, Clone)]
pub struct EditorEvent {
    pub kinds: EventKind,
    /// Seconds since the controller was created. Set on emission.
    pub timestamp: f64,

    pub point: Option<PointMeta>,
    /// New edit mode for `MODE_CHANGED`.
    pub mode: Option<EditMode>,
    /// New flag value for `CONJUGATE_CHANGED` and `FULLSCREEN_TOGGLED`.
    pub flag: Option<bool>,
    pub signal: Option<SignalMeta>,
}

impl EditorEvent {
    pub fn new(kinds: EventKind) -> Self {
        Self {
            kinds,
            timestamp: 0.0,
            point: None,
            mode: None,
            flag: None,
            signal: None,
        }
    }

    pub fn with_points(mut self, kind: PointKind, points: Vec<Point>) -> Self {
        self.point = Some(PointMeta { kind, points });
        self
    }

    pub fn with_mode(mut self, mode: EditMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_flag(mut self, flag: bool) -> Self {
        self.flag = Some(flag);
        self
    }

    pub fn with_signal(mut self, path: Option<String>, samples: usize) -> Self {
        self.signal = Some(SignalMeta { path, samples });
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventFilter
// ─────────────────────────────────────────────────────────────────────────────

/// OR mask selecting which event kinds a subscriber receives.
#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    #[inline]
    pub fn matches(&self, event: &EditorEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

struct Subscriber {
    filter: EventFilter,
    sender: Sender<EditorEvent>,
}

/// Distributes [`EditorEvent`]s to subscribers.
///
/// Cloning yields another handle to the same subscriber list, so a clone can
/// be given to the session while the original stays with external code.
#[derive(Clone)]
pub struct EventController {
    inner: Arc<Mutex<EventCtrlInner>>,
}

struct EventCtrlInner {
    subscribers: Vec<Subscriber>,
    start_instant: std::time::Instant,
}

impl EventController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventCtrlInner {
                subscribers: Vec::new(),
                start_instant: std::time::Instant::now(),
            })),
        }
    }

    /// Subscribe to events matching `filter`.
    pub fn subscribe(&self, filter: EventFilter) -> Receiver<EditorEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        match self.inner.lock() {
            Ok(mut inner) => inner.subscribers.push(Subscriber { filter, sender: tx }),
            Err(_) => log::error!("event controller lock poisoned; subscriber dropped"),
        }
        rx
    }

    pub fn subscribe_all(&self) -> Receiver<EditorEvent> {
        self.subscribe(EventFilter::all())
    }

    /// Deliver `event` to every matching subscriber. Subscribers whose
    /// receiver has been dropped are removed.
    pub fn emit(&self, mut event: EditorEvent) {
        let Ok(mut inner) = self.inner.lock() else {
            log::error!("event controller lock poisoned; dropping {}", event.kinds);
            return;
        };
        event.timestamp = inner.start_instant.elapsed().as_secs_f64();
        log::trace!("emit {} at {:.3}s", event.kinds, event.timestamp);
        inner.subscribers.retain(|sub| {
            if sub.filter.matches(&event) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().map(|i| i.subscribers.len()).unwrap_or(0)
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_union_and_intersection() {
        let changed = EventKind::POINTS_CHANGED;
        let added = EventKind::ZERO_ADDED;
        let combined = changed | added;
        assert!(combined.contains(changed));
        assert!(combined.contains(added));
        assert!(combined.intersects(added));
        assert!(!EventKind::MODE_CHANGED.intersects(changed));
    }

    #[test]
    fn event_kind_display_lists_names() {
        let k = EventKind::POINTS_CHANGED | EventKind::POLE_REMOVED;
        assert_eq!(k.to_string(), "POINTS_CHANGED|POLE_REMOVED");
        assert_eq!(EventKind(0).to_string(), "EMPTY");
        assert_eq!(EventKind::ALL.to_string(), "ALL");
    }

    #[test]
    fn filter_only_matches_selected_kinds() {
        let filter = EventFilter::only(EventKind::POINTS_CHANGED);
        assert!(filter.matches(&EditorEvent::new(
            EventKind::POINTS_CHANGED | EventKind::ZERO_ADDED
        )));
        assert!(!filter.matches(&EditorEvent::new(EventKind::MODE_CHANGED)));
    }

    #[test]
    fn controller_routes_by_filter() {
        let ctrl = EventController::new();
        let rx_all = ctrl.subscribe_all();
        let rx_points = ctrl.subscribe(EventFilter::only(EventKind::POINTS_CHANGED));
        let rx_mode = ctrl.subscribe(EventFilter::only(EventKind::MODE_CHANGED));

        ctrl.emit(EditorEvent::new(EventKind::POINTS_CHANGED));

        assert!(rx_all.try_recv().is_ok());
        assert!(rx_points.try_recv().is_ok());
        assert!(rx_mode.try_recv().is_err());
    }

    #[test]
    fn dropped_receivers_are_pruned() {
        let ctrl = EventController::new();
        let rx = ctrl.subscribe_all();
        let _keep = ctrl.subscribe_all();
        drop(rx);
        ctrl.emit(EditorEvent::new(EventKind::POINTS_CHANGED));
        assert_eq!(ctrl.subscriber_count(), 1);
    }
}
