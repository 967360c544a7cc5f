//! Application shell for the zero/pole editor.
//!
//! | Sub-module  | Responsibility |
//! | ----------- | -------------- |
//! | [`update`]  | Per-frame hotkeys, panel layout, and request handling |
//! | [`run`]     | Top-level [`run_editor()`] entry point and icon loading |

mod run;
mod update;

pub use run::run_editor;

use crate::config::EditorConfig;
use crate::data::editor::EditorRequests;
use crate::data::hotkeys::Hotkeys;
use crate::data::session::EditSession;
use crate::data::signal::Signal;
use crate::events::{EditorEvent, EventController, EventKind};
use crate::panels::{ControlsPanel, Panel, SignalPanel, UnitCirclePanel};

/// Editor state owned by the eframe event loop.
///
/// The session (zero/pole store, mode, conjugate flag) lives here, separate
/// from the panels that draw it.
pub struct EditorApp {
    pub session: EditSession,
    pub signal: Option<Signal>,
    pub hotkeys: Hotkeys,

    pub unit_circle_panel: UnitCirclePanel,
    /// Panels docked to the left of the unit circle.
    pub side_panels: Vec<Box<dyn Panel>>,
    /// Panels docked below the unit circle.
    pub bottom_panels: Vec<Box<dyn Panel>>,

    pub pending_requests: EditorRequests,
    pub(crate) event_ctrl: Option<EventController>,
}

impl EditorApp {
    pub fn new(cfg: &EditorConfig) -> Self {
        let mut session = EditSession::new();
        session.set_event_controller(cfg.event_controller.clone());
        Self {
            session,
            signal: None,
            hotkeys: cfg.hotkeys.clone(),
            unit_circle_panel: UnitCirclePanel::new(cfg.unit_circle_segments),
            side_panels: vec![Box::new(ControlsPanel::default())],
            bottom_panels: vec![Box::new(SignalPanel::default())],
            pending_requests: EditorRequests::default(),
            event_ctrl: cfg.event_controller.clone(),
        }
    }

    /// Replace the signal preview with the CSV at `path`. On failure the
    /// previous preview is kept and the error is logged.
    pub fn load_signal(&mut self, path: &std::path::Path) {
        match crate::data::signal::load_signal_csv(path) {
            Ok(signal) => {
                log::info!("Loaded {} samples from {:?}", signal.len(), path);
                if let Some(ctrl) = &self.event_ctrl {
                    ctrl.emit(
                        EditorEvent::new(EventKind::SIGNAL_LOADED)
                            .with_signal(Some(path.display().to_string()), signal.len()),
                    );
                }
                self.signal = Some(signal);
            }
            Err(e) => log::error!("Failed to load signal {:?}: {e}", path),
        }
    }
}
