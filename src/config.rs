//! Configuration for the editor window.

use crate::data::hotkeys::Hotkeys;
use crate::events::EventController;

/// Options applied once when the editor starts.
pub struct EditorConfig {
    /// Window title.
    pub title: String,
    /// Start in fullscreen. Escape toggles at runtime.
    pub fullscreen: bool,
    /// Window size used when not fullscreen (logical pixels).
    pub window_size: [f32; 2],
    /// Keyboard bindings.
    pub hotkeys: Hotkeys,
    /// Number of segments used to draw the reference unit circle.
    pub unit_circle_segments: usize,
    /// Receives change events from the session, if set.
    pub event_controller: Option<EventController>,
    /// Native options passed to eframe. `None` uses defaults.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            title: "Realtime Digital Filter".to_string(),
            fullscreen: true,
            window_size: [1400.0, 900.0],
            hotkeys: Hotkeys::default(),
            unit_circle_segments: 100,
            event_controller: None,
            native_options: None,
        }
    }
}

impl EditorConfig {
    /// Default configuration with hotkeys loaded from
    /// `$HOME/.zplane/hotkeys.yaml` when that file exists.
    pub fn load() -> Self {
        let mut cfg = Self::default();
        match Hotkeys::load_from_default_path() {
            Ok(hk) => cfg.hotkeys = hk,
            Err(crate::error::EditorError::HotkeyFileMissing(_)) => {}
            Err(e) => log::warn!("Failed to load hotkeys, using defaults: {e}"),
        }
        cfg
    }
}
