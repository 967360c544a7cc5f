//! EditorData: a view struct handed to panels while rendering.

use super::hotkeys::Hotkeys;
use super::session::EditSession;
use super::signal::Signal;

/// Requests raised by panels during a frame and consumed by the app after
/// rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorRequests {
    pub open_signal: bool,
    pub toggle_fullscreen: bool,
}

impl EditorRequests {
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

pub struct EditorData<'a> {
    pub session: &'a mut EditSession,
    pub signal: &'a Option<Signal>,
    pub hotkeys: &'a Hotkeys,
    pub requests: &'a mut EditorRequests,
}
