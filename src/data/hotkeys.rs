//! Keyboard shortcuts for the editor.
//!
//! Bindings are a modifier plus a single character and can be persisted as
//! YAML under `$HOME/.zplane/hotkeys.yaml`. Escape is not configurable: it
//! always toggles fullscreen.
//!
//! Only fresh key presses trigger actions; auto-repeat from a held key is
//! ignored. Defaults avoid Ctrl+X/C/V because the native backend turns those
//! into clipboard events instead of key events.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use eframe::egui;

use crate::error::{EditorError, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    None,
    Ctrl,
    Alt,
    Shift,
    CtrlAlt,
    CtrlShift,
    AltShift,
    CtrlAltShift,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modifier::None => "",
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::CtrlAlt => "Ctrl+Alt",
            Modifier::CtrlShift => "Ctrl+Shift",
            Modifier::AltShift => "Alt+Shift",
            Modifier::CtrlAltShift => "Ctrl+Alt+Shift",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotkey {
    pub modifier: Modifier,
    pub key: char,
}

impl Hotkey {
    pub fn new(modifier: Modifier, key: char) -> Self {
        Self { modifier, key }
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self.key {
            ' ' => "Space".to_string(),
            other => other.to_string(),
        };
        if self.modifier == Modifier::None {
            write!(f, "{}", key)
        } else {
            write!(f, "{}+{}", self.modifier, key)
        }
    }
}

impl FromStr for Hotkey {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty hotkey".to_string());
        }
        let parts: Vec<&str> = s.split('+').map(|p| p.trim()).collect();
        let Some((last, mods)) = parts.split_last() else {
            return Err("invalid hotkey".to_string());
        };
        let key = match last.to_lowercase().as_str() {
            "space" => ' ',
            _ => {
                let mut chars = last.chars();
                let ch = chars.next().ok_or_else(|| "no key char".to_string())?;
                if chars.next().is_some() {
                    return Err(format!("unknown key '{}'", last));
                }
                ch.to_ascii_uppercase()
            }
        };
        let mut lowers: Vec<String> = mods.iter().map(|m| m.to_lowercase()).collect();
        lowers.sort();
        lowers.dedup();
        if lowers.len() != mods.len() {
            return Err(format!("duplicate modifier in '{}'", s));
        }
        let lowers: Vec<&str> = lowers.iter().map(String::as_str).collect();
        let modifier = match lowers.as_slice() {
            [] => Modifier::None,
            ["ctrl"] | ["control"] => Modifier::Ctrl,
            ["alt"] => Modifier::Alt,
            ["shift"] => Modifier::Shift,
            ["alt", "ctrl"] => Modifier::CtrlAlt,
            ["ctrl", "shift"] => Modifier::CtrlShift,
            ["alt", "shift"] => Modifier::AltShift,
            ["alt", "ctrl", "shift"] => Modifier::CtrlAltShift,
            other => return Err(format!("unknown modifier combo '{:?}'", other)),
        };
        Ok(Hotkey { modifier, key })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotkeys {
    pub open_signal: Option<Hotkey>,
    pub mode_none: Option<Hotkey>,
    pub mode_zero: Option<Hotkey>,
    pub mode_pole: Option<Hotkey>,
    pub mode_double_zero: Option<Hotkey>,
    pub mode_double_pole: Option<Hotkey>,
    pub conjugate: Option<Hotkey>,
    pub clear_zeros: Option<Hotkey>,
    pub clear_poles: Option<Hotkey>,
    pub clear_all: Option<Hotkey>,
}

impl Default for Hotkeys {
    fn default() -> Self {
        Self {
            open_signal: Some(Hotkey::new(Modifier::Ctrl, 'O')),
            mode_none: Some(Hotkey::new(Modifier::None, 'N')),
            mode_zero: Some(Hotkey::new(Modifier::None, 'Z')),
            mode_pole: Some(Hotkey::new(Modifier::None, 'P')),
            mode_double_zero: Some(Hotkey::new(Modifier::Shift, 'Z')),
            mode_double_pole: Some(Hotkey::new(Modifier::Shift, 'P')),
            conjugate: Some(Hotkey::new(Modifier::None, 'C')),
            clear_zeros: Some(Hotkey::new(Modifier::Ctrl, 'Z')),
            clear_poles: Some(Hotkey::new(Modifier::Ctrl, 'P')),
            clear_all: Some(Hotkey::new(Modifier::Ctrl, 'R')),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HotkeyName {
    OpenSignal,
    ModeNone,
    ModeZero,
    ModePole,
    ModeDoubleZero,
    ModeDoublePole,
    Conjugate,
    ClearZeros,
    ClearPoles,
    ClearAll,
}

impl HotkeyName {
    pub const ALL: [HotkeyName; 10] = [
        HotkeyName::OpenSignal,
        HotkeyName::ModeNone,
        HotkeyName::ModeZero,
        HotkeyName::ModePole,
        HotkeyName::ModeDoubleZero,
        HotkeyName::ModeDoublePole,
        HotkeyName::Conjugate,
        HotkeyName::ClearZeros,
        HotkeyName::ClearPoles,
        HotkeyName::ClearAll,
    ];

    pub fn description(self) -> &'static str {
        match self {
            HotkeyName::OpenSignal => "Open signal CSV",
            HotkeyName::ModeNone => "No edit mode",
            HotkeyName::ModeZero => "Zero mode",
            HotkeyName::ModePole => "Pole mode",
            HotkeyName::ModeDoubleZero => "Double zero mode",
            HotkeyName::ModeDoublePole => "Double pole mode",
            HotkeyName::Conjugate => "Toggle conjugates",
            HotkeyName::ClearZeros => "Remove all zeros",
            HotkeyName::ClearPoles => "Remove all poles",
            HotkeyName::ClearAll => "Remove all zeros and poles",
        }
    }
}

impl Hotkeys {
    pub fn get(&self, name: HotkeyName) -> Option<&Hotkey> {
        match name {
            HotkeyName::OpenSignal => self.open_signal.as_ref(),
            HotkeyName::ModeNone => self.mode_none.as_ref(),
            HotkeyName::ModeZero => self.mode_zero.as_ref(),
            HotkeyName::ModePole => self.mode_pole.as_ref(),
            HotkeyName::ModeDoubleZero => self.mode_double_zero.as_ref(),
            HotkeyName::ModeDoublePole => self.mode_double_pole.as_ref(),
            HotkeyName::Conjugate => self.conjugate.as_ref(),
            HotkeyName::ClearZeros => self.clear_zeros.as_ref(),
            HotkeyName::ClearPoles => self.clear_poles.as_ref(),
            HotkeyName::ClearAll => self.clear_all.as_ref(),
        }
    }

    /// Names whose configured binding equals `hk`.
    pub fn matching(&self, hk: &Hotkey) -> Vec<HotkeyName> {
        HotkeyName::ALL
            .into_iter()
            .filter(|name| self.get(*name) == Some(hk))
            .collect()
    }

    pub fn default_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .map_err(|e| EditorError::HotkeyConfig(format!("HOME env var not set: {}", e)))?;
        Ok(PathBuf::from(home).join(".zplane").join("hotkeys.yaml"))
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let s = serde_yaml::to_string(self)?;
        fs::write(path, s)?;
        Ok(())
    }

    pub fn load_from_path(path: &Path) -> Result<Hotkeys> {
        if !path.exists() {
            return Err(EditorError::HotkeyFileMissing(path.to_path_buf()));
        }
        let s = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    pub fn load_from_default_path() -> Result<Hotkeys> {
        Self::load_from_path(&Self::default_path()?)
    }
}

/// Tooltip text for a button, with its binding appended when there is one.
pub fn format_button_tooltip(description: &str, hotkey: Option<&Hotkey>) -> String {
    match hotkey {
        Some(hk) => format!("{} [{}]", description, hk),
        None => description.to_string(),
    }
}

pub fn get_hotkey_for_name(hotkeys: &Hotkeys, name: HotkeyName) -> Option<Hotkey> {
    hotkeys.get(name).copied()
}

fn char_from_key(key: egui::Key) -> Option<char> {
    if key == egui::Key::Space {
        return Some(' ');
    }
    let mut chars = key.symbol_or_name().chars();
    let ch = chars.next()?;
    if chars.next().is_none() && ch.is_ascii_alphanumeric() {
        Some(ch.to_ascii_uppercase())
    } else {
        None
    }
}

fn mods_to_modifier(m: egui::Modifiers) -> Modifier {
    match (m.ctrl || m.command, m.alt, m.shift) {
        (false, false, false) => Modifier::None,
        (true, false, false) => Modifier::Ctrl,
        (false, true, false) => Modifier::Alt,
        (false, false, true) => Modifier::Shift,
        (true, true, false) => Modifier::CtrlAlt,
        (true, false, true) => Modifier::CtrlShift,
        (false, true, true) => Modifier::AltShift,
        (true, true, true) => Modifier::CtrlAltShift,
    }
}

fn event_to_hotkey(ev: &egui::Event) -> Option<Hotkey> {
    match ev {
        egui::Event::Key {
            key,
            pressed: true,
            repeat: false,
            modifiers,
            ..
        } => char_from_key(*key).map(|ch| Hotkey::new(mods_to_modifier(*modifiers), ch)),
        _ => None,
    }
}

/// Actions whose bindings were pressed this frame, in press order.
/// Nothing is reported while a text field has keyboard focus.
pub fn detect_hotkey_actions(cfg: &Hotkeys, ctx: &egui::Context) -> Vec<HotkeyName> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }
    let pressed: Vec<Hotkey> =
        ctx.input(|i| i.events.iter().filter_map(event_to_hotkey).collect());

    let mut actions: Vec<HotkeyName> = Vec::new();
    for hk in &pressed {
        for name in cfg.matching(hk) {
            if !actions.contains(&name) {
                actions.push(name);
            }
        }
    }
    actions
}

/// Whether the fixed fullscreen toggle (Escape) was pressed this frame.
pub fn fullscreen_toggle_pressed(ctx: &egui::Context) -> bool {
    ctx.input(|i| {
        i.events.iter().any(|ev| {
            matches!(
                ev,
                egui::Event::Key {
                    key: egui::Key::Escape,
                    pressed: true,
                    repeat: false,
                    ..
                }
            )
        })
    })
}
