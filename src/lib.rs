//! zplane crate root: re-exports and module wiring.
//!
//! An interactive editor for placing zeros and poles on the complex-plane
//! unit circle, built on egui/eframe.
//!
//! - `data`: the point store, insertion and removal logic, edit session,
//!   hotkeys and signal import
//! - `events`: change notifications emitted after every mutation
//! - `panels`: egui panels (unit circle, edit controls, signal preview)
//! - `app`: the eframe application and [`run_editor`]
//! - `config`: startup configuration

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod panels;

pub use app::{run_editor, EditorApp};
pub use config::EditorConfig;
pub use data::mode::{EditMode, ModeController};
pub use data::points::{Point, PointKind, PointStore, PointsSnapshot};
pub use data::selection::{find_removal_candidate, ACCEPTANCE_RADIUS};
pub use data::session::{ClickButton, EditSession};
pub use error::{EditorError, Result};
pub use events::{EditorEvent, EventController, EventFilter, EventKind};
