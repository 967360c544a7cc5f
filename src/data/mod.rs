pub mod editor;
pub mod hotkeys;
pub mod insertion;
pub mod mode;
pub mod points;
pub mod selection;
pub mod session;
pub mod signal;
