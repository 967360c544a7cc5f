pub mod controls_ui;
pub mod panel_trait;
pub mod signal_ui;
pub mod unit_circle_ui;

pub use controls_ui::ControlsPanel;
pub use panel_trait::{Panel, PanelState};
pub use signal_ui::SignalPanel;
pub use unit_circle_ui::UnitCirclePanel;
