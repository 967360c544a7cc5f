use egui::Ui;

use super::panel_trait::{Panel, PanelState};
use crate::data::editor::EditorData;
use crate::data::hotkeys::{format_button_tooltip, HotkeyName};
use crate::data::mode::EditMode;
use crate::data::points::PointKind;

/// Edit mode toggles, the conjugate checkbox and the clear buttons.
#[derive(Default)]
pub struct ControlsPanel {
    state: PanelState,
}

fn mode_hotkey(mode: EditMode) -> HotkeyName {
    match mode {
        EditMode::None => HotkeyName::ModeNone,
        EditMode::Zero => HotkeyName::ModeZero,
        EditMode::Pole => HotkeyName::ModePole,
        EditMode::DoubleZero => HotkeyName::ModeDoubleZero,
        EditMode::DoublePole => HotkeyName::ModeDoublePole,
    }
}

impl Panel for ControlsPanel {
    fn title(&self) -> &'static str {
        "Edit"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn icon_only(&self) -> Option<&'static str> {
        Some(egui_phosphor::regular::SLIDERS)
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut EditorData<'_>) {
        ui.heading("Mode");
        for mode in EditMode::TOGGLES {
            let checked = data.session.mode() == mode;
            let tooltip =
                format_button_tooltip(mode.label(), data.hotkeys.get(mode_hotkey(mode)));
            if ui
                .radio(checked, mode.label())
                .on_hover_text(tooltip)
                .clicked()
                && !checked
            {
                data.session.toggle_mode(mode, true);
            }
        }

        let mut conjugate = data.session.conjugate();
        let tooltip = format_button_tooltip(
            HotkeyName::Conjugate.description(),
            data.hotkeys.get(HotkeyName::Conjugate),
        );
        if ui
            .checkbox(&mut conjugate, "Add conjugates")
            .on_hover_text(tooltip)
            .changed()
        {
            data.session.set_conjugate(conjugate);
        }

        ui.separator();
        ui.heading("Remove");
        let broom = egui_phosphor::regular::BROOM;
        let clear_buttons = [
            (HotkeyName::ClearZeros, "Remove all zeros"),
            (HotkeyName::ClearPoles, "Remove all poles"),
            (HotkeyName::ClearAll, "Remove all"),
        ];
        for (name, label) in clear_buttons {
            let tooltip = format_button_tooltip(name.description(), data.hotkeys.get(name));
            if ui
                .button(format!("{broom} {label}"))
                .on_hover_text(tooltip)
                .clicked()
            {
                match name {
                    HotkeyName::ClearZeros => data.session.clear_zeros(),
                    HotkeyName::ClearPoles => data.session.clear_poles(),
                    _ => data.session.clear_all(),
                }
            }
        }

        ui.separator();
        ui.label(format!(
            "Zeros: {}   Poles: {}",
            data.session.count(PointKind::Zero),
            data.session.count(PointKind::Pole)
        ));
        ui.small("Left click: add   Right click: remove");
    }
}
