use egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot};

use super::panel_trait::{Panel, PanelState};
use crate::data::editor::EditorData;
use crate::data::hotkeys::{format_button_tooltip, HotkeyName};

/// Preview of an imported two-column signal.
#[derive(Default)]
pub struct SignalPanel {
    state: PanelState,
}

impl Panel for SignalPanel {
    fn title(&self) -> &'static str {
        "Input Signal"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn icon_only(&self) -> Option<&'static str> {
        Some(egui_phosphor::regular::WAVEFORM)
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut EditorData<'_>) {
        ui.horizontal(|ui| {
            ui.label(self.title_and_icon());
            let tooltip = format_button_tooltip(
                HotkeyName::OpenSignal.description(),
                data.hotkeys.get(HotkeyName::OpenSignal),
            );
            let open = format!("{} Open…", egui_phosphor::regular::FOLDER_OPEN);
            if ui.button(open).on_hover_text(tooltip).clicked() {
                data.requests.open_signal = true;
            }
            if let Some(signal) = data.signal {
                ui.weak(format!("{} samples", signal.len()));
            }
        });

        let plot = Plot::new("signal_plot").legend(Legend::default());
        plot.show(ui, |plot_ui| {
            if let Some(signal) = data.signal {
                let name = signal.y_label.clone().unwrap_or_else(|| "signal".to_string());
                plot_ui.line(
                    Line::new(name, signal.samples.clone()).color(Color32::from_rgb(0x30, 0xa0, 0x60)),
                );
            }
        });
    }
}
