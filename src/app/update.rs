use eframe::egui;

use crate::data::editor::EditorData;
use crate::data::hotkeys::{detect_hotkey_actions, fullscreen_toggle_pressed, HotkeyName};
use crate::data::mode::EditMode;
use crate::events::{EditorEvent, EventKind};
use crate::panels::Panel;

use super::EditorApp;

impl EditorApp {
    /// Apply this frame's shortcuts: edit commands act on the session
    /// directly, dialog and fullscreen requests are queued for the end of
    /// the frame.
    pub fn handle_hotkeys(&mut self, ctx: &egui::Context) {
        if fullscreen_toggle_pressed(ctx) {
            self.pending_requests.toggle_fullscreen = true;
        }
        for act in detect_hotkey_actions(&self.hotkeys, ctx) {
            match act {
                HotkeyName::OpenSignal => self.pending_requests.open_signal = true,
                HotkeyName::ModeNone => self.session.set_mode(EditMode::None),
                HotkeyName::ModeZero => self.session.set_mode(EditMode::Zero),
                HotkeyName::ModePole => self.session.set_mode(EditMode::Pole),
                HotkeyName::ModeDoubleZero => self.session.set_mode(EditMode::DoubleZero),
                HotkeyName::ModeDoublePole => self.session.set_mode(EditMode::DoublePole),
                HotkeyName::Conjugate => {
                    let flag = !self.session.conjugate();
                    self.session.set_conjugate(flag);
                }
                HotkeyName::ClearZeros => self.session.clear_zeros(),
                HotkeyName::ClearPoles => self.session.clear_poles(),
                HotkeyName::ClearAll => self.session.clear_all(),
            }
        }
    }

    fn apply_requests(&mut self, ctx: &egui::Context) {
        let requests = self.pending_requests.take();

        if requests.toggle_fullscreen {
            let fullscreen = ctx.input(|i| i.viewport().fullscreen).unwrap_or(false);
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(!fullscreen));
            if let Some(ctrl) = &self.event_ctrl {
                ctrl.emit(EditorEvent::new(EventKind::FULLSCREEN_TOGGLED).with_flag(!fullscreen));
            }
        }

        if requests.open_signal {
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Select CSV File")
                .add_filter("CSV Files", &["csv"])
                .pick_file()
            {
                self.load_signal(&path);
            }
        }
    }

    fn render_panels(&mut self, ctx: &egui::Context) {
        let EditorApp {
            session,
            signal,
            hotkeys,
            unit_circle_panel,
            side_panels,
            bottom_panels,
            pending_requests,
            ..
        } = self;
        let mut data = EditorData {
            session,
            signal: &*signal,
            hotkeys: &*hotkeys,
            requests: pending_requests,
        };

        egui::SidePanel::left("editor_side_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                for panel in side_panels.iter_mut().filter(|p| p.state().visible) {
                    ui.heading(panel.title_and_icon());
                    panel.render_panel(ui, &mut data);
                    ui.separator();
                }
            });

        egui::TopBottomPanel::bottom("editor_bottom_panel")
            .resizable(true)
            .default_height(220.0)
            .show(ctx, |ui| {
                for panel in bottom_panels.iter_mut().filter(|p| p.state().visible) {
                    panel.render_panel(ui, &mut data);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            unit_circle_panel.render_panel(ui, &mut data);
        });
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_hotkeys(ctx);
        self.render_panels(ctx);
        self.apply_requests(ctx);
    }
}
