use egui::Ui;

use crate::data::editor::EditorData;

#[derive(Debug, Clone, Copy)]
pub struct PanelState {
    pub visible: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self { visible: true }
    }
}

pub trait Panel {
    fn title(&self) -> &'static str;
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    fn icon_only(&self) -> Option<&'static str> {
        None
    }

    fn title_and_icon(&self) -> String {
        match self.icon_only() {
            Some(icon) => format!("{} {}", icon, self.title()),
            None => self.title().to_string(),
        }
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut EditorData<'_>);
}
