//! Unit-circle plot: draws the reference circle and the zero/pole markers,
//! and forwards plot clicks to the edit session.

use egui::{Color32, Ui};
use egui_plot::{Legend, Line, LineStyle, MarkerShape, Plot, PlotPoints, PlotResponse, Points};

use super::panel_trait::{Panel, PanelState};
use crate::data::editor::EditorData;
use crate::data::points::Point;
use crate::data::session::{ClickButton, EditSession};

pub const ZERO_COLOR: Color32 = Color32::from_rgb(0x1f, 0x5f, 0xff);
pub const POLE_COLOR: Color32 = Color32::from_rgb(0xe0, 0x20, 0x20);
const CIRCLE_COLOR: Color32 = Color32::GRAY;
const MARKER_RADIUS: f32 = 6.0;

pub struct UnitCirclePanel {
    state: PanelState,
    /// Reference circle, computed once.
    circle: Vec<[f64; 2]>,
}

impl UnitCirclePanel {
    pub fn new(segments: usize) -> Self {
        Self {
            state: PanelState::default(),
            circle: unit_circle(segments),
        }
    }

    pub fn circle(&self) -> &[[f64; 2]] {
        &self.circle
    }

    fn draw_plot(&self, ui: &mut Ui, session: &EditSession) -> PlotResponse<()> {
        let store = session.store();
        let zeros: Vec<[f64; 2]> = store.zeros().iter().map(|p| p.to_array()).collect();
        let poles: Vec<[f64; 2]> = store.poles().iter().map(|p| p.to_array()).collect();
        let circle = self.circle.clone();

        Plot::new("unit_circle_plot")
            .data_aspect(1.0)
            .allow_boxed_zoom(false)
            .include_x(-1.5)
            .include_x(1.5)
            .include_y(-1.5)
            .include_y(1.5)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new("Unit circle", PlotPoints::from(circle))
                        .color(CIRCLE_COLOR)
                        .style(LineStyle::Dashed { length: 6.0 }),
                );
                if !zeros.is_empty() {
                    plot_ui.points(
                        Points::new("Zeros", zeros)
                            .shape(MarkerShape::Circle)
                            .filled(false)
                            .radius(MARKER_RADIUS)
                            .color(ZERO_COLOR),
                    );
                }
                if !poles.is_empty() {
                    plot_ui.points(
                        Points::new("Poles", poles)
                            .shape(MarkerShape::Cross)
                            .radius(MARKER_RADIUS)
                            .color(POLE_COLOR),
                    );
                }
            })
    }
}

impl Default for UnitCirclePanel {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Panel for UnitCirclePanel {
    fn title(&self) -> &'static str {
        "Unit Circle"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn icon_only(&self) -> Option<&'static str> {
        Some(egui_phosphor::regular::CIRCLE)
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut EditorData<'_>) {
        let plot_response = self.draw_plot(ui, data.session);
        if let Some((button, p)) = plot_click(&plot_response) {
            data.session.handle_click(button, p.re, p.im);
        }
    }
}

/// Button and plane coordinate of a click on the plot this frame. Clicks
/// without a pointer position (outside the plot area) yield `None`.
fn plot_click(plot_response: &PlotResponse<()>) -> Option<(ClickButton, Point)> {
    let response = &plot_response.response;
    let button = if response.clicked() {
        ClickButton::Primary
    } else if response.secondary_clicked() {
        ClickButton::Secondary
    } else {
        return None;
    };
    let screen_pos = response.interact_pointer_pos()?;
    let plot_pos = plot_response.transform.value_from_position(screen_pos);
    Some((button, Point::new(plot_pos.x, plot_pos.y)))
}

/// Closed polyline of `segments` points on the unit circle, evenly spaced
/// over `[0, 2π]` with both endpoints included.
pub fn unit_circle(segments: usize) -> Vec<[f64; 2]> {
    let n = segments.max(2);
    (0..n)
        .map(|i| {
            let theta = std::f64::consts::TAU * i as f64 / (n - 1) as f64;
            [theta.cos(), theta.sin()]
        })
        .collect()
}
