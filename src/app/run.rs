//! Top-level entry point for running the editor as a native window.

use eframe::egui;

use crate::config::EditorConfig;

use super::EditorApp;

/// Launch the editor in a native window.
///
/// Builds an [`EditorApp`] from `cfg`, opens the window (fullscreen unless
/// disabled in the config) and blocks until it is closed.
pub fn run_editor(mut cfg: EditorConfig) -> eframe::Result<()> {
    let app = EditorApp::new(&cfg);

    let title = cfg.title.clone();
    let mut opts = cfg.native_options.take().unwrap_or_default();

    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }

    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(cfg.window_size[0], cfg.window_size[1]));
    }
    if cfg.fullscreen {
        opts.viewport = opts.viewport.clone().with_fullscreen(true);
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Load the bundled `icon.svg` as an [`egui::IconData`].
///
/// Returns `None` if the file does not exist or cannot be rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}
