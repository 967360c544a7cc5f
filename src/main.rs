use zplane::{run_editor, EditorConfig};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut cfg = EditorConfig::load();
    // `--windowed` starts in a normal window instead of fullscreen.
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--windowed" => cfg.fullscreen = false,
            other => log::warn!("ignoring unknown argument '{other}'"),
        }
    }

    run_editor(cfg)
}
