use eframe::egui;
use zplane::data::hotkeys::*;
use zplane::{EditorApp, EditorConfig, EditMode, PointKind};

fn key_event(key: egui::Key, modifiers: egui::Modifiers, repeat: bool) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat,
        modifiers,
    }
}

fn frame(events: Vec<egui::Event>) -> egui::RawInput {
    egui::RawInput {
        events,
        ..Default::default()
    }
}

fn actions_for(hk: &Hotkeys, events: Vec<egui::Event>) -> Vec<HotkeyName> {
    let ctx = egui::Context::default();
    let mut actions = Vec::new();
    let _ = ctx.run(frame(events), |ctx| {
        actions.extend(detect_hotkey_actions(hk, ctx));
    });
    actions
}

#[test]
fn tooltip_with_no_hotkey_returns_description_only() {
    let text = format_button_tooltip("Remove all", None);
    assert_eq!(text, "Remove all");
}

#[test]
fn tooltip_with_ctrl_hotkey() {
    let hk = Hotkey::new(Modifier::Ctrl, 'R');
    let text = format_button_tooltip("Remove all", Some(&hk));
    assert_eq!(text, "Remove all [Ctrl+R]");
}

#[test]
fn defaults_open_signal_with_ctrl_o() {
    let hk = Hotkeys::default();
    let result = get_hotkey_for_name(&hk, HotkeyName::OpenSignal).unwrap();
    assert_eq!(result.key, 'O');
    assert_eq!(result.modifier, Modifier::Ctrl);
}

#[test]
fn default_bindings_are_unique() {
    let hk = Hotkeys::default();
    for name in HotkeyName::ALL {
        let binding = hk.get(name).unwrap();
        assert_eq!(hk.matching(binding), vec![name], "{binding} bound twice");
    }
}

#[test]
fn default_bindings_avoid_clipboard_chords() {
    let hk = Hotkeys::default();
    for name in HotkeyName::ALL {
        let binding = hk.get(name).unwrap();
        let ctrl = matches!(
            binding.modifier,
            Modifier::Ctrl | Modifier::CtrlShift | Modifier::CtrlAlt | Modifier::CtrlAltShift
        );
        assert!(
            !(ctrl && matches!(binding.key, 'X' | 'C' | 'V')),
            "{binding} is delivered as a clipboard event"
        );
    }
    assert_eq!(hk.clear_all, Some(Hotkey::new(Modifier::Ctrl, 'R')));
}

#[test]
fn parse_and_display_round_trip_common_forms() {
    for s in ["Ctrl+O", "Z", "Shift+P", "Ctrl+Alt+Shift+Q", "Space"] {
        let hk: Hotkey = s.parse().unwrap();
        assert_eq!(hk.to_string(), s);
    }
}

#[test]
fn parse_normalises_case_and_modifier_order() {
    let hk: Hotkey = "shift+ctrl+z".parse().unwrap();
    assert_eq!(hk, Hotkey::new(Modifier::CtrlShift, 'Z'));
    let hk: Hotkey = "Control+x".parse().unwrap();
    assert_eq!(hk, Hotkey::new(Modifier::Ctrl, 'X'));
}

#[test]
fn parse_rejects_bad_input() {
    assert!("".parse::<Hotkey>().is_err());
    assert!("Meta+Z".parse::<Hotkey>().is_err());
    assert!("Ctrl+Ctrl+Z".parse::<Hotkey>().is_err());
    assert!("Ctrl+Enter".parse::<Hotkey>().is_err());
}

#[test]
fn save_and_load_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("hotkeys.yaml");

    let mut hk = Hotkeys::default();
    hk.conjugate = Some(Hotkey::new(Modifier::Alt, 'J'));
    hk.clear_all = None;
    hk.save_to_path(&path).unwrap();

    let loaded = Hotkeys::load_from_path(&path).unwrap();
    assert_eq!(loaded, hk);
}

#[test]
fn load_missing_file_reports_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = Hotkeys::load_from_path(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, zplane::EditorError::HotkeyFileMissing(_)));
}

#[test]
fn partial_yaml_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hotkeys.yaml");
    std::fs::write(&path, "conjugate:\n  modifier: Alt\n  key: K\n").unwrap();

    let loaded = Hotkeys::load_from_path(&path).unwrap();
    assert_eq!(loaded.conjugate, Some(Hotkey::new(Modifier::Alt, 'K')));
    assert_eq!(loaded.open_signal, Hotkeys::default().open_signal);
}

#[test]
fn plain_key_selects_mode() {
    let hk = Hotkeys::default();
    let actions = actions_for(&hk, vec![key_event(egui::Key::Z, egui::Modifiers::NONE, false)]);
    assert_eq!(actions, vec![HotkeyName::ModeZero]);
}

#[test]
fn shifted_key_selects_double_mode_only() {
    let hk = Hotkeys::default();
    let actions = actions_for(&hk, vec![key_event(egui::Key::Z, egui::Modifiers::SHIFT, false)]);
    assert_eq!(actions, vec![HotkeyName::ModeDoubleZero]);
}

#[test]
fn ctrl_r_clears_everything() {
    let hk = Hotkeys::default();
    let actions = actions_for(&hk, vec![key_event(egui::Key::R, egui::Modifiers::CTRL, false)]);
    assert_eq!(actions, vec![HotkeyName::ClearAll]);
}

#[test]
fn repeated_key_events_trigger_nothing() {
    let hk = Hotkeys::default();
    let actions = actions_for(&hk, vec![key_event(egui::Key::C, egui::Modifiers::NONE, true)]);
    assert!(actions.is_empty());
}

#[test]
fn clipboard_events_trigger_nothing() {
    let hk = Hotkeys::default();
    assert!(actions_for(&hk, vec![egui::Event::Cut, egui::Event::Copy]).is_empty());
}

#[test]
fn holding_conjugate_key_toggles_once() {
    let mut app = EditorApp::new(&EditorConfig::default());
    let ctx = egui::Context::default();

    let _ = ctx.run(
        frame(vec![key_event(egui::Key::C, egui::Modifiers::NONE, false)]),
        |ctx| app.handle_hotkeys(ctx),
    );
    assert!(app.session.conjugate());

    for _ in 0..3 {
        let _ = ctx.run(
            frame(vec![key_event(egui::Key::C, egui::Modifiers::NONE, true)]),
            |ctx| app.handle_hotkeys(ctx),
        );
    }
    assert!(app.session.conjugate());
}

#[test]
fn dispatch_applies_edit_commands_and_queues_requests() {
    let mut app = EditorApp::new(&EditorConfig::default());
    let ctx = egui::Context::default();

    let _ = ctx.run(
        frame(vec![key_event(egui::Key::P, egui::Modifiers::SHIFT, false)]),
        |ctx| app.handle_hotkeys(ctx),
    );
    assert_eq!(app.session.mode(), EditMode::DoublePole);

    app.session.set_mode(EditMode::Zero);
    app.session.handle_click(zplane::ClickButton::Primary, 0.2, 0.1);
    app.session.set_mode(EditMode::Pole);
    app.session.handle_click(zplane::ClickButton::Primary, 0.4, 0.1);
    let _ = ctx.run(
        frame(vec![key_event(egui::Key::R, egui::Modifiers::CTRL, false)]),
        |ctx| app.handle_hotkeys(ctx),
    );
    assert_eq!(app.session.count(PointKind::Zero), 0);
    assert_eq!(app.session.count(PointKind::Pole), 0);

    let _ = ctx.run(
        frame(vec![
            key_event(egui::Key::O, egui::Modifiers::CTRL, false),
            key_event(egui::Key::Escape, egui::Modifiers::NONE, false),
        ]),
        |ctx| app.handle_hotkeys(ctx),
    );
    assert!(app.pending_requests.open_signal);
    assert!(app.pending_requests.toggle_fullscreen);
}

#[test]
fn held_escape_does_not_request_fullscreen_again() {
    let mut app = EditorApp::new(&EditorConfig::default());
    let ctx = egui::Context::default();
    let _ = ctx.run(
        frame(vec![key_event(egui::Key::Escape, egui::Modifiers::NONE, true)]),
        |ctx| app.handle_hotkeys(ctx),
    );
    assert!(!app.pending_requests.toggle_fullscreen);
}

#[test]
fn startup_fullscreen_is_not_queued_as_a_toggle() {
    let cfg = EditorConfig::default();
    assert!(cfg.fullscreen);
    let app = EditorApp::new(&cfg);
    assert!(!app.pending_requests.toggle_fullscreen);
}
