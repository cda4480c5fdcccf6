//! Keyboard event handling tests
//!
//! Widget-scoped key bindings: play/stop toggling, output opening, settings
//! gating, and per-icon activation keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use filelink::{CommandBuilder, CommandLink, EventQueue, FileLink, Icon, LinkEvent, StatusUpdate};
use std::time::Instant;

/// Helper to create a key event
fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

#[test]
fn test_space_requests_run_when_idle() {
    let mut events = EventQueue::new();
    let link = CommandLink::new("Build");

    assert!(link.handle_key(key(KeyCode::Char(' ')), &mut events));
    match events.drain().as_slice() {
        [LinkEvent::RunRequested { name, .. }] => assert_eq!(name, "Build"),
        other => panic!("unexpected events: {:?}", other),
    }
}

#[test]
fn test_space_requests_stop_when_running() {
    let mut events = EventQueue::new();
    let mut link = CommandLink::new("Build");
    link.set_status(
        StatusUpdate {
            running: Some(true),
            ..Default::default()
        },
        Instant::now(),
    );

    assert!(link.handle_key(key(KeyCode::Char(' ')), &mut events));
    match events.drain().as_slice() {
        [LinkEvent::StopRequested { name, .. }] => assert_eq!(name, "Build"),
        other => panic!("unexpected events: {:?}", other),
    }
}

#[test]
fn test_p_key_is_play_stop_alias() {
    let mut events = EventQueue::new();
    let link = CommandLink::new("Build");

    assert!(link.handle_key(key(KeyCode::Char('p')), &mut events));
    assert_eq!(events.len(), 1);
}

#[test]
fn test_settings_key_gated_on_feature() {
    let mut events = EventQueue::new();

    let plain = CommandLink::new("Build");
    assert!(!plain.handle_key(key(KeyCode::Char('s')), &mut events));
    assert!(events.is_empty());

    let with_settings = CommandLink::new("Build").with_settings();
    assert!(with_settings.handle_key(key(KeyCode::Char('s')), &mut events));
    assert_eq!(
        events.drain(),
        vec![LinkEvent::SettingsRequested {
            name: "Build".to_string()
        }]
    );
}

#[test]
fn test_o_key_opens_output_only_when_set() {
    let mut events = EventQueue::new();

    let without_output = CommandLink::new("Build");
    assert!(!without_output.handle_key(key(KeyCode::Char('o')), &mut events));
    assert!(events.is_empty());

    let with_output = CommandLink::new("Build").with_output_path("/tmp/build.log");
    assert!(with_output.handle_key(key(KeyCode::Char('o')), &mut events));
    assert!(events
        .drain()
        .iter()
        .any(|e| matches!(e, LinkEvent::OutputActivated { .. })));
}

#[test]
fn test_unbound_keys_are_not_consumed() {
    let mut events = EventQueue::new();
    let link = CommandLink::new("Build");
    assert!(!link.handle_key(key(KeyCode::Char('x')), &mut events));
    assert!(!link.handle_key(key(KeyCode::Esc), &mut events));
    assert!(events.is_empty());
}

#[test]
fn test_enter_activates_file_link() {
    let mut events = EventQueue::new();
    let builder = CommandBuilder::new(|path, line, _| {
        let mut argv = vec!["vi".to_string()];
        if let Some(line) = line {
            argv.push(format!("+{line}"));
        }
        argv.push(path.display().to_string());
        argv
    });
    let link = FileLink::new("/tmp/notes.md")
        .with_line(7)
        .with_command_builder(builder);

    assert!(link.handle_key(key(KeyCode::Enter), &mut events));
    match events.drain().as_slice() {
        [LinkEvent::OpenRequested { argv, .. }] => {
            assert_eq!(
                argv,
                &vec![
                    "vi".to_string(),
                    "+7".to_string(),
                    "/tmp/notes.md".to_string()
                ]
            );
        }
        other => panic!("unexpected events: {:?}", other),
    }
}

#[test]
fn test_icon_activation_key_requires_visibility() {
    let mut events = EventQueue::new();
    let mut link = FileLink::new("/tmp/notes.md").with_icon(
        Icon::new("lock", "🔒")
            .expect("valid icon name")
            .clickable()
            .with_activation_key('u'),
    );

    link.set_icon_visible("lock", false);
    assert!(!link.handle_key(key(KeyCode::Char('u')), &mut events));

    link.set_icon_visible("lock", true);
    assert!(link.handle_key(key(KeyCode::Char('u')), &mut events));
    assert_eq!(events.len(), 1);
}
