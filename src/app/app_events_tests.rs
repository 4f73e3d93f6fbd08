//! Tests for app_events

use crate::test_utils::test_helpers::{connected_app, key, key_with_mods, test_app};
use proptest::prelude::*;
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[test]
fn test_typing_updates_prompt() {
    let mut app = test_app();

    for c in "hi".chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }

    assert_eq!(app.prompt(), "hi");
}

#[test]
fn test_enter_inserts_newline() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('a')));
    app.handle_key_event(key(KeyCode::Enter));
    app.handle_key_event(key(KeyCode::Char('b')));

    assert_eq!(app.prompt(), "a\nb");
    assert!(!app.is_busy());
}

#[test]
fn test_backspace_edits_prompt() {
    let mut app = test_app();
    app.update_prompt("abc");

    app.handle_key_event(key(KeyCode::Backspace));

    assert_eq!(app.prompt(), "ab");
}

#[test]
fn test_ctrl_s_submits() {
    let (mut app, mut request_rx, _response_tx) = connected_app();
    app.update_prompt("hello");

    app.handle_key_event(key_with_mods(KeyCode::Char('s'), KeyModifiers::CONTROL));

    assert!(app.is_busy());
    assert_eq!(request_rx.try_recv().unwrap().prompt, "hello");
    // Ctrl+S is not typed into the prompt
    assert_eq!(app.prompt(), "hello");
}

#[test]
fn test_alt_enter_submits() {
    let (mut app, mut request_rx, _response_tx) = connected_app();
    app.update_prompt("hello");

    app.handle_key_event(key_with_mods(KeyCode::Enter, KeyModifiers::ALT));

    assert!(app.is_busy());
    assert!(request_rx.try_recv().is_ok());
    assert_eq!(app.prompt(), "hello");
}

#[test]
fn test_submit_key_ignored_while_busy() {
    let (mut app, mut request_rx, _response_tx) = connected_app();
    app.update_prompt("hello");
    app.handle_key_event(key_with_mods(KeyCode::Char('s'), KeyModifiers::CONTROL));
    assert!(request_rx.try_recv().is_ok());

    app.handle_key_event(key_with_mods(KeyCode::Char('s'), KeyModifiers::CONTROL));

    assert!(request_rx.try_recv().is_err());
}

#[test]
fn test_submit_key_with_empty_prompt_does_nothing() {
    let (mut app, mut request_rx, _response_tx) = connected_app();

    app.handle_key_event(key_with_mods(KeyCode::Char('s'), KeyModifiers::CONTROL));

    assert!(!app.is_busy());
    assert!(request_rx.try_recv().is_err());
}

#[test]
fn test_typing_allowed_while_busy() {
    let (mut app, _request_rx, _response_tx) = connected_app();
    app.update_prompt("hello");
    app.submit();

    app.handle_key_event(key(KeyCode::Char('!')));

    assert_eq!(app.prompt(), "hello!");
}

#[test]
fn test_esc_quits() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = test_app();
    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
    assert_eq!(app.prompt(), "");
}

#[test]
fn test_page_keys_scroll_response() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::PageDown));
    app.handle_key_event(key(KeyCode::PageDown));
    assert_eq!(app.response_scroll, 10);

    app.handle_key_event(key(KeyCode::PageUp));
    assert_eq!(app.response_scroll, 5);

    app.handle_key_event(key(KeyCode::PageUp));
    app.handle_key_event(key(KeyCode::PageUp));
    assert_eq!(app.response_scroll, 0);
}

#[test]
fn test_key_release_is_ignored() {
    let mut app = test_app();
    let mut release = key(KeyCode::Char('x'));
    release.kind = KeyEventKind::Release;

    app.handle_event(Event::Key(release));

    assert_eq!(app.prompt(), "");
}

#[test]
fn test_paste_event_inserts_text() {
    let mut app = test_app();

    app.handle_event(Event::Paste("pasted\ntext".to_string()));

    assert_eq!(app.prompt(), "pasted\ntext");
}

#[test]
fn test_paste_event_appends_to_existing_text() {
    let mut app = test_app();
    app.update_prompt("Explain ");

    app.handle_paste_event("borrowing".to_string());

    assert_eq!(app.prompt(), "Explain borrowing");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Typed printable characters land in the prompt unchanged
    #[test]
    fn prop_typed_text_matches_prompt(text in "[a-zA-Z0-9 .,?]{0,40}") {
        let mut app = test_app();
        for c in text.chars() {
            app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty()));
        }
        prop_assert_eq!(app.prompt(), text);
    }
}
