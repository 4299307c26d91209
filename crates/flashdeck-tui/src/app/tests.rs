use super::*;
use crate::action::Action;
use crate::tui_event::{BackendCommand, BackendEvent};
use flashdeck_core::Concept;
use tokio::sync::mpsc;

/// Create a minimal App for testing, wired to a command receiver standing in
/// for the backend task.
fn test_app() -> (App, mpsc::UnboundedReceiver<BackendCommand>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut app = App::new(Theme::hacker());
    app.backend_cmd_tx = Some(tx);
    (app, rx)
}

fn concept(term: &str, definition: &str) -> Concept {
    Concept {
        term: term.to_string(),
        definition: definition.to_string(),
    }
}

fn recv_link(rx: &mut mpsc::UnboundedReceiver<BackendCommand>) -> String {
    match rx.try_recv() {
        Ok(BackendCommand::Analyze { link }) => link,
        Err(_) => panic!("expected an Analyze command"),
    }
}

fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.update(Action::InputChar(ch));
    }
}

// ── Link editing ────────────────────────────────────────────────

#[test]
fn starts_in_editing_mode_with_empty_state() {
    let (app, _rx) = test_app();
    assert_eq!(app.input_mode, InputMode::Editing);
    assert!(app.session.link.is_empty());
    assert!(!app.session.loading);
    assert!(app.session.concepts.is_empty());
}

#[test]
fn typing_updates_link_text_synchronously() {
    let (mut app, _rx) = test_app();
    type_str(&mut app, "https://youtu.be/abc");
    assert_eq!(app.session.link, "https://youtu.be/abc");
    app.update(Action::Backspace);
    assert_eq!(app.session.link, "https://youtu.be/ab");
}

#[test]
fn typing_in_normal_mode_does_not_edit_link() {
    let (mut app, _rx) = test_app();
    app.update(Action::Cancel);
    assert_eq!(app.input_mode, InputMode::Normal);
    app.update(Action::InputChar('z'));
    assert!(app.session.link.is_empty());
}

// ── Submission ──────────────────────────────────────────────────

#[test]
fn submit_sets_loading_and_sends_one_command() {
    let (mut app, mut rx) = test_app();
    type_str(&mut app, "link-1");

    app.update(Action::Submit);

    assert!(app.session.loading);
    assert_eq!(recv_link(&mut rx), "link-1");
    assert!(rx.try_recv().is_err());
}

#[test]
fn submit_while_loading_is_inert() {
    let (mut app, mut rx) = test_app();
    app.update(Action::Submit);
    assert_eq!(recv_link(&mut rx), "");

    app.update(Action::Submit);
    app.update(Action::Submit);

    assert!(rx.try_recv().is_err());
    assert!(app.session.loading);
}

#[test]
fn empty_link_submits_without_validation() {
    let (mut app, mut rx) = test_app();
    app.update(Action::Submit);
    assert!(app.session.loading);
    assert_eq!(recv_link(&mut rx), "");
}

#[test]
fn submit_label_toggles_with_loading() {
    let (mut app, _rx) = test_app();
    assert_eq!(app.submit_label(), "Generate Flashcards");
    app.update(Action::Submit);
    assert_eq!(app.submit_label(), "Analyzing video...");
    app.handle_backend_event(BackendEvent::AnalysisFailed {
        error: "connection refused".into(),
    });
    assert_eq!(app.submit_label(), "Generate Flashcards");
}

// ── Backend events ──────────────────────────────────────────────

#[test]
fn complete_replaces_concepts_in_order_and_clears_loading() {
    let (mut app, _rx) = test_app();
    app.update(Action::Submit);

    app.handle_backend_event(BackendEvent::AnalysisComplete {
        concepts: vec![concept("A", "1"), concept("B", "2")],
    });

    assert!(!app.session.loading);
    assert_eq!(app.session.concepts.len(), 2);
    assert_eq!(app.session.concepts[0], concept("A", "1"));
    assert_eq!(app.session.concepts[1], concept("B", "2"));
}

#[test]
fn failure_clears_concepts_and_loading() {
    let (mut app, _rx) = test_app();
    app.handle_backend_event(BackendEvent::AnalysisComplete {
        concepts: vec![concept("A", "1")],
    });

    app.update(Action::Submit);
    app.handle_backend_event(BackendEvent::AnalysisFailed {
        error: "HTTP 500".into(),
    });

    assert!(!app.session.loading);
    assert!(app.session.concepts.is_empty());
}

#[test]
fn submit_is_reenabled_after_each_completion() {
    let (mut app, mut rx) = test_app();

    app.update(Action::Submit);
    recv_link(&mut rx);
    app.handle_backend_event(BackendEvent::AnalysisComplete { concepts: vec![] });

    app.update(Action::Submit);
    recv_link(&mut rx);
    app.handle_backend_event(BackendEvent::AnalysisFailed {
        error: "timeout".into(),
    });

    app.update(Action::Submit);
    recv_link(&mut rx);
    assert!(app.session.loading);
}

#[test]
fn response_replaces_previous_deck_wholesale() {
    let (mut app, _rx) = test_app();
    app.handle_backend_event(BackendEvent::AnalysisComplete {
        concepts: vec![concept("old-1", "x"), concept("old-2", "y")],
    });
    app.handle_backend_event(BackendEvent::AnalysisComplete {
        concepts: vec![concept("new", "z")],
    });
    assert_eq!(app.session.concepts.len(), 1);
    assert_eq!(app.session.concepts[0].term, "new");
}

// ── Discarding ──────────────────────────────────────────────────

#[test]
fn discard_removes_selected_card_preserving_order() {
    let (mut app, _rx) = test_app();
    app.handle_backend_event(BackendEvent::AnalysisComplete {
        concepts: vec![concept("A", "1"), concept("B", "2"), concept("C", "3")],
    });
    app.update(Action::Cancel); // into Normal mode
    app.update(Action::MoveDown); // select B

    app.update(Action::Discard);

    let terms: Vec<&str> = app.session.concepts.iter().map(|c| c.term.as_str()).collect();
    assert_eq!(terms, vec!["A", "C"]);
}

#[test]
fn discarding_to_empty_then_noop() {
    let (mut app, _rx) = test_app();
    app.handle_backend_event(BackendEvent::AnalysisComplete {
        concepts: vec![concept("A", "1"), concept("B", "2")],
    });
    app.update(Action::Cancel);

    app.update(Action::Discard);
    app.update(Action::Discard);
    assert!(app.session.concepts.is_empty());

    app.update(Action::Discard);
    assert!(app.session.concepts.is_empty());
}

#[test]
fn selection_follows_list_after_discard_of_last_card() {
    let (mut app, _rx) = test_app();
    app.handle_backend_event(BackendEvent::AnalysisComplete {
        concepts: vec![concept("A", "1"), concept("B", "2")],
    });
    app.update(Action::Cancel);
    app.update(Action::GoBottom);
    assert_eq!(app.session.selected, 1);

    app.update(Action::Discard);

    assert_eq!(app.session.selected, 0);
    assert_eq!(app.session.concepts[0].term, "A");
}

// ── Quit flow ───────────────────────────────────────────────────

#[test]
fn quit_requires_confirmation() {
    let (mut app, _rx) = test_app();
    app.update(Action::Quit);
    assert!(app.confirm_quit);
    assert!(!app.should_quit);

    app.update(Action::Cancel);
    assert!(!app.confirm_quit);

    app.update(Action::Quit);
    assert!(app.update(Action::Quit));
    assert!(app.should_quit);
}

#[test]
fn help_overlay_toggles_and_blocks_card_actions() {
    let (mut app, _rx) = test_app();
    app.handle_backend_event(BackendEvent::AnalysisComplete {
        concepts: vec![concept("A", "1")],
    });
    app.update(Action::ToggleHelp);
    assert!(app.show_help);

    app.update(Action::Discard);
    assert_eq!(app.session.concepts.len(), 1);

    app.update(Action::ToggleHelp);
    assert!(!app.show_help);
}
