use ratatui::prelude::Rect;

use super::*;

fn fixture_app_state() -> AppState {
    let mut app_state = AppState::new(AppStateProps {
        guide: Guide::walkthrough(),
        nav_lookahead: 5,
        reveal_threshold: 0.1,
    })
    .unwrap();

    app_state.set_rect(Rect::new(0, 0, 78, 24));
    return app_state;
}

fn document_text(app_state: &AppState) -> String {
    return app_state
        .document
        .lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<String>>()
        .join("\n");
}

#[test]
fn it_quits_on_quit_events() {
    assert!(!fixture_app_state().handle_event(Event::KeyboardQuit));
    assert!(!fixture_app_state().handle_event(Event::KeyboardCTRLC));
}

#[test]
fn it_moves_the_nav_highlight_with_scroll() {
    let mut app_state = fixture_app_state();
    assert_eq!(app_state.navigator.active_link(), Some(0));

    app_state.handle_event(Event::UIScrollBottom);

    let active = app_state.navigator.active_link();
    assert!(active.is_some());
    assert_ne!(active, Some(0));
}

#[test]
fn it_accumulates_reveal_tags_monotonically() {
    let mut app_state = fixture_app_state();
    assert!(app_state.reveal.is_revealed("introduccion"));
    let before = app_state.reveal.revealed_count();

    app_state.handle_event(Event::UIScrollBottom);

    assert!(app_state.reveal.revealed_count() >= before);
    assert!(app_state.reveal.is_revealed("introduccion"));
}

#[test]
fn it_rerenders_the_step_panel_on_step_events() {
    let mut app_state = fixture_app_state();
    assert!(document_text(&app_state).contains("Paso 0"));

    app_state.handle_event(Event::StepAdvance);

    let text = document_text(&app_state);
    assert!(text.contains("Paso 1"));
    assert!(!text.contains("Paso 0"));
}

#[test]
fn it_walks_the_example_end_to_end() {
    let mut app_state = fixture_app_state();

    let view = app_state.sequencer.view();
    assert_eq!(view.badge, "Paso 0");
    assert!(!view.controls.retreat_enabled);
    assert!(view.controls.advance_enabled);

    app_state.handle_event(Event::StepAdvance);
    let view = app_state.sequencer.view();
    assert_eq!(view.badge, "Paso 1");
    assert!(view.controls.retreat_enabled);
    assert!(view.controls.advance_enabled);

    for _ in 0..3 {
        app_state.handle_event(Event::StepAdvance);
    }
    let view = app_state.sequencer.view();
    assert_eq!(view.badge, "Paso 3");
    assert!(!view.controls.advance_enabled);

    app_state.handle_event(Event::StepRetreat);
    assert_eq!(app_state.sequencer.view().badge, "Paso 2");
}

#[test]
fn it_ignores_step_events_at_the_bounds() {
    let mut app_state = fixture_app_state();

    app_state.handle_event(Event::StepRetreat);
    assert_eq!(app_state.sequencer.position(), 0);

    for _ in 0..10 {
        app_state.handle_event(Event::StepAdvance);
    }
    assert_eq!(app_state.sequencer.position(), 3);
}

#[test]
fn it_relayouts_when_the_terminal_shrinks() {
    let mut app_state = fixture_app_state();
    let lines_before = app_state.document.lines.len();

    app_state.set_rect(Rect::new(0, 0, 40, 24));

    assert!(app_state.document.lines.len() > lines_before);
}
