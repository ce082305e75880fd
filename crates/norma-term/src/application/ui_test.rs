use ratatui::backend::TestBackend;

use super::*;
use crate::domain::models::Guide;

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();

    return buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<String>>()
        .join("\n");
}

#[test]
fn it_draws_the_walkthrough_frame() {
    let mut app_state = AppState::new(AppStateProps {
        guide: Guide::walkthrough(),
        nav_lookahead: 5,
        reveal_threshold: 0.1,
    })
    .unwrap();

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|frame| render_frame(frame, &mut app_state))
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("Contenido"));
    assert!(text.contains("Introducción"));
    assert!(text.contains("q salir"));
}

#[test]
fn it_highlights_the_first_nav_entry_at_the_top() {
    let mut app_state = AppState::new(AppStateProps {
        guide: Guide::walkthrough(),
        nav_lookahead: 5,
        reveal_threshold: 0.1,
    })
    .unwrap();

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|frame| render_frame(frame, &mut app_state))
        .unwrap();

    assert_eq!(app_state.navigator.active_link(), Some(0));
    assert!(buffer_text(&terminal).contains("▸ Introducción"));
}
