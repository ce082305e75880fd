#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::Backend;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Frame;
use ratatui::Terminal;

use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;
use crate::domain::services::EventsService;

/// Restores the terminal before the panic handler prints. Only used in
/// scenarios where the app crashes.
pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

fn render_side_nav(frame: &mut Frame, app_state: &AppState, rect: Rect) {
    let nav_block = Block::default().borders(Borders::RIGHT).title("Contenido");
    let nav_inner = nav_block.inner(rect);
    frame.render_widget(nav_block, rect);

    let active = app_state.navigator.active_link();
    let nav_lines = app_state
        .navigator
        .links()
        .iter()
        .enumerate()
        .map(|(idx, link)| {
            if Some(idx) == active {
                return Line::from(Span::styled(
                    format!("▸ {}", link.label),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ));
            }

            return Line::from(format!("  {}", link.label));
        })
        .collect::<Vec<Line>>();

    frame.render_widget(Paragraph::new(nav_lines), nav_inner);
}

pub fn render_frame(frame: &mut Frame, app_state: &mut AppState) {
    let layout =
        Layout::horizontal([Constraint::Length(28), Constraint::Min(1)]).split(frame.area());
    let main = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(layout[1]);

    let document_area = main[0];
    // Last columns stay free for the scrollbar.
    let content_area = Rect {
        width: document_area.width.saturating_sub(2),
        ..document_area
    };
    app_state.set_rect(content_area);

    render_side_nav(frame, app_state, layout[0]);

    let visible = app_state
        .document
        .lines
        .iter()
        .skip(app_state.scroll.position)
        .take(content_area.height.into())
        .cloned()
        .collect::<Vec<Line>>();
    frame.render_widget(Paragraph::new(visible), content_area);

    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        document_area,
        &mut app_state.scroll.scrollbar_state,
    );

    let footer = Line::from(Span::styled(
        "↑/↓ desplazarse   ←/→ o p/n cambiar de paso   q salir",
        Style::default().add_modifier(Modifier::DIM),
    ));
    frame.render_widget(Paragraph::new(footer), main[1]);
}

async fn start_loop<B: Backend>(terminal: &mut Terminal<B>, app_state: &mut AppState) -> Result<()> {
    let mut events_service = EventsService::new();

    loop {
        terminal.draw(|frame| render_frame(frame, app_state))?;

        let event = events_service.next().await?;
        if !app_state.handle_event(event) {
            return Ok(());
        }
    }
}

pub async fn start(props: AppStateProps) -> Result<()> {
    let mut app_state = AppState::new(props)?;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let result = start_loop(&mut terminal, &mut app_state).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    let _ = crossterm::execute!(io::stdout(), cursor::Show);

    return result;
}
