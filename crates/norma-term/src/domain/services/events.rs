use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseEventKind;
use futures::StreamExt;
use tokio::time;

use crate::domain::models::Event;

pub struct EventsService {
    crossterm_events: EventStream,
}

impl EventsService {
    pub fn new() -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
        };
    }

    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
                MouseEventKind::ScrollUp => {
                    return Some(Event::UIScrollUp);
                }
                MouseEventKind::ScrollDown => {
                    return Some(Event::UIScrollDown);
                }
                _ => {
                    return None;
                }
            },
            // The draw loop re-reads the frame size, a tick is enough to
            // trigger the relayout.
            CrosstermEvent::Resize(_, _) => {
                return Some(Event::UITick);
            }
            CrosstermEvent::Key(keyevent) => {
                if keyevent.kind == KeyEventKind::Release {
                    return None;
                }

                let ctrl = keyevent.modifiers.contains(KeyModifiers::CONTROL);
                match keyevent.code {
                    KeyCode::Char('c') if ctrl => {
                        return Some(Event::KeyboardCTRLC);
                    }
                    KeyCode::Char('u') if ctrl => {
                        return Some(Event::UIScrollPageUp);
                    }
                    KeyCode::Char('d') if ctrl => {
                        return Some(Event::UIScrollPageDown);
                    }
                    KeyCode::Up => {
                        return Some(Event::UIScrollUp);
                    }
                    KeyCode::Down => {
                        return Some(Event::UIScrollDown);
                    }
                    KeyCode::PageUp => {
                        return Some(Event::UIScrollPageUp);
                    }
                    KeyCode::PageDown => {
                        return Some(Event::UIScrollPageDown);
                    }
                    KeyCode::Home => {
                        return Some(Event::UIScrollTop);
                    }
                    KeyCode::End => {
                        return Some(Event::UIScrollBottom);
                    }
                    KeyCode::Left | KeyCode::Char('p') => {
                        return Some(Event::StepRetreat);
                    }
                    KeyCode::Right | KeyCode::Char('n') => {
                        return Some(Event::StepAdvance);
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        return Some(Event::KeyboardQuit);
                    }
                    _ => {
                        return None;
                    }
                }
            }
            _ => return None,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(_)) => None,
                    None => None
                },
                _ = time::sleep(time::Duration::from_millis(500)) => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
