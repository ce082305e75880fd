#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;

use super::Navigator;
use super::RenderedDocument;
use super::Reveal;
use super::Scroll;
use super::SectionList;
use super::Sequencer;
use super::Viewport;
use crate::domain::models::Event;
use crate::domain::models::Guide;

pub struct AppStateProps {
    pub guide: Guide,
    pub nav_lookahead: i64,
    pub reveal_threshold: f64,
}

/// Owns the three guide components and the rendered document they share.
/// Each component keeps its own state private; they only meet through the
/// geometry produced by the layout pass.
pub struct AppState {
    pub guide: Guide,
    pub sequencer: Sequencer,
    pub navigator: Navigator,
    pub reveal: Reveal,
    pub scroll: Scroll,
    pub document: RenderedDocument,
    pub last_known_width: usize,
    pub last_known_height: usize,
}

impl AppState {
    pub fn new(props: AppStateProps) -> Result<AppState> {
        let sequencer = Sequencer::new(props.guide.steps.clone())?;
        let navigator = Navigator::new(props.guide.nav.clone(), props.nav_lookahead);

        return Ok(AppState {
            guide: props.guide,
            sequencer,
            navigator,
            reveal: Reveal::new(props.reveal_threshold),
            scroll: Scroll::default(),
            document: RenderedDocument::default(),
            last_known_width: 0,
            last_known_height: 0,
        });
    }

    /// Called by the draw loop with the document pane's dimensions. A changed
    /// rect triggers a relayout, which is how the spy survives resizes.
    pub fn set_rect(&mut self, rect: Rect) {
        let width = usize::from(rect.width);
        let height = usize::from(rect.height);
        if width == self.last_known_width && height == self.last_known_height {
            return;
        }

        self.last_known_width = width;
        self.last_known_height = height;
        self.sync_dependants();
    }

    /// Route one event to the owning component. Returns false when the event
    /// ends the loop.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::KeyboardCTRLC | Event::KeyboardQuit => {
                return false;
            }
            Event::UITick => {}
            Event::UIScrollUp => self.scroll.up(),
            Event::UIScrollDown => self.scroll.down(),
            Event::UIScrollPageUp => self.scroll.up_page(),
            Event::UIScrollPageDown => self.scroll.down_page(),
            Event::UIScrollTop => self.scroll.first(),
            Event::UIScrollBottom => self.scroll.last(),
            Event::StepAdvance => {
                self.sequencer.advance();
            }
            Event::StepRetreat => {
                self.sequencer.retreat();
            }
        }

        self.sync_dependants();
        return true;
    }

    fn sync_dependants(&mut self) {
        if self.last_known_width == 0 {
            return;
        }

        self.document = SectionList::render(
            &self.guide,
            &self.sequencer.view(),
            &self.reveal,
            self.last_known_width,
        );
        self.scroll
            .set_state(self.document.lines.len(), self.last_known_height);

        self.navigator.set_sections(self.document.sections.clone());
        self.navigator.on_scroll(self.scroll.position as i64);

        let viewport = Viewport {
            top: self.scroll.position as i64,
            height: self.last_known_height as i64,
        };
        if self.reveal.observe(&viewport, &self.document.reveal_targets) > 0 {
            // Newly tagged regions draw normal from this frame on.
            self.document = SectionList::render(
                &self.guide,
                &self.sequencer.view(),
                &self.reveal,
                self.last_known_width,
            );
        }
    }
}
