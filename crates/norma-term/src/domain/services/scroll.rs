#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;

use ratatui::widgets::ScrollbarState;

/// Vertical position of the document pane, clamped so the viewport never
/// scrolls past the last line.
#[derive(Default)]
pub struct Scroll {
    pub position: usize,
    pub scrollbar_state: ScrollbarState,
    document_length: usize,
    viewport_length: usize,
}

impl Scroll {
    pub fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
        self.sync_scrollbar();
    }

    pub fn down(&mut self) {
        self.position = (self.position + 1).min(self.max_position());
        self.sync_scrollbar();
    }

    pub fn up_page(&mut self) {
        self.position = self.position.saturating_sub(self.viewport_length);
        self.sync_scrollbar();
    }

    pub fn down_page(&mut self) {
        self.position = (self.position + self.viewport_length).min(self.max_position());
        self.sync_scrollbar();
    }

    pub fn first(&mut self) {
        self.position = 0;
        self.sync_scrollbar();
    }

    pub fn last(&mut self) {
        self.position = self.max_position();
        self.sync_scrollbar();
    }

    /// Update the document and viewport lengths after a layout pass. The
    /// position is re-clamped so a shrinking document can't strand it.
    pub fn set_state(&mut self, document_length: usize, viewport_length: usize) {
        self.document_length = document_length;
        self.viewport_length = viewport_length;
        self.position = self.position.min(self.max_position());
        self.sync_scrollbar();
    }

    pub fn viewport_length(&self) -> usize {
        return self.viewport_length;
    }

    fn max_position(&self) -> usize {
        return self.document_length.saturating_sub(self.viewport_length);
    }

    fn sync_scrollbar(&mut self) {
        self.scrollbar_state = ScrollbarState::new(self.max_position()).position(self.position);
    }
}
