//! # TitleBar Component
//!
//! Top status bar. Purely presentational: it receives all data as props.
//!
//! The title text changes based on state:
//!
//! 1. **Loading**: `"bookfinder [google-books] | Searching for 'x'... ⋯"`
//! 2. **Status message**: `"bookfinder [google-books] | 12 results for 'x'"`
//! 3. **Default**: `"bookfinder [google-books]"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub struct TitleBar {
    /// Name of the search backend (e.g., "google-books")
    pub source_name: String,
    pub status_message: String,
    pub is_loading: bool,
    /// Failed searches tint the bar red.
    pub has_error: bool,
}

impl TitleBar {
    pub fn new(source_name: String, status_message: String, is_loading: bool, has_error: bool) -> Self {
        Self {
            source_name,
            status_message,
            is_loading,
            has_error,
        }
    }

    fn text(&self) -> String {
        let mut text = format!("bookfinder [{}]", self.source_name);
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if self.is_loading {
            text.push_str(" ⋯");
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.has_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}
