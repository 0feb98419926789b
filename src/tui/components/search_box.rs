//! # SearchBox Component
//!
//! Single-line query input. The buffer and cursor are internal state; whether
//! the box has focus is a prop set by the parent each frame.
//!
//! The submitted text stays in the buffer so a query can be refined and
//! resubmitted. Pasted newlines become spaces.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchBoxEvent {
    /// User pressed Enter. The empty query is allowed.
    Submit(String),
    ContentChanged,
}

pub struct SearchBox {
    pub buffer: String,
    /// Byte offset into `buffer`, always on a char boundary.
    cursor: usize,
    /// Prop: draws the cursor and a bright border when true.
    pub focused: bool,
}

impl SearchBox {
    pub fn new(initial: &str) -> Self {
        Self {
            buffer: initial.to_string(),
            cursor: initial.len(),
            focused: true,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Terminal columns are u16; anything wider pins at the edge.
fn to_column(width: usize) -> u16 {
    u16::try_from(width).unwrap_or(u16::MAX)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2) as usize;
        let cursor_col = self.buffer[..self.cursor].width();
        // Keep the cursor inside the box by scrolling horizontally.
        let scroll = cursor_col.saturating_sub(inner_width.saturating_sub(1));

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Search ");

        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .scroll((0, to_column(scroll)));
        frame.render_widget(input, area);

        if self.focused && area.width > 2 && area.height > 2 {
            let x = area
                .x
                .saturating_add(1)
                .saturating_add(to_column(cursor_col - scroll));
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchBoxEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(SearchBoxEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                let flattened = text.replace(['\r', '\n'], " ");
                self.insert_str(&flattened);
                Some(SearchBoxEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Some(SearchBoxEvent::ContentChanged)
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                Some(SearchBoxEvent::ContentChanged)
            }
            TuiEvent::CursorLeft => {
                (self.cursor > 0).then(|| {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                    SearchBoxEvent::ContentChanged
                })
            }
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                SearchBoxEvent::ContentChanged
            }),
            TuiEvent::Home => (self.cursor != 0).then(|| {
                self.cursor = 0;
                SearchBoxEvent::ContentChanged
            }),
            TuiEvent::End => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                SearchBoxEvent::ContentChanged
            }),
            TuiEvent::Submit => Some(SearchBoxEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}
