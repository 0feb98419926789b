//! # ResultList Component
//!
//! Scrollable list of search results with a selection cursor.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ResultListState` lives in `TuiState` and survives across frames
//! - `ResultList` is created each frame with borrowed records and state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap};

use crate::books::BookRecord;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Rows moved by PageUp/PageDown.
const PAGE_SIZE: usize = 10;

/// Events emitted by the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// Open the record at this index.
    Open(usize),
    /// Up was pressed on the first row.
    LeaveTop,
}

/// Persistent state for the result list.
pub struct ResultListState {
    pub list_state: ListState,
    len: usize,
}

impl ResultListState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            len: 0,
        }
    }

    /// Called whenever the store publishes a new result set.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.list_state = ListState::default();
        if len > 0 {
            self.list_state.select(Some(0));
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected().filter(|&i| i < self.len)
    }

    fn select(&mut self, index: usize) {
        if self.len > 0 {
            self.list_state.select(Some(index.min(self.len - 1)));
        }
    }
}

impl Default for ResultListState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for ResultListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.len == 0 {
            return matches!(event, TuiEvent::CursorUp).then_some(ListEvent::LeaveTop);
        }
        let current = self.selected().unwrap_or(0);
        match event {
            TuiEvent::CursorUp => {
                if current == 0 {
                    return Some(ListEvent::LeaveTop);
                }
                self.select(current - 1);
                None
            }
            TuiEvent::CursorDown => {
                self.select(current + 1);
                None
            }
            TuiEvent::PageUp => {
                self.select(current.saturating_sub(PAGE_SIZE));
                None
            }
            TuiEvent::PageDown => {
                self.select(current + PAGE_SIZE);
                None
            }
            TuiEvent::Home => {
                self.select(0);
                None
            }
            TuiEvent::End => {
                self.select(self.len - 1);
                None
            }
            TuiEvent::Submit => Some(ListEvent::Open(current)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the result list.
pub struct ResultList<'a> {
    pub records: &'a [BookRecord],
    pub state: &'a mut ResultListState,
    pub focused: bool,
    /// Shown instead of the list when there are no records.
    pub empty_message: Option<(&'a str, Color)>,
}

impl Component for ResultList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let help_text = if self.focused {
            " ↑↓ Select  Enter Details  Tab Search "
        } else {
            " Enter Search  Tab/↓ Results  Esc Quit "
        };

        let border_color = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(format!(" Results ({}) ", self.records.len()))
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));

        if self.records.is_empty() {
            let (message, color) = self.empty_message.unwrap_or(("", Color::DarkGray));
            let empty = Paragraph::new(message)
                .style(Style::default().fg(color))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self.records.iter().map(list_line).map(ListItem::new).collect();

        let highlight = if self.focused {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let list = List::new(items).block(block).highlight_style(highlight);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// "Title · Author, Author · 2005"
fn list_line(record: &BookRecord) -> Line<'static> {
    let mut spans = vec![Span::styled(
        record.volume_info.title.clone(),
        Style::default().fg(Color::White),
    )];
    if let Some(authors) = record.authors_line() {
        spans.push(Span::styled(
            format!(" · {authors}"),
            Style::default().fg(Color::Gray),
        ));
    }
    if let Some(ref date) = record.volume_info.published_date {
        let year = date.split('-').next().unwrap_or(date);
        spans.push(Span::styled(
            format!(" · {year}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}
