//! # BookDetails Component
//!
//! Stateless details view for one record. Absent fields render as "n/a".
//! The thumbnail URL is shown with its scheme upgraded to https; the image
//! itself is never fetched.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::books::BookRecord;
use crate::tui::component::Component;

const ABSENT: &str = "n/a";

pub struct BookDetails<'a> {
    pub record: &'a BookRecord,
}

impl<'a> BookDetails<'a> {
    pub fn new(record: &'a BookRecord) -> Self {
        Self { record }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let info = &self.record.volume_info;
        let label = Style::default().fg(Color::DarkGray);

        let field = |name: &str, value: Option<String>| {
            Line::from(vec![
                Span::styled(format!("{name:<11}"), label),
                Span::raw(value.unwrap_or_else(|| ABSENT.to_string())),
            ])
        };

        vec![
            Line::from(Span::styled(
                info.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            field("Authors", self.record.authors_line()),
            field("Publisher", info.publisher.clone()),
            field("Published", info.published_date.clone()),
            field("Pages", info.page_count.map(|n| n.to_string())),
            field(
                "Thumbnail",
                info.image_links.as_ref().map(|links| links.secure_thumbnail()),
            ),
            field("Id", Some(self.record.id.clone())),
        ]
    }
}

impl Component for BookDetails<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Details ")
            .title_bottom(Line::from(" Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let paragraph = Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
