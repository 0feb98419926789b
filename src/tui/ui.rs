use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Color;

use crate::core::state::{App, Screen};
use crate::tui::component::Component;
use crate::tui::components::{BookDetails, ResultList, TitleBar};
use crate::tui::{Focus, TuiState};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, search_area, main_area] =
        Layout::vertical([Length(1), Length(3), Min(0)]).areas(frame.area());

    TitleBar::new(
        app.search.source_name().to_string(),
        app.status_message.clone(),
        app.is_loading,
        app.error.is_some(),
    )
    .render(frame, title_area);

    let on_results = app.screen == Screen::Results;
    tui.search_box.focused = on_results && tui.focus == Focus::Search;
    tui.search_box.render(frame, search_area);

    if let Screen::Details(_) = app.screen {
        match app.details_record() {
            Some(record) => BookDetails::new(&record).render(frame, main_area),
            None => draw_results(frame, app, tui, main_area),
        }
        return;
    }

    draw_results(frame, app, tui, main_area);
}

fn draw_results(frame: &mut Frame, app: &App, tui: &mut TuiState, area: ratatui::layout::Rect) {
    let results = app.results();
    let empty_message = if let Some(ref err) = app.error {
        Some((err.as_str(), Color::Red))
    } else if app.is_loading {
        Some(("Searching...", Color::DarkGray))
    } else if app.has_searched {
        Some(("No results.", Color::DarkGray))
    } else {
        None
    };

    ResultList {
        records: results.as_slice(),
        state: &mut tui.result_list,
        focused: tui.focus == Focus::Results,
        empty_message,
    }
    .render(frame, area);
}
