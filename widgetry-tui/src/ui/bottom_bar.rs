use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::mode::{Mode, Screen};

/// Render the bottom bar: search input when the search bar is focused,
/// otherwise a status message or key hints.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let content = if app.screen == Screen::Catalog && app.mode == Mode::Search {
        Line::from(vec![
            Span::styled("/", Style::default().fg(Color::Yellow)),
            Span::raw(app.model.query().to_string()),
            Span::styled("▏", Style::default().fg(Color::Green)), // Cursor
        ])
    } else if let Some(ref msg) = app.status_message {
        Line::from(msg.as_str())
    } else {
        let hints = match app.screen {
            Screen::Catalog => {
                if app.model.query().is_empty() {
                    "j/k: move | Enter: open | /: search | q: quit"
                } else {
                    "j/k: move | Enter: open | /: edit filter | Esc: clear filter | q: quit"
                }
            }
            Screen::Detail => "Esc/Backspace: back | arrows/space: interact | q: quit",
        };
        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
    };

    f.render_widget(Paragraph::new(content), area);
}
