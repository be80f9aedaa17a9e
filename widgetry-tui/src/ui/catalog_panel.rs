//! Grouped catalog list: section headers with selectable item rows,
//! filtered live by the search query with match highlighting.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use widgetry_core::{match_range, ComponentItem};

use crate::app::{App, CatalogRow};

const ACCENT: Color = Color::Cyan;
const HIGHLIGHT: Color = Color::Yellow;
const DIM: Color = Color::DarkGray;

/// Render the catalog panel
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.model.query().is_empty() {
        " Components ".to_string()
    } else {
        format!(" Components — filter: '{}' ", app.model.query())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(ACCENT));

    let rows = app.rows();

    if rows.is_empty() {
        // Zero matches is an empty list, not an error state
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("No components match '{}'", app.model.query()),
                Style::default().fg(DIM).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Backspace to widen the filter, Esc to clear it",
                Style::default().fg(DIM),
            )),
        ])
        .block(block)
        .alignment(Alignment::Center);

        f.render_widget(empty, area);
        return;
    }

    let inner_height = block.inner(area).height as usize;

    // Scroll so the selected row stays on screen; headers scroll with
    // their items.
    let selected_row = rows
        .iter()
        .position(|row| matches!(row, CatalogRow::Item { index, .. } if *index == app.selected))
        .unwrap_or(0);
    let offset = if inner_height == 0 {
        0
    } else {
        selected_row.saturating_sub(inner_height - 1)
    };

    let items: Vec<ListItem> = rows
        .iter()
        .skip(offset)
        .take(inner_height.max(1))
        .map(|row| match row {
            CatalogRow::Header(section_title) => header_row(section_title),
            CatalogRow::Item { index, item } => {
                item_row(item, app.model.query(), *index == app.selected)
            }
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);

    // Selection position indicator, top right
    let total = app.filtered_items().len();
    if total > 0 {
        let indicator = format!(" {}/{} ", app.selected + 1, total);
        let indicator_area = Rect {
            x: area.x + area.width.saturating_sub(indicator.len() as u16 + 2),
            y: area.y,
            width: indicator.len() as u16,
            height: 1,
        };
        f.render_widget(
            Paragraph::new(indicator).style(Style::default().fg(DIM)),
            indicator_area,
        );
    }
}

fn header_row(title: &str) -> ListItem<'static> {
    ListItem::new(Line::from(Span::styled(
        format!("── {} ", title),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
}

fn item_row(item: &ComponentItem, query: &str, is_selected: bool) -> ListItem<'static> {
    let base = if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![Span::styled(format!("  {} ", item.icon), base)];
    spans.extend(name_spans(&item.name, query, base, is_selected));

    ListItem::new(Line::from(spans))
}

/// Split the item name into spans, underlining the matched substring.
fn name_spans(name: &str, query: &str, base: Style, is_selected: bool) -> Vec<Span<'static>> {
    let range = if query.is_empty() {
        None
    } else {
        match_range(name, query)
    };

    match range {
        Some(range) if !range.is_empty() => {
            let hit_style = if is_selected {
                base.add_modifier(Modifier::UNDERLINED)
            } else {
                base.fg(HIGHLIGHT).add_modifier(Modifier::UNDERLINED)
            };
            vec![
                Span::styled(name[..range.start].to_string(), base),
                Span::styled(name[range.clone()].to_string(), hit_style),
                Span::styled(name[range.end..].to_string(), base),
            ]
        }
        _ => vec![Span::styled(name.to_string(), base)],
    }
}
