//! Detail screen: one catalog item rendered live with its demo recipe
//! and the visit-local interactive state.

use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Padding, Paragraph, Row, Table, Tabs, Wrap},
    Frame,
};
use widgetry_core::{DemoRecipe, ListStyle, StackAxis};

use crate::app::{App, DetailScreen};
use crate::demo::DemoState;

const ACCENT: Color = Color::Cyan;
const DIM: Color = Color::DarkGray;

/// Render the detail panel
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(detail) = app.detail.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Name + docs link
            Constraint::Min(4),    // Demo area
        ])
        .split(area);

    render_header(f, chunks[0], detail);
    render_demo(f, chunks[1], detail);
}

fn render_header(f: &mut Frame, area: Rect, detail: &DetailScreen) {
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::raw(format!("{} ", detail.item.icon)),
            Span::styled(
                detail.item.name.clone(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        // Shown for reference only; 'o' is reserved but unwired
        Line::from(Span::styled(
            format!("docs: {}", detail.item.docs_url),
            Style::default().fg(DIM),
        )),
    ]);
    f.render_widget(header, area);
}

fn render_demo(f: &mut Frame, area: Rect, detail: &DetailScreen) {
    let Some(recipe) = detail.recipe.as_ref() else {
        render_not_found(f, area);
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Demo ")
        .title_bottom(Line::from(Span::styled(
            format!(" {} ", demo_hint(recipe)),
            Style::default().fg(DIM),
        )))
        .border_style(Style::default().fg(ACCENT));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let state = &detail.state;
    match recipe {
        DemoRecipe::Text { sample } => {
            let text = Paragraph::new(*sample).style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            );
            f.render_widget(text, inner);
        }

        DemoRecipe::Label { text, glyph } => {
            let line = Line::from(vec![
                Span::styled(format!("{glyph} "), Style::default().fg(Color::Yellow)),
                Span::styled(*text, Style::default().fg(Color::Yellow)),
            ]);
            f.render_widget(Paragraph::new(line), inner);
        }

        DemoRecipe::TextField { placeholder } => {
            render_input_line(f, inner, &state.text_input, placeholder, false);
        }

        DemoRecipe::SecureField { placeholder } => {
            render_input_line(f, inner, &state.secure_input, placeholder, true);
        }

        DemoRecipe::TextArea { .. } => {
            let boxed = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue));
            let text = Paragraph::new(format!("{}▏", state.text_area))
                .block(boxed)
                .wrap(Wrap { trim: false });
            f.render_widget(text, centered(inner, inner.width.saturating_sub(4), 6));
        }

        DemoRecipe::Image => render_image(f, inner),

        DemoRecipe::Button { caption } => {
            let presses = match state.button_presses {
                0 => "not pressed yet".to_string(),
                1 => "pressed 1 time".to_string(),
                n => format!("pressed {} times", n),
            };
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {}  ", caption),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(presses, Style::default().fg(DIM))),
            ];
            f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
        }

        DemoRecipe::Menu { title, options } => {
            let items: Vec<ListItem> = options
                .iter()
                .enumerate()
                .map(|(idx, option)| {
                    let style = if idx == state.menu_index {
                        Style::default()
                            .fg(Color::Black)
                            .bg(ACCENT)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    ListItem::new(Span::styled(format!("  {}", option), style))
                })
                .collect();

            let list = List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", title)),
            );
            f.render_widget(list, centered(inner, 30, options.len() as u16 + 2));
        }

        DemoRecipe::Link { label, url } => {
            let lines = vec![
                Line::from(Span::styled(
                    *label,
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                )),
                Line::from(Span::styled(*url, Style::default().fg(DIM))),
            ];
            f.render_widget(Paragraph::new(lines), inner);
        }

        DemoRecipe::Slider { min, max, .. } => {
            let ratio = ((state.slider_value - min) / (max - min)).clamp(0.0, 1.0);
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(Color::LightMagenta))
                .ratio(ratio)
                .label(format!("{:.0}", state.slider_value));
            f.render_widget(gauge, centered(inner, inner.width.saturating_sub(4), 3));
        }

        DemoRecipe::Stepper { label, .. } => {
            let line = Line::from(vec![
                Span::raw(format!("{}: ", label)),
                Span::styled(
                    state.stepper_value.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled("   [-]  [+]", Style::default().fg(DIM)),
            ]);
            f.render_widget(Paragraph::new(line), inner);
        }

        DemoRecipe::Toggle { label, .. } => {
            let (knob, style) = if state.toggle_on {
                (
                    " ON  ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" OFF ", Style::default().fg(Color::White).bg(DIM))
            };
            let line = Line::from(vec![
                Span::raw(format!("{}  ", label)),
                Span::styled(knob, style),
            ]);
            f.render_widget(Paragraph::new(line), inner);
        }

        DemoRecipe::Picker { label, options, .. } => {
            let tabs = Tabs::new(options.to_vec())
                .select(state.picker_index)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!(" {} ", label)),
                )
                .highlight_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(ACCENT)
                        .add_modifier(Modifier::BOLD),
                );
            f.render_widget(tabs, centered(inner, 30, 3));
        }

        DemoRecipe::DatePicker => render_calendar(f, inner, state.date),

        DemoRecipe::ColorPicker { palette } => render_palette(f, inner, palette, state),

        DemoRecipe::Progress { label, total } => {
            let ratio = (state.slider_value / total).clamp(0.0, 1.0);
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(Color::Green))
                .ratio(ratio)
                .label(format!("{} {:.0}%", label, ratio * 100.0));
            f.render_widget(gauge, centered(inner, inner.width.saturating_sub(4), 3));
        }

        DemoRecipe::Stack { axis } => render_stack(f, inner, *axis),

        DemoRecipe::Form => render_form(f, inner),

        DemoRecipe::Navigation => render_navigation(f, inner),

        DemoRecipe::Alert { title, message } => {
            render_popup(f, inner, title, message, " [ OK ] ");
        }

        DemoRecipe::Sheet { message } => render_sheet(f, inner, message),

        DemoRecipe::ListDemo { style } => render_list_demo(f, inner, *style),
    }
}

fn render_not_found(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Component not found",
            Style::default().fg(DIM).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(msg, area);
}

fn render_input_line(f: &mut Frame, area: Rect, content: &str, placeholder: &str, mask: bool) {
    let boxed = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let text = if content.is_empty() {
        Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(DIM),
        ))
    } else if mask {
        Line::from(format!("{}▏", "•".repeat(content.chars().count())))
    } else {
        Line::from(format!("{}▏", content))
    };

    let field = Paragraph::new(text).block(boxed);
    f.render_widget(field, centered(area, area.width.saturating_sub(4), 3));
}

fn render_image(f: &mut Frame, area: Rect) {
    let art = [
        "░░░░░░░░░░░░░░░░░░░░",
        "░░░░░░▒▒▒▒░░░░░░▓▓░░",
        "░░░░▒▒▒▒▒▒▒▒░░░░░░░░",
        "░░▒▒▒▒▓▓▓▓▒▒▒▒░░░░░░",
        "▒▒▒▒▓▓▓▓▓▓▓▓▒▒▒▒▒▒▒▒",
    ];
    let lines: Vec<Line> = art
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(Color::Magenta))))
        .collect();
    let image = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" photo "));
    f.render_widget(image, centered(area, 24, art.len() as u16 + 2));
}

fn render_calendar(f: &mut Frame, area: Rect, date: NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let lead = first.weekday().num_days_from_monday() as usize;
    let days = days_in_month(date);

    let mut lines = vec![
        Line::from(Span::styled(
            date.format("%B %Y").to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Mo Tu We Th Fr Sa Su",
            Style::default().fg(DIM),
        )),
    ];

    let mut week: Vec<Span> = vec![Span::raw("   ".repeat(lead))];
    for day in 1..=days {
        let style = if day == date.day() {
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        week.push(Span::styled(format!("{:>2}", day), style));
        week.push(Span::raw(" "));

        if (lead + day as usize) % 7 == 0 {
            lines.push(Line::from(std::mem::take(&mut week)));
        }
    }
    if !week.is_empty() {
        lines.push(Line::from(week));
    }

    let calendar = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(calendar, centered(area, 25, 10));
}

fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt()).map(|d| d.day()).unwrap_or(31)
}

fn render_palette(f: &mut Frame, area: Rect, palette: &[&str], state: &DemoState) {
    let mut swatches: Vec<Span> = Vec::new();
    for (idx, name) in palette.iter().enumerate() {
        let color = color_from_name(name);
        if idx == state.palette_index {
            swatches.push(Span::raw("["));
            swatches.push(Span::styled("██", Style::default().fg(color)));
            swatches.push(Span::raw("]"));
        } else {
            swatches.push(Span::raw(" "));
            swatches.push(Span::styled("██", Style::default().fg(color)));
            swatches.push(Span::raw(" "));
        }
    }

    let selected = palette.get(state.palette_index).copied().unwrap_or("?");
    let lines = vec![
        Line::from(swatches),
        Line::from(""),
        Line::from(Span::styled(
            format!("Selected: {}", selected),
            Style::default().fg(DIM),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered(area, area.width.saturating_sub(4), 3),
    );
}

fn color_from_name(name: &str) -> Color {
    match name {
        "Blue" => Color::Blue,
        "Green" => Color::Green,
        "Yellow" => Color::Yellow,
        "Red" => Color::Red,
        "Magenta" => Color::Magenta,
        "Cyan" => Color::Cyan,
        _ => Color::White,
    }
}

fn render_stack(f: &mut Frame, area: Rect, axis: StackAxis) {
    let labeled = |label: &'static str| {
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
    };

    match axis {
        StackAxis::Horizontal => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(33),
                    Constraint::Percentage(34),
                    Constraint::Percentage(33),
                ])
                .split(centered(area, area.width.saturating_sub(4), 5));
            for (chunk, label) in chunks.iter().zip(["One", "Two", "Three"]) {
                f.render_widget(labeled(label), *chunk);
            }
        }
        StackAxis::Vertical => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(3),
                ])
                .split(centered(area, 24, 9));
            for (chunk, label) in chunks.iter().zip(["One", "Two", "Three"]) {
                f.render_widget(labeled(label), *chunk);
            }
        }
        StackAxis::Layered => {
            // Two overlapping boxes to show z-order
            let back = centered(area, 26, 7);
            f.render_widget(labeled("Back layer"), back);

            let front = Rect {
                x: back.x + 4,
                y: back.y + 2,
                width: back.width.min(20),
                height: 4,
            };
            f.render_widget(Clear, front);
            f.render_widget(labeled("Front layer"), front);
        }
    }
}

fn render_form(f: &mut Frame, area: Rect) {
    let rows = vec![
        Row::new(vec!["Name", "Ada Lovelace"]),
        Row::new(vec!["Email", "ada@example.com"]),
        Row::new(vec!["Notifications", "On"]),
    ];
    let table = Table::new(rows, [Constraint::Length(16), Constraint::Min(10)])
        .header(
            Row::new(vec!["Field", "Value"]).style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(" Form "));
    f.render_widget(table, centered(area, 40, 6));
}

fn render_navigation(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(2)])
        .split(centered(area, area.width.saturating_sub(4), 7));

    let tabs = Tabs::new(vec!["Library", "Detail", "Settings"])
        .select(0)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[0]);

    let body = Paragraph::new("Library > Detail")
        .style(Style::default().fg(DIM))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, chunks[1]);
}

fn render_popup(f: &mut Frame, area: Rect, title: &str, message: &str, footer: &str) {
    let popup = centered(area, 36, 6);
    f.render_widget(Clear, popup);

    let lines = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            footer.to_string(),
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let body = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title))
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(body, popup);
}

fn render_sheet(f: &mut Frame, area: Rect, message: &str) {
    // Bottom-anchored, like a sheet sliding up
    let height = (area.height / 2).max(4);
    let sheet = Rect {
        x: area.x + 2,
        y: area.y + area.height.saturating_sub(height),
        width: area.width.saturating_sub(4),
        height,
    };
    f.render_widget(Clear, sheet);

    let body = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Sheet ")
                .border_style(Style::default().fg(ACCENT)),
        );
    f.render_widget(body, sheet);
}

fn render_list_demo(f: &mut Frame, area: Rect, style: ListStyle) {
    const SAMPLE: [&str; 5] = ["Inbox", "Drafts", "Sent", "Archive", "Trash"];

    let rows = |prefix: &str| -> Vec<ListItem> {
        SAMPLE
            .iter()
            .map(|name| ListItem::new(format!("{}{}", prefix, name)))
            .collect()
    };

    let target = centered(area, 30, SAMPLE.len() as u16 + 2);
    let list = match style {
        ListStyle::Plain => List::new(rows(" ")),
        ListStyle::Inset => List::new(rows("    ")),
        ListStyle::Grouped => List::new(rows(" "))
            .block(Block::default().borders(Borders::ALL).title(" Mailboxes ")),
        ListStyle::InsetGrouped => List::new(rows(" ")).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Mailboxes ")
                .padding(Padding::horizontal(3)),
        ),
        ListStyle::Sidebar => List::new(rows("▸ "))
            .block(Block::default().borders(Borders::LEFT))
            .style(Style::default().fg(ACCENT)),
    };

    f.render_widget(list, target);
}

fn demo_hint(recipe: &DemoRecipe) -> &'static str {
    match recipe {
        DemoRecipe::TextField { .. } | DemoRecipe::SecureField { .. } => "type to edit",
        DemoRecipe::TextArea { .. } => "type to edit, Enter for newline",
        DemoRecipe::Button { .. } => "Space/Enter to press",
        DemoRecipe::Menu { .. } => "j/k to choose",
        DemoRecipe::Slider { .. } | DemoRecipe::Progress { .. } => "←/→ to adjust",
        DemoRecipe::Stepper { .. } => "↑/↓ or +/- to step",
        DemoRecipe::Toggle { .. } => "Space/Enter to flip",
        DemoRecipe::Picker { .. } => "←/→ to pick",
        DemoRecipe::DatePicker => "←/→ day, ↑/↓ week",
        DemoRecipe::ColorPicker { .. } => "←/→ to pick a color",
        _ => "display only",
    }
}

/// Center a child rect of the given size inside `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
