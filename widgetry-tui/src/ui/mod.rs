pub mod bottom_bar;
pub mod catalog_panel;
pub mod detail_panel;
pub mod layout;
pub mod status_bar;

use ratatui::Frame;

use crate::app::App;
use crate::mode::Screen;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let (status_area, content_area, bottom_area) = layout::Layout::main(frame.area());

    status_bar::render(frame, status_area, app);

    match app.screen {
        Screen::Catalog => catalog_panel::render(frame, content_area, app),
        Screen::Detail => detail_panel::render(frame, content_area, app),
    }

    bottom_bar::render(frame, bottom_area, app);
}
