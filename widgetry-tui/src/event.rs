//! Event handling for the TUI

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::mode::{Mode, Screen};

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
}

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> HandleResult {
    // Global quit shortcuts (Ctrl+C, Ctrl+Q)
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return HandleResult::Quit,
            _ => {}
        }
    }

    match app.screen {
        Screen::Detail => handle_detail(app, key),
        Screen::Catalog => match app.mode {
            Mode::Normal => handle_normal(app, key),
            Mode::Search => handle_search(app, key),
        },
    }
}

/// Catalog screen, browse mode
fn handle_normal(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Char('q') => return HandleResult::Quit,

        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),

        KeyCode::Char('/') => app.enter_search(),

        // Esc drops an applied filter without entering search mode
        KeyCode::Esc if !app.model.query().is_empty() => app.cancel_search(),

        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => app.open_selected(),

        _ => {}
    }
    HandleResult::Continue
}

/// Catalog screen, search bar focused. Every keystroke refilters.
fn handle_search(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Enter => app.apply_search(),
        KeyCode::Backspace => app.pop_query_char(),
        KeyCode::Down => {
            app.apply_search();
            app.select_next();
        }
        KeyCode::Char(c) => app.push_query_char(c),
        _ => {}
    }
    HandleResult::Continue
}

/// Detail screen. The demo widget gets first pick of the key; what it
/// does not consume falls through to screen navigation.
fn handle_detail(app: &mut App, key: KeyEvent) -> HandleResult {
    if key.code == KeyCode::Esc {
        app.close_detail();
        return HandleResult::Continue;
    }

    if let Some(detail) = app.detail.as_mut() {
        if let Some(recipe) = detail.recipe.clone() {
            if detail.state.handle_key(&recipe, key) {
                return HandleResult::Continue;
            }
        }
    }

    match key.code {
        KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => app.close_detail(),
        KeyCode::Char('q') => return HandleResult::Quit,
        KeyCode::Char('o') => {
            // Documentation shortcut is a placeholder; the link is shown
            // but deliberately never opened.
        }
        _ => {}
    }
    HandleResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn slash_enters_search_and_typing_filters() {
        let mut app = App::new();
        handle_key(&mut app, key(KeyCode::Char('/')));
        assert_eq!(app.mode, Mode::Search);

        for c in "slider".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        assert_eq!(app.model.query(), "slider");
        assert_eq!(app.filtered_items().len(), 1);

        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.model.query(), "slider");
    }

    #[test]
    fn escape_in_search_cancels_filter() {
        let mut app = App::new();
        handle_key(&mut app, key(KeyCode::Char('/')));
        handle_key(&mut app, key(KeyCode::Char('x')));
        assert!(app.filtered_items().is_empty());

        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.filtered_items().len(), 28);
    }

    #[test]
    fn enter_opens_detail_and_escape_closes_it() {
        let mut app = App::new().with_initial_query("Button");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Detail);

        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::Catalog);
        assert!(app.detail.is_none());
    }

    #[test]
    fn detail_gives_demo_first_pick_of_keys() {
        let mut app = App::new().with_initial_query("TextField");
        handle_key(&mut app, key(KeyCode::Enter));

        // 'q' and 'h' are text here, not navigation or quit
        assert_eq!(handle_key(&mut app, key(KeyCode::Char('q'))), HandleResult::Continue);
        handle_key(&mut app, key(KeyCode::Char('h')));
        assert_eq!(app.screen, Screen::Detail);
        assert_eq!(app.detail.as_ref().unwrap().state.text_input, "qh");
    }

    #[test]
    fn unconsumed_q_quits_from_static_detail() {
        let mut app = App::new().with_initial_query("Label");
        app.open_selected();
        assert_eq!(handle_key(&mut app, key(KeyCode::Char('q'))), HandleResult::Quit);
    }

    #[test]
    fn doc_shortcut_is_inert() {
        let mut app = App::new().with_initial_query("Link");
        handle_key(&mut app, key(KeyCode::Enter));

        let before = app.screen;
        handle_key(&mut app, key(KeyCode::Char('o')));
        assert_eq!(app.screen, before);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let mut app = App::new();
        let quit = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut app, quit), HandleResult::Quit);

        app.open_selected();
        assert_eq!(handle_key(&mut app, quit), HandleResult::Quit);
    }
}
