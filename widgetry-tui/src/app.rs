//! Core application state: catalog model, input mode, selection, and the
//! detail screen lifecycle.

use tracing::debug;
use widgetry_core::{CatalogModel, ComponentItem, DemoRecipe};

use crate::demo::DemoState;
use crate::mode::{Mode, Screen};

/// One row of the rendered catalog list.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogRow {
    /// Section heading, not selectable
    Header(String),
    /// Selectable item row; the index counts items only, skipping headers
    Item { index: usize, item: ComponentItem },
}

/// Detail screen: the opened item, its resolved recipe, and fresh
/// interactive state scoped to this visit.
#[derive(Debug, Clone)]
pub struct DetailScreen {
    pub item: ComponentItem,
    /// None renders the "component not found" placeholder
    pub recipe: Option<DemoRecipe>,
    pub state: DemoState,
}

impl DetailScreen {
    pub fn open(item: ComponentItem) -> Self {
        let recipe = DemoRecipe::for_name(&item.name);
        if recipe.is_none() {
            debug!(name = %item.name, "no demo recipe for item");
        }
        let state = DemoState::for_recipe(recipe.as_ref());
        Self {
            item,
            recipe,
            state,
        }
    }
}

/// Main application state
pub struct App {
    /// Catalog data and live query
    pub model: CatalogModel,
    /// Current input mode (catalog screen only)
    pub mode: Mode,
    /// Which screen is showing
    pub screen: Screen,
    /// Selected item index within the filtered, flattened item list
    pub selected: usize,
    /// Open detail screen, if any
    pub detail: Option<DetailScreen>,
    /// Status message (shown in the bottom bar)
    pub status_message: Option<String>,
}

impl App {
    /// Create the app over the compiled-in seed catalog.
    pub fn new() -> Self {
        Self {
            model: CatalogModel::seeded(),
            mode: Mode::Normal,
            screen: Screen::Catalog,
            selected: 0,
            detail: None,
            status_message: None,
        }
    }

    /// Apply a query passed on the command line, as if it had been typed.
    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        self.model.set_query(query);
        self
    }

    /// Items of the filtered view, flattened in display order.
    pub fn filtered_items(&self) -> Vec<ComponentItem> {
        self.model
            .filtered_sections()
            .into_iter()
            .flat_map(|s| s.items)
            .collect()
    }

    /// Rows of the filtered view: headers interleaved with items.
    pub fn rows(&self) -> Vec<CatalogRow> {
        let mut rows = Vec::new();
        let mut index = 0;
        for section in self.model.filtered_sections() {
            rows.push(CatalogRow::Header(section.title));
            for item in section.items {
                rows.push(CatalogRow::Item { index, item });
                index += 1;
            }
        }
        rows
    }

    /// Currently selected item, if the filtered list is non-empty.
    pub fn selected_item(&self) -> Option<ComponentItem> {
        self.filtered_items().into_iter().nth(self.selected)
    }

    /// Select next item, wrapping at the end.
    pub fn select_next(&mut self) {
        let len = self.filtered_items().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Select previous item, wrapping at the start.
    pub fn select_prev(&mut self) {
        let len = self.filtered_items().len();
        if len > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.filtered_items().len().saturating_sub(1);
    }

    /// Enter search mode; the current query stays in place.
    pub fn enter_search(&mut self) {
        self.mode = Mode::Search;
        self.status_message = None;
    }

    /// Leave search mode keeping the filter applied.
    pub fn apply_search(&mut self) {
        self.mode = Mode::Normal;
    }

    /// Cancel search: clear the query and show everything again.
    pub fn cancel_search(&mut self) {
        self.mode = Mode::Normal;
        self.model.set_query("");
        self.selected = 0;
    }

    /// Append one character to the query. Refilters synchronously.
    pub fn push_query_char(&mut self, c: char) {
        let mut query = self.model.query().to_string();
        query.push(c);
        self.model.set_query(query);
        self.selected = 0;
    }

    /// Drop the last character of the query. Refilters synchronously.
    pub fn pop_query_char(&mut self) {
        let mut query = self.model.query().to_string();
        query.pop();
        self.model.set_query(query);
        self.selected = 0;
    }

    /// Open the detail screen for the selected item.
    pub fn open_selected(&mut self) {
        if let Some(item) = self.selected_item() {
            debug!(name = %item.name, "opening detail screen");
            self.detail = Some(DetailScreen::open(item));
            self.screen = Screen::Detail;
            self.status_message = None;
        }
    }

    /// Close the detail screen, discarding its state.
    pub fn close_detail(&mut self) {
        self.detail = None;
        self.screen = Screen::Catalog;
    }

    /// Set status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
