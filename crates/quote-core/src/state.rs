//! Explicit widget state
//!
//! Everything the front-end shows lives here: the current quote, the theme,
//! which overlay is open and whether an AI request is outstanding. The UI
//! only mutates it through the methods below.

use crate::quote::{Quote, QuoteStore};
use crate::theme::ThemeVariant;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    /// Browse the whole quote store
    List,
    /// Key bindings
    Help,
}

#[derive(Debug, Clone)]
pub struct WidgetState {
    current: Quote,
    theme: ThemeVariant,
    overlay: Overlay,
    list_cursor: usize,
    ai_loading: bool,
}

impl WidgetState {
    /// Start on a random entry of the store.
    pub fn new<R: Rng + ?Sized>(store: &QuoteStore, theme: ThemeVariant, rng: &mut R) -> Self {
        Self {
            current: store.random(rng).clone(),
            theme,
            overlay: Overlay::None,
            list_cursor: 0,
            ai_loading: false,
        }
    }

    pub fn current(&self) -> &Quote {
        &self.current
    }

    pub fn theme(&self) -> ThemeVariant {
        self.theme
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn list_cursor(&self) -> usize {
        self.list_cursor
    }

    pub fn is_ai_loading(&self) -> bool {
        self.ai_loading
    }

    pub fn next_random<R: Rng + ?Sized>(&mut self, store: &QuoteStore, rng: &mut R) {
        self.current = store.random(rng).clone();
    }

    pub fn toggle_theme(&mut self) -> ThemeVariant {
        self.theme = self.theme.next();
        self.theme
    }

    /// Opens the list with the cursor on the quote being shown, if it is
    /// one of the store's.
    pub fn open_list(&mut self, store: &QuoteStore) {
        self.list_cursor = store
            .as_slice()
            .iter()
            .position(|q| *q == self.current)
            .unwrap_or(0);
        self.overlay = Overlay::List;
    }

    pub fn open_help(&mut self) {
        self.overlay = Overlay::Help;
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    pub fn list_next(&mut self, len: usize) {
        if len > 0 {
            self.list_cursor = (self.list_cursor + 1) % len;
        }
    }

    pub fn list_previous(&mut self, len: usize) {
        if len > 0 {
            self.list_cursor = (self.list_cursor + len - 1) % len;
        }
    }

    /// Move the cursor by whole pages, clamped to the list bounds.
    pub fn list_page(&mut self, len: usize, per_page: usize, forward: bool) {
        if len == 0 || per_page == 0 {
            return;
        }
        self.list_cursor = if forward {
            (self.list_cursor + per_page).min(len - 1)
        } else {
            self.list_cursor.saturating_sub(per_page)
        };
    }

    /// Show the entry under the cursor and close the list.
    pub fn select_from_list(&mut self, store: &QuoteStore) {
        if let Some(quote) = store.get(self.list_cursor) {
            self.current = quote.clone();
        }
        self.overlay = Overlay::None;
    }

    /// Returns false, changing nothing, while a request is outstanding.
    pub fn begin_ai_request(&mut self) -> bool {
        if self.ai_loading {
            return false;
        }
        self.ai_loading = true;
        true
    }

    /// A generated quote replaces the current one; `None` leaves it alone.
    pub fn finish_ai_request(&mut self, quote: Option<Quote>) {
        self.ai_loading = false;
        if let Some(quote) = quote {
            self.current = quote;
        }
    }
}
