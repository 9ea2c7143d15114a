//! Search overlay state: open flag, query, results and selection.
//!
//! The host forwards key events and input changes; the palette answers with
//! what to render and where to navigate. Every change of the result set
//! resets the selection.

use crate::index::FuzzyIndex;
use crate::results::SearchResults;
use crate::selection::{Direction, Selection};
use crate::shortcuts::{GlobalShortcuts, KeyInput, OverlayCommand};
use folio_core::types::Entry;
use std::sync::Arc;

/// Result of a key press inside the search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// Not handled; the host should let the key through.
    Ignored,
    /// Handled; the host should suppress the default action.
    Handled,
    /// Go to this site-relative URL.
    Navigate(String),
}

pub struct SearchPalette {
    index: FuzzyIndex,
    shortcuts: GlobalShortcuts,
    is_open: bool,
    query: String,
    results: SearchResults,
    selection: Selection,
    notify: Option<Arc<dyn Fn() + Send + Sync>>,
}

/// Create operations.
impl SearchPalette {
    pub fn new(index: FuzzyIndex, shortcuts: GlobalShortcuts) -> Self {
        let results = index.search("");
        Self {
            index,
            shortcuts,
            is_open: false,
            query: String::new(),
            results,
            selection: Selection::NONE,
            notify: None,
        }
    }

    /// Registers a callback invoked after every state change.
    pub fn on_change(&mut self, notify: Arc<dyn Fn() + Send + Sync>) {
        self.notify = Some(notify);
    }

    fn changed(&self) {
        if let Some(notify) = &self.notify {
            notify();
        }
    }
}

/// Overlay operations.
impl SearchPalette {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.set_open(true);
    }

    pub fn close(&mut self) {
        self.set_open(false);
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.is_open);
    }

    pub fn apply(&mut self, command: OverlayCommand) {
        match command {
            OverlayCommand::Toggle => self.toggle(),
            OverlayCommand::Open => self.open(),
            OverlayCommand::Close => self.close(),
        }
    }

    fn set_open(&mut self, open: bool) {
        if self.is_open != open {
            self.is_open = open;
            self.changed();
        }
    }

    /// Handles a key press from the window-level listener.
    ///
    /// Returns true if the key was consumed by a shortcut.
    pub fn handle_global_key(&mut self, input: &KeyInput) -> bool {
        match self.shortcuts.resolve(input, self.is_open) {
            Some(command) => {
                self.apply(command);
                true
            }
            None => false,
        }
    }
}

/// Query operations.
impl SearchPalette {
    /// Replaces the query and re-runs the search.
    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_string();
        self.results = self.index.search(text);
        self.selection.reset();
        self.changed();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selection.get().and_then(|i| self.results.get(i))
    }
}

/// Navigation operations.
impl SearchPalette {
    pub fn move_selection(&mut self, direction: Direction) {
        let before = self.selection;
        self.selection.step(direction, self.results.len());
        if self.selection != before {
            self.changed();
        }
    }

    /// URL of the highlighted result, if any.
    pub fn activate_selected(&self) -> Option<String> {
        self.selected_entry().map(Entry::url)
    }

    /// URL of the result at `rank`, as when it is clicked.
    pub fn activate(&self, rank: usize) -> Option<String> {
        self.results.get(rank).map(Entry::url)
    }

    /// Handles ArrowUp, ArrowDown and Enter while the search input has focus.
    ///
    /// Keys are ignored while there are no results.
    pub fn handle_input_key(&mut self, input: &KeyInput) -> InputOutcome {
        if self.results.is_empty() {
            return InputOutcome::Ignored;
        }

        match input.code.as_str() {
            "ArrowDown" => {
                self.move_selection(Direction::Down);
                InputOutcome::Handled
            }
            "ArrowUp" => {
                self.move_selection(Direction::Up);
                InputOutcome::Handled
            }
            "Enter" | "NumpadEnter" => match self.activate_selected() {
                Some(url) => InputOutcome::Navigate(url),
                None => InputOutcome::Handled,
            },
            _ => InputOutcome::Ignored,
        }
    }
}
