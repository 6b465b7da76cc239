//! The four parameters that control which slice of the dataset is shown, and
//! the store that mutates them on behalf of the user.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::record::SortField;

/// Ordering applied to the sort column.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    /// Parses the query string form, `asc` or `desc`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortDirection::Ascending),
            "desc" => Some(SortDirection::Descending),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search, sort and page selection for one view session.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ViewState {
    pub search_text: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    /// 1-based page number.
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            sort_field: SortField::Id,
            sort_direction: SortDirection::Ascending,
            current_page: 1,
        }
    }
}

/// Receives the full state after every mutation of a [`ViewStateStore`].
pub trait StateListener {
    fn state_changed(&mut self, state: &ViewState);
}

impl StateListener for () {
    fn state_changed(&mut self, _state: &ViewState) {}
}

/// Single owner of a [`ViewState`]. Every setter notifies the listener
/// synchronously before returning.
#[derive(Debug)]
pub struct ViewStateStore<L: StateListener> {
    state: ViewState,
    listener: L,
}

impl<L: StateListener> ViewStateStore<L> {
    /// Wraps an already hydrated state. The listener is not notified.
    pub fn new(state: ViewState, listener: L) -> Self {
        Self { state, listener }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Replaces the whole state.
    pub fn replace(&mut self, state: ViewState) {
        self.state = state;
        self.notify();
    }

    /// Replaces the search text and goes back to the first page.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
        self.state.current_page = 1;
        self.notify();
    }

    /// Sorts by `field`. The direction flips on every call, also when the
    /// column changes.
    pub fn set_sort(&mut self, field: SortField) {
        self.state.sort_direction = self.state.sort_direction.toggled();
        self.state.sort_field = field;
        self.state.current_page = 1;
        self.notify();
    }

    /// Selects a page. Out of range pages are accepted and render empty.
    pub fn set_page(&mut self, page: usize) {
        self.state.current_page = page;
        self.notify();
    }

    fn notify(&mut self) {
        self.listener.state_changed(&self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<ViewState>,
    }

    impl StateListener for Recorder {
        fn state_changed(&mut self, state: &ViewState) {
            self.seen.push(state.clone());
        }
    }

    fn store_on_page(page: usize) -> ViewStateStore<Recorder> {
        let state = ViewState {
            current_page: page,
            ..ViewState::default()
        };
        ViewStateStore::new(state, Recorder::default())
    }

    #[test]
    fn search_resets_page() {
        let mut store = store_on_page(4);

        store.set_search_text("ann");

        assert_eq!(store.state().search_text, "ann");
        assert_eq!(store.state().current_page, 1);
    }

    #[test]
    fn sort_on_same_field_flips_direction() {
        let mut store = store_on_page(3);

        store.set_sort(SortField::Id);
        assert_eq!(store.state().sort_direction, SortDirection::Descending);
        assert_eq!(store.state().current_page, 1);

        store.set_sort(SortField::Id);
        assert_eq!(store.state().sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn sort_on_new_field_still_flips_direction() {
        let mut store = store_on_page(1);

        store.set_sort(SortField::Name);

        assert_eq!(store.state().sort_field, SortField::Name);
        assert_eq!(store.state().sort_direction, SortDirection::Descending);
    }

    #[test]
    fn set_page_does_not_clamp() {
        let mut store = store_on_page(1);

        store.set_page(99);

        assert_eq!(store.state().current_page, 99);
    }

    #[test]
    fn every_mutation_notifies_with_full_state() {
        let mut store = store_on_page(2);

        store.set_search_text("x");
        store.set_sort(SortField::Phone);
        store.set_page(5);
        store.replace(ViewState::default());

        let seen = &store.listener().seen;
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0].search_text, "x");
        assert_eq!(seen[1].sort_field, SortField::Phone);
        assert_eq!(seen[2].current_page, 5);
        assert_eq!(seen[2].search_text, "x");
        assert_eq!(seen[3], ViewState::default());
    }

    #[test]
    fn construction_does_not_notify() {
        let store = store_on_page(1);

        assert!(store.into_listener().seen.is_empty());
    }
}
