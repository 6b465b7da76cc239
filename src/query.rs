//! Mapping between [`ViewState`] and the URL query string.
//!
//! The query string is read once when a view is hydrated and rewritten after
//! every state change. Parameters this module does not own are carried along
//! untouched.

use url::form_urlencoded;

use crate::domain::record::SortField;
use crate::domain::view_state::{SortDirection, StateListener, ViewState};

pub const FILTER_KEY: &str = "filter";
pub const SORT_ORDER_KEY: &str = "sortOrder";
pub const SORT_BY_KEY: &str = "sortBy";
pub const PAGE_KEY: &str = "page";

/// Reads the view state from a query string, with or without the leading
/// `?`. Missing or invalid values fall back to their defaults.
pub fn parse(query: &str) -> ViewState {
    let pairs = decode(query);
    let first = |key: &str| {
        pairs
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    };

    let defaults = ViewState::default();

    ViewState {
        search_text: first(FILTER_KEY).unwrap_or_default().to_string(),
        sort_field: first(SORT_BY_KEY)
            .and_then(|value| value.parse::<SortField>().ok())
            .unwrap_or(defaults.sort_field),
        sort_direction: first(SORT_ORDER_KEY)
            .and_then(SortDirection::parse)
            .unwrap_or(defaults.sort_direction),
        current_page: first(PAGE_KEY)
            .and_then(parse_page)
            .unwrap_or(defaults.current_page),
    }
}

/// Writes `state` into `existing`. Each owned key keeps the position of its
/// first occurrence and loses any duplicates; absent keys are appended.
pub fn serialize(state: &ViewState, existing: &str) -> String {
    let page = state.current_page.to_string();
    let owned = [
        (FILTER_KEY, state.search_text.as_str()),
        (SORT_ORDER_KEY, state.sort_direction.as_str()),
        (SORT_BY_KEY, state.sort_field.as_str()),
        (PAGE_KEY, page.as_str()),
    ];

    let mut pairs = decode(existing);
    for (key, value) in owned {
        set(&mut pairs, key, value);
    }

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter())
        .finish()
}

/// Leading decimal digits of `value`, ignoring surrounding whitespace and an
/// optional `+`. Zero and overflow are rejected.
fn parse_page(value: &str) -> Option<usize> {
    let trimmed = value.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..digits_end]
        .parse::<usize>()
        .ok()
        .filter(|page| *page > 0)
}

fn decode(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

fn set(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    match pairs.iter().position(|(name, _)| name == key) {
        Some(index) => {
            pairs[index].1 = value.to_string();
            let mut seen = 0;
            pairs.retain(|(name, _)| {
                if name != key {
                    return true;
                }
                seen += 1;
                seen == 1
            });
        }
        None => pairs.push((key.to_string(), value.to_string())),
    }
}

/// Owns the live query string of one view session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySync {
    query: String,
}

impl QuerySync {
    pub fn new(query: impl Into<String>) -> Self {
        let query: String = query.into();
        Self {
            query: query.strip_prefix('?').unwrap_or(&query).to_string(),
        }
    }

    /// Reads the initial state. Later edits to the query are not observed.
    pub fn hydrate(&self) -> ViewState {
        parse(&self.query)
    }

    /// Current query string, without the leading `?`.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn into_query(self) -> String {
        self.query
    }
}

impl StateListener for QuerySync {
    fn state_changed(&mut self, state: &ViewState) {
        self.query = serialize(state, &self.query);
    }
}
