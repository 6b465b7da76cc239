//! Filter, sort and paginate the dataset for the current [`ViewState`].
//!
//! Everything here is pure: the same records and state always produce the
//! same page.

use std::cmp::Ordering;

use crate::domain::record::{Record, SortField};
use crate::domain::view_state::{SortDirection, ViewState};

/// Number of rows shown per page.
pub const ITEMS_PER_PAGE: usize = 50;

/// Result of running the pipeline for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage<'a> {
    /// Rows of the requested page, in display order.
    pub records: Vec<&'a Record>,
    /// Number of pages of the filtered set.
    pub page_count: usize,
    /// Number of records that matched the search text.
    pub total: usize,
}

/// Runs filter, sort and paginate for `state`.
pub fn render<'a>(records: &'a [Record], state: &ViewState) -> RenderedPage<'a> {
    let mut matched = filter(records, &state.search_text);
    sort(&mut matched, state.sort_field, state.sort_direction);

    let total = matched.len();
    let page_count = page_count(total);
    let records = paginate(&matched, state.current_page).to_vec();

    RenderedPage {
        records,
        page_count,
        total,
    }
}

/// Keeps records whose name, address or phone contains `search`, ignoring
/// case. Input order is preserved.
pub fn filter<'a>(records: &'a [Record], search: &str) -> Vec<&'a Record> {
    if search.is_empty() {
        return records.iter().collect();
    }

    let needle = search.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record
                .searchable_fields()
                .iter()
                .any(|value| value.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Stable sort by the text of `field`. Descending negates the comparator, so
/// equal keys keep their input order in both directions.
pub fn sort(records: &mut [&Record], field: SortField, direction: SortDirection) {
    records.sort_by(|a, b| {
        let ordering = compare_text(&field.value(a), &field.value(b));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Case-folding lexicographic comparison.
///
/// Strings are compared on their lower-cased characters first. When those are
/// equal a lower-case letter sorts before its upper-case form, and the raw
/// strings break any remaining tie.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);

    folded_a
        .cmp(folded_b)
        .then_with(|| compare_case(a, b))
        .then_with(|| a.cmp(b))
}

fn compare_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .find(|(x, y)| x != y)
        .map_or(Ordering::Equal, |(x, y)| {
            match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => Ordering::Equal,
            }
        })
}

/// Returns the window of `page` (1-based). Page 0 and pages past the end are
/// empty.
pub fn paginate<'s, 'a>(records: &'s [&'a Record], page: usize) -> &'s [&'a Record] {
    let Some(index) = page.checked_sub(1) else {
        return &[];
    };
    let start = index.saturating_mul(ITEMS_PER_PAGE);
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(ITEMS_PER_PAGE).min(records.len());
    &records[start..end]
}

/// Number of pages needed for `total` records.
pub const fn page_count(total: usize) -> usize {
    total.div_ceil(ITEMS_PER_PAGE)
}
