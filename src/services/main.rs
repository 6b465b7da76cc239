//! Services behind the table page and its search, sort and page actions.

use crate::domain::record::{Record, SortField};
use crate::domain::view_state::ViewStateStore;
use crate::dto::main::{ColumnHeader, IndexPageData};
use crate::pagination::Paginated;
use crate::pipeline;
use crate::query::QuerySync;
use crate::repository::RecordReader;
use crate::services::ServiceResult;

/// Loads the rows and page buttons for the query string of the request.
pub fn load_index_page<R>(repo: &R, query: &str) -> IndexPageData
where
    R: RecordReader + ?Sized,
{
    let sync = QuerySync::new(query);
    let state = sync.hydrate();

    let rendered = pipeline::render(repo.list_records(), &state);
    let items: Vec<Record> = rendered.records.into_iter().cloned().collect();
    let records = Paginated::new(items, state.current_page, rendered.page_count);

    if records.page_count > 0 && !records.is_in_range() {
        log::warn!(
            "Requested page {} of {}, rendering an empty page",
            records.page,
            records.page_count
        );
    }

    let columns = SortField::ALL
        .into_iter()
        .map(|field| ColumnHeader {
            field,
            label: field.label(),
            direction: (field == state.sort_field).then_some(state.sort_direction),
        })
        .collect();

    IndexPageData {
        records,
        columns,
        state,
        query: sync.into_query(),
    }
}

/// Replaces the search text and returns the rewritten query string.
pub fn apply_search(query: &str, text: &str) -> String {
    with_store(query, |store| store.set_search_text(text))
}

/// Sorts by the column named `field` and returns the rewritten query string.
pub fn apply_sort(query: &str, field: &str) -> ServiceResult<String> {
    let field = field.parse::<SortField>().map_err(|err| {
        log::error!("Failed to sort: {err}");
        err
    })?;
    Ok(with_store(query, |store| store.set_sort(field)))
}

/// Selects `page` and returns the rewritten query string.
pub fn apply_page(query: &str, page: usize) -> String {
    with_store(query, |store| store.set_page(page))
}

fn with_store<F>(query: &str, action: F) -> String
where
    F: FnOnce(&mut ViewStateStore<QuerySync>),
{
    let sync = QuerySync::new(query);
    let mut store = ViewStateStore::new(sync.hydrate(), sync);
    action(&mut store);
    store.into_listener().into_query()
}
