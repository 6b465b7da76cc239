//! DTOs exposed by the JSON API endpoints.

use serde::Serialize;

use crate::domain::record::Record;
use crate::domain::view_state::ViewState;

/// Result payload returned by [`crate::services::api::list_records`].
#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    /// Number of records matching the search text.
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
    pub records: Vec<Record>,
    /// State the page was computed for.
    pub state: ViewState,
}
