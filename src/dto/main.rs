use serde::Serialize;

use crate::domain::record::{Record, SortField};
use crate::domain::view_state::{SortDirection, ViewState};
use crate::pagination::Paginated;

/// Clickable column header of the table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ColumnHeader {
    pub field: SortField,
    pub label: &'static str,
    /// Direction of the active sort column, `None` for the other columns.
    pub direction: Option<SortDirection>,
}

/// Data required to render the main index template.
#[derive(Debug)]
pub struct IndexPageData {
    /// Rows of the current page and the page buttons.
    pub records: Paginated<Record>,
    pub columns: Vec<ColumnHeader>,
    pub state: ViewState,
    /// Query string the page was rendered for, without the leading `?`.
    pub query: String,
}
