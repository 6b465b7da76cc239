use serde::Deserialize;

/// Body of the search box submission.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub filter: String,
}
