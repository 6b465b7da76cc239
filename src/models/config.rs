//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings for the HTTP server and the dataset it shows.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Glob passed to Tera, e.g. `templates/**/*`.
    pub templates_dir: String,
    pub assets_dir: String,
    /// JSON or CSV file with the records to display.
    pub records_path: String,
}
