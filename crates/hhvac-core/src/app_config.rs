use std::path::PathBuf;

/// Runtime configuration shared by the CLI and the ingest pipeline.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root of the vacancy API; `/vacancies` is appended by the client.
    pub api_base_url: String,
    /// Region code sent as the `area` query parameter (113 = Russia).
    pub area: u32,
    pub user_agent: String,
    /// `None` leaves the transport default in place.
    pub request_timeout_secs: Option<u64>,
    /// A run stops fetching once this many records have been accepted.
    pub target_accepted: usize,
    /// Hard upper bound on pages fetched in one run.
    pub max_pages: u32,
    pub data_path: PathBuf,
    pub output_dir: PathBuf,
    pub log_level: String,
}
