use hhvac_client::{HhClient, HhError, VacanciesResponse};

/// Source of search result pages for the ingest driver.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    /// Fetches one zero-based page of results for `query`.
    async fn fetch_page(&self, query: &str, page: u32) -> Result<VacanciesResponse, HhError>;
}

impl PageFetcher for HhClient {
    async fn fetch_page(&self, query: &str, page: u32) -> Result<VacanciesResponse, HhError> {
        HhClient::fetch_page(self, query, page).await
    }
}
