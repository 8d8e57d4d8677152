//! HTTP client for the hh.ru vacancy search endpoint.
//!
//! One call fetches one page. Failures are returned as-is without retry; the
//! ingest driver ends a run on the first one.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::HhError;
use crate::types::VacanciesResponse;

/// Region code for Russia as a whole.
pub const DEFAULT_AREA: u32 = 113;

/// Client for `GET {base}/vacancies`.
pub struct HhClient {
    client: Client,
    search_url: Url,
    area: u32,
}

impl HhClient {
    /// Creates a client for `{base_url}/vacancies`.
    ///
    /// `timeout_secs` of `None` keeps the transport default (no overall timeout).
    ///
    /// # Errors
    ///
    /// Returns [`HhError::Http`] if the `reqwest::Client` cannot be built, or
    /// [`HhError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        base_url: &str,
        user_agent: &str,
        timeout_secs: Option<u64>,
        area: u32,
    ) -> Result<Self, HhError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let normalised = format!("{}/vacancies", base_url.trim_end_matches('/'));
        let search_url = Url::parse(&normalised).map_err(|e| HhError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            search_url,
            area,
        })
    }

    /// Fetches one zero-based page of search results for `query`.
    ///
    /// # Errors
    ///
    /// - [`HhError::Http`] on network failure.
    /// - [`HhError::UnexpectedStatus`] on any non-2xx status.
    /// - [`HhError::Deserialize`] if the body is not the expected JSON shape.
    pub async fn fetch_page(&self, query: &str, page: u32) -> Result<VacanciesResponse, HhError> {
        let url = self.build_url(query, page);
        tracing::debug!(%url, "fetching vacancy page");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HhError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<VacanciesResponse>(&body).map_err(|e| HhError::Deserialize {
            context: format!("vacancies(text={query}, page={page})"),
            source: e,
        })
    }

    /// Builds the search URL with `text`, `page`, and `area` percent-encoded
    /// in that order.
    fn build_url(&self, query: &str, page: u32) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("text", query)
            .append_pair("page", &page.to_string())
            .append_pair("area", &self.area.to_string());
        url
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
