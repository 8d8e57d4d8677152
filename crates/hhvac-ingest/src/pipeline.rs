//! The ingest driver loop.
//!
//! Pages are fetched one at a time starting at index 0. Every item of a page
//! is filtered and, if accepted, classified and buffered before the next
//! fetch, so the final count can overshoot the target by up to one page. The
//! buffer is flushed once, at the end, whatever the outcome.

use std::path::Path;

use hhvac_client::{normalize_vacancy, HhError};
use hhvac_core::{GradeCounters, RoleCounters};
use hhvac_store::SheetLayout;

use crate::error::IngestError;
use crate::fetcher::PageFetcher;
use crate::filter::{accepts, city_filter};
use crate::sink::RunState;

pub const DEFAULT_TARGET_ACCEPTED: usize = 100;
pub const DEFAULT_MAX_PAGES: u32 = 100;

/// Inputs of one ingest run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParams {
    pub query: String,
    /// Exact-match city filter. `None` accepts every city.
    pub city: Option<String>,
    pub target_accepted: usize,
    pub max_pages: u32,
}

impl RunParams {
    /// Builds params with default limits. An empty `city` disables the
    /// city filter.
    #[must_use]
    pub fn new(query: impl Into<String>, city: &str) -> Self {
        Self {
            query: query.into(),
            city: city_filter(city).map(str::to_owned),
            target_accepted: DEFAULT_TARGET_ACCEPTED,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    #[must_use]
    pub fn with_target_accepted(mut self, target: usize) -> Self {
        self.target_accepted = target;
        self
    }

    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }
}

/// Why the fetch loop stopped.
#[derive(Debug)]
pub enum RunOutcome {
    /// The accepted total reached the target.
    TargetReached,
    /// The API returned an empty page or the last page it reported.
    Exhausted,
    /// The page cap was hit before the target or the end of results.
    PageCapReached,
    /// A fetch failed; rows accepted before it were still persisted.
    Aborted(HhError),
}

impl RunOutcome {
    /// `false` only for [`RunOutcome::Aborted`].
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !matches!(self, RunOutcome::Aborted(_))
    }
}

/// Result of a run whose sheet was written successfully.
#[derive(Debug)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub accepted: usize,
    pub pages_fetched: u32,
    pub layout: SheetLayout,
    pub grades: GradeCounters,
    pub roles: RoleCounters,
}

/// Runs the fetch → filter → classify → sink loop and writes the sheet to
/// `sheet_path`, replacing any previous content.
///
/// Fetch errors never surface as `Err`: they end the loop with
/// [`RunOutcome::Aborted`] after the partial sheet is written.
///
/// # Errors
///
/// Returns [`IngestError::Store`] if the sheet cannot be written.
pub async fn run_ingest<F: PageFetcher>(
    fetcher: &F,
    params: &RunParams,
    sheet_path: &Path,
) -> Result<RunReport, IngestError> {
    let city = params.city.as_deref();
    let mut state = RunState::new(SheetLayout::for_city_filter(city));
    let mut page: u32 = 0;

    tracing::info!(
        query = %params.query,
        city = city.unwrap_or(""),
        target = params.target_accepted,
        max_pages = params.max_pages,
        "ingest run starting"
    );

    let outcome = loop {
        if state.accepted() >= params.target_accepted {
            break RunOutcome::TargetReached;
        }
        if page >= params.max_pages {
            tracing::warn!(page, accepted = state.accepted(), "page cap reached");
            break RunOutcome::PageCapReached;
        }

        let current = page;
        let response = match fetcher.fetch_page(&params.query, current).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    page = current,
                    accepted = state.accepted(),
                    network = e.is_network(),
                    error = %e,
                    "page fetch failed, aborting run"
                );
                break RunOutcome::Aborted(e);
            }
        };
        page += 1;

        if response.items.is_empty() {
            tracing::debug!(page = current, "empty page, results exhausted");
            break RunOutcome::Exhausted;
        }

        let before = state.accepted();
        for item in response.items {
            let record = normalize_vacancy(item);
            if accepts(&record, city) {
                state.accept(&record);
            }
        }
        tracing::debug!(
            page = current,
            accepted_on_page = state.accepted() - before,
            accepted = state.accepted(),
            "page processed"
        );

        if state.accepted() < params.target_accepted
            && response.pages.is_some_and(|pages| page >= pages)
        {
            tracing::debug!(page = current, "last reported page processed");
            break RunOutcome::Exhausted;
        }
    };

    state.flush(sheet_path)?;

    tracing::info!(
        accepted = state.accepted(),
        pages = page,
        complete = outcome.is_complete(),
        path = %sheet_path.display(),
        "ingest run finished"
    );

    Ok(RunReport {
        outcome,
        accepted: state.accepted(),
        pages_fetched: page,
        layout: state.layout(),
        grades: state.grades(),
        roles: state.roles(),
    })
}
