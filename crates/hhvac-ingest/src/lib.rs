//! Vacancy ingestion: page fetch → filter → classify → sink → flush.

pub mod error;
pub mod fetcher;
pub mod filter;
pub mod pipeline;
pub mod sink;

pub use error::IngestError;
pub use fetcher::PageFetcher;
pub use filter::{accepts, city_filter};
pub use pipeline::{run_ingest, RunOutcome, RunParams, RunReport};
pub use sink::RunState;
