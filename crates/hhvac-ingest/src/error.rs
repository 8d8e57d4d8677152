use hhvac_store::StoreError;
use thiserror::Error;

/// Hard failures of an ingest run. Fetch errors are not listed here: they end
/// the run with [`crate::RunOutcome::Aborted`] instead.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to persist sheet: {0}")]
    Store(#[from] StoreError),
}
