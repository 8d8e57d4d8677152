//! Text reports and markdown tallies over a persisted vacancy sheet.
//!
//! Every generator reads columns by header name, so sheets written with or
//! without the city column are both accepted.

pub mod error;
pub mod output;
pub mod pivot;
pub mod stats;
pub mod table;
pub mod tally;
pub mod vacancies;

pub use error::ReportError;
pub use output::{
    write_custom_pivot, write_report, write_tally, ReportKind, TallyKind, CUSTOM_PIVOT_FILE,
};
pub use pivot::{custom_pivot_report, pivot_report};
pub use stats::statistical_report;
pub use table::TextTable;
pub use tally::Tally;
pub use vacancies::vacancy_report;
