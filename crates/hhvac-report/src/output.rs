//! Report selection and file output.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use hhvac_store::Sheet;

use crate::error::ReportError;
use crate::pivot::{custom_pivot_report, pivot_report};
use crate::stats::statistical_report;
use crate::tally::{
    employment_tally, experience_tally, level_tally, requirements_tally, salary_tally,
    specialty_tally, Tally,
};
use crate::vacancies::vacancy_report;

/// Plain-text reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Vacancies,
    Pivot,
    Stats,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [ReportKind::Vacancies, ReportKind::Pivot, ReportKind::Stats];

    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            ReportKind::Vacancies => "vacancies_report.txt",
            ReportKind::Pivot => "pivot_table_report.txt",
            ReportKind::Stats => "statistical_report.txt",
        }
    }

    /// # Errors
    ///
    /// Returns [`ReportError::Store`] if the sheet lacks a required column.
    pub fn render(self, sheet: &Sheet) -> Result<String, ReportError> {
        match self {
            ReportKind::Vacancies => vacancy_report(sheet),
            ReportKind::Pivot => pivot_report(sheet),
            ReportKind::Stats => statistical_report(sheet),
        }
    }
}

/// Markdown tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TallyKind {
    Salary,
    Experience,
    Employment,
    Requirements,
    Level,
    Specialty,
}

impl TallyKind {
    pub const ALL: [TallyKind; 6] = [
        TallyKind::Salary,
        TallyKind::Experience,
        TallyKind::Employment,
        TallyKind::Requirements,
        TallyKind::Level,
        TallyKind::Specialty,
    ];

    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            TallyKind::Salary => "salary_vs_vacancies.md",
            TallyKind::Experience => "experience_vs_vacancies.md",
            TallyKind::Employment => "employment_type_vs_vacancies.md",
            TallyKind::Requirements => "requirements_vs_vacancies.md",
            TallyKind::Level => "level_vs_vacancies.md",
            TallyKind::Specialty => "specialty_vs_vacancies.md",
        }
    }

    /// Builds the tally. `query` only affects [`TallyKind::Requirements`].
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Store`] if the sheet lacks a required column.
    pub fn build(self, sheet: &Sheet, query: &str) -> Result<Tally, ReportError> {
        match self {
            TallyKind::Salary => salary_tally(sheet),
            TallyKind::Experience => experience_tally(sheet),
            TallyKind::Employment => employment_tally(sheet),
            TallyKind::Requirements => requirements_tally(sheet, query),
            TallyKind::Level => level_tally(sheet),
            TallyKind::Specialty => specialty_tally(sheet),
        }
    }
}

/// Renders `kind` and writes it to `output_dir`, returning the file path.
///
/// # Errors
///
/// Returns [`ReportError::Store`] for a malformed sheet or
/// [`ReportError::Write`] if the file cannot be written.
pub fn write_report(
    kind: ReportKind,
    sheet: &Sheet,
    output_dir: &Path,
) -> Result<PathBuf, ReportError> {
    let content = kind.render(sheet)?;
    write_output(output_dir, kind.file_name(), &content)
}

/// File written by [`write_custom_pivot`].
pub const CUSTOM_PIVOT_FILE: &str = "custom_pivot_report.txt";

/// Writes a single pivot of `row_attr` × `col_attr` to `output_dir`.
///
/// # Errors
///
/// Returns [`ReportError::Store`] if either column is missing or
/// [`ReportError::Write`] if the file cannot be written.
pub fn write_custom_pivot(
    sheet: &Sheet,
    row_attr: &str,
    col_attr: &str,
    output_dir: &Path,
) -> Result<PathBuf, ReportError> {
    let content = custom_pivot_report(sheet, row_attr, col_attr)?;
    write_output(output_dir, CUSTOM_PIVOT_FILE, &content)
}

/// Builds the `kind` tally and writes it as markdown to `output_dir`.
///
/// # Errors
///
/// Returns [`ReportError::Store`] for a malformed sheet or
/// [`ReportError::Write`] if the file cannot be written.
pub fn write_tally(
    kind: TallyKind,
    sheet: &Sheet,
    query: &str,
    output_dir: &Path,
    generated_at: DateTime<Utc>,
) -> Result<PathBuf, ReportError> {
    let content = kind.build(sheet, query)?.render_markdown(generated_at);
    write_output(output_dir, kind.file_name(), &content)
}

fn write_output(
    output_dir: &Path,
    file_name: &str,
    content: &str,
) -> Result<PathBuf, ReportError> {
    let write_err = |path: &Path, source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };
    std::fs::create_dir_all(output_dir).map_err(|e| write_err(output_dir, e))?;

    let path = output_dir.join(file_name);
    std::fs::write(&path, content).map_err(|e| write_err(&path, e))?;
    tracing::info!(path = %path.display(), bytes = content.len(), "report written");
    Ok(path)
}
