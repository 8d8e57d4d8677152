//! `report` and `tally` commands: read the data sheet, write output files.

use anyhow::Context;
use clap::ValueEnum;
use hhvac_core::AppConfig;
use hhvac_report::{write_custom_pivot, write_report, write_tally, ReportKind, TallyKind};
use hhvac_store::{read_sheet, Sheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportArg {
    Vacancies,
    Pivot,
    Stats,
    All,
}

impl ReportArg {
    pub(crate) fn kinds(self) -> Vec<ReportKind> {
        match self {
            ReportArg::Vacancies => vec![ReportKind::Vacancies],
            ReportArg::Pivot => vec![ReportKind::Pivot],
            ReportArg::Stats => vec![ReportKind::Stats],
            ReportArg::All => ReportKind::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TallyArg {
    Salary,
    Experience,
    Employment,
    Requirements,
    Level,
    Specialty,
    All,
}

impl TallyArg {
    pub(crate) fn kinds(self) -> Vec<TallyKind> {
        match self {
            TallyArg::Salary => vec![TallyKind::Salary],
            TallyArg::Experience => vec![TallyKind::Experience],
            TallyArg::Employment => vec![TallyKind::Employment],
            TallyArg::Requirements => vec![TallyKind::Requirements],
            TallyArg::Level => vec![TallyKind::Level],
            TallyArg::Specialty => vec![TallyKind::Specialty],
            TallyArg::All => TallyKind::ALL.to_vec(),
        }
    }
}

fn load_sheet(config: &AppConfig) -> anyhow::Result<Sheet> {
    let sheet = read_sheet(&config.data_path).with_context(|| {
        format!(
            "cannot read {}; run `hhvac search` first",
            config.data_path.display()
        )
    })?;
    if sheet.is_empty() {
        eprintln!(
            "warning: {} has no vacancies; reports will be empty",
            config.data_path.display()
        );
    }
    Ok(sheet)
}

/// `custom` is a `(rows, cols)` header pair. With `pivot` only that table is
/// written; with `all` it is written next to the standard reports.
pub(crate) fn run_report(
    config: &AppConfig,
    kind: ReportArg,
    custom: Option<(String, String)>,
) -> anyhow::Result<()> {
    if custom.is_some() && !matches!(kind, ReportArg::Pivot | ReportArg::All) {
        anyhow::bail!("--rows/--cols apply only to the pivot report");
    }

    let sheet = load_sheet(config)?;
    let standard = match (kind, &custom) {
        (ReportArg::Pivot, Some(_)) => Vec::new(),
        _ => kind.kinds(),
    };
    for kind in standard {
        let path = write_report(kind, &sheet, &config.output_dir)?;
        println!("wrote {}", path.display());
    }
    if let Some((rows, cols)) = custom {
        let path = write_custom_pivot(&sheet, &rows, &cols, &config.output_dir)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

pub(crate) fn run_tally(config: &AppConfig, kind: TallyArg, query: &str) -> anyhow::Result<()> {
    let kinds = kind.kinds();
    if query.is_empty() && kinds.contains(&TallyKind::Requirements) {
        eprintln!("warning: no --query given; requirements tally uses the generic stack");
    }

    let sheet = load_sheet(config)?;
    let generated_at = chrono::Utc::now();
    for kind in kinds {
        let path = write_tally(kind, &sheet, query, &config.output_dir, generated_at)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
