//! Side-by-side listings of selected sheet columns.

use hhvac_store::{columns, Sheet};

use crate::error::ReportError;
use crate::table::TextTable;

const SECTIONS: &[(&str, [&str; 3])] = &[
    (
        "Отчет по зарплате и работодателям",
        [columns::TITLE, columns::SALARY, columns::EMPLOYER],
    ),
    (
        "Отчет по опыту работы и типу занятости",
        [columns::TITLE, columns::EXPERIENCE, columns::EMPLOYMENT],
    ),
    (
        "Отчет по наличию теста и графику работы",
        [columns::TITLE, columns::HAS_TEST, columns::SCHEDULE],
    ),
];

/// Three captioned tables, one row per vacancy, separated by blank lines.
///
/// # Errors
///
/// Returns [`ReportError::Store`] if a required column is missing.
pub fn vacancy_report(sheet: &Sheet) -> Result<String, ReportError> {
    let mut sections = Vec::with_capacity(SECTIONS.len());
    for (caption, names) in SECTIONS {
        let table = project(sheet, names)?;
        sections.push(format!("{caption}\n{}", table.render()));
    }
    Ok(sections.join("\n\n"))
}

/// Copies the named columns, in order, into a table.
pub(crate) fn project(sheet: &Sheet, names: &[&str]) -> Result<TextTable, ReportError> {
    let indices = names
        .iter()
        .map(|name| sheet.column_index(name))
        .collect::<Result<Vec<_>, _>>()?;

    let mut table = TextTable::new(names.iter().copied());
    for row in &sheet.rows {
        table.push_row(
            indices
                .iter()
                .map(|&i| row.get(i).map_or("", String::as_str)),
        );
    }
    Ok(table)
}
