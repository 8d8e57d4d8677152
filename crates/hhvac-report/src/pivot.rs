//! Count cross-tabulations of two sheet columns.

use std::collections::{BTreeMap, BTreeSet};

use hhvac_store::{columns, Sheet};

use crate::error::ReportError;
use crate::table::TextTable;

const PAIRS: &[(&str, &str)] = &[
    (columns::EMPLOYER, columns::EMPLOYMENT),
    (columns::SCHEDULE, columns::EXPERIENCE),
    (columns::TITLE, columns::SCHEDULE),
];

/// Number of rows per `(row value, column value)` pair.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Pivot {
    counts: BTreeMap<String, BTreeMap<String, usize>>,
    column_labels: BTreeSet<String>,
}

impl Pivot {
    /// Tallies every row of `sheet` by the values in `row_attr` and `col_attr`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Store`] if either column is missing.
    pub fn build(sheet: &Sheet, row_attr: &str, col_attr: &str) -> Result<Self, ReportError> {
        let row_values = sheet.column(row_attr)?;
        let col_values = sheet.column(col_attr)?;

        let mut pivot = Pivot::default();
        for (r, c) in row_values.into_iter().zip(col_values) {
            pivot.column_labels.insert(c.to_string());
            *pivot
                .counts
                .entry(r.to_string())
                .or_default()
                .entry(c.to_string())
                .or_default() += 1;
        }
        Ok(pivot)
    }

    /// Count for one cell; combinations never seen are 0.
    #[must_use]
    pub fn get(&self, row: &str, col: &str) -> usize {
        self.counts
            .get(row)
            .and_then(|cols| cols.get(col))
            .copied()
            .unwrap_or(0)
    }

    /// Table with sorted row and column labels.
    #[must_use]
    pub fn to_table(&self, row_attr: &str) -> TextTable {
        let mut headers = vec![row_attr.to_string()];
        headers.extend(self.column_labels.iter().cloned());

        let mut table = TextTable::new(headers);
        for row in self.counts.keys() {
            let mut cells = vec![row.clone()];
            cells.extend(
                self.column_labels
                    .iter()
                    .map(|col| self.get(row, col).to_string()),
            );
            table.push_row(cells);
        }
        table
    }
}

/// Pivot tables for employer × employment, schedule × experience and
/// title × schedule.
///
/// # Errors
///
/// Returns [`ReportError::Store`] if a required column is missing.
pub fn pivot_report(sheet: &Sheet) -> Result<String, ReportError> {
    let mut out = String::new();
    for (row_attr, col_attr) in PAIRS {
        out.push_str(&custom_pivot_report(sheet, row_attr, col_attr)?);
    }
    Ok(out)
}

/// One captioned pivot table for any two sheet columns, named by header.
///
/// # Errors
///
/// Returns [`ReportError::Store`] if either column is missing.
pub fn custom_pivot_report(
    sheet: &Sheet,
    row_attr: &str,
    col_attr: &str,
) -> Result<String, ReportError> {
    let pivot = Pivot::build(sheet, row_attr, col_attr)?;
    Ok(format!(
        "Сводная таблица для '{row_attr}' и '{col_attr}':\n\n{}\n\n",
        pivot.to_table(row_attr).render()
    ))
}
