//! Descriptive statistics over the categorical and numeric sheet columns.

use std::collections::HashMap;

use hhvac_store::{columns, Sheet};

use crate::error::ReportError;
use crate::table::TextTable;

const STAT_COLUMNS: &[&str] = &[
    columns::SALARY,
    columns::EXPERIENCE,
    columns::EMPLOYMENT,
    columns::HAS_TEST,
    columns::SCHEDULE,
];

/// Summary of a numeric column. Spread is `None` for fewer than two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: Option<f64>,
    pub variance: Option<f64>,
}

/// Parses every non-empty cell as a number. `None` if any cell is not
/// numeric or there is nothing to parse.
#[must_use]
pub fn numeric_values(cells: &[&str]) -> Option<Vec<f64>> {
    let values = cells
        .iter()
        .filter(|c| !c.is_empty())
        .map(|c| c.parse::<f64>().ok())
        .collect::<Option<Vec<_>>>()?;
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// Min, max, mean and sample (n - 1) variance and standard deviation.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(values: &[f64]) -> Option<NumericSummary> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / n;
    let variance = (values.len() > 1)
        .then(|| values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0));

    Some(NumericSummary {
        min,
        max,
        mean,
        std_dev: variance.map(f64::sqrt),
        variance,
    })
}

/// Distinct non-empty values with their counts, most frequent first and ties
/// broken by value.
#[must_use]
pub fn frequencies(cells: &[&str]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for &cell in cells.iter().filter(|c| !c.is_empty()) {
        *counts.entry(cell).or_default() += 1;
    }
    let mut sorted: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}

fn fmt_number(value: f64) -> String {
    format!("{value:.2}")
}

#[allow(clippy::cast_precision_loss)]
fn fmt_percent(count: usize, total: usize) -> String {
    format!("{:.2}%", count as f64 * 100.0 / total as f64)
}

/// Numeric summary table followed by one frequency table per categorical
/// column.
///
/// # Errors
///
/// Returns [`ReportError::Store`] if a required column is missing.
pub fn statistical_report(sheet: &Sheet) -> Result<String, ReportError> {
    let mut numeric = TextTable::new([
        "Переменная",
        "Мин",
        "Макс",
        "Среднее",
        "Ст. отклонение",
        "Дисперсия",
    ]);
    let mut has_numeric = false;
    let mut categorical = Vec::new();

    for name in STAT_COLUMNS {
        let cells = sheet.column(name)?;
        match numeric_values(&cells).as_deref().and_then(summarize) {
            Some(summary) => {
                has_numeric = true;
                let spread = |v: Option<f64>| v.map_or_else(|| "-".to_string(), fmt_number);
                numeric.push_row([
                    (*name).to_string(),
                    fmt_number(summary.min),
                    fmt_number(summary.max),
                    fmt_number(summary.mean),
                    spread(summary.std_dev),
                    spread(summary.variance),
                ]);
            }
            None => categorical.push((*name, cells)),
        }
    }

    let mut out = String::new();
    if has_numeric {
        out.push_str("Статистики для количественных переменных:\n\n");
        out.push_str(&numeric.render());
        out.push_str("\n\n");
    }
    if !categorical.is_empty() {
        out.push_str("Таблица частот для качественных переменных:\n\n");
        for (name, cells) in categorical {
            let freq = frequencies(&cells);
            let total: usize = freq.iter().map(|(_, n)| n).sum();
            let mut table = TextTable::new([name, "Частота", "Процент"]);
            for (value, count) in freq {
                table.push_row([value, count.to_string(), fmt_percent(count, total)]);
            }
            out.push_str(&format!("Переменная: {name}\n\n{}\n\n", table.render()));
        }
    }
    Ok(out)
}
