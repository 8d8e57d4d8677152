//! Single-dimension vacancy counts rendered as markdown.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use hhvac_core::{
    classify_grade, classify_roles, stack_for_query, Grade, GradeCounters, Role, RoleCounters,
};
use hhvac_store::{columns, Sheet};

use crate::error::ReportError;
use crate::stats::frequencies;
use crate::table::TextTable;

const COUNT_HEADER: &str = "Количество вакансий";

/// One labelled count per row, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub title: &'static str,
    pub label_header: &'static str,
    /// Search query the tally was built for, if it depends on one.
    pub query: Option<String>,
    pub vacancies: usize,
    pub rows: Vec<(String, usize)>,
}

impl Tally {
    fn new(title: &'static str, label_header: &'static str, sheet: &Sheet) -> Self {
        Self {
            title,
            label_header,
            query: None,
            vacancies: sheet.len(),
            rows: Vec::new(),
        }
    }

    /// Count for `label`, if it has a row.
    #[must_use]
    pub fn count(&self, label: &str) -> Option<usize> {
        self.rows.iter().find(|(l, _)| l == label).map(|(_, n)| *n)
    }

    #[must_use]
    pub fn render_markdown(&self, generated_at: DateTime<Utc>) -> String {
        let mut out = format!("# {}\n\n", self.title);
        out.push_str(&format!(
            "**Сформировано**: {}\n",
            generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        if let Some(query) = &self.query {
            out.push_str(&format!("**Запрос**: {query}\n"));
        }
        out.push_str(&format!("**Вакансий в выборке**: {}\n\n", self.vacancies));

        let mut table = TextTable::new([self.label_header, COUNT_HEADER]);
        for (label, count) in &self.rows {
            table.push_row([label.clone(), count.to_string()]);
        }
        out.push_str(&table.render_markdown());
        out
    }
}

/// Vacancies per disclosed salary lower bound, lowest salary first.
///
/// # Errors
///
/// Returns [`ReportError::Store`] if the salary column is missing.
pub fn salary_tally(sheet: &Sheet) -> Result<Tally, ReportError> {
    let mut by_salary: BTreeMap<i64, usize> = BTreeMap::new();
    for cell in sheet.column(columns::SALARY)? {
        match cell.parse::<i64>() {
            Ok(salary) => *by_salary.entry(salary).or_default() += 1,
            Err(_) => tracing::warn!(value = cell, "skipping non-numeric salary cell"),
        }
    }

    let mut tally = Tally::new(
        "Распределение количества вакансий по зарплате",
        columns::SALARY,
        sheet,
    );
    tally.rows = by_salary
        .into_iter()
        .map(|(salary, n)| (salary.to_string(), n))
        .collect();
    Ok(tally)
}

/// Vacancies per experience bracket, most common first.
///
/// # Errors
///
/// Returns [`ReportError::Store`] if the experience column is missing.
pub fn experience_tally(sheet: &Sheet) -> Result<Tally, ReportError> {
    let mut tally = Tally::new(
        "Распределение количества вакансий по опыту работы",
        columns::EXPERIENCE,
        sheet,
    );
    tally.rows = frequencies(&sheet.column(columns::EXPERIENCE)?);
    Ok(tally)
}

/// Vacancies per employment type, most common first.
///
/// # Errors
///
/// Returns [`ReportError::Store`] if the employment column is missing.
pub fn employment_tally(sheet: &Sheet) -> Result<Tally, ReportError> {
    let mut tally = Tally::new(
        "Распределение количества вакансий по типу занятости",
        columns::EMPLOYMENT,
        sheet,
    );
    tally.rows = frequencies(&sheet.column(columns::EMPLOYMENT)?);
    Ok(tally)
}

/// For each technology associated with `query`, the number of vacancies whose
/// requirement text mentions it (case-insensitive).
///
/// # Errors
///
/// Returns [`ReportError::Store`] if the requirements column is missing.
pub fn requirements_tally(sheet: &Sheet, query: &str) -> Result<Tally, ReportError> {
    let requirements: Vec<String> = sheet
        .column(columns::REQUIREMENTS)?
        .into_iter()
        .map(str::to_lowercase)
        .collect();

    let mut tally = Tally::new(
        "Распределение количества вакансий по требованиям",
        "Требование",
        sheet,
    );
    tally.query = Some(query.to_string());
    tally.rows = stack_for_query(query)
        .iter()
        .map(|keyword| {
            let needle = keyword.to_lowercase();
            let hits = requirements.iter().filter(|r| r.contains(&needle)).count();
            ((*keyword).to_string(), hits)
        })
        .collect();
    Ok(tally)
}

/// Vacancies per seniority bucket, re-derived from the stored titles.
///
/// # Errors
///
/// Returns [`ReportError::Store`] if the title column is missing.
pub fn level_tally(sheet: &Sheet) -> Result<Tally, ReportError> {
    let mut grades = GradeCounters::default();
    for title in sheet.column(columns::TITLE)? {
        grades.increment(classify_grade(&title.to_lowercase()));
    }

    let mut tally = Tally::new(
        "Распределение количества вакансий по уровням",
        "Уровень",
        sheet,
    );
    tally.rows = Grade::ALL
        .iter()
        .map(|g| (g.label().to_string(), grades.get(*g) as usize))
        .collect();
    Ok(tally)
}

/// Vacancies per role bucket, re-derived from the stored titles. A title can
/// count toward several roles or none.
///
/// # Errors
///
/// Returns [`ReportError::Store`] if the title column is missing.
pub fn specialty_tally(sheet: &Sheet) -> Result<Tally, ReportError> {
    let mut roles = RoleCounters::default();
    for title in sheet.column(columns::TITLE)? {
        for role in classify_roles(&title.to_lowercase()) {
            roles.increment(role);
        }
    }

    let mut tally = Tally::new(
        "Распределение количества вакансий по специальностям",
        "Специальность",
        sheet,
    );
    tally.rows = Role::ALL
        .iter()
        .map(|r| (r.label().to_string(), roles.get(*r) as usize))
        .collect();
    Ok(tally)
}
