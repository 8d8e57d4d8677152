//! Conversion from hh.ru wire types into [`hhvac_core::VacancyRecord`].

use hhvac_core::VacancyRecord;

use crate::types::VacancyItem;

/// Flattens a [`VacancyItem`] into a [`VacancyRecord`].
///
/// A missing `salary` object and a `salary` with `from: null` both map to
/// `salary_from: None`. A missing or `null` `has_test` maps to `false`.
#[must_use]
pub fn normalize_vacancy(item: VacancyItem) -> VacancyRecord {
    VacancyRecord {
        title: item.name,
        city: item.area.name,
        salary_from: item.salary.and_then(|s| s.from),
        employer: item.employer.name,
        experience: item.experience.map(|e| e.name),
        requirement: item.snippet.requirement,
        employment: item.employment.name,
        has_test: item.has_test.unwrap_or(false),
        schedule: item.schedule.map(|s| s.name),
        external_id: item.id,
    }
}
