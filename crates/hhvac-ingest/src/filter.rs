use hhvac_core::VacancyRecord;

/// Maps raw city input to a filter. An empty string means "any city".
#[must_use]
pub fn city_filter(input: &str) -> Option<&str> {
    if input.is_empty() {
        None
    } else {
        Some(input)
    }
}

/// Accepts a record when it discloses a salary lower bound and, if a target
/// city is set, its city matches exactly (case-sensitive).
#[must_use]
pub fn accepts(record: &VacancyRecord, target_city: Option<&str>) -> bool {
    record.salary_from.is_some() && target_city.is_none_or(|city| city == record.city)
}
