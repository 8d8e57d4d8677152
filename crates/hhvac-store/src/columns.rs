//! Header names of the persisted sheet.

pub const CITY: &str = "Город";
pub const TITLE: &str = "Название вакансии";
pub const SALARY: &str = "Зарплата";
pub const EMPLOYER: &str = "Название работодателя";
pub const EXPERIENCE: &str = "Опыт работы";
pub const REQUIREMENTS: &str = "Требования";
pub const EMPLOYMENT: &str = "Тип занятости";
pub const HAS_TEST: &str = "Наличие теста для кандидатов";
pub const SCHEDULE: &str = "График работы";
pub const EXTERNAL_ID: &str = "ПК";

/// Placeholder for an absent experience bracket or schedule.
pub const MISSING: &str = "-";
pub const HAS_TEST_YES: &str = "Есть";
pub const HAS_TEST_NO: &str = "Нет";
