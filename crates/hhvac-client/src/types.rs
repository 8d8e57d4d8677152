//! hh.ru `GET /vacancies` response types.
//!
//! The pipeline reads `items`, `pages` and the item fields copied into
//! `VacancyRecord`. The other modelled fields (`found`, `page`, `per_page`,
//! `salary.to`, `salary.currency`, `snippet.responsibility`) are decoded but
//! unused. serde ignores everything else.
//!
//! ### `salary`
//! `null` when the employer hides the salary. When present, `from` and `to`
//! are each independently nullable, so a vacancy can publish only an upper
//! bound.
//!
//! ### `snippet.requirement`
//! Highlighted plain text with `<highlighttext>` tags, or `null`.
//!
//! ### `has_test`
//! May be absent or `null`; both mean the vacancy has no test.
//!
//! ### `pages`
//! Total page count for the query. hh.ru caps search depth at 2000 results, so
//! this is never larger than `2000 / per_page`.

use serde::Deserialize;

/// Top-level search result envelope.
#[derive(Debug, Deserialize)]
pub struct VacanciesResponse {
    pub items: Vec<VacancyItem>,
    #[serde(default)]
    pub found: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// A single vacancy from the search listing.
#[derive(Debug, Deserialize)]
pub struct VacancyItem {
    pub id: String,
    pub name: String,
    pub area: NamedRef,
    #[serde(default)]
    pub salary: Option<Salary>,
    pub employer: NamedRef,
    #[serde(default)]
    pub experience: Option<NamedRef>,
    #[serde(default)]
    pub snippet: Snippet,
    pub employment: NamedRef,
    #[serde(default)]
    pub has_test: Option<bool>,
    #[serde(default)]
    pub schedule: Option<NamedRef>,
}

/// Any dictionary reference object; only the display name is kept.
#[derive(Debug, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct Salary {
    #[serde(default)]
    pub from: Option<i64>,
    #[serde(default)]
    pub to: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Snippet {
    #[serde(default)]
    pub requirement: Option<String>,
    #[serde(default)]
    pub responsibility: Option<String>,
}
