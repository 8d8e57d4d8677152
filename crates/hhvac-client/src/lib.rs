//! Client for the hh.ru vacancy search API.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::HhClient;
pub use error::HhError;
pub use normalize::normalize_vacancy;
pub use types::{NamedRef, Salary, Snippet, VacanciesResponse, VacancyItem};
