//! Shared domain types, classification rules, and configuration for hhvac.

pub mod app_config;
pub mod classify;
pub mod config;
pub mod stack;
pub mod vacancy;

use thiserror::Error;

pub use app_config::AppConfig;
pub use classify::{classify_grade, classify_roles, classify_title, Classification};
pub use config::{load_app_config, load_app_config_from_env};
pub use stack::stack_for_query;
pub use vacancy::{Grade, GradeCounters, Role, RoleCounters, VacancyRecord};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
