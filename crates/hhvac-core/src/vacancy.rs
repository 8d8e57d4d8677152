//! Vacancy records and the per-run bucket counters derived from them.

use serde::Serialize;

/// A vacancy as received from the search API, flattened to the fields the
/// pipeline uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VacancyRecord {
    pub title: String,
    pub city: String,
    /// Lower salary bound. `None` when the employer did not disclose one.
    pub salary_from: Option<i64>,
    pub employer: String,
    pub experience: Option<String>,
    pub requirement: Option<String>,
    pub employment: String,
    pub has_test: bool,
    pub schedule: Option<String>,
    pub external_id: String,
}

/// Seniority bucket. Exactly one per accepted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Grade {
    Junior,
    Middle,
    Senior,
    Unspecified,
}

impl Grade {
    pub const ALL: [Grade; 4] = [
        Grade::Junior,
        Grade::Middle,
        Grade::Senior,
        Grade::Unspecified,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Grade::Junior => 0,
            Grade::Middle => 1,
            Grade::Senior => 2,
            Grade::Unspecified => 3,
        }
    }

    /// Label used on level tallies.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Grade::Junior => "Junior-разработчик",
            Grade::Middle => "Middle-разработчик",
            Grade::Senior => "Senior-разработчик",
            Grade::Unspecified => "Не указано",
        }
    }
}

/// Role bucket. A record may fall into zero or more of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    Backend,
    Frontend,
    Qa,
    Analyst,
    Mobile,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Backend,
        Role::Frontend,
        Role::Qa,
        Role::Analyst,
        Role::Mobile,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Role::Backend => 0,
            Role::Frontend => 1,
            Role::Qa => 2,
            Role::Analyst => 3,
            Role::Mobile => 4,
        }
    }

    /// Label used on specialty tallies.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::Backend => "Backend-разработчик",
            Role::Frontend => "Frontend-разработчик",
            Role::Qa => "QA-инженер",
            Role::Analyst => "Аналитик",
            Role::Mobile => "Mobile-разработчик",
        }
    }
}

/// Counts per grade, ordered `[Junior, Middle, Senior, Unspecified]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GradeCounters([u32; 4]);

impl GradeCounters {
    pub fn increment(&mut self, grade: Grade) {
        self.0[grade.index()] += 1;
    }

    #[must_use]
    pub fn get(&self, grade: Grade) -> u32 {
        self.0[grade.index()]
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    #[must_use]
    pub fn as_array(&self) -> [u32; 4] {
        self.0
    }
}

/// Counts per role, ordered `[Backend, Frontend, QA, Analyst, Mobile]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoleCounters([u32; 5]);

impl RoleCounters {
    pub fn increment(&mut self, role: Role) {
        self.0[role.index()] += 1;
    }

    #[must_use]
    pub fn get(&self, role: Role) -> u32 {
        self.0[role.index()]
    }

    #[must_use]
    pub fn as_array(&self) -> [u32; 5] {
        self.0
    }
}
