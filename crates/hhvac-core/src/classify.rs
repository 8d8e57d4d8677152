//! Title classification into grade and role buckets.
//!
//! Both classifiers are driven by ordered rule tables. Titles are lower-cased
//! once and every keyword is stored lower-case, so matching is
//! case-insensitive substring search throughout.
//!
//! Grade rules are first-match-wins; a title with no grade keyword lands in
//! [`Grade::Unspecified`]. Role rules are all evaluated; a rule with
//! `unless` set is skipped when that role already matched for the same title.

use crate::vacancy::{Grade, Role};

struct GradeRule {
    grade: Grade,
    keyword: &'static str,
}

struct RoleRule {
    role: Role,
    keywords: &'static [&'static str],
    unless: Option<Role>,
}

const GRADE_RULES: &[GradeRule] = &[
    GradeRule {
        grade: Grade::Junior,
        keyword: "junior",
    },
    GradeRule {
        grade: Grade::Middle,
        keyword: "middle",
    },
    GradeRule {
        grade: Grade::Senior,
        keyword: "senior",
    },
];

const ROLE_RULES: &[RoleRule] = &[
    RoleRule {
        role: Role::Mobile,
        keywords: &["android", "ios", "мобильный"],
        unless: None,
    },
    RoleRule {
        role: Role::Frontend,
        keywords: &["frontend"],
        unless: None,
    },
    RoleRule {
        role: Role::Backend,
        keywords: &["backend", "разработчик", "программист", "developer"],
        unless: Some(Role::Frontend),
    },
    RoleRule {
        role: Role::Qa,
        keywords: &["qa", "тестировщик"],
        unless: None,
    },
    RoleRule {
        role: Role::Analyst,
        keywords: &["analyst", "аналитик"],
        unless: None,
    },
];

/// Grade plus matched roles for one title. Roles are listed in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub grade: Grade,
    pub roles: Vec<Role>,
}

/// Returns the grade bucket for an already lower-cased title.
#[must_use]
pub fn classify_grade(lowered: &str) -> Grade {
    GRADE_RULES
        .iter()
        .find(|rule| lowered.contains(rule.keyword))
        .map_or(Grade::Unspecified, |rule| rule.grade)
}

/// Returns every role bucket an already lower-cased title falls into.
#[must_use]
pub fn classify_roles(lowered: &str) -> Vec<Role> {
    let mut roles: Vec<Role> = Vec::new();
    for rule in ROLE_RULES {
        if rule.unless.is_some_and(|blocker| roles.contains(&blocker)) {
            continue;
        }
        if rule.keywords.iter().any(|k| lowered.contains(k)) {
            roles.push(rule.role);
        }
    }
    roles
}

/// Classifies a raw vacancy title.
#[must_use]
pub fn classify_title(title: &str) -> Classification {
    let lowered = title.to_lowercase();
    Classification {
        grade: classify_grade(&lowered),
        roles: classify_roles(&lowered),
    }
}
