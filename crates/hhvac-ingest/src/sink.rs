use std::path::Path;

use hhvac_core::{classify_title, Classification, GradeCounters, RoleCounters, VacancyRecord};
use hhvac_store::{SheetBuffer, SheetLayout, StoreError};

/// Mutable state of one ingest run: buffered rows plus running counters.
///
/// Rows are only ever appended. Counters are updated in the same call, so the
/// grade total always equals [`RunState::accepted`].
#[derive(Debug)]
pub struct RunState {
    buffer: SheetBuffer,
    grades: GradeCounters,
    roles: RoleCounters,
    accepted: usize,
}

impl RunState {
    #[must_use]
    pub fn new(layout: SheetLayout) -> Self {
        Self {
            buffer: SheetBuffer::new(layout),
            grades: GradeCounters::default(),
            roles: RoleCounters::default(),
            accepted: 0,
        }
    }

    /// Classifies `record` by title, buffers its row and bumps the counters.
    pub fn accept(&mut self, record: &VacancyRecord) -> Classification {
        let classification = classify_title(&record.title);
        self.buffer.append(record);
        self.grades.increment(classification.grade);
        for role in &classification.roles {
            self.roles.increment(*role);
        }
        self.accepted += 1;
        classification
    }

    #[must_use]
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    #[must_use]
    pub fn grades(&self) -> GradeCounters {
        self.grades
    }

    #[must_use]
    pub fn roles(&self) -> RoleCounters {
        self.roles
    }

    #[must_use]
    pub fn layout(&self) -> SheetLayout {
        self.buffer.layout()
    }

    /// Overwrites `path` with every row accepted so far.
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from the sheet writer.
    pub fn flush(&self, path: &Path) -> Result<(), StoreError> {
        self.buffer.flush(path)
    }
}
