use std::path::{Path, PathBuf};

use hhvac_core::VacancyRecord;

use crate::columns;
use crate::error::StoreError;

const GLOBAL_HEADERS: &[&str] = &[
    columns::CITY,
    columns::TITLE,
    columns::SALARY,
    columns::EMPLOYER,
    columns::EXPERIENCE,
    columns::REQUIREMENTS,
    columns::EMPLOYMENT,
    columns::HAS_TEST,
    columns::SCHEDULE,
    columns::EXTERNAL_ID,
];

/// Column set of the sheet. City-scoped runs drop the city column because
/// every row would hold the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetLayout {
    Global,
    CityScoped,
}

impl SheetLayout {
    /// `Global` when no city filter is active, `CityScoped` otherwise.
    #[must_use]
    pub fn for_city_filter(city: Option<&str>) -> Self {
        if city.is_some() {
            SheetLayout::CityScoped
        } else {
            SheetLayout::Global
        }
    }

    #[must_use]
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            SheetLayout::Global => GLOBAL_HEADERS,
            SheetLayout::CityScoped => &GLOBAL_HEADERS[1..],
        }
    }

    /// Renders one record as cells in header order.
    #[must_use]
    pub fn row(self, record: &VacancyRecord) -> Vec<String> {
        let mut cells = Vec::with_capacity(self.headers().len());
        if self == SheetLayout::Global {
            cells.push(record.city.clone());
        }
        cells.push(record.title.clone());
        cells.push(
            record
                .salary_from
                .map(|s| s.to_string())
                .unwrap_or_default(),
        );
        cells.push(record.employer.clone());
        cells.push(
            record
                .experience
                .clone()
                .unwrap_or_else(|| columns::MISSING.to_string()),
        );
        cells.push(record.requirement.clone().unwrap_or_default());
        cells.push(record.employment.clone());
        cells.push(
            if record.has_test {
                columns::HAS_TEST_YES
            } else {
                columns::HAS_TEST_NO
            }
            .to_string(),
        );
        cells.push(
            record
                .schedule
                .clone()
                .unwrap_or_else(|| columns::MISSING.to_string()),
        );
        cells.push(record.external_id.clone());
        cells
    }
}

/// Append-only in-memory rows awaiting a flush to disk.
#[derive(Debug)]
pub struct SheetBuffer {
    layout: SheetLayout,
    rows: Vec<Vec<String>>,
}

impl SheetBuffer {
    #[must_use]
    pub fn new(layout: SheetLayout) -> Self {
        Self {
            layout,
            rows: Vec::new(),
        }
    }

    pub fn append(&mut self, record: &VacancyRecord) {
        self.rows.push(self.layout.row(record));
    }

    #[must_use]
    pub fn layout(&self) -> SheetLayout {
        self.layout
    }

    /// Writes the header and every buffered row to `path`, replacing any
    /// existing file. Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory or file cannot be written,
    /// or [`StoreError::Csv`] if a record cannot be encoded.
    pub fn flush(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }

        let mut writer = csv::Writer::from_path(path).map_err(|e| csv_error(path, e))?;
        writer
            .write_record(self.layout.headers())
            .map_err(|e| csv_error(path, e))?;
        for row in &self.rows {
            writer.write_record(row).map_err(|e| csv_error(path, e))?;
        }
        writer.flush().map_err(|e| io_error(path, e))?;

        tracing::info!(path = %path.display(), rows = self.rows.len(), "sheet written");
        Ok(())
    }
}

/// A sheet read back from disk.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Position of `name` in the header row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingColumn`] when the header is absent.
    pub fn column_index(&self, name: &str) -> Result<usize, StoreError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| StoreError::MissingColumn {
                column: name.to_string(),
            })
    }

    /// All cells of column `name`, top to bottom.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingColumn`] when the header is absent.
    pub fn column(&self, name: &str) -> Result<Vec<&str>, StoreError> {
        let idx = self.column_index(name)?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(idx).map_or("", String::as_str))
            .collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reads a sheet previously written by [`SheetBuffer::flush`].
///
/// # Errors
///
/// Returns [`StoreError::Csv`] if the file is missing or malformed.
pub fn read_sheet(path: &Path) -> Result<Sheet, StoreError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| csv_error(path, e))?;
    let headers = reader
        .headers()
        .map_err(|e| csv_error(path, e))?
        .iter()
        .map(str::to_owned)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    Ok(Sheet { headers, rows })
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: PathBuf::from(path),
        source,
    }
}

fn csv_error(path: &Path, source: csv::Error) -> StoreError {
    StoreError::Csv {
        path: PathBuf::from(path),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, city: &str) -> VacancyRecord {
        VacancyRecord {
            title: title.to_string(),
            city: city.to_string(),
            salary_from: Some(120_000),
            employer: "Acme".to_string(),
            experience: None,
            requirement: Some("Опыт с \"Rust\", SQL".to_string()),
            employment: "Полная занятость".to_string(),
            has_test: true,
            schedule: None,
            external_id: "42".to_string(),
        }
    }

    #[test]
    fn layout_follows_city_filter() {
        assert_eq!(SheetLayout::for_city_filter(None), SheetLayout::Global);
        assert_eq!(
            SheetLayout::for_city_filter(Some("Москва")),
            SheetLayout::CityScoped
        );
    }

    #[test]
    fn global_layout_leads_with_city() {
        let headers = SheetLayout::Global.headers();
        assert_eq!(headers.len(), 10);
        assert_eq!(headers[0], columns::CITY);
        assert_eq!(headers[9], columns::EXTERNAL_ID);
    }

    #[test]
    fn city_scoped_layout_omits_city() {
        let headers = SheetLayout::CityScoped.headers();
        assert_eq!(headers.len(), 9);
        assert!(!headers.contains(&columns::CITY));
        assert_eq!(headers[0], columns::TITLE);
    }

    #[test]
    fn row_renders_placeholders_and_flags() {
        let row = SheetLayout::Global.row(&record("Rust dev", "Казань"));
        assert_eq!(
            row,
            vec![
                "Казань",
                "Rust dev",
                "120000",
                "Acme",
                "-",
                "Опыт с \"Rust\", SQL",
                "Полная занятость",
                "Есть",
                "-",
                "42",
            ]
        );
    }

    #[test]
    fn row_width_matches_headers_for_both_layouts() {
        let r = record("x", "y");
        for layout in [SheetLayout::Global, SheetLayout::CityScoped] {
            assert_eq!(layout.row(&r).len(), layout.headers().len());
        }
    }

    #[test]
    fn flush_creates_parent_dirs_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/data.csv");

        let mut buffer = SheetBuffer::new(SheetLayout::CityScoped);
        buffer.append(&record("first", "Москва"));
        buffer.append(&record("second", "Москва"));
        buffer.flush(&path).expect("flush should succeed");

        let sheet = read_sheet(&path).expect("read should succeed");
        assert_eq!(sheet.headers, SheetLayout::CityScoped.headers());
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.column(columns::TITLE).unwrap(), vec!["first", "second"]);
        assert_eq!(
            sheet.column(columns::REQUIREMENTS).unwrap()[0],
            "Опыт с \"Rust\", SQL"
        );
    }

    #[test]
    fn flush_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");

        let mut first = SheetBuffer::new(SheetLayout::Global);
        for i in 0..5 {
            first.append(&record(&format!("old {i}"), "Омск"));
        }
        first.flush(&path).unwrap();

        let mut second = SheetBuffer::new(SheetLayout::CityScoped);
        second.append(&record("new", "Омск"));
        second.flush(&path).unwrap();

        let sheet = read_sheet(&path).unwrap();
        assert_eq!(sheet.headers.len(), 9);
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.column(columns::TITLE).unwrap(), vec!["new"]);
    }

    #[test]
    fn empty_buffer_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");

        SheetBuffer::new(SheetLayout::Global).flush(&path).unwrap();

        let sheet = read_sheet(&path).unwrap();
        assert_eq!(sheet.headers.len(), 10);
        assert!(sheet.is_empty());
    }

    #[test]
    fn column_reports_missing_header() {
        let sheet = Sheet {
            headers: vec![columns::TITLE.to_string()],
            rows: vec![],
        };
        let err = sheet.column(columns::CITY).unwrap_err();
        assert!(matches!(err, StoreError::MissingColumn { ref column } if column == columns::CITY));
    }

    #[test]
    fn read_sheet_fails_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_sheet(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, StoreError::Csv { .. }));
    }
}
