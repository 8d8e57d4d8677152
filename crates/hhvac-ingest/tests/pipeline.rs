//! Driver tests against a scripted in-memory page source.

use std::collections::VecDeque;
use std::sync::Mutex;

use hhvac_client::{HhError, VacanciesResponse};
use hhvac_core::{Grade, Role};
use hhvac_ingest::{run_ingest, PageFetcher, RunOutcome, RunParams};
use hhvac_store::{columns, read_sheet, SheetLayout};
use serde_json::{json, Value};

/// Serves pre-built pages in order and records every requested page index.
/// Once the script runs out, every further page is empty.
struct ScriptedFetcher {
    pages: Mutex<VecDeque<Result<VacanciesResponse, HhError>>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl ScriptedFetcher {
    fn new(pages: Vec<Result<VacanciesResponse, HhError>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn requested_pages(&self) -> Vec<u32> {
        self.calls.lock().unwrap().iter().map(|(_, p)| *p).collect()
    }
}

impl PageFetcher for ScriptedFetcher {
    async fn fetch_page(&self, query: &str, page: u32) -> Result<VacanciesResponse, HhError> {
        self.calls.lock().unwrap().push((query.to_string(), page));
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(response(vec![], None)))
    }
}

fn item(id: usize, title: &str, city: &str, salary_from: Option<i64>) -> Value {
    json!({
        "id": id.to_string(),
        "name": title,
        "area": { "name": city },
        "salary": salary_from.map(|from| json!({ "from": from, "to": null, "currency": "RUR" })),
        "employer": { "name": format!("Employer {}", id % 7) },
        "experience": { "name": "От 1 года до 3 лет" },
        "snippet": { "requirement": "Python, SQL" },
        "employment": { "name": "Полная занятость" },
        "has_test": id % 2 == 0,
        "schedule": { "name": "Полный день" }
    })
}

fn response(items: Vec<Value>, pages: Option<u32>) -> VacanciesResponse {
    serde_json::from_value(json!({ "items": items, "pages": pages }))
        .expect("fixture should deserialize")
}

/// `count` salaried items starting at `first_id`; the first `moscow` of them
/// are in Moscow, the rest in Kazan.
fn salaried_page(
    first_id: usize,
    count: usize,
    moscow: usize,
    pages: Option<u32>,
) -> VacanciesResponse {
    let items = (0..count)
        .map(|i| {
            let city = if i < moscow { "Москва" } else { "Казань" };
            item(first_id + i, "Python разработчик", city, Some(100_000))
        })
        .collect();
    response(items, pages)
}

fn fetch_failure() -> HhError {
    HhError::UnexpectedStatus {
        status: 503,
        url: "https://api.hh.ru/vacancies?page=2".to_string(),
    }
}

#[tokio::test]
async fn three_full_pages_without_city_filter_reach_target() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    let fetcher = ScriptedFetcher::new(vec![
        Ok(salaried_page(0, 40, 17, Some(3))),
        Ok(salaried_page(40, 40, 17, Some(3))),
        Ok(salaried_page(80, 40, 16, Some(3))),
    ]);

    let report = run_ingest(&fetcher, &RunParams::new("Python разработчик", ""), &path)
        .await
        .expect("run should succeed");

    assert!(matches!(report.outcome, RunOutcome::TargetReached));
    assert_eq!(report.accepted, 120, "whole third page is kept");
    assert_eq!(report.pages_fetched, 3);
    assert_eq!(report.layout, SheetLayout::Global);
    assert_eq!(fetcher.requested_pages(), vec![0, 1, 2]);

    let sheet = read_sheet(&path).unwrap();
    assert_eq!(sheet.headers[0], columns::CITY);
    assert_eq!(sheet.len(), 120);
}

#[tokio::test]
async fn city_filter_keeps_fetching_until_results_run_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    let fetcher = ScriptedFetcher::new(vec![
        Ok(salaried_page(0, 40, 17, None)),
        Ok(salaried_page(40, 40, 17, None)),
        Ok(salaried_page(80, 40, 16, None)),
    ]);

    let report = run_ingest(&fetcher, &RunParams::new("Python разработчик", "Москва"), &path)
        .await
        .unwrap();

    assert!(matches!(report.outcome, RunOutcome::Exhausted));
    assert_eq!(report.accepted, 50);
    assert_eq!(fetcher.requested_pages(), vec![0, 1, 2, 3]);

    let sheet = read_sheet(&path).unwrap();
    assert_eq!(sheet.headers, SheetLayout::CityScoped.headers());
    assert_eq!(sheet.len(), 50);
    let ids = sheet.column(columns::EXTERNAL_ID).unwrap();
    let expected: Vec<String> = (0..17)
        .chain(40..57)
        .chain(80..96)
        .map(|i| i.to_string())
        .collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn stops_after_last_page_reported_by_api() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    let fetcher = ScriptedFetcher::new(vec![
        Ok(salaried_page(0, 5, 5, Some(2))),
        Ok(salaried_page(5, 5, 5, Some(2))),
    ]);

    let report = run_ingest(&fetcher, &RunParams::new("rust", ""), &path)
        .await
        .unwrap();

    assert!(matches!(report.outcome, RunOutcome::Exhausted));
    assert_eq!(report.accepted, 10);
    assert_eq!(fetcher.requested_pages(), vec![0, 1]);
}

#[tokio::test]
async fn page_cap_bounds_runs_that_accept_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    let unsalaried = || {
        let items = (0..20).map(|i| item(i, "Go developer", "Москва", None)).collect();
        Ok(response(items, Some(50)))
    };
    let fetcher = ScriptedFetcher::new((0..10).map(|_| unsalaried()).collect());

    let params = RunParams::new("go", "").with_max_pages(3);
    let report = run_ingest(&fetcher, &params, &path).await.unwrap();

    assert!(matches!(report.outcome, RunOutcome::PageCapReached));
    assert_eq!(report.accepted, 0);
    assert_eq!(fetcher.requested_pages(), vec![0, 1, 2]);

    let sheet = read_sheet(&path).unwrap();
    assert!(sheet.is_empty(), "header-only sheet is still written");
}

#[tokio::test]
async fn fetch_error_on_third_page_persists_rows_already_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    let fetcher = ScriptedFetcher::new(vec![
        Ok(salaried_page(0, 20, 20, Some(10))),
        Ok(salaried_page(20, 10, 10, Some(10))),
        Err(fetch_failure()),
        Ok(salaried_page(30, 40, 40, Some(10))),
    ]);

    let report = run_ingest(&fetcher, &RunParams::new("Python", ""), &path)
        .await
        .expect("fetch errors are not hard failures");

    assert!(matches!(
        report.outcome,
        RunOutcome::Aborted(HhError::UnexpectedStatus { status: 503, .. })
    ));
    assert!(!report.outcome.is_complete());
    assert_eq!(report.accepted, 30);
    assert_eq!(report.grades.total(), 30);
    assert_eq!(report.roles.get(Role::Backend), 30);
    assert_eq!(report.pages_fetched, 2);
    assert_eq!(fetcher.requested_pages(), vec![0, 1, 2]);

    let sheet = read_sheet(&path).unwrap();
    assert_eq!(sheet.len(), 30);
}

#[tokio::test]
async fn only_salaried_rows_are_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    let items = vec![
        item(1, "Java developer", "Москва", Some(150_000)),
        item(2, "Java developer", "Москва", None),
        item(3, "Java developer", "Пермь", Some(0)),
        item(4, "Java developer", "Пермь", None),
    ];
    let fetcher = ScriptedFetcher::new(vec![Ok(response(items, Some(1)))]);

    let report = run_ingest(&fetcher, &RunParams::new("java", ""), &path)
        .await
        .unwrap();

    assert_eq!(report.accepted, 2);
    let sheet = read_sheet(&path).unwrap();
    assert_eq!(sheet.column(columns::EXTERNAL_ID).unwrap(), vec!["1", "3"]);
    assert!(sheet.column(columns::SALARY).unwrap().iter().all(|s| !s.is_empty()));
}

#[tokio::test]
async fn counters_reflect_classified_titles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    let items = vec![
        item(1, "Senior backend developer", "Москва", Some(300_000)),
        item(2, "QA инженер Junior", "Москва", Some(90_000)),
        item(3, "Frontend разработчик", "Москва", Some(150_000)),
        item(4, "Middle Android developer", "Москва", Some(200_000)),
        item(5, "Аналитик данных", "Москва", Some(120_000)),
    ];
    let fetcher = ScriptedFetcher::new(vec![Ok(response(items, Some(1)))]);

    let report = run_ingest(&fetcher, &RunParams::new("developer", "Москва"), &path)
        .await
        .unwrap();

    assert_eq!(report.accepted, 5);
    assert_eq!(report.grades.total(), 5);
    assert_eq!(report.grades.get(Grade::Senior), 1);
    assert_eq!(report.grades.get(Grade::Junior), 1);
    assert_eq!(report.grades.get(Grade::Middle), 1);
    assert_eq!(report.grades.get(Grade::Unspecified), 2);

    assert_eq!(report.roles.get(Role::Frontend), 1);
    assert_eq!(report.roles.get(Role::Qa), 1);
    assert_eq!(report.roles.get(Role::Analyst), 1);
    assert_eq!(report.roles.get(Role::Mobile), 1);
    // "Senior backend developer" and "Middle Android developer".
    assert_eq!(report.roles.get(Role::Backend), 2);
}

#[tokio::test]
async fn rerun_overwrites_previous_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let shared = dir.path().join("shared.csv");
    let isolated = dir.path().join("isolated.csv");
    let params = RunParams::new("Python", "").with_target_accepted(10);

    let first = ScriptedFetcher::new(vec![Ok(salaried_page(0, 25, 10, Some(1)))]);
    run_ingest(&first, &params, &shared).await.unwrap();

    let second = ScriptedFetcher::new(vec![Ok(salaried_page(500, 12, 3, Some(1)))]);
    run_ingest(&second, &params, &shared).await.unwrap();

    let alone = ScriptedFetcher::new(vec![Ok(salaried_page(500, 12, 3, Some(1)))]);
    run_ingest(&alone, &params, &isolated).await.unwrap();

    let shared_bytes = std::fs::read(&shared).unwrap();
    let isolated_bytes = std::fs::read(&isolated).unwrap();
    assert_eq!(shared_bytes, isolated_bytes);
    assert_eq!(read_sheet(&shared).unwrap().len(), 12);
}

#[tokio::test]
async fn passes_query_through_to_every_fetch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    let fetcher = ScriptedFetcher::new(vec![Ok(salaried_page(0, 3, 3, None))]);

    run_ingest(&fetcher, &RunParams::new("C++ разработчик", ""), &path)
        .await
        .unwrap();

    let calls = fetcher.calls.lock().unwrap().clone();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|(q, _)| q == "C++ разработчик"));
}

#[tokio::test]
async fn null_has_test_does_not_break_the_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    let mut untested = item(7, "Middle QA", "Москва", Some(110_000));
    untested["has_test"] = Value::Null;
    let page = serde_json::from_value(json!({ "items": [untested], "pages": 1 }))
        .expect("null has_test should deserialize");
    let fetcher = ScriptedFetcher::new(vec![Ok(page)]);

    let report = run_ingest(&fetcher, &RunParams::new("qa", ""), &path)
        .await
        .unwrap();

    assert!(matches!(report.outcome, RunOutcome::Exhausted));
    assert_eq!(report.accepted, 1);
    let sheet = read_sheet(&path).unwrap();
    assert_eq!(
        sheet.column(columns::HAS_TEST).unwrap(),
        vec![columns::HAS_TEST_NO]
    );
}
