//! `search` command: one ingest run against the live API.

use hhvac_client::HhClient;
use hhvac_core::{AppConfig, Grade, Role};
use hhvac_ingest::{run_ingest, RunOutcome, RunParams, RunReport};

pub(crate) async fn run_search(
    config: &AppConfig,
    query: &str,
    city: &str,
    json: bool,
) -> anyhow::Result<()> {
    let client = HhClient::with_base_url(
        &config.api_base_url,
        &config.user_agent,
        config.request_timeout_secs,
        config.area,
    )?;
    let params = RunParams::new(query, city)
        .with_target_accepted(config.target_accepted)
        .with_max_pages(config.max_pages);

    let report = run_ingest(&client, &params, &config.data_path).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary_json(&report))?);
    } else {
        print_summary(&report, config);
    }

    if let RunOutcome::Aborted(e) = &report.outcome {
        anyhow::bail!(
            "search aborted after saving {} vacancies: {e}",
            report.accepted
        );
    }
    Ok(())
}

pub(crate) fn outcome_label(outcome: &RunOutcome) -> &'static str {
    match outcome {
        RunOutcome::TargetReached => "target_reached",
        RunOutcome::Exhausted => "exhausted",
        RunOutcome::PageCapReached => "page_cap_reached",
        RunOutcome::Aborted(_) => "aborted",
    }
}

pub(crate) fn summary_json(report: &RunReport) -> serde_json::Value {
    let error = match &report.outcome {
        RunOutcome::Aborted(e) => Some(e.to_string()),
        _ => None,
    };
    let grades: serde_json::Map<String, serde_json::Value> = Grade::ALL
        .iter()
        .map(|g| (g.label().to_string(), report.grades.get(*g).into()))
        .collect();
    let roles: serde_json::Map<String, serde_json::Value> = Role::ALL
        .iter()
        .map(|r| (r.label().to_string(), report.roles.get(*r).into()))
        .collect();

    serde_json::json!({
        "outcome": outcome_label(&report.outcome),
        "error": error,
        "accepted": report.accepted,
        "pages_fetched": report.pages_fetched,
        "levels": grades,
        "specialties": roles,
    })
}

fn print_summary(report: &RunReport, config: &AppConfig) {
    println!(
        "{} vacancies saved to {} ({} pages, {})",
        report.accepted,
        config.data_path.display(),
        report.pages_fetched,
        outcome_label(&report.outcome)
    );
    println!();
    println!("{:<24}COUNT", "LEVEL");
    for grade in Grade::ALL {
        println!("{:<24}{}", grade.label(), report.grades.get(grade));
    }
    println!();
    println!("{:<24}COUNT", "SPECIALTY");
    for role in Role::ALL {
        println!("{:<24}{}", role.label(), report.roles.get(role));
    }
}
