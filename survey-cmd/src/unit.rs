//! Unit survey commands.

use anyhow::{bail, Context};
use log::info;
use std::fs::File;
use survey_api::{ApiClient, SubmitMode, SubmitOutcome};
use survey_form::validation::alert_text;
use survey_form::UnitWizard;
use survey_model::UnitSurvey;

use crate::export::write_unit_surveys_csv;
use crate::{print_json, read_json};

pub async fn list(client: &ApiClient, unit_id: &str, csv_path: Option<&str>) -> anyhow::Result<()> {
    let surveys = client
        .list_unit_surveys(unit_id)
        .await
        .with_context(|| format!("listing surveys for unit {}", unit_id))?;
    info!("{} surveys for unit {}", surveys.len(), unit_id);

    if let Some(path) = csv_path {
        let file = File::create(path).with_context(|| format!("creating {}", path))?;
        write_unit_surveys_csv(file, &surveys)?;
        info!("Wrote {} rows to {}", surveys.len(), path);
        return Ok(());
    }
    for s in &surveys {
        println!(
            "{:<26} {:<10} {:<6} {:<20} workers {}",
            s.id.as_deref().unwrap_or("-"),
            s.month,
            s.year,
            s.component,
            s.total_workers()
        );
    }
    Ok(())
}

pub async fn get(client: &ApiClient, id: &str) -> anyhow::Result<()> {
    let record = client
        .get_unit_survey(id)
        .await
        .with_context(|| format!("loading unit survey {}", id))?;
    print_json(&record)
}

pub async fn delete(client: &ApiClient, id: &str) -> anyhow::Result<()> {
    client
        .delete_unit_survey(id)
        .await
        .with_context(|| format!("deleting unit survey {}", id))?;
    println!("Survey deleted.");
    Ok(())
}

/// Run the file through the same submission check as the form, then send it.
pub async fn submit(client: &ApiClient, path: &str, id: Option<String>) -> anyhow::Result<()> {
    let record: UnitSurvey = read_json(path)?;
    let editing = id.is_some();
    let outcome = submit_record(client, record, id).await?;
    println!("{}", saved_message(&outcome, editing));
    if let Some(id) = outcome.id {
        println!("id: {}", id);
    }
    Ok(())
}

/// Server message, or a local one that says whether the survey was new.
fn saved_message(outcome: &SubmitOutcome, editing: bool) -> String {
    match &outcome.message {
        Some(message) => message.clone(),
        None if editing => "Survey updated successfully.".to_string(),
        None => "Survey submitted successfully.".to_string(),
    }
}

pub async fn submit_record(
    client: &ApiClient,
    record: UnitSurvey,
    id: Option<String>,
) -> anyhow::Result<SubmitOutcome> {
    let payload = match UnitWizard::with_record(record).submission_payload() {
        Ok(payload) => payload,
        Err(issues) => bail!("{}", alert_text(&issues)),
    };
    let mode = match id {
        Some(id) => SubmitMode::Update(id),
        None => SubmitMode::Create,
    };
    client
        .submit_unit_survey(&mode, &payload)
        .await
        .context("submitting unit survey")
}
