//! Area survey commands: template, validation, listing and submission.

use anyhow::{bail, Context};
use log::info;
use survey_api::{ApiClient, SubmitMode};
use survey_form::validation::area_record_issues;
use survey_model::AreaSurvey;

use crate::{print_json, read_json};

/// A blank survey with every nested part present.
pub fn print_template() -> anyhow::Result<()> {
    print_json(&AreaSurvey::default())
}

/// Check all six steps of the file and return the record when it passes.
pub fn validate_file(path: &str) -> anyhow::Result<AreaSurvey> {
    let record: AreaSurvey = read_json(path)?;
    let issues = area_record_issues(&record);
    if issues.is_empty() {
        info!("{} passes every step", path);
        return Ok(record);
    }
    for (part, issue) in &issues {
        eprintln!("{} ({}): {}", part.title(), part.key(), issue.message);
    }
    bail!("{} has {} problem(s)", path, issues.len())
}

pub async fn list(client: &ApiClient) -> anyhow::Result<()> {
    let surveys = client
        .list_area_surveys()
        .await
        .context("listing area surveys")?;
    info!("{} area surveys", surveys.len());
    for s in &surveys {
        println!(
            "{:<26} {:<10} {:<20} {}",
            s.id.as_deref().unwrap_or("-"),
            s.month,
            s.district,
            s.area
        );
    }
    Ok(())
}

pub async fn get(client: &ApiClient, id: &str) -> anyhow::Result<()> {
    let record = client
        .get_area_survey(id)
        .await
        .with_context(|| format!("loading area survey {}", id))?;
    print_json(&record)
}

pub async fn submit(client: &ApiClient, path: &str, id: Option<String>) -> anyhow::Result<()> {
    let record = validate_file(path)?;
    let mode = match id {
        Some(id) => SubmitMode::Update(id),
        None => SubmitMode::Create,
    };
    let outcome = client
        .submit_area_survey(&mode, &record)
        .await
        .context("submitting area survey")?;
    let fallback = if mode.is_editing() {
        "Survey updated successfully."
    } else {
        "Survey submitted successfully."
    };
    println!("{}", outcome.message.as_deref().unwrap_or(fallback));
    if let Some(id) = outcome.id {
        println!("id: {}", id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_file;

    #[test]
    fn blank_survey_fails_validation() {
        let blank = serde_json::to_string(&AreaSurvey::default()).unwrap();
        let path = temp_file("blank-area.json", &blank);
        let err = validate_file(&path.to_string_lossy()).unwrap_err();
        assert!(err.to_string().contains("problem(s)"));
    }

    #[test]
    fn unreadable_file_names_the_path() {
        let path = temp_file("broken-area.json", "{ not json");
        let path_text = path.to_string_lossy().to_string();
        let err = validate_file(&path_text).unwrap_err();
        assert!(err.to_string().contains(&path_text));
    }
}
