//! Unit Survey Records
//!
//! Lists the surveys submitted for the signed-in user's unit (or the unit
//! given as `?unit=<unitId>`), shows one survey in detail and deletes
//! surveys after confirmation. Editing opens the unit survey form.

use dioxus::prelude::*;
use log::{info, warn};
use survey_api::Role;
use survey_model::catalog::{OptionList, PersonCategories};
use survey_model::keyed_map::FlagMap;
use survey_model::UnitSurvey;
use survey_ui::components::{ErrorDisplay, LoadingSpinner, NoticeDisplay, PageHeader};
use survey_ui::js_bridge;
use survey_ui::state::AppState;
use survey_utils::display::format_count;

const EDIT_URL: &str = "/unit/survey";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("unit-records-root"))
        .launch(App);
}

/// Labels of the checked boxes, in catalog order.
fn checked_labels<L: OptionList>(flags: &FlagMap<L>) -> String {
    let labels: Vec<&str> = flags
        .checked_keys()
        .into_iter()
        .filter_map(|key| L::ID.label_for(key))
        .collect();
    if labels.is_empty() {
        "None".to_string()
    } else {
        labels.join(", ")
    }
}

fn period(survey: &UnitSurvey) -> String {
    format!("{} {}", survey.month, survey.year)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| AppState::new(Role::User));
    let mut surveys: Signal<Vec<UnitSurvey>> = use_signal(Vec::new);
    let mut selected: Signal<Option<String>> = use_signal(|| None);

    // ─── Once on mount: fetch the unit's surveys ───
    use_hook(move || {
        let unit_id = js_bridge::query_param("unit").or_else(|| {
            state
                .session
                .peek()
                .profile()
                .and_then(|p| p.unit_id.clone())
        });
        let Some(unit_id) = unit_id else {
            state
                .error_msg
                .set(Some("No unit is linked to this account.".to_string()));
            return;
        };
        let client = state.client();
        state.loading.set(true);
        spawn(async move {
            match client.list_unit_surveys(&unit_id).await {
                Ok(list) => {
                    info!("Loaded {} surveys for unit {}", list.len(), unit_id);
                    surveys.set(list);
                }
                Err(e) => state.report_failure("Loading unit surveys", &e),
            }
            state.loading.set(false);
        });
    });

    let on_delete = move |id: String| {
        if !js_bridge::confirm("Delete this survey? This cannot be undone.") {
            return;
        }
        let client = state.client();
        state.submitting.set(true);
        spawn(async move {
            match client.delete_unit_survey(&id).await {
                Ok(()) => {
                    info!("Deleted unit survey {}", id);
                    surveys.write().retain(|s| s.id.as_deref() != Some(id.as_str()));
                    if selected.peek().as_deref() == Some(id.as_str()) {
                        selected.set(None);
                    }
                    state.error_msg.set(None);
                    state.notice.set(Some("Survey deleted.".to_string()));
                }
                Err(e) => state.report_failure("Deleting survey", &e),
            }
            state.submitting.set(false);
        });
    };

    let list = surveys.read().clone();
    let detail = selected
        .read()
        .as_ref()
        .and_then(|id| list.iter().find(|s| s.id.as_deref() == Some(id.as_str())).cloned());
    let busy = *state.submitting.read();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            PageHeader {
                title: "Unit Survey Records".to_string(),
                subtitle: "Surveys submitted for your unit".to_string(),
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone(), on_dismiss: move |_| state.error_msg.set(None) }
            }
            if let Some(notice) = state.notice.read().as_ref() {
                NoticeDisplay { message: notice.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner { message: "Loading surveys...".to_string() }
            } else if list.is_empty() {
                p { style: "color: #666;", "No surveys have been submitted yet." }
            } else {
                table {
                    style: "border-collapse: collapse; width: 100%;",
                    thead {
                        tr {
                            th { style: "text-align: left; padding: 6px;", "Period" }
                            th { style: "text-align: left; padding: 6px;", "Unit" }
                            th { style: "text-align: right; padding: 6px;", "Workers" }
                            th { style: "text-align: right; padding: 6px;", "New members" }
                            th { style: "padding: 6px;", "" }
                        }
                    }
                    tbody {
                        for survey in list.iter().cloned() {
                            SurveyRow {
                                key: "{survey.id.clone().unwrap_or_default()}",
                                survey,
                                busy,
                                on_view: move |id: String| selected.set(Some(id)),
                                on_delete,
                            }
                        }
                    }
                }
            }

            if let Some(survey) = detail {
                SurveyDetail { survey, on_close: move |_| selected.set(None) }
            }
        }
    }
}

#[component]
fn SurveyRow(
    survey: UnitSurvey,
    busy: bool,
    on_view: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let id = survey.id.clone().unwrap_or_default();
    let view_id = id.clone();
    let delete_id = id.clone();
    let edit_href = format!("{}?id={}", EDIT_URL, id);
    let new_members = survey.part_b.new_jih_members.total() as u64;

    rsx! {
        tr {
            style: "border-top: 1px solid #e0e0e0;",
            td { style: "padding: 6px;", "{period(&survey)}" }
            td { style: "padding: 6px;", "{survey.component}" }
            td { style: "padding: 6px; text-align: right;", "{format_count(survey.total_workers() as u64)}" }
            td { style: "padding: 6px; text-align: right;", "{format_count(new_members)}" }
            td {
                style: "padding: 6px; display: flex; gap: 6px; justify-content: flex-end;",
                button { r#type: "button", onclick: move |_| on_view.call(view_id.clone()), "View" }
                a { href: "{edit_href}", "Edit" }
                button {
                    r#type: "button",
                    disabled: busy || id.is_empty(),
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn SurveyDetail(survey: UnitSurvey, on_close: EventHandler<()>) -> Element {
    let growth: Vec<(&'static str, String)> = survey
        .part_c
        .growth_acceleration
        .iter()
        .map(|(choice, count)| (choice.label, count.or_zero().to_string()))
        .collect();
    if survey.id.is_none() {
        warn!("Showing a survey without an id");
    }

    rsx! {
        section {
            style: "margin-top: 16px; padding: 12px 16px; border: 1px solid #e0e0e0; border-radius: 6px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h3 { style: "margin: 0;", "{survey.component}: {period(&survey)}" }
                button { r#type: "button", onclick: move |_| on_close.call(()), "Close" }
            }
            p { style: "color: #666;", "{survey.district} / {survey.area}" }

            h4 { "Workers" }
            ul {
                li { "Rukkun: {survey.workers.rukkun.or_zero()}" }
                li { "Karkun: {survey.workers.karkun.or_zero()}" }
                li { "Active associates: {survey.workers.active_associate.or_zero()}" }
            }

            h4 { "Part A: Contacts" }
            ul {
                li { "Codes: {survey.part_a.codes.or_zero()}" }
                li { "Persons spoken to: {survey.part_a.spoken_persons.male.or_zero()} male, {survey.part_a.spoken_persons.female.or_zero()} female" }
                li { "Persons in authority: {checked_labels::<PersonCategories>(&survey.part_a.authority_persons)}" }
            }

            h4 { "Part B: New Members" }
            ul {
                li { "New JIH members: {survey.part_b.new_jih_members.male.or_zero()} male, {survey.part_b.new_jih_members.female.or_zero()} female" }
                li { "Categories: {checked_labels::<PersonCategories>(&survey.part_b.member_categories)}" }
            }

            h4 { "Part C: Growth Acceleration" }
            ul {
                for (label, value) in growth {
                    li { key: "{label}", "{label}: {value}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_model::catalog::ListId;

    #[test]
    fn checked_labels_use_catalog_text() {
        let mut flags: FlagMap<PersonCategories> = FlagMap::new();
        assert_eq!(checked_labels(&flags), "None");
        flags.toggle("teachers").unwrap();
        let label = ListId::PersonCategories.label_for("teachers").unwrap();
        assert_eq!(checked_labels(&flags), label);
    }

    #[test]
    fn period_shows_month_and_year() {
        let survey = UnitSurvey {
            month: "May".into(),
            year: 2024,
            ..UnitSurvey::default()
        };
        assert_eq!(period(&survey), "May 2024");
    }
}
