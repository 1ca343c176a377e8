//! Unit Survey
//!
//! Two-step form for one unit: workers and contacts, then new members and
//! wing growth. The page owns the `UnitWizard` directly; each step keeps a
//! local draft and hands it back as a JSON patch when the user moves on.
//!
//! Data flow:
//! 1. On mount: with `?id=<surveyId>` fetch the survey for editing,
//!    otherwise pre-fill district, area and unit from the profile and the
//!    hierarchy lookups.
//! 2. Step 1 "Next" deep-merges its patch and moves to step 2.
//! 3. Step 2 "Submit" merges its patch, checks the required fields, sends
//!    the record with empty counts as zero and redirects after 2 seconds.

mod steps;

use dioxus::prelude::*;
use log::{info, warn};
use serde_json::{json, Value};
use survey_api::hierarchy::resolve_names;
use survey_api::{Role, SubmitMode};
use survey_form::validation::alert_text;
use survey_form::{UnitStep, UnitWizard};
use survey_model::hierarchy::HierarchyNames;
use survey_ui::components::{ErrorDisplay, LoadingSpinner, NoticeDisplay, PageHeader, StepIndicator};
use survey_ui::js_bridge;
use survey_ui::state::AppState;

/// Where the page goes after a successful save.
const AFTER_SAVE_URL: &str = "/unit/surveys";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("unit-survey-root"))
        .launch(App);
}

/// Fill district, area and unit with `names`, unless the user already
/// typed something other than the previous pre-fill.
fn prefill(wizard: &mut UnitWizard, previous: &HierarchyNames, names: &HierarchyNames) {
    let record = wizard.record();
    let targets = [
        ("district", record.district.clone(), &previous.district, &names.district),
        ("area", record.area.clone(), &previous.area, &names.area),
        ("component", record.component.clone(), &previous.unit, &names.unit),
    ];
    for (field, current, previous, name) in targets {
        if name.is_empty() || !(current.is_empty() || current == *previous) {
            continue;
        }
        if let Err(e) = wizard.merge(json!({ field: name })) {
            warn!("Could not pre-fill {}: {}", field, e);
        }
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| AppState::new(Role::User));
    let mut wizard = use_signal(UnitWizard::new);
    let mut mode = use_signal(|| SubmitMode::Create);

    // ─── Once on mount: load the survey, or pre-fill the hierarchy ───
    use_hook(move || {
        let client = state.client();
        match js_bridge::query_param("id") {
            Some(id) => {
                mode.set(SubmitMode::Update(id.clone()));
                state.loading.set(true);
                spawn(async move {
                    match client.get_unit_survey(&id).await {
                        Ok(record) => {
                            info!("Loaded unit survey {} for editing", id);
                            wizard.set(UnitWizard::with_record(record));
                        }
                        Err(e) => state.report_failure("Loading survey", &e),
                    }
                    state.loading.set(false);
                });
            }
            None => {
                let Some(profile) = state.session.peek().profile().cloned() else {
                    return;
                };
                let fallback = HierarchyNames::from_profile(&profile);
                prefill(&mut wizard.write(), &HierarchyNames::default(), &fallback);
                spawn(async move {
                    let names = resolve_names(&client, &profile).await;
                    prefill(&mut wizard.write(), &fallback, &names);
                });
            }
        }
    });

    let mut merge_or_report = move |patch: Value| -> bool {
        match wizard.write().merge(patch) {
            Ok(()) => true,
            Err(e) => {
                warn!("Step data rejected: {}", e);
                state.error_msg.set(Some(format!("Could not keep this step's answers: {}", e)));
                false
            }
        }
    };

    let on_field = move |(field, value): (&'static str, String)| {
        merge_or_report(json!({ field: value }));
    };

    let on_next = move |patch: Value| {
        if let Err(e) = wizard.write().advance_with(patch) {
            warn!("Step data rejected: {}", e);
            state.error_msg.set(Some(format!("Could not keep this step's answers: {}", e)));
        }
    };

    let on_back = move |patch: Value| {
        if merge_or_report(patch) {
            wizard.write().back();
        }
    };

    let on_submit = move |patch: Value| {
        if !merge_or_report(patch) {
            return;
        }
        let payload = match wizard.read().submission_payload() {
            Ok(payload) => payload,
            Err(issues) => {
                js_bridge::alert(&alert_text(&issues));
                return;
            }
        };
        let submit_mode = mode.peek().clone();
        let client = state.client();
        state.submitting.set(true);
        spawn(async move {
            match client.submit_unit_survey(&submit_mode, &payload).await {
                Ok(outcome) => {
                    info!("Saved unit survey {:?}", outcome.id);
                    let fallback = if submit_mode.is_editing() {
                        "Survey updated successfully."
                    } else {
                        "Survey submitted successfully."
                    };
                    let message = outcome.message.unwrap_or_else(|| fallback.to_string());
                    state.finish_and_redirect(message, AFTER_SAVE_URL).await;
                }
                Err(e) => state.report_failure("Submitting unit survey", &e),
            }
            state.submitting.set(false);
        });
    };

    let is_editing = mode.read().is_editing();
    let step = wizard.read().step();
    let record = wizard.read().record().clone();
    let page_title = if is_editing { "Edit Unit Survey" } else { "Unit Survey" };
    let titles = vec![UnitStep::Contacts.title(), UnitStep::Growth.title()];

    let body = match step {
        UnitStep::Contacts => rsx! {
            steps::ContactsStep { record, on_field, on_next }
        },
        UnitStep::Growth => rsx! {
            steps::GrowthStep {
                record,
                is_editing,
                busy: *state.submitting.read(),
                on_back,
                on_submit,
            }
        },
    };

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            PageHeader {
                title: page_title.to_string(),
                subtitle: "Unit workers, contacts and growth".to_string(),
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone(), on_dismiss: move |_| state.error_msg.set(None) }
            }
            if let Some(notice) = state.notice.read().as_ref() {
                NoticeDisplay { message: notice.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner { message: "Loading survey...".to_string() }
            } else {
                StepIndicator { current: step.number(), titles }
                {body}
            }
        }
    }
}
