//! Area Monthly Survey
//!
//! Six-step form (parts A to F) for one area's monthly report. Opened with
//! `?id=<surveyId>` it edits an existing survey, otherwise it creates one.
//!
//! Data flow:
//! 1. On mount: read the session from storage. In edit mode fetch the
//!    survey and load it into the wizard; in create mode pre-fill district
//!    and area from the cached profile, then from the hierarchy lookups.
//! 2. Each step page edits its slice of the record held by `AreaWizard`
//!    and only moves forward once the step validates.
//! 3. The last step submits (POST or PUT), shows the server's notice and
//!    redirects after 2 seconds.

mod steps;

use dioxus::prelude::*;
use log::{info, warn};
use serde_json::json;
use survey_api::hierarchy::resolve_names;
use survey_api::{Role, SubmitMode};
use survey_form::{AreaSection, AreaWizard};
use survey_model::hierarchy::HierarchyNames;
use survey_model::{AreaPart, AreaSurvey};
use survey_ui::components::{ErrorDisplay, LoadingSpinner, NoticeDisplay, PageHeader, StepIndicator};
use survey_ui::js_bridge;
use survey_ui::state::AppState;

/// Where the page goes after a successful save.
const AFTER_SAVE_URL: &str = "/dashboard";

/// Wizard state shared with the step pages.
#[derive(Clone, Copy)]
pub struct FormContext {
    pub wizard: Signal<AreaWizard>,
    pub mode: Signal<SubmitMode>,
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("area-survey-root"))
        .launch(App);
}

/// Fill district and area with `names`, unless the user already typed
/// something other than the previous pre-fill.
fn prefill(wizard: &mut AreaWizard, previous: &HierarchyNames, names: &HierarchyNames) {
    let record = wizard.record();
    let targets = [
        (AreaSection::District, record.district.clone(), &previous.district, &names.district),
        (AreaSection::Area, record.area.clone(), &previous.area, &names.area),
    ];
    for (section, current, previous, name) in targets {
        if name.is_empty() || !(current.is_empty() || current == *previous) {
            continue;
        }
        if let Err(e) = wizard.update_form_data(section, json!(name)) {
            warn!("Could not pre-fill {}: {}", section.key(), e);
        }
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| AppState::new(Role::User));
    let mut form = use_context_provider(|| FormContext {
        wizard: Signal::new(AreaWizard::new()),
        mode: Signal::new(SubmitMode::Create),
    });

    // ─── Once on mount: load the survey, or pre-fill the hierarchy ───
    use_hook(move || {
        let client = state.client();
        match js_bridge::query_param("id") {
            Some(id) => {
                form.mode.set(SubmitMode::Update(id.clone()));
                state.loading.set(true);
                spawn(async move {
                    match client.get_area_survey(&id).await {
                        Ok(record) => {
                            info!("Loaded area survey {} for editing", id);
                            form.wizard.write().load(record);
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
                prefill(&mut form.wizard.write(), &HierarchyNames::default(), &fallback);
                spawn(async move {
                    let names = resolve_names(&client, &profile).await;
                    prefill(&mut form.wizard.write(), &fallback, &names);
                });
            }
        }
    });

    // Edit mode save, handed to the final step.
    let on_save = move |record: AreaSurvey| {
        let SubmitMode::Update(id) = form.mode.peek().clone() else {
            return;
        };
        let client = state.client();
        state.submitting.set(true);
        spawn(async move {
            match client.update_area_survey(&id, &record).await {
                Ok(outcome) => {
                    info!("Updated area survey {}", id);
                    let message = outcome
                        .message
                        .unwrap_or_else(|| "Survey updated successfully.".to_string());
                    state.finish_and_redirect(message, AFTER_SAVE_URL).await;
                }
                Err(e) => state.report_failure("Updating survey", &e),
            }
            state.submitting.set(false);
        });
    };

    let is_editing = form.mode.read().is_editing();
    let step = form.wizard.read().step();
    let titles: Vec<&'static str> = AreaPart::ALL.iter().map(|p| p.title()).collect();
    let page_title = if is_editing {
        "Edit Area Survey"
    } else {
        "Area Monthly Survey"
    };

    let body = match AreaPart::from_step(step).unwrap_or(AreaPart::A) {
        AreaPart::A => rsx! { steps::PartAStep {} },
        AreaPart::B => rsx! { steps::PartBStep {} },
        AreaPart::C => rsx! { steps::PartCStep {} },
        AreaPart::D => rsx! { steps::PartDStep {} },
        AreaPart::E => rsx! { steps::PartEStep {} },
        AreaPart::F => rsx! { steps::PartFStep { is_editing, on_save } },
    };

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            PageHeader {
                title: page_title.to_string(),
                subtitle: "Monthly report of area activities".to_string(),
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
                StepIndicator { current: step, titles }
                {body}

                if !is_editing {
                    p {
                        style: "margin-top: 24px; text-align: right;",
                        button {
                            r#type: "button",
                            style: "font-size: 12px; background: none; border: none; color: #C62828; cursor: pointer;",
                            onclick: move |_| {
                                if js_bridge::confirm("Clear every answer and start again?") {
                                    form.wizard.write().reset_form();
                                    state.error_msg.set(None);
                                }
                            },
                            "Clear form"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(district: &str, area: &str) -> HierarchyNames {
        HierarchyNames {
            district: district.to_string(),
            area: area.to_string(),
            unit: String::new(),
        }
    }

    #[test]
    fn prefill_fills_blanks_then_upgrades_fallbacks() {
        let mut wizard = AreaWizard::new();
        let fallback = names("d1", "a1");
        prefill(&mut wizard, &HierarchyNames::default(), &fallback);
        assert_eq!(wizard.record().district, "d1");

        prefill(&mut wizard, &fallback, &names("Kozhikode", "Feroke"));
        assert_eq!(wizard.record().district, "Kozhikode");
        assert_eq!(wizard.record().area, "Feroke");
    }

    #[test]
    fn prefill_keeps_user_input() {
        let mut wizard = AreaWizard::new();
        wizard
            .update_form_data(AreaSection::Area, json!("Typed by hand"))
            .unwrap();
        prefill(&mut wizard, &names("d1", "a1"), &names("Kozhikode", "Feroke"));
        assert_eq!(wizard.record().district, "Kozhikode");
        assert_eq!(wizard.record().area, "Typed by hand");
    }
}
