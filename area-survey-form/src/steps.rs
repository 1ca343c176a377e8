//! Step pages for parts A to F.
//!
//! Each page reads the record from the shared wizard, writes its own slice
//! back, and only moves forward after the current step validates.

use crate::FormContext;
use dioxus::prelude::*;
use log::{info, warn};
use serde_json::{json, Value};
use survey_form::validation::alert_text;
use survey_form::{AreaSection, AreaWizard};
use survey_model::area::{Attendance, WingGrowth};
use survey_model::{AreaPart, AreaSurvey, Count, MeetingStatus};
use survey_ui::components::{CheckOption, CheckboxGrid, MonthSelect, NumberInput, TextField, TextListEditor, WizardNav};
use survey_ui::js_bridge;
use survey_ui::state::AppState;

fn update(mut wizard: Signal<AreaWizard>, section: AreaSection, patch: Value) {
    if let Err(e) = wizard.write().update_form_data(section, patch) {
        warn!("Rejected {} update: {}", section.key(), e);
    }
}

fn go_next(mut wizard: Signal<AreaWizard>) {
    let result = wizard.write().advance();
    if let Err(issues) = result {
        js_bridge::alert(&alert_text(&issues));
    }
}

fn go_prev(mut wizard: Signal<AreaWizard>) {
    wizard.write().prev_step();
}

fn section_title(part: AreaPart) -> Element {
    rsx! {
        h3 { style: "margin: 8px 0;", "{part.title()}" }
    }
}

// ─── Part A: hierarchy, month and membership ───

#[component]
pub fn PartAStep() -> Element {
    let wizard = use_context::<FormContext>().wizard;
    let record = wizard.read().record().clone();
    let part = AreaSection::Part(AreaPart::A);

    rsx! {
        {section_title(AreaPart::A)}
        TextField {
            label: "District".to_string(),
            value: record.district.clone(),
            on_change: move |v: String| update(wizard, AreaSection::District, json!(v)),
        }
        TextField {
            label: "Area".to_string(),
            value: record.area.clone(),
            on_change: move |v: String| update(wizard, AreaSection::Area, json!(v)),
        }
        MonthSelect {
            value: record.month.clone(),
            on_change: move |v: String| update(wizard, AreaSection::Month, json!(v)),
        }
        NumberInput {
            label: "PJ".to_string(),
            value: record.part_a.pj,
            on_change: move |c: Count| update(wizard, part, json!({"pj": c})),
        }
        NumberInput {
            label: "KH".to_string(),
            value: record.part_a.kh,
            on_change: move |c: Count| update(wizard, part, json!({"kh": c})),
        }
        NumberInput {
            label: "VKH".to_string(),
            value: record.part_a.vkh,
            on_change: move |c: Count| update(wizard, part, json!({"vkh": c})),
        }
        WizardNav {
            show_prev: false,
            next_label: "Next".to_string(),
            on_prev: move |_| {},
            on_next: move |_| go_next(wizard),
        }
    }
}

// ─── Part B: monthly meeting, wing attendance, decisions ───

#[derive(Clone, Copy, PartialEq)]
enum AttendanceField {
    Present,
    Leave,
    Absent,
}

impl AttendanceField {
    const ALL: [AttendanceField; 3] = [
        AttendanceField::Present,
        AttendanceField::Leave,
        AttendanceField::Absent,
    ];

    fn label(self) -> &'static str {
        match self {
            AttendanceField::Present => "Present",
            AttendanceField::Leave => "Leave",
            AttendanceField::Absent => "Absent",
        }
    }

    fn get(self, a: &Attendance) -> Count {
        match self {
            AttendanceField::Present => a.present,
            AttendanceField::Leave => a.leave,
            AttendanceField::Absent => a.absent,
        }
    }

    fn slot(self, a: &mut Attendance) -> &mut Count {
        match self {
            AttendanceField::Present => &mut a.present,
            AttendanceField::Leave => &mut a.leave,
            AttendanceField::Absent => &mut a.absent,
        }
    }
}

#[component]
pub fn PartBStep() -> Element {
    let mut wizard = use_context::<FormContext>().wizard;
    let record = wizard.read().record().clone();
    let b = record.part_b;
    let meeting = b.monthly_meeting;
    let rows: Vec<(&'static str, &'static str, Attendance)> = b
        .wing_attendance
        .iter()
        .map(|(choice, a)| (choice.key, choice.label, *a))
        .collect();

    rsx! {
        {section_title(AreaPart::B)}
        label {
            style: "display: flex; flex-direction: column; gap: 4px; margin: 6px 0;",
            span { style: "font-weight: bold;", "Was the monthly meeting held?" }
            select {
                style: "padding: 6px; max-width: 200px;",
                onchange: move |evt: Event<FormData>| {
                    let status = MeetingStatus::from_input(&evt.value());
                    update(wizard, AreaSection::Part(AreaPart::B), json!({"monthlyMeeting": status}));
                },
                option { value: "", selected: !meeting.is_set(), "Select" }
                option { value: "Yes", selected: meeting == MeetingStatus::Yes, "Yes" }
                option { value: "No", selected: meeting == MeetingStatus::No, "No" }
            }
        }

        h4 { style: "margin: 12px 0 6px 0;", "Wing attendance" }
        table {
            style: "border-collapse: collapse; width: 100%;",
            thead {
                tr {
                    th { style: "text-align: left; padding: 4px;", "Wing" }
                    for field in AttendanceField::ALL {
                        th { style: "text-align: left; padding: 4px;", "{field.label()}" }
                    }
                }
            }
            tbody {
                for (key, label, attendance) in rows {
                    tr {
                        key: "{key}",
                        td { style: "padding: 4px;", "{label}" }
                        for field in AttendanceField::ALL {
                            td {
                                style: "padding: 4px;",
                                NumberInput {
                                    label: format!("{} {}", label, field.label()),
                                    value: field.get(&attendance),
                                    compact: true,
                                    on_change: move |c: Count| {
                                        let result = wizard.write().edit(|r| {
                                            r.part_b.wing_attendance.get_mut(key).map(|a| *field.slot(a) = c)
                                        });
                                        if let Err(e) = result {
                                            warn!("Attendance update rejected: {}", e);
                                        }
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }

        TextListEditor {
            title: "Main decisions".to_string(),
            items: b.main_decisions.as_slice().to_vec(),
            add_label: "Add decision".to_string(),
            on_add: move |_| wizard.write().edit(|r| r.part_b.main_decisions.push_blank()),
            on_edit: move |(index, text): (usize, String)| {
                let _ = wizard.write().edit(|r| r.part_b.main_decisions.set(index, text));
            },
            on_remove: move |index: usize| {
                let _ = wizard.write().edit(|r| r.part_b.main_decisions.remove(index));
            },
        }

        WizardNav {
            next_label: "Next".to_string(),
            on_prev: move |_| go_prev(wizard),
            on_next: move |_| go_next(wizard),
        }
    }
}

// ─── Part C: expansion activities ───

#[component]
pub fn PartCStep() -> Element {
    let mut wizard = use_context::<FormContext>().wizard;
    let options = CheckOption::from_flags(&wizard.read().record().part_c.expansion_activities);

    rsx! {
        {section_title(AreaPart::C)}
        CheckboxGrid {
            title: "Activities carried out this month".to_string(),
            options,
            on_toggle: move |key: &'static str| {
                let _ = wizard.write().edit(|r| r.part_c.expansion_activities.toggle(key));
            },
        }
        WizardNav {
            next_label: "Next".to_string(),
            on_prev: move |_| go_prev(wizard),
            on_next: move |_| go_next(wizard),
        }
    }
}

// ─── Part D: free-text activities ───

#[component]
pub fn PartDStep() -> Element {
    let mut wizard = use_context::<FormContext>().wizard;
    let items = wizard.read().record().part_d.activities.as_slice().to_vec();

    rsx! {
        {section_title(AreaPart::D)}
        TextListEditor {
            title: "Activities".to_string(),
            items,
            add_label: "Add activity".to_string(),
            on_add: move |_| wizard.write().edit(|r| r.part_d.activities.push_blank()),
            on_edit: move |(index, text): (usize, String)| {
                let _ = wizard.write().edit(|r| r.part_d.activities.set(index, text));
            },
            on_remove: move |index: usize| {
                let _ = wizard.write().edit(|r| r.part_d.activities.remove(index));
            },
        }
        WizardNav {
            next_label: "Next".to_string(),
            on_prev: move |_| go_prev(wizard),
            on_next: move |_| go_next(wizard),
        }
    }
}

// ─── Part E: new contacts ───

#[component]
pub fn PartEStep() -> Element {
    let mut wizard = use_context::<FormContext>().wizard;
    let e = wizard.read().record().part_e.clone();
    let part = AreaSection::Part(AreaPart::E);

    rsx! {
        {section_title(AreaPart::E)}
        NumberInput {
            label: "Male".to_string(),
            value: e.male,
            on_change: move |c: Count| update(wizard, part, json!({"male": c})),
        }
        NumberInput {
            label: "Female".to_string(),
            value: e.female,
            on_change: move |c: Count| update(wizard, part, json!({"female": c})),
        }
        CheckboxGrid {
            title: "Categories of people contacted".to_string(),
            options: CheckOption::from_flags(&e.categories),
            on_toggle: move |key: &'static str| {
                let _ = wizard.write().edit(|r| r.part_e.categories.toggle(key));
            },
        }
        WizardNav {
            next_label: "Next".to_string(),
            on_prev: move |_| go_prev(wizard),
            on_next: move |_| go_next(wizard),
        }
    }
}

// ─── Part F: wing growth and submission ───

#[derive(Props, Clone, PartialEq)]
pub struct PartFStepProps {
    /// Host is editing an existing survey; saving goes through `on_save`
    pub is_editing: bool,
    pub on_save: EventHandler<AreaSurvey>,
}

fn growth_path(key: &str, field: &str) -> String {
    format!("partF.wingGrowth.{}.{}", key, field)
}

fn update_cell(mut wizard: Signal<AreaWizard>, path: String, c: Count) {
    if let Err(e) = wizard.write().update_path(&path, json!(c)) {
        warn!("Rejected {} update: {}", path, e);
    }
}

#[component]
pub fn PartFStep(props: PartFStepProps) -> Element {
    let wizard = use_context::<FormContext>().wizard;
    let mut state = use_context::<AppState>();
    let rows: Vec<(&'static str, &'static str, WingGrowth)> = wizard
        .read()
        .record()
        .part_f
        .wing_growth
        .iter()
        .map(|(choice, g)| (choice.key, choice.label, *g))
        .collect();
    let is_editing = props.is_editing;
    let on_save = props.on_save;
    let submit_label = if is_editing { "Update Survey" } else { "Submit Survey" };

    let submit = move |_: ()| {
        let issues = wizard.read().current_step_issues();
        if !issues.is_empty() {
            js_bridge::alert(&alert_text(&issues));
            return;
        }
        let record = wizard.read().record().clone();
        if is_editing {
            on_save.call(record);
            return;
        }
        let client = state.client();
        state.submitting.set(true);
        spawn(async move {
            match client.create_area_survey(&record).await {
                Ok(outcome) => {
                    info!("Created area survey {:?}", outcome.id);
                    let message = outcome
                        .message
                        .unwrap_or_else(|| "Survey submitted successfully.".to_string());
                    state.finish_and_redirect(message, crate::AFTER_SAVE_URL).await;
                }
                Err(e) => state.report_failure("Submitting survey", &e),
            }
            state.submitting.set(false);
        });
    };

    rsx! {
        {section_title(AreaPart::F)}
        table {
            style: "border-collapse: collapse; width: 100%;",
            thead {
                tr {
                    th { style: "text-align: left; padding: 4px;", "Wing" }
                    th { style: "text-align: left; padding: 4px;", "New components" }
                    th { style: "text-align: left; padding: 4px;", "New members" }
                }
            }
            tbody {
                for (key, label, growth) in rows {
                    tr {
                        key: "{key}",
                        td { style: "padding: 4px;", "{label}" }
                        td {
                            style: "padding: 4px;",
                            NumberInput {
                                label: format!("{} new components", label),
                                value: growth.new_components,
                                compact: true,
                                on_change: move |c: Count| update_cell(wizard, growth_path(key, "newComponents"), c),
                            }
                        }
                        td {
                            style: "padding: 4px;",
                            NumberInput {
                                label: format!("{} new members", label),
                                value: growth.new_members,
                                compact: true,
                                on_change: move |c: Count| update_cell(wizard, growth_path(key, "newMembers"), c),
                            }
                        }
                    }
                }
            }
        }
        WizardNav {
            next_label: submit_label.to_string(),
            busy: *state.submitting.read(),
            on_prev: move |_| go_prev(wizard),
            on_next: submit,
        }
    }
}
