//! The two unit survey steps.
//!
//! Each step edits a local draft and returns only its own slice to the
//! host as a JSON patch.

use dioxus::prelude::*;
use serde_json::{json, Value};
use survey_model::unit::GenderCount;
use survey_model::{Count, UnitSurvey};
use survey_ui::components::{CheckOption, CheckboxGrid, MonthSelect, NumberInput, TextField, WizardNav};

/// Slice owned by the first step.
pub fn contacts_patch(draft: &UnitSurvey) -> Value {
    json!({
        "workers": draft.workers,
        "partA": draft.part_a,
    })
}

/// Slice owned by the second step.
pub fn growth_patch(draft: &UnitSurvey) -> Value {
    json!({
        "partB": draft.part_b,
        "partC": draft.part_c,
        "month": draft.month,
        "year": draft.year,
    })
}

fn gender_inputs(title: &str, value: GenderCount, on_change: impl FnMut(GenderCount) + Copy + 'static) -> Element {
    let mut male_change = on_change;
    let mut female_change = on_change;
    rsx! {
        h4 { style: "margin: 12px 0 4px 0;", "{title}" }
        NumberInput {
            label: "Male".to_string(),
            value: value.male,
            on_change: move |c: Count| male_change(GenderCount { male: c, ..value }),
        }
        NumberInput {
            label: "Female".to_string(),
            value: value.female,
            on_change: move |c: Count| female_change(GenderCount { female: c, ..value }),
        }
    }
}

// ─── Step 1: hierarchy, workers, part A ───

#[derive(Props, Clone, PartialEq)]
pub struct ContactsStepProps {
    /// Host record; hierarchy fields are edited on it directly
    pub record: UnitSurvey,
    /// `(field, value)` for district, area and component
    pub on_field: EventHandler<(&'static str, String)>,
    pub on_next: EventHandler<Value>,
}

#[component]
pub fn ContactsStep(props: ContactsStepProps) -> Element {
    let initial = props.record.clone();
    let mut draft = use_signal(move || initial);
    let on_field = props.on_field;
    let on_next = props.on_next;
    let current = draft.read().clone();
    let record = &props.record;

    rsx! {
        h3 { style: "margin: 8px 0;", "Unit" }
        TextField {
            label: "District".to_string(),
            value: record.district.clone(),
            on_change: move |v: String| on_field.call(("district", v)),
        }
        TextField {
            label: "Area".to_string(),
            value: record.area.clone(),
            on_change: move |v: String| on_field.call(("area", v)),
        }
        TextField {
            label: "Unit".to_string(),
            value: record.component.clone(),
            on_change: move |v: String| on_field.call(("component", v)),
        }

        h3 { style: "margin: 16px 0 8px 0;", "Workers" }
        NumberInput {
            label: "Rukkun".to_string(),
            value: current.workers.rukkun,
            on_change: move |c: Count| draft.write().workers.rukkun = c,
        }
        NumberInput {
            label: "Karkun".to_string(),
            value: current.workers.karkun,
            on_change: move |c: Count| draft.write().workers.karkun = c,
        }
        NumberInput {
            label: "Active associates".to_string(),
            value: current.workers.active_associate,
            on_change: move |c: Count| draft.write().workers.active_associate = c,
        }

        h3 { style: "margin: 16px 0 8px 0;", "Part A: Contacts" }
        NumberInput {
            label: "Codes".to_string(),
            value: current.part_a.codes,
            on_change: move |c: Count| draft.write().part_a.codes = c,
        }
        {gender_inputs("Persons spoken to", current.part_a.spoken_persons, move |g| draft.write().part_a.spoken_persons = g)}
        CheckboxGrid {
            title: "Persons in authority contacted".to_string(),
            options: CheckOption::from_flags(&current.part_a.authority_persons),
            on_toggle: move |key: &'static str| {
                let _ = draft.write().part_a.authority_persons.toggle(key);
            },
        }

        WizardNav {
            show_prev: false,
            next_label: "Next".to_string(),
            on_prev: move |_| {},
            on_next: move |_| on_next.call(contacts_patch(&draft.read())),
        }
    }
}

// ─── Step 2: new members, growth, period ───

#[derive(Props, Clone, PartialEq)]
pub struct GrowthStepProps {
    pub record: UnitSurvey,
    pub is_editing: bool,
    #[props(default = false)]
    pub busy: bool,
    pub on_back: EventHandler<Value>,
    pub on_submit: EventHandler<Value>,
}

#[component]
pub fn GrowthStep(props: GrowthStepProps) -> Element {
    let initial = props.record.clone();
    let mut draft = use_signal(move || initial);
    let on_back = props.on_back;
    let on_submit = props.on_submit;
    let current = draft.read().clone();
    let growth: Vec<(&'static str, &'static str, Count)> = current
        .part_c
        .growth_acceleration
        .iter()
        .map(|(choice, c)| (choice.key, choice.label, *c))
        .collect();
    let submit_label = if props.is_editing { "Update Survey" } else { "Submit Survey" };

    rsx! {
        h3 { style: "margin: 8px 0;", "Part B: New Members" }
        {gender_inputs("New JIH members", current.part_b.new_jih_members, move |g| draft.write().part_b.new_jih_members = g)}
        CheckboxGrid {
            title: "Categories of new members".to_string(),
            options: CheckOption::from_flags(&current.part_b.member_categories),
            on_toggle: move |key: &'static str| {
                let _ = draft.write().part_b.member_categories.toggle(key);
            },
        }

        h3 { style: "margin: 16px 0 8px 0;", "Part C: Growth Acceleration" }
        for (key, label, count) in growth {
            NumberInput {
                key: "{key}",
                label: label.to_string(),
                value: count,
                on_change: move |c: Count| {
                    let _ = draft.write().part_c.growth_acceleration.set(key, c);
                },
            }
        }

        h3 { style: "margin: 16px 0 8px 0;", "Reporting period" }
        MonthSelect {
            value: current.month.clone(),
            on_change: move |m: String| draft.write().month = m,
        }
        NumberInput {
            label: "Year".to_string(),
            value: Count::Value(u32::try_from(current.year).unwrap_or(0)),
            on_change: move |c: Count| {
                if let Some(year) = c.value().and_then(|y| i32::try_from(y).ok()) {
                    draft.write().year = year;
                }
            },
        }

        WizardNav {
            next_label: submit_label.to_string(),
            busy: props.busy,
            on_prev: move |_| on_back.call(growth_patch(&draft.read())),
            on_next: move |_| on_submit.call(growth_patch(&draft.read())),
        }
    }
}
