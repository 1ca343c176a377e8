use dioxus::prelude::*;
use survey_utils::dates::MONTH_NAMES;

#[derive(Props, Clone, PartialEq)]
pub struct TextFieldProps {
    pub label: String,
    pub value: String,
    pub on_change: EventHandler<String>,
    #[props(default = String::new())]
    pub placeholder: String,
}

/// Labelled single-line text input.
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let on_change = props.on_change;
    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 4px; margin: 6px 0;",
            span { style: "font-weight: bold;", "{props.label}" }
            input {
                r#type: "text",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                style: "padding: 6px;",
                oninput: move |evt: Event<FormData>| on_change.call(evt.value()),
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct MonthSelectProps {
    pub value: String,
    pub on_change: EventHandler<String>,
}

/// Month dropdown; an empty value shows the placeholder option.
#[component]
pub fn MonthSelect(props: MonthSelectProps) -> Element {
    let on_change = props.on_change;
    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 4px; margin: 6px 0;",
            span { style: "font-weight: bold;", "Month" }
            select {
                style: "padding: 6px;",
                onchange: move |evt: Event<FormData>| on_change.call(evt.value()),
                option { value: "", selected: props.value.is_empty(), "Select month" }
                for month in MONTH_NAMES {
                    option {
                        value: "{month}",
                        selected: props.value == month,
                        "{month}"
                    }
                }
            }
        }
    }
}
