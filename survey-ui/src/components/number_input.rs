//! Numeric input bound to a [`Count`].

use dioxus::prelude::*;
use survey_model::Count;

#[derive(Props, Clone, PartialEq)]
pub struct NumberInputProps {
    pub label: String,
    pub value: Count,
    pub on_change: EventHandler<Count>,
    /// Render without the label column, for table cells
    #[props(default = false)]
    pub compact: bool,
}

/// Text input that re-parses its content on every keystroke.
///
/// Non-digits are dropped as they are typed; clearing the box yields
/// `Count::Unanswered`.
#[component]
pub fn NumberInput(props: NumberInputProps) -> Element {
    let text = props.value.input_text();
    let on_change = props.on_change;
    let oninput = move |evt: Event<FormData>| {
        on_change.call(Count::parse(&evt.value()));
    };

    if props.compact {
        return rsx! {
            input {
                r#type: "text",
                inputmode: "numeric",
                title: "{props.label}",
                value: "{text}",
                style: "width: 64px; padding: 4px;",
                oninput: oninput,
            }
        };
    }

    rsx! {
        label {
            style: "display: flex; justify-content: space-between; align-items: center; gap: 12px; margin: 6px 0;",
            span { "{props.label}" }
            input {
                r#type: "text",
                inputmode: "numeric",
                value: "{text}",
                style: "width: 96px; padding: 4px;",
                oninput: oninput,
            }
        }
    }
}
