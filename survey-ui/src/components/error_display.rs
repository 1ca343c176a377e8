//! Error banner for page-level and inline failures.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Shows a close button when set; page-level errors leave it out.
    #[props(default)]
    pub on_dismiss: Option<EventHandler<()>>,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "display: flex; justify-content: space-between; gap: 12px; padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            span {
                strong { "Error: " }
                "{props.message}"
            }
            if let Some(on_dismiss) = props.on_dismiss {
                button {
                    r#type: "button",
                    style: "border: none; background: none; color: #C62828; cursor: pointer;",
                    onclick: move |_| on_dismiss.call(()),
                    "Dismiss"
                }
            }
        }
    }
}
