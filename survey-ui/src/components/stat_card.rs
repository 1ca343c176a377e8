use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatCardProps {
    pub label: String,
    pub value: String,
    #[props(default = String::new())]
    pub hint: String,
}

/// One headline number on a dashboard.
#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div {
            style: "flex: 1 1 160px; padding: 12px 16px; border: 1px solid #e0e0e0; border-radius: 6px; background: #FAFAFA;",
            div { style: "font-size: 12px; color: #666; text-transform: uppercase;", "{props.label}" }
            div { style: "font-size: 26px; font-weight: bold; margin-top: 4px;", "{props.value}" }
            if !props.hint.is_empty() {
                div { style: "font-size: 12px; color: #888; margin-top: 2px;", "{props.hint}" }
            }
        }
    }
}
