use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NoticeDisplayProps {
    pub message: String,
}

/// Green confirmation box shown after a successful save.
#[component]
pub fn NoticeDisplay(props: NoticeDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #E8F5E9; color: #2E7D32; border-radius: 4px; border: 1px solid #A5D6A7;",
            "{props.message}"
        }
    }
}
