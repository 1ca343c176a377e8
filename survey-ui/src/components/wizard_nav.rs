use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct WizardNavProps {
    #[props(default = true)]
    pub show_prev: bool,
    pub next_label: String,
    #[props(default = false)]
    pub busy: bool,
    pub on_prev: EventHandler<()>,
    pub on_next: EventHandler<()>,
}

/// Previous / next buttons at the foot of a wizard step.
#[component]
pub fn WizardNav(props: WizardNavProps) -> Element {
    let on_prev = props.on_prev;
    let on_next = props.on_next;
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; margin-top: 16px; padding-top: 12px; border-top: 1px solid #e0e0e0;",
            if props.show_prev {
                button {
                    r#type: "button",
                    disabled: props.busy,
                    onclick: move |_| on_prev.call(()),
                    "Previous"
                }
            } else {
                span {}
            }
            button {
                r#type: "button",
                disabled: props.busy,
                style: "background: #2196F3; color: white; border: none; padding: 8px 16px; border-radius: 4px;",
                onclick: move |_| on_next.call(()),
                if props.busy { "Saving..." } else { "{props.next_label}" }
            }
        }
    }
}
