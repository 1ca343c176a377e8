//! Editable list of free-text entries.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TextListEditorProps {
    pub title: String,
    pub items: Vec<String>,
    pub on_add: EventHandler<()>,
    pub on_edit: EventHandler<(usize, String)>,
    pub on_remove: EventHandler<usize>,
    #[props(default = "Add".to_string())]
    pub add_label: String,
}

#[component]
pub fn TextListEditor(props: TextListEditorProps) -> Element {
    let on_add = props.on_add;
    let on_edit = props.on_edit;
    let on_remove = props.on_remove;
    rsx! {
        div {
            style: "margin: 8px 0;",
            h4 { style: "margin: 0 0 6px 0;", "{props.title}" }
            for (index, text) in props.items.iter().enumerate() {
                div {
                    key: "{index}",
                    style: "display: flex; gap: 8px; margin: 4px 0;",
                    span { style: "min-width: 24px; color: #666;", "{index + 1}." }
                    input {
                        r#type: "text",
                        value: "{text}",
                        style: "flex: 1; padding: 6px;",
                        oninput: move |evt: Event<FormData>| on_edit.call((index, evt.value())),
                    }
                    button {
                        r#type: "button",
                        onclick: move |_| on_remove.call(index),
                        "Remove"
                    }
                }
            }
            button {
                r#type: "button",
                style: "margin-top: 4px;",
                onclick: move |_| on_add.call(()),
                "{props.add_label}"
            }
        }
    }
}
