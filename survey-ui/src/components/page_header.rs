use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
    /// Where "Sign out" sends the user
    #[props(default = "/login".to_string())]
    pub login_url: String,
}

/// Page title with the signed-in user's name and a sign-out button.
#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    let mut state = use_context::<AppState>();
    let user = state
        .session
        .read()
        .profile()
        .and_then(|p| p.name.clone())
        .unwrap_or_default();
    let login_url = props.login_url.clone();

    rsx! {
        header {
            style: "display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 12px;",
            div {
                h2 { style: "margin: 0;", "{props.title}" }
                if !props.subtitle.is_empty() {
                    p { style: "margin: 4px 0 0 0; color: #666;", "{props.subtitle}" }
                }
            }
            div {
                style: "display: flex; gap: 8px; align-items: center; font-size: 13px;",
                if !user.is_empty() {
                    span { "{user}" }
                }
                button {
                    r#type: "button",
                    onclick: move |_| state.sign_out(&login_url),
                    "Sign out"
                }
            }
        }
    }
}
