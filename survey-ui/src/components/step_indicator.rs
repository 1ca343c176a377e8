//! Progress strip across the top of a wizard.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StepIndicatorProps {
    /// 1-based current step
    pub current: u8,
    pub titles: Vec<&'static str>,
}

fn step_style(step: usize, current: usize) -> &'static str {
    if step == current {
        "flex: 1; padding: 6px; font-size: 12px; text-align: center; background: #2196F3; color: white; border-radius: 4px;"
    } else if step < current {
        "flex: 1; padding: 6px; font-size: 12px; text-align: center; background: #BBDEFB; border-radius: 4px;"
    } else {
        "flex: 1; padding: 6px; font-size: 12px; text-align: center; background: #EEEEEE; border-radius: 4px;"
    }
}

#[component]
pub fn StepIndicator(props: StepIndicatorProps) -> Element {
    let total = props.titles.len();
    rsx! {
        div {
            style: "margin: 8px 0 16px 0;",
            p {
                style: "margin: 0 0 6px 0; font-size: 13px; color: #666;",
                "Step {props.current} of {total}"
            }
            ol {
                style: "display: flex; gap: 4px; list-style: none; padding: 0; margin: 0;",
                for (i, title) in props.titles.iter().enumerate() {
                    li {
                        key: "{i}",
                        style: step_style(i + 1, props.current as usize),
                        "{title}"
                    }
                }
            }
        }
    }
}
