//! Grid of independent checkboxes over one catalog list.

use dioxus::prelude::*;
use survey_model::catalog::OptionList;
use survey_model::keyed_map::FlagMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOption {
    pub key: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

impl CheckOption {
    /// One option per catalog entry, in catalog order.
    pub fn from_flags<L: OptionList>(flags: &FlagMap<L>) -> Vec<CheckOption> {
        flags
            .iter()
            .map(|(choice, checked)| CheckOption {
                key: choice.key,
                label: choice.label,
                checked: *checked,
            })
            .collect()
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CheckboxGridProps {
    pub title: String,
    pub options: Vec<CheckOption>,
    /// Called with the key of the box that was clicked
    pub on_toggle: EventHandler<&'static str>,
}

#[component]
pub fn CheckboxGrid(props: CheckboxGridProps) -> Element {
    let on_toggle = props.on_toggle;
    rsx! {
        fieldset {
            style: "border: 1px solid #e0e0e0; border-radius: 4px; margin: 8px 0; padding: 8px 12px;",
            legend { style: "font-weight: bold;", "{props.title}" }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 4px 12px;",
                for option in props.options.iter().copied() {
                    label {
                        key: "{option.key}",
                        style: "display: flex; align-items: center; gap: 6px;",
                        input {
                            r#type: "checkbox",
                            checked: option.checked,
                            onchange: move |_| on_toggle.call(option.key),
                        }
                        "{option.label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_model::catalog::ExpansionActivities;

    #[test]
    fn options_mirror_the_flag_map() {
        let mut flags: FlagMap<ExpansionActivities> = FlagMap::new();
        flags.toggle("houseVisits").unwrap();
        let options = CheckOption::from_flags(&flags);
        assert_eq!(options.len(), flags.len());
        assert_eq!(options.iter().filter(|o| o.checked).count(), 1);
        assert!(options.iter().any(|o| o.key == "houseVisits" && o.checked));
    }
}
