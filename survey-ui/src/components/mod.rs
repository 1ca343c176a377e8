//! Reusable Dioxus RSX components for the survey apps.

mod chart_container;
mod chart_header;
mod checkbox_grid;
mod error_display;
mod loading_spinner;
mod notice_display;
mod number_input;
mod page_header;
mod stat_card;
mod step_indicator;
mod text_field;
mod text_list_editor;
mod wizard_nav;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use checkbox_grid::{CheckOption, CheckboxGrid};
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use notice_display::NoticeDisplay;
pub use number_input::NumberInput;
pub use page_header::PageHeader;
pub use stat_card::StatCard;
pub use step_indicator::StepIndicator;
pub use text_field::{MonthSelect, TextField};
pub use text_list_editor::TextListEditor;
pub use wizard_nav::WizardNav;
