//! Wizard state, step validation and merge rules for the survey forms.
//!
//! - `area_wizard`: six linear steps over an [`survey_model::AreaSurvey`]
//! - `unit_wizard`: two steps over a [`survey_model::UnitSurvey`]
//! - `validation`: pure per-step predicates and their messages
//! - `merge`: the deep merge both wizards apply patches with

pub mod area_wizard;
pub mod error;
pub mod merge;
pub mod unit_wizard;
pub mod validation;

pub use area_wizard::{AreaSection, AreaWizard};
pub use error::FormError;
pub use unit_wizard::{UnitStep, UnitWizard};
pub use validation::ValidationIssue;
