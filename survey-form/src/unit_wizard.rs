//! Two-step wizard for the unit survey.
//!
//! The host page owns this state directly. Moving forward merges the
//! outgoing step's partial data with the same deep merge the area wizard
//! uses, so sibling fields are never dropped.

use crate::error::Result;
use crate::merge::merged;
use crate::validation::{unit_submission_issues, ValidationIssue};
use log::debug;
use serde_json::Value;
use survey_model::UnitSurvey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitStep {
    /// Hierarchy, workers and part A.
    Contacts,
    /// Part B, part C and the reporting period.
    Growth,
}

impl UnitStep {
    pub fn number(self) -> u8 {
        match self {
            UnitStep::Contacts => 1,
            UnitStep::Growth => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            UnitStep::Contacts => "Workers and Contacts",
            UnitStep::Growth => "New Members and Growth",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnitWizard {
    record: UnitSurvey,
    step: UnitStep,
}

impl Default for UnitWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitWizard {
    pub fn new() -> Self {
        Self::with_record(UnitSurvey::default())
    }

    pub fn with_record(record: UnitSurvey) -> Self {
        Self {
            record,
            step: UnitStep::Contacts,
        }
    }

    pub fn record(&self) -> &UnitSurvey {
        &self.record
    }

    pub fn step(&self) -> UnitStep {
        self.step
    }

    pub fn edit<R>(&mut self, f: impl FnOnce(&mut UnitSurvey) -> R) -> R {
        f(&mut self.record)
    }

    /// Merge `patch` into the whole record without changing step.
    pub fn merge(&mut self, patch: Value) -> Result<()> {
        self.record = merged(&self.record, patch)?;
        Ok(())
    }

    /// Merge the first step's data and move to the second step.
    ///
    /// The first step has no required fields, so this never blocks on
    /// validation; it fails only if the patch does not fit the record.
    pub fn advance_with(&mut self, patch: Value) -> Result<()> {
        self.merge(patch)?;
        if self.step == UnitStep::Contacts {
            debug!("unit wizard: step 1 -> 2");
            self.step = UnitStep::Growth;
        }
        Ok(())
    }

    pub fn back(&mut self) {
        if self.step == UnitStep::Growth {
            debug!("unit wizard: step 2 -> 1");
            self.step = UnitStep::Contacts;
        }
    }

    pub fn validate_current_step(&self) -> bool {
        match self.step {
            UnitStep::Contacts => true,
            UnitStep::Growth => self.submission_issues().is_empty(),
        }
    }

    pub fn submission_issues(&self) -> Vec<ValidationIssue> {
        unit_submission_issues(&self.record)
    }

    /// The record to send, with empty counts collapsed to zero.
    pub fn submission_payload(&self) -> std::result::Result<UnitSurvey, Vec<ValidationIssue>> {
        let issues = self.submission_issues();
        if !issues.is_empty() {
            return Err(issues);
        }
        Ok(self.record.for_submission())
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
