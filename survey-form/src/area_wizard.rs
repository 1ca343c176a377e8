//! Six-step wizard for the area survey.

use crate::error::{FormError, Result};
use crate::merge::{merged, nest};
use crate::validation::{area_step_issues, area_step_is_valid, ValidationIssue};
use log::debug;
use serde_json::Value;
use survey_model::{AreaPart, AreaSurvey};

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 6;

/// A top-level field of the area survey that can be patched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaSection {
    District,
    Area,
    Month,
    Part(AreaPart),
}

impl AreaSection {
    pub fn key(self) -> &'static str {
        match self {
            AreaSection::District => "district",
            AreaSection::Area => "area",
            AreaSection::Month => "month",
            AreaSection::Part(part) => part.key(),
        }
    }

    pub fn from_key(key: &str) -> Option<AreaSection> {
        match key {
            "district" => Some(AreaSection::District),
            "area" => Some(AreaSection::Area),
            "month" => Some(AreaSection::Month),
            other => AreaPart::from_key(other).map(AreaSection::Part),
        }
    }
}

/// In-progress area survey plus the step pointer.
///
/// The wizard does not refuse `next_step` on an invalid step; step pages
/// check `validate_current_step` first (or call `advance`).
#[derive(Debug, Clone, PartialEq)]
pub struct AreaWizard {
    record: AreaSurvey,
    step: u8,
}

impl Default for AreaWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl AreaWizard {
    pub fn new() -> Self {
        Self {
            record: AreaSurvey::default(),
            step: FIRST_STEP,
        }
    }

    /// Start from an existing record, e.g. one fetched for editing.
    pub fn with_record(record: AreaSurvey) -> Self {
        Self {
            record,
            step: FIRST_STEP,
        }
    }

    pub fn record(&self) -> &AreaSurvey {
        &self.record
    }

    pub fn into_record(self) -> AreaSurvey {
        self.record
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn current_part(&self) -> AreaPart {
        AreaPart::from_step(self.step).unwrap_or(AreaPart::A)
    }

    pub fn is_first_step(&self) -> bool {
        self.step == FIRST_STEP
    }

    pub fn is_last_step(&self) -> bool {
        self.step == LAST_STEP
    }

    /// Replace a top-level text field, or deep-merge `patch` into a part.
    ///
    /// On error the record is left unchanged.
    pub fn update_form_data(&mut self, section: AreaSection, patch: Value) -> Result<()> {
        let text = |patch: Value| match patch {
            Value::String(s) => Ok(s),
            _ => Err(FormError::TextExpected {
                section: section.key(),
            }),
        };
        let record = &mut self.record;
        match section {
            AreaSection::District => record.district = text(patch)?,
            AreaSection::Area => record.area = text(patch)?,
            AreaSection::Month => record.month = text(patch)?,
            AreaSection::Part(AreaPart::A) => record.part_a = merged(&record.part_a, patch)?,
            AreaSection::Part(AreaPart::B) => record.part_b = merged(&record.part_b, patch)?,
            AreaSection::Part(AreaPart::C) => record.part_c = merged(&record.part_c, patch)?,
            AreaSection::Part(AreaPart::D) => record.part_d = merged(&record.part_d, patch)?,
            AreaSection::Part(AreaPart::E) => record.part_e = merged(&record.part_e, patch)?,
            AreaSection::Part(AreaPart::F) => record.part_f = merged(&record.part_f, patch)?,
        }
        Ok(())
    }

    /// Set one value by dotted wire path, e.g. `partB.wingAttendance.jih.present`.
    pub fn update_path(&mut self, path: &str, value: Value) -> Result<()> {
        let (head, rest) = path.split_once('.').unwrap_or((path, ""));
        let section =
            AreaSection::from_key(head).ok_or_else(|| FormError::UnknownSection(head.to_string()))?;
        self.update_form_data(section, nest(rest, value))
    }

    /// Typed in-place edit of the record.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut AreaSurvey) -> R) -> R {
        f(&mut self.record)
    }

    pub fn next_step(&mut self) {
        if self.step < LAST_STEP {
            debug!("area wizard: step {} -> {}", self.step, self.step + 1);
            self.step += 1;
        }
    }

    pub fn prev_step(&mut self) {
        if self.step > FIRST_STEP {
            debug!("area wizard: step {} -> {}", self.step, self.step - 1);
            self.step -= 1;
        }
    }

    pub fn validate_current_step(&self) -> bool {
        area_step_is_valid(&self.record, self.current_part())
    }

    pub fn current_step_issues(&self) -> Vec<ValidationIssue> {
        area_step_issues(&self.record, self.current_part())
    }

    /// Move forward only if the current step validates.
    pub fn advance(&mut self) -> std::result::Result<(), Vec<ValidationIssue>> {
        let issues = self.current_step_issues();
        if !issues.is_empty() {
            return Err(issues);
        }
        self.next_step();
        Ok(())
    }

    pub fn reset_form(&mut self) {
        *self = Self::new();
    }

    /// Replace the record (edit mode) and go back to the first step.
    pub fn load(&mut self, record: AreaSurvey) {
        *self = Self::with_record(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use survey_model::{Count, MeetingStatus};

    #[test]
    fn step_pointer_is_clamped() {
        let mut wizard = AreaWizard::new();
        wizard.prev_step();
        assert_eq!(wizard.step(), 1);
        for _ in 0..10 {
            wizard.next_step();
        }
        assert_eq!(wizard.step(), 6);
        assert!(wizard.is_last_step());
        wizard.prev_step();
        assert_eq!(wizard.step(), 5);
    }

    #[test]
    fn scalar_sections_replace_and_reject_non_text() {
        let mut wizard = AreaWizard::new();
        wizard.update_form_data(AreaSection::District, json!("X")).unwrap();
        assert_eq!(wizard.record().district, "X");

        let err = wizard.update_form_data(AreaSection::Month, json!(6));
        assert!(matches!(err, Err(FormError::TextExpected { section: "month" })));
        assert_eq!(wizard.record().month, "");
    }

    #[test]
    fn patching_one_wing_keeps_the_others() {
        let mut wizard = AreaWizard::new();
        wizard
            .update_form_data(
                AreaSection::Part(AreaPart::B),
                json!({"wingAttendance": {"sio": {"present": 3}}}),
            )
            .unwrap();
        wizard
            .update_form_data(
                AreaSection::Part(AreaPart::B),
                json!({"wingAttendance": {"jih": {"present": 5}}}),
            )
            .unwrap();

        let attendance = &wizard.record().part_b.wing_attendance;
        assert_eq!(attendance.get("jih").unwrap().present, Count::Value(5));
        assert_eq!(attendance.get("sio").unwrap().present, Count::Value(3));
        assert_eq!(attendance.get("gio").unwrap().present, Count::Unanswered);
    }

    #[test]
    fn bad_patch_leaves_record_unchanged() {
        let mut wizard = AreaWizard::new();
        wizard.update_path("partB.monthlyMeeting", json!("Yes")).unwrap();
        let before = wizard.record().clone();
        assert!(wizard
            .update_form_data(AreaSection::Part(AreaPart::B), json!({"monthlyMeeting": 5}))
            .is_err());
        assert_eq!(wizard.record(), &before);
    }

    #[test]
    fn update_path_routes_to_the_right_part() {
        let mut wizard = AreaWizard::new();
        wizard.update_path("partE.categories.doctors", json!(true)).unwrap();
        wizard.update_path("partA.pj", json!("12a3b")).unwrap();
        wizard.update_path("area", json!("Feroke")).unwrap();
        assert!(wizard.record().part_e.categories.is_checked("doctors"));
        assert_eq!(wizard.record().part_a.pj, Count::Value(123));
        assert_eq!(wizard.record().area, "Feroke");
        assert!(matches!(
            wizard.update_path("partZ.x", json!(1)),
            Err(FormError::UnknownSection(_))
        ));
    }

    #[test]
    fn reset_restores_defaults_and_step_one() {
        let mut wizard = AreaWizard::new();
        wizard.edit(|r| {
            r.district = "X".into();
            r.part_d.activities.push("Camp");
            r.part_c.expansion_activities.set("newsletter", true).unwrap();
        });
        wizard.next_step();
        wizard.next_step();

        wizard.reset_form();
        assert_eq!(wizard.step(), 1);
        assert_eq!(wizard.record(), &AreaSurvey::default());
    }

    #[test]
    fn advance_refuses_an_invalid_step() {
        let mut wizard = AreaWizard::new();
        let issues = wizard.advance().unwrap_err();
        assert!(!issues.is_empty());
        assert_eq!(wizard.step(), 1);
    }

    #[test]
    fn end_to_end_first_two_steps() {
        let mut wizard = AreaWizard::new();
        wizard.update_form_data(AreaSection::District, json!("X")).unwrap();
        wizard.update_form_data(AreaSection::Area, json!("Y")).unwrap();
        wizard.update_form_data(AreaSection::Month, json!("June")).unwrap();
        wizard
            .update_form_data(
                AreaSection::Part(AreaPart::A),
                json!({"pj": 1, "kh": 2, "vkh": 3}),
            )
            .unwrap();
        assert!(wizard.validate_current_step());

        wizard.next_step();
        assert_eq!(wizard.step(), 2);
        assert!(!wizard.validate_current_step());

        wizard
            .update_form_data(
                AreaSection::Part(AreaPart::B),
                json!({"monthlyMeeting": "Yes", "wingAttendance": {"jih": {"present": 5}}}),
            )
            .unwrap();
        assert_eq!(wizard.record().part_b.monthly_meeting, MeetingStatus::Yes);
        assert!(!wizard.validate_current_step());

        for wing in ["vanitha", "solidarity", "sio"] {
            wizard
                .update_path(&format!("partB.wingAttendance.{}.absent", wing), json!(0))
                .unwrap();
            assert!(!wizard.validate_current_step());
        }
        wizard.update_path("partB.wingAttendance.gio.leave", json!(2)).unwrap();
        assert!(wizard.validate_current_step());
    }

    #[test]
    fn load_switches_to_edit_record() {
        let mut existing = AreaSurvey::default();
        existing.id = Some("abc".into());
        existing.month = "May".into();
        let mut wizard = AreaWizard::new();
        wizard.next_step();
        wizard.load(existing.clone());
        assert_eq!(wizard.step(), 1);
        assert_eq!(wizard.record(), &existing);
    }
}
