//! Per-step validation rules.
//!
//! All functions here are pure and cheap enough to run on every render.

use serde::Serialize;
use std::fmt;
use survey_model::{AreaPart, AreaSurvey, Count, UnitSurvey};

/// Why a step cannot be completed yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Dotted wire path of the offending field.
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

fn require_text(issues: &mut Vec<ValidationIssue>, field: &str, label: &str, value: &str) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::new(field, format!("{} is required", label)));
    }
}

fn require_count(issues: &mut Vec<ValidationIssue>, field: &str, label: &str, value: Count) {
    if !value.is_answered() {
        issues.push(ValidationIssue::new(field, format!("{} is required", label)));
    }
}

/// Everything blocking `part` of an area survey.
pub fn area_step_issues(record: &AreaSurvey, part: AreaPart) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    match part {
        AreaPart::A => {
            require_text(&mut issues, "district", "District", &record.district);
            require_text(&mut issues, "area", "Area", &record.area);
            require_text(&mut issues, "month", "Month", &record.month);
            let a = &record.part_a;
            require_count(&mut issues, "partA.pj", "PJ count", a.pj);
            require_count(&mut issues, "partA.kh", "KH count", a.kh);
            require_count(&mut issues, "partA.vkh", "VKH count", a.vkh);
        }
        AreaPart::B => {
            let b = &record.part_b;
            if !b.monthly_meeting.is_set() {
                issues.push(ValidationIssue::new(
                    "partB.monthlyMeeting",
                    "Select whether the monthly meeting was held",
                ));
            }
            for (wing, attendance) in b.wing_attendance.iter() {
                if !attendance.any_answered() {
                    issues.push(ValidationIssue::new(
                        format!("partB.wingAttendance.{}", wing.key),
                        format!("Enter attendance for {}", wing.label),
                    ));
                }
            }
        }
        AreaPart::C => {
            if !record.part_c.expansion_activities.any_checked() {
                issues.push(ValidationIssue::new(
                    "partC.expansionActivities",
                    "Select at least one expansion activity",
                ));
            }
        }
        AreaPart::D => {
            if record.part_d.activities.is_empty() {
                issues.push(ValidationIssue::new(
                    "partD.activities",
                    "Add at least one activity",
                ));
            }
        }
        AreaPart::E => {
            require_count(&mut issues, "partE.male", "Male count", record.part_e.male);
            require_count(&mut issues, "partE.female", "Female count", record.part_e.female);
        }
        AreaPart::F => {
            for (wing, growth) in record.part_f.wing_growth.iter() {
                if !growth.any_answered() {
                    issues.push(ValidationIssue::new(
                        format!("partF.wingGrowth.{}", wing.key),
                        format!("Enter growth for {}", wing.label),
                    ));
                }
            }
        }
    }
    issues
}

pub fn area_step_is_valid(record: &AreaSurvey, part: AreaPart) -> bool {
    area_step_issues(record, part).is_empty()
}

/// Issues across all six parts, tagged with the part they belong to.
pub fn area_record_issues(record: &AreaSurvey) -> Vec<(AreaPart, ValidationIssue)> {
    AreaPart::ALL
        .into_iter()
        .flat_map(|part| {
            area_step_issues(record, part)
                .into_iter()
                .map(move |issue| (part, issue))
        })
        .collect()
}

/// What must be filled in before a unit survey can be sent.
pub fn unit_submission_issues(record: &UnitSurvey) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    require_text(&mut issues, "district", "District", &record.district);
    require_text(&mut issues, "area", "Area", &record.area);
    require_text(&mut issues, "component", "Unit", &record.component);
    require_text(&mut issues, "month", "Month", &record.month);
    issues
}

/// Join issues into the text of a blocking alert.
pub fn alert_text(issues: &[ValidationIssue]) -> String {
    let mut text = String::from("Please complete the following before continuing:");
    for issue in issues {
        text.push_str("\n- ");
        text.push_str(&issue.message);
    }
    text
}
