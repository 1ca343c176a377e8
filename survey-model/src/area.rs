//! Area-level monthly survey record (parts A to F).

use crate::catalog::{AttendanceWings, ExpansionActivities, GrowthWings, PersonCategories};
use crate::count::Count;
use crate::keyed_map::{FlagMap, KeyedMap};
use crate::text_list::TextList;
use crate::wire::null_as_default;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One area's monthly report.
///
/// Every nested part is always present; the default value is the blank
/// form a new wizard starts from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AreaSurvey {
    /// Server-assigned identifier, present only on fetched records.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub district: String,
    #[serde(deserialize_with = "null_as_default")]
    pub area: String,
    #[serde(deserialize_with = "null_as_default")]
    pub month: String,
    #[serde(deserialize_with = "null_as_default")]
    pub part_a: PartA,
    #[serde(deserialize_with = "null_as_default")]
    pub part_b: PartB,
    #[serde(deserialize_with = "null_as_default")]
    pub part_c: PartC,
    #[serde(deserialize_with = "null_as_default")]
    pub part_d: PartD,
    #[serde(deserialize_with = "null_as_default")]
    pub part_e: PartE,
    #[serde(deserialize_with = "null_as_default")]
    pub part_f: PartF,
}

/// Membership headcounts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartA {
    pub pj: Count,
    pub kh: Count,
    pub vkh: Count,
}

/// Monthly meeting, per-wing attendance and decisions taken.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartB {
    pub monthly_meeting: MeetingStatus,
    pub wing_attendance: KeyedMap<AttendanceWings, Attendance>,
    pub main_decisions: TextList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attendance {
    pub present: Count,
    pub leave: Count,
    pub absent: Count,
}

impl Default for Attendance {
    fn default() -> Self {
        Self {
            present: Count::Unanswered,
            leave: Count::Unanswered,
            absent: Count::Unanswered,
        }
    }
}

impl Attendance {
    pub fn any_answered(&self) -> bool {
        self.present.is_answered() || self.leave.is_answered() || self.absent.is_answered()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartC {
    pub expansion_activities: FlagMap<ExpansionActivities>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartD {
    pub activities: TextList,
}

/// New contacts by gender and the categories they belong to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartE {
    pub male: Count,
    pub female: Count,
    pub categories: FlagMap<PersonCategories>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartF {
    pub wing_growth: KeyedMap<GrowthWings, WingGrowth>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WingGrowth {
    pub new_components: Count,
    pub new_members: Count,
}

impl Default for WingGrowth {
    fn default() -> Self {
        Self {
            new_components: Count::Unanswered,
            new_members: Count::Unanswered,
        }
    }
}

impl WingGrowth {
    pub fn any_answered(&self) -> bool {
        self.new_components.is_answered() || self.new_members.is_answered()
    }
}

/// Whether the monthly meeting took place. `Unset` until the user picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeetingStatus {
    #[default]
    Unset,
    Yes,
    No,
}

impl MeetingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MeetingStatus::Unset => "",
            MeetingStatus::Yes => "Yes",
            MeetingStatus::No => "No",
        }
    }

    pub fn from_input(value: &str) -> MeetingStatus {
        match value.trim() {
            "Yes" | "yes" => MeetingStatus::Yes,
            "No" | "no" => MeetingStatus::No,
            _ => MeetingStatus::Unset,
        }
    }

    pub fn is_set(self) -> bool {
        self != MeetingStatus::Unset
    }
}

impl fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MeetingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MeetingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|s| MeetingStatus::from_input(&s)).unwrap_or_default())
    }
}

/// The six parts of an area survey, one per wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaPart {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl AreaPart {
    pub const ALL: [AreaPart; 6] = [
        AreaPart::A,
        AreaPart::B,
        AreaPart::C,
        AreaPart::D,
        AreaPart::E,
        AreaPart::F,
    ];

    /// 1-based wizard step that edits this part.
    pub fn step(self) -> u8 {
        match self {
            AreaPart::A => 1,
            AreaPart::B => 2,
            AreaPart::C => 3,
            AreaPart::D => 4,
            AreaPart::E => 5,
            AreaPart::F => 6,
        }
    }

    pub fn from_step(step: u8) -> Option<AreaPart> {
        AreaPart::ALL.get(usize::from(step).checked_sub(1)?).copied()
    }

    /// Field name of the part on the wire.
    pub fn key(self) -> &'static str {
        match self {
            AreaPart::A => "partA",
            AreaPart::B => "partB",
            AreaPart::C => "partC",
            AreaPart::D => "partD",
            AreaPart::E => "partE",
            AreaPart::F => "partF",
        }
    }

    pub fn from_key(key: &str) -> Option<AreaPart> {
        AreaPart::ALL.into_iter().find(|p| p.key() == key)
    }

    pub fn title(self) -> &'static str {
        match self {
            AreaPart::A => "Part A: Membership",
            AreaPart::B => "Part B: Meetings and Attendance",
            AreaPart::C => "Part C: Expansion Activities",
            AreaPart::D => "Part D: Activities",
            AreaPart::E => "Part E: New Contacts",
            AreaPart::F => "Part F: Wing Growth",
        }
    }
}
