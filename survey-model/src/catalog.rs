//! Shared option catalog.
//!
//! Every fixed enumeration used by the survey forms lives here exactly once,
//! keyed by a [`ListId`]. Step pages, detail views and the CLI all read
//! their checkbox labels and table rows from these tables.

use serde::Serialize;

/// A single selectable option: wire key plus display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Choice {
    pub key: &'static str,
    pub label: &'static str,
}

const fn choice(key: &'static str, label: &'static str) -> Choice {
    Choice { key, label }
}

/// Wings tracked in the monthly attendance table (area part B).
pub static ATTENDANCE_WINGS: &[Choice] = &[
    choice("jih", "JIH"),
    choice("vanitha", "Vanitha"),
    choice("solidarity", "Solidarity"),
    choice("sio", "SIO"),
    choice("gio", "GIO"),
];

/// Expansion activities (area part C).
pub static EXPANSION_ACTIVITIES: &[Choice] = &[
    choice("houseVisits", "House visits"),
    choice("studyCircles", "Study circles"),
    choice("publicMeetings", "Public meetings"),
    choice("quranClasses", "Quran classes"),
    choice("familyMeets", "Family meets"),
    choice("youthMeets", "Youth meets"),
    choice("literatureDistribution", "Literature distribution"),
    choice("socialService", "Social service"),
    choice("reliefWork", "Relief work"),
    choice("interfaithDialogue", "Interfaith dialogue"),
    choice("newsletter", "Newsletter"),
    choice("socialMedia", "Social media outreach"),
    choice("campaigns", "Campaigns"),
    choice("libraryActivities", "Library activities"),
    choice("medicalCamps", "Medical camps"),
];

/// Person categories (area part E, unit authority persons, unit member categories).
pub static PERSON_CATEGORIES: &[Choice] = &[
    choice("teachers", "Teachers"),
    choice("doctors", "Doctors"),
    choice("engineers", "Engineers"),
    choice("lawyers", "Lawyers"),
    choice("businessmen", "Businessmen"),
    choice("farmers", "Farmers"),
    choice("labourers", "Labourers"),
    choice("students", "Students"),
    choice("youth", "Youth"),
    choice("women", "Women"),
    choice("religiousScholars", "Religious scholars"),
    choice("politicians", "Politicians"),
    choice("journalists", "Journalists"),
    choice("writers", "Writers"),
    choice("artists", "Artists"),
    choice("governmentEmployees", "Government employees"),
    choice("retiredPersons", "Retired persons"),
    choice("expatriates", "Expatriates"),
    choice("dalits", "Dalits"),
    choice("adivasis", "Adivasis"),
    choice("fishermen", "Fishermen"),
    choice("autoDrivers", "Auto drivers"),
    choice("traders", "Traders"),
    choice("panchayatMembers", "Panchayat members"),
    choice("socialWorkers", "Social workers"),
    choice("imams", "Imams"),
    choice("madrasaTeachers", "Madrasa teachers"),
];

/// Wings tracked for growth (area part F, unit part C).
pub static GROWTH_WINGS: &[Choice] = &[
    choice("jih", "JIH"),
    choice("vanitha", "Vanitha"),
    choice("solidarity", "Solidarity"),
    choice("sio", "SIO"),
    choice("gio", "GIO"),
    choice("malarvadi", "Malarvadi"),
    choice("teenIndia", "Teen India"),
];

/// Identifier of one option list in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ListId {
    AttendanceWings,
    ExpansionActivities,
    PersonCategories,
    GrowthWings,
}

impl ListId {
    pub fn choices(self) -> &'static [Choice] {
        match self {
            ListId::AttendanceWings => ATTENDANCE_WINGS,
            ListId::ExpansionActivities => EXPANSION_ACTIVITIES,
            ListId::PersonCategories => PERSON_CATEGORIES,
            ListId::GrowthWings => GROWTH_WINGS,
        }
    }

    /// Position of `key` within the list, if it belongs to it.
    pub fn position(self, key: &str) -> Option<usize> {
        self.choices().iter().position(|c| c.key == key)
    }

    pub fn label_for(self, key: &str) -> Option<&'static str> {
        self.choices().iter().find(|c| c.key == key).map(|c| c.label)
    }

    pub fn name(self) -> &'static str {
        match self {
            ListId::AttendanceWings => "attendance wings",
            ListId::ExpansionActivities => "expansion activities",
            ListId::PersonCategories => "person categories",
            ListId::GrowthWings => "growth wings",
        }
    }
}

/// Compile-time handle on a catalog list, used to type fixed-key maps.
pub trait OptionList {
    const ID: ListId;

    fn choices() -> &'static [Choice] {
        Self::ID.choices()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttendanceWings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpansionActivities;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PersonCategories;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GrowthWings;

impl OptionList for AttendanceWings {
    const ID: ListId = ListId::AttendanceWings;
}

impl OptionList for ExpansionActivities {
    const ID: ListId = ListId::ExpansionActivities;
}

impl OptionList for PersonCategories {
    const ID: ListId = ListId::PersonCategories;
}

impl OptionList for GrowthWings {
    const ID: ListId = ListId::GrowthWings;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn list_sizes_are_fixed() {
        assert_eq!(ATTENDANCE_WINGS.len(), 5);
        assert_eq!(EXPANSION_ACTIVITIES.len(), 15);
        assert_eq!(PERSON_CATEGORIES.len(), 27);
        assert_eq!(GROWTH_WINGS.len(), 7);
    }

    #[test]
    fn keys_are_unique_within_each_list() {
        for id in [
            ListId::AttendanceWings,
            ListId::ExpansionActivities,
            ListId::PersonCategories,
            ListId::GrowthWings,
        ] {
            let keys: HashSet<&str> = id.choices().iter().map(|c| c.key).collect();
            assert_eq!(keys.len(), id.choices().len(), "duplicate key in {}", id.name());
        }
    }

    #[test]
    fn growth_wings_extend_attendance_wings() {
        for wing in ATTENDANCE_WINGS {
            assert!(ListId::GrowthWings.position(wing.key).is_some());
        }
    }

    #[test]
    fn label_lookup() {
        assert_eq!(ListId::AttendanceWings.label_for("sio"), Some("SIO"));
        assert_eq!(ListId::AttendanceWings.label_for("malarvadi"), None);
    }
}
