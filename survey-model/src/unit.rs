//! Unit-level survey record.

use crate::catalog::{GrowthWings, PersonCategories};
use crate::count::Count;
use crate::keyed_map::{FlagMap, KeyedMap};
use crate::wire::null_as_default;
use serde::{Deserialize, Deserializer, Serialize};
use survey_utils::dates;

/// One unit's survey. `month` and `year` default to the current period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitSurvey {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub district: String,
    #[serde(deserialize_with = "null_as_default")]
    pub area: String,
    #[serde(deserialize_with = "null_as_default")]
    pub component: String,
    #[serde(deserialize_with = "null_as_default")]
    pub workers: Workers,
    #[serde(deserialize_with = "null_as_default")]
    pub part_a: UnitPartA,
    #[serde(deserialize_with = "null_as_default")]
    pub part_b: UnitPartB,
    #[serde(deserialize_with = "null_as_default")]
    pub part_c: UnitPartC,
    #[serde(deserialize_with = "month_or_current")]
    pub month: String,
    #[serde(deserialize_with = "year_or_current")]
    pub year: i32,
}

fn month_or_current<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .unwrap_or_else(|| dates::current_month_name().to_string()))
}

fn year_or_current<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or_else(dates::current_year))
}

impl Default for UnitSurvey {
    fn default() -> Self {
        Self {
            id: None,
            district: String::new(),
            area: String::new(),
            component: String::new(),
            workers: Workers::default(),
            part_a: UnitPartA::default(),
            part_b: UnitPartB::default(),
            part_c: UnitPartC::default(),
            month: dates::current_month_name().to_string(),
            year: dates::current_year(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Workers {
    pub rukkun: Count,
    pub karkun: Count,
    pub active_associate: Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenderCount {
    pub male: Count,
    pub female: Count,
}

impl GenderCount {
    pub fn total(&self) -> u32 {
        self.male.or_zero().saturating_add(self.female.or_zero())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitPartA {
    pub codes: Count,
    #[serde(deserialize_with = "null_as_default")]
    pub spoken_persons: GenderCount,
    pub authority_persons: FlagMap<PersonCategories>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitPartB {
    #[serde(rename = "newJIHMembers", deserialize_with = "null_as_default")]
    pub new_jih_members: GenderCount,
    pub member_categories: FlagMap<PersonCategories>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitPartC {
    pub growth_acceleration: KeyedMap<GrowthWings, Count>,
}

impl UnitSurvey {
    /// Copy of the record as the unit endpoints expect it: every empty
    /// numeric answer becomes an explicit zero.
    pub fn for_submission(&self) -> UnitSurvey {
        let mut out = self.clone();
        for count in out.counts_mut() {
            *count = count.collapsed();
        }
        out
    }

    fn counts_mut(&mut self) -> impl Iterator<Item = &mut Count> {
        let workers = [
            &mut self.workers.rukkun,
            &mut self.workers.karkun,
            &mut self.workers.active_associate,
        ];
        let part_a = [
            &mut self.part_a.codes,
            &mut self.part_a.spoken_persons.male,
            &mut self.part_a.spoken_persons.female,
        ];
        let part_b = [
            &mut self.part_b.new_jih_members.male,
            &mut self.part_b.new_jih_members.female,
        ];
        workers
            .into_iter()
            .chain(part_a)
            .chain(part_b)
            .chain(self.part_c.growth_acceleration.values_mut())
    }

    pub fn total_workers(&self) -> u32 {
        self.workers
            .rukkun
            .or_zero()
            .saturating_add(self.workers.karkun.or_zero())
            .saturating_add(self.workers.active_associate.or_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_shape_uses_wire_names() {
        let value = serde_json::to_value(UnitSurvey::default()).unwrap();
        assert_eq!(
            value["workers"],
            json!({"rukkun": "", "karkun": "", "activeAssociate": ""})
        );
        assert!(value["partB"].get("newJIHMembers").is_some());
        assert_eq!(value["partA"]["authorityPersons"].as_object().unwrap().len(), 27);
        assert_eq!(value["partC"]["growthAcceleration"].as_object().unwrap().len(), 7);
        assert!(!value["month"].as_str().unwrap().is_empty());
    }

    #[test]
    fn submission_copy_turns_every_empty_count_into_zero() {
        let mut survey = UnitSurvey::default();
        survey.workers.karkun = Count::Value(6);
        survey.part_a.spoken_persons.male = Count::Unanswered;
        survey
            .part_c
            .growth_acceleration
            .set("gio", Count::Value(2))
            .unwrap();

        let sent = survey.for_submission();
        assert_eq!(sent.workers.rukkun, Count::Value(0));
        assert_eq!(sent.workers.karkun, Count::Value(6));
        assert_eq!(sent.part_a.spoken_persons.male, Count::Value(0));
        assert_eq!(sent.part_b.new_jih_members.female, Count::Value(0));
        assert_eq!(sent.part_c.growth_acceleration.get("gio"), Some(&Count::Value(2)));
        assert_eq!(sent.part_c.growth_acceleration.get("jih"), Some(&Count::Value(0)));

        // The editable record keeps its empty states.
        assert_eq!(survey.workers.rukkun, Count::Untouched);
    }

    #[test]
    fn totals() {
        let mut survey = UnitSurvey::default();
        survey.workers.rukkun = Count::Value(2);
        survey.workers.active_associate = Count::Value(5);
        assert_eq!(survey.total_workers(), 7);
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let mut survey = UnitSurvey::default();
        survey.workers.rukkun = Count::Value(u32::MAX);
        survey.workers.karkun = Count::Value(9);
        survey.part_b.new_jih_members.male = Count::Value(u32::MAX);
        survey.part_b.new_jih_members.female = Count::Value(1);
        assert_eq!(survey.total_workers(), u32::MAX);
        assert_eq!(survey.part_b.new_jih_members.total(), u32::MAX);
    }

    #[test]
    fn fetched_nulls_fall_back_to_defaults() {
        let survey: UnitSurvey = serde_json::from_value(json!({
            "_id": "s1",
            "district": null,
            "component": "Chungam",
            "workers": null,
            "partA": {"spokenPersons": null, "authorityPersons": {"doctors": null, "teachers": true}},
            "partB": {"newJIHMembers": {"male": null, "female": 2}},
            "partC": {"growthAcceleration": {"sio": null}},
            "month": null,
            "year": null
        }))
        .unwrap();

        assert_eq!(survey.district, "");
        assert_eq!(survey.component, "Chungam");
        assert_eq!(survey.workers, Workers::default());
        assert_eq!(survey.part_a.spoken_persons, GenderCount::default());
        assert!(!survey.part_a.authority_persons.is_checked("doctors"));
        assert!(survey.part_a.authority_persons.is_checked("teachers"));
        assert_eq!(survey.part_b.new_jih_members.male, Count::Unanswered);
        assert_eq!(survey.part_b.new_jih_members.female, Count::Value(2));
        assert_eq!(survey.part_c.growth_acceleration.get("sio"), Some(&Count::Unanswered));
        assert_eq!(survey.month, dates::current_month_name());
        assert_eq!(survey.year, dates::current_year());
    }
}
