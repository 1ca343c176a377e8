//! Pre-aggregated dashboard statistics.
//!
//! The server does all aggregation. These types only describe what comes
//! back; every field is optional on the wire and defaults to zero or empty.

use crate::wire::{aggregate, averages, null_as_default};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsReport {
    #[serde(deserialize_with = "null_as_default")]
    pub yearly: YearlyStats,
    #[serde(deserialize_with = "null_as_default")]
    pub monthly: MonthlyStats,
    #[serde(deserialize_with = "null_as_default")]
    pub comparison: Comparison,
    #[serde(deserialize_with = "null_as_default")]
    pub overall: OverallStats,
}

/// Survey counts across the current year.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct YearlyStats {
    #[serde(deserialize_with = "null_as_default")]
    pub year: i32,
    #[serde(deserialize_with = "aggregate")]
    pub total_surveys: u64,
    #[serde(alias = "byMonth", deserialize_with = "null_as_default")]
    pub months: Vec<PeriodCount>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodCount {
    #[serde(alias = "month", deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(deserialize_with = "aggregate")]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyStats {
    #[serde(deserialize_with = "null_as_default")]
    pub surveys: Vec<MonthlySurveyStat>,
    /// Averages keyed by metric name, e.g. `attendance` or `newMembers`.
    #[serde(deserialize_with = "averages")]
    pub averages: BTreeMap<String, f64>,
}

/// One submitted survey summarised for the monthly table and chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlySurveyStat {
    #[serde(deserialize_with = "null_as_default")]
    pub month: String,
    pub year: Option<i32>,
    #[serde(deserialize_with = "null_as_default")]
    pub district: String,
    #[serde(deserialize_with = "null_as_default")]
    pub area: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unit: String,
    #[serde(deserialize_with = "aggregate")]
    pub meetings_held: u64,
    #[serde(deserialize_with = "aggregate")]
    pub attendance: u64,
    #[serde(deserialize_with = "aggregate")]
    pub new_members: u64,
    #[serde(deserialize_with = "aggregate")]
    pub activities: u64,
}

/// Current period against the previous one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Comparison {
    #[serde(deserialize_with = "null_as_default")]
    pub current: PeriodSummary,
    #[serde(deserialize_with = "null_as_default")]
    pub previous: PeriodSummary,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PeriodSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(deserialize_with = "aggregate")]
    pub surveys: u64,
    #[serde(deserialize_with = "aggregate")]
    pub attendance: u64,
    #[serde(deserialize_with = "aggregate")]
    pub new_members: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverallStats {
    #[serde(deserialize_with = "aggregate")]
    pub total_districts: u64,
    #[serde(deserialize_with = "aggregate")]
    pub total_areas: u64,
    #[serde(deserialize_with = "aggregate")]
    pub total_units: u64,
    #[serde(deserialize_with = "aggregate")]
    pub total_surveys: u64,
    #[serde(deserialize_with = "aggregate")]
    pub submitted_this_month: u64,
    #[serde(deserialize_with = "aggregate")]
    pub total_members: u64,
}

impl MonthlySurveyStat {
    /// Label used on chart axes: "June 2024", or just the month.
    pub fn period_label(&self) -> String {
        match self.year {
            Some(year) => format!("{} {}", self.month, year),
            None => self.month.clone(),
        }
    }
}
