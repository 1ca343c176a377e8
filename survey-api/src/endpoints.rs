//! Every backend path the client calls.
//!
//! Unit surveys are read and deleted under `/api/unit/` but created and
//! updated under `/api/unit-admin/`. Both prefixes are kept as the backend
//! defines them; callers only ever go through these functions.

use crate::session::Role;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const USER_STATS: &str = "/api/user/stats";
pub const ADMIN_STATS: &str = "/api/admin/stats";

pub const DISTRICTS: &str = "/api/user/hierarchy/districts";

pub fn areas(district_id: &str) -> String {
    format!("/api/user/hierarchy/areas/{}", district_id)
}

pub fn units(area_id: &str) -> String {
    format!("/api/user/hierarchy/units/{}", area_id)
}

pub const AREA_SURVEYS: &str = "/api/area/surveys";

pub fn area_survey(id: &str) -> String {
    format!("{}/{}", AREA_SURVEYS, id)
}

pub fn unit_surveys_for_unit(unit_id: &str) -> String {
    format!("/api/unit/unit-surveys/unit/{}", unit_id)
}

pub fn unit_survey(id: &str) -> String {
    format!("/api/unit/unit-survey/{}", id)
}

pub const UNIT_SURVEY_CREATE: &str = "/api/unit-admin/unit-survey";

pub fn unit_survey_update(id: &str) -> String {
    format!("{}/{}", UNIT_SURVEY_CREATE, id)
}

/// Hierarchy level a dashboard reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardScope {
    Unit,
    District,
    Main,
}

impl DashboardScope {
    /// Unit and district dashboards read the signed-in user's own
    /// statistics; the main dashboard reads the admin aggregate.
    pub fn stats_path(self) -> &'static str {
        match self {
            DashboardScope::Unit | DashboardScope::District => USER_STATS,
            DashboardScope::Main => ADMIN_STATS,
        }
    }

    pub fn role(self) -> Role {
        match self {
            DashboardScope::Unit | DashboardScope::District => Role::User,
            DashboardScope::Main => Role::Admin,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DashboardScope::Unit => "Unit Dashboard",
            DashboardScope::District => "District Dashboard",
            DashboardScope::Main => "Main Dashboard",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DashboardScope::Unit => "unit",
            DashboardScope::District => "district",
            DashboardScope::Main => "main",
        }
    }
}

impl fmt::Display for DashboardScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DashboardScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unit" => Ok(DashboardScope::Unit),
            "district" => Ok(DashboardScope::District),
            "main" | "admin" => Ok(DashboardScope::Main),
            other => Err(format!(
                "unknown dashboard scope '{}' (expected unit, district or main)",
                other
            )),
        }
    }
}
