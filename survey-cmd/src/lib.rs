//! Command implementations for the survey CLI.
//!
//! Provides subcommands for reading dashboard statistics, validating and
//! submitting area and unit surveys, and browsing the hierarchy, all
//! against the same REST API the web apps use.

use clap::{Args, Subcommand};
use survey_api::config::DEFAULT_BASE_URL;
use survey_api::{ApiClient, ApiConfig, DashboardScope, Role, Session};

pub mod area;
pub mod export;
pub mod hierarchy;
pub mod stats;
pub mod unit;

/// Where the API lives and who is calling it.
#[derive(Args, Debug, Clone)]
pub struct Connection {
    /// Base URL of the survey API
    #[arg(long, env = "SURVEY_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Bearer token; requests are sent unauthenticated without one
    #[arg(long, env = "SURVEY_API_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Account type the token belongs to (user or admin)
    #[arg(long, default_value = "user", global = true)]
    pub role: Role,
}

impl Connection {
    pub fn client(&self) -> ApiClient {
        self.client_as(self.role)
    }

    /// Client whose session claims `role`, with the same token.
    pub fn client_as(&self, role: Role) -> ApiClient {
        ApiClient::new(
            ApiConfig::new(&self.base_url),
            Session::new(role, self.token.clone()),
        )
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Show dashboard statistics for one scope
    Stats {
        /// Dashboard level: unit, district or main
        #[arg(short, long, default_value = "unit")]
        scope: DashboardScope,

        /// Also write the monthly survey rows to this CSV file
        #[arg(long)]
        csv: Option<String>,
    },

    /// Print a blank area survey as JSON, ready to fill in
    AreaTemplate,

    /// Check every step of an area survey JSON file
    AreaValidate {
        #[arg(short, long)]
        file: String,
    },

    /// List area surveys
    AreaList,

    /// Print one area survey as JSON
    AreaGet {
        #[arg(long)]
        id: String,
    },

    /// Validate and submit an area survey (update when --id is given)
    AreaSubmit {
        #[arg(short, long)]
        file: String,

        #[arg(long)]
        id: Option<String>,
    },

    /// List the surveys of one unit
    UnitList {
        #[arg(long)]
        unit_id: String,

        /// Write the surveys to this CSV file instead of printing them
        #[arg(long)]
        csv: Option<String>,
    },

    /// Print one unit survey as JSON
    UnitGet {
        #[arg(long)]
        id: String,
    },

    /// Delete a unit survey
    UnitDelete {
        #[arg(long)]
        id: String,
    },

    /// Validate and submit a unit survey (update when --id is given)
    UnitSubmit {
        #[arg(short, long)]
        file: String,

        #[arg(long)]
        id: Option<String>,
    },

    /// List districts, or the areas of a district, or the units of an area
    Hierarchy {
        #[arg(long)]
        district_id: Option<String>,

        #[arg(long)]
        area_id: Option<String>,
    },
}

pub async fn run(connection: Connection, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Stats { scope, csv } => {
            let client = connection.client_as(scope.role());
            stats::run_stats(&client, scope, csv.as_deref()).await
        }
        Command::AreaTemplate => area::print_template(),
        Command::AreaValidate { file } => area::validate_file(&file).map(|_| ()),
        Command::AreaList => area::list(&connection.client()).await,
        Command::AreaGet { id } => area::get(&connection.client(), &id).await,
        Command::AreaSubmit { file, id } => {
            area::submit(&connection.client(), &file, id).await
        }
        Command::UnitList { unit_id, csv } => {
            unit::list(&connection.client(), &unit_id, csv.as_deref()).await
        }
        Command::UnitGet { id } => unit::get(&connection.client(), &id).await,
        Command::UnitDelete { id } => unit::delete(&connection.client(), &id).await,
        Command::UnitSubmit { file, id } => {
            unit::submit(&connection.client(), &file, id).await
        }
        Command::Hierarchy {
            district_id,
            area_id,
        } => {
            hierarchy::run_hierarchy(
                &connection.client(),
                district_id.as_deref(),
                area_id.as_deref(),
            )
            .await
        }
    }
}

/// Read and decode a JSON file.
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    use anyhow::Context;

    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not a valid survey file", path))
}

/// Pretty-print any serializable value to stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
