//! HTTP client for the survey backend: statistics, hierarchy lookups and
//! area/unit survey records.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod hierarchy;
pub mod session;

pub use client::{ApiClient, SubmitMode, SubmitOutcome};
pub use config::ApiConfig;
pub use endpoints::DashboardScope;
pub use error::{ApiError, Result};
pub use session::{Role, Session};
