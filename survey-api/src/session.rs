//! Explicit session object handed to the API client.
//!
//! A session is created when a token becomes available (sign-in, or a
//! token read from browser storage) and dropped at sign-out. Nothing in
//! this crate reads global state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use survey_model::hierarchy::UserProfile;

/// Which kind of account the token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Browser storage key the token for this role is kept under.
    pub fn token_key(self) -> &'static str {
        match self {
            Role::User => "userToken",
            Role::Admin => "adminToken",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role '{}' (expected user or admin)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    role: Role,
    token: Option<String>,
    profile: Option<UserProfile>,
}

impl Session {
    /// A blank token counts as no token.
    pub fn new(role: Role, token: Option<String>) -> Self {
        Self {
            role,
            token: token.filter(|t| !t.trim().is_empty()),
            profile: None,
        }
    }

    pub fn anonymous(role: Role) -> Self {
        Self::new(role, None)
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_keys_per_role() {
        assert_eq!(Role::User.token_key(), "userToken");
        assert_eq!(Role::Admin.token_key(), "adminToken");
    }

    #[test]
    fn blank_token_is_no_token() {
        let session = Session::new(Role::User, Some("  ".into()));
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert!("root".parse::<Role>().is_err());
    }
}
