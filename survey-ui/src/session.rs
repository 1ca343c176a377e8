//! Browser storage adapter for the API session.
//!
//! The sign-in page (outside these apps) stores the token under
//! `userToken` or `adminToken` and the profile JSON under `userProfile`.

use log::{info, warn};
use survey_api::{Role, Session};
use survey_model::hierarchy::UserProfile;
use web_sys::Storage;

pub const PROFILE_KEY: &str = "userProfile";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Decode the cached profile, ignoring (and logging) malformed JSON.
pub fn parse_profile(raw: &str) -> Option<UserProfile> {
    if raw.trim().is_empty() || raw.trim() == "null" {
        return None;
    }
    match serde_json::from_str(raw) {
        Ok(profile) => Some(profile),
        Err(e) => {
            warn!("Ignoring unreadable cached profile: {}", e);
            None
        }
    }
}

/// Session for `role` from whatever is in local storage.
pub fn load_session(role: Role) -> Session {
    let Some(storage) = local_storage() else {
        warn!("Local storage unavailable, continuing without a token");
        return Session::anonymous(role);
    };
    let token = storage.get_item(role.token_key()).ok().flatten();
    let session = Session::new(role, token);
    if !session.is_authenticated() {
        warn!("No {} found in storage", role.token_key());
    }
    match storage
        .get_item(PROFILE_KEY)
        .ok()
        .flatten()
        .as_deref()
        .and_then(parse_profile)
    {
        Some(profile) => session.with_profile(profile),
        None => session,
    }
}

/// Forget every stored credential.
pub fn clear_session() {
    let Some(storage) = local_storage() else {
        return;
    };
    for key in [Role::User.token_key(), Role::Admin.token_key(), PROFILE_KEY] {
        let _ = storage.remove_item(key);
    }
    info!("Session cleared");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_from_storage_json() {
        let profile = parse_profile(r#"{"name":"Rasheed","districtId":"d1","unitId":12}"#).unwrap();
        assert_eq!(profile.name.as_deref(), Some("Rasheed"));
        assert_eq!(profile.unit_id.as_deref(), Some("12"));
    }

    #[test]
    fn missing_or_broken_profile_is_none() {
        assert_eq!(parse_profile(""), None);
        assert_eq!(parse_profile("null"), None);
        assert_eq!(parse_profile("{not json"), None);
    }
}
