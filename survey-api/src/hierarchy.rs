//! Fills in district, area and unit names for a signed-in user.

use crate::client::ApiClient;
use log::{info, warn};
use survey_model::hierarchy::{find_name, HierarchyNames, UserProfile};

/// Resolve display names for the profile's district, area and unit.
///
/// Lookups run one after another. A failed or unmatched lookup is logged
/// and leaves that level at its fallback (cached name, else the raw id);
/// it never stops the form from rendering.
pub async fn resolve_names(client: &ApiClient, profile: &UserProfile) -> HierarchyNames {
    let mut names = HierarchyNames::from_profile(profile);

    if let Some(district_id) = profile.district_id.as_deref() {
        match client.districts().await {
            Ok(entries) => {
                if let Some(name) = find_name(&entries, district_id) {
                    names.district = name.to_string();
                }
            }
            Err(e) => warn!("Could not load districts: {}", e),
        }

        if let Some(area_id) = profile.area_id.as_deref() {
            match client.areas(district_id).await {
                Ok(entries) => {
                    if let Some(name) = find_name(&entries, area_id) {
                        names.area = name.to_string();
                    }
                }
                Err(e) => warn!("Could not load areas for district {}: {}", district_id, e),
            }
        }
    }

    if let (Some(area_id), Some(unit_id)) = (profile.area_id.as_deref(), profile.unit_id.as_deref()) {
        match client.units(area_id).await {
            Ok(entries) => {
                if let Some(name) = find_name(&entries, unit_id) {
                    names.unit = name.to_string();
                }
            }
            Err(e) => warn!("Could not load units for area {}: {}", area_id, e),
        }
    }

    info!(
        "Hierarchy resolved: district='{}' area='{}' unit='{}'",
        names.district, names.area, names.unit
    );
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::session::{Role, Session};
    use httpmock::prelude::*;
    use serde_json::json;

    fn profile() -> UserProfile {
        UserProfile {
            district_id: Some("d1".into()),
            area_id: Some("a1".into()),
            unit_id: Some("u1".into()),
            unit_name: Some("Cached Unit".into()),
            ..UserProfile::default()
        }
    }

    #[tokio::test]
    async fn names_come_from_lookups() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/user/hierarchy/districts");
                then.status(200)
                    .json_body(json!({"success": true, "data": [{"_id": "d1", "name": "Kozhikode"}]}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/user/hierarchy/areas/d1");
                then.status(200).json_body(json!([{"id": "a1", "title": "Feroke"}]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/user/hierarchy/units/a1");
                then.status(200).json_body(json!({"units": [{"code": "u1", "title": "Chungam"}]}));
            })
            .await;

        let client = ApiClient::new(
            ApiConfig::new(server.base_url()),
            Session::new(Role::User, Some("tok".into())),
        );
        let names = resolve_names(&client, &profile()).await;
        assert_eq!(names.district, "Kozhikode");
        assert_eq!(names.area, "Feroke");
        assert_eq!(names.unit, "Chungam");
    }

    #[tokio::test]
    async fn failed_lookups_keep_fallbacks() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/user/hierarchy/districts");
                then.status(500);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/user/hierarchy/areas/d1");
                then.status(200).json_body(json!([{"id": "a1", "title": "Feroke"}]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/user/hierarchy/units/a1");
                then.status(200).json_body(json!([{"id": "other", "title": "Elsewhere"}]));
            })
            .await;

        let client = ApiClient::new(
            ApiConfig::new(server.base_url()),
            Session::new(Role::User, Some("tok".into())),
        );
        let names = resolve_names(&client, &profile()).await;
        assert_eq!(names.district, "d1");
        assert_eq!(names.area, "Feroke");
        assert_eq!(names.unit, "Cached Unit");
    }
}
