//! Browse districts, areas and units.

use anyhow::Context;
use log::info;
use survey_api::ApiClient;
use survey_model::hierarchy::HierarchyEntry;

/// With `area_id`, list its units; with `district_id`, its areas;
/// otherwise all districts.
pub async fn run_hierarchy(
    client: &ApiClient,
    district_id: Option<&str>,
    area_id: Option<&str>,
) -> anyhow::Result<()> {
    let (level, entries) = match (area_id, district_id) {
        (Some(area), _) => (
            "units",
            client
                .units(area)
                .await
                .with_context(|| format!("listing units of area {}", area))?,
        ),
        (None, Some(district)) => (
            "areas",
            client
                .areas(district)
                .await
                .with_context(|| format!("listing areas of district {}", district))?,
        ),
        (None, None) => (
            "districts",
            client.districts().await.context("listing districts")?,
        ),
    };
    info!("{} {}", entries.len(), level);
    print!("{}", entry_lines(&entries));
    Ok(())
}

fn entry_lines(entries: &[HierarchyEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{:<26} {}\n", e.id, e.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use survey_api::{ApiConfig, Role, Session};

    #[test]
    fn entries_print_one_per_line() {
        let entries = vec![
            HierarchyEntry {
                id: "d1".into(),
                name: "Kozhikode".into(),
            },
            HierarchyEntry {
                id: "d2".into(),
                name: "Malappuram".into(),
            },
        ];
        let text = entry_lines(&entries);
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().next().unwrap().ends_with("Kozhikode"));
    }

    #[tokio::test]
    async fn area_id_takes_precedence() {
        let server = MockServer::start_async().await;
        let units = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/user/hierarchy/units/a1");
                then.status(200)
                    .json_body(json!({ "success": true, "data": [{ "_id": "u1", "name": "Chungam" }] }));
            })
            .await;

        let client = ApiClient::new(
            ApiConfig::new(server.base_url()),
            Session::new(Role::User, Some("tok".into())),
        );
        run_hierarchy(&client, Some("d1"), Some("a1")).await.unwrap();
        units.assert_async().await;
    }
}
