//! Authenticated JSON client for the survey backend.
//!
//! Works on native targets (the CLI, on tokio) and in the browser apps
//! (reqwest's fetch backend). There is no retry and no timeout: every
//! failure is returned to the caller once and turned into UI state there.

use crate::config::ApiConfig;
use crate::endpoints::{self, DashboardScope};
use crate::error::{ApiError, Result, GENERIC_FAILURE};
use crate::session::Session;
use log::{debug, warn};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use survey_model::hierarchy::{id_text, HierarchyEntry};
use survey_model::stats::StatsReport;
use survey_model::{AreaSurvey, UnitSurvey};

/// Whether the final step creates a new record or updates an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update(String),
}

impl SubmitMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, SubmitMode::Update(_))
    }
}

/// What the server said after a create or update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitOutcome {
    pub id: Option<String>,
    pub message: Option<String>,
}

fn message_of(body: &Value) -> Option<String> {
    ["message", "error", "msg"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}

/// Strip the `{success, data, message}` envelope if the body has one.
pub(crate) fn unwrap_envelope(body: Value) -> Result<Value> {
    let Value::Object(mut map) = body else {
        return Ok(body);
    };
    if map.get("success").and_then(Value::as_bool) == Some(false) {
        let message = message_of(&Value::Object(map)).unwrap_or_else(|| GENERIC_FAILURE.to_string());
        return Err(ApiError::Rejected { message });
    }
    match map.remove("data") {
        Some(data) => Ok(data),
        None => Ok(Value::Object(map)),
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Lists arrive bare, or as the first array field of an object.
fn decode_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>> {
    match value {
        Value::Array(_) => decode(value),
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => match map.into_iter().find(|(_, v)| v.is_array()) {
            Some((_, list)) => decode(list),
            None => Ok(Vec::new()),
        },
        other => Err(ApiError::Decode(format!("expected a list, got {}", other))),
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    session: Session,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: Session) -> Self {
        Self {
            http: Client::new(),
            config,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Request builder with the bearer header attached when there is a token.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.url(path);
        debug!("{} {}", method, url);
        let builder = self.http.request(method, url);
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Value> {
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str::<Value>(&text) {
                Ok(body) => body,
                Err(e) if status.is_success() => return Err(ApiError::Decode(e.to_string())),
                Err(_) => Value::Null,
            }
        };
        if !status.is_success() {
            let message = message_of(&body);
            warn!(
                "Request failed with status {}: {}",
                status,
                message.as_deref().unwrap_or("<no message>")
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(body)
    }

    async fn get_value(&self, path: &str) -> Result<Value> {
        let body = self.send(self.request(Method::GET, path)).await?;
        unwrap_envelope(body)
    }

    async fn write<B: Serialize>(&self, method: Method, path: &str, body: &B) -> Result<SubmitOutcome> {
        let raw = self.send(self.request(method, path).json(body)).await?;
        let message = message_of(&raw);
        let data = unwrap_envelope(raw)?;
        let id = ["_id", "id"]
            .iter()
            .find_map(|key| data.get(key).and_then(id_text));
        Ok(SubmitOutcome { id, message })
    }

    // ─── Statistics ───

    pub async fn stats(&self, scope: DashboardScope) -> Result<StatsReport> {
        if self.session.role() != scope.role() {
            debug!(
                "Fetching {} statistics with a {} session",
                scope,
                self.session.role()
            );
        }
        decode(self.get_value(scope.stats_path()).await?)
    }

    // ─── Hierarchy ───

    pub async fn districts(&self) -> Result<Vec<HierarchyEntry>> {
        decode_list(self.get_value(endpoints::DISTRICTS).await?)
    }

    pub async fn areas(&self, district_id: &str) -> Result<Vec<HierarchyEntry>> {
        decode_list(self.get_value(&endpoints::areas(district_id)).await?)
    }

    pub async fn units(&self, area_id: &str) -> Result<Vec<HierarchyEntry>> {
        decode_list(self.get_value(&endpoints::units(area_id)).await?)
    }

    // ─── Area surveys ───

    pub async fn list_area_surveys(&self) -> Result<Vec<AreaSurvey>> {
        decode_list(self.get_value(endpoints::AREA_SURVEYS).await?)
    }

    pub async fn get_area_survey(&self, id: &str) -> Result<AreaSurvey> {
        decode(self.get_value(&endpoints::area_survey(id)).await?)
    }

    /// POST a new area survey. Any `_id` on the record is not sent.
    pub async fn create_area_survey(&self, record: &AreaSurvey) -> Result<SubmitOutcome> {
        let body = AreaSurvey {
            id: None,
            ..record.clone()
        };
        self.write(Method::POST, endpoints::AREA_SURVEYS, &body).await
    }

    pub async fn update_area_survey(&self, id: &str, record: &AreaSurvey) -> Result<SubmitOutcome> {
        self.write(Method::PUT, &endpoints::area_survey(id), record)
            .await
    }

    pub async fn submit_area_survey(&self, mode: &SubmitMode, record: &AreaSurvey) -> Result<SubmitOutcome> {
        match mode {
            SubmitMode::Create => self.create_area_survey(record).await,
            SubmitMode::Update(id) => self.update_area_survey(id, record).await,
        }
    }

    // ─── Unit surveys ───

    pub async fn list_unit_surveys(&self, unit_id: &str) -> Result<Vec<UnitSurvey>> {
        decode_list(self.get_value(&endpoints::unit_surveys_for_unit(unit_id)).await?)
    }

    pub async fn get_unit_survey(&self, id: &str) -> Result<UnitSurvey> {
        decode(self.get_value(&endpoints::unit_survey(id)).await?)
    }

    pub async fn delete_unit_survey(&self, id: &str) -> Result<()> {
        let body = self
            .send(self.request(Method::DELETE, &endpoints::unit_survey(id)))
            .await?;
        unwrap_envelope(body).map(|_| ())
    }

    /// POST a new unit survey; empty counts are sent as zero.
    pub async fn create_unit_survey(&self, record: &UnitSurvey) -> Result<SubmitOutcome> {
        let body = UnitSurvey {
            id: None,
            ..record.for_submission()
        };
        self.write(Method::POST, endpoints::UNIT_SURVEY_CREATE, &body)
            .await
    }

    pub async fn update_unit_survey(&self, id: &str, record: &UnitSurvey) -> Result<SubmitOutcome> {
        self.write(
            Method::PUT,
            &endpoints::unit_survey_update(id),
            &record.for_submission(),
        )
        .await
    }

    pub async fn submit_unit_survey(&self, mode: &SubmitMode, record: &UnitSurvey) -> Result<SubmitOutcome> {
        match mode {
            SubmitMode::Create => self.create_unit_survey(record).await,
            SubmitMode::Update(id) => self.update_unit_survey(id, record).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;
    use httpmock::prelude::*;
    use reqwest::header::AUTHORIZATION;
    use serde_json::json;
    use survey_model::Count;

    fn client_for(server: &MockServer, token: Option<&str>) -> ApiClient {
        ApiClient::new(
            ApiConfig::new(server.base_url()),
            Session::new(Role::User, token.map(str::to_string)),
        )
    }

    #[test]
    fn bearer_header_only_with_a_token() {
        let config = ApiConfig::new("http://localhost:5000");
        let signed_in = ApiClient::new(config.clone(), Session::new(Role::User, Some("tok".into())));
        let request = signed_in.request(Method::GET, endpoints::USER_STATS).build().unwrap();
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer tok");

        let anonymous = ApiClient::new(config, Session::anonymous(Role::User));
        let request = anonymous.request(Method::GET, endpoints::USER_STATS).build().unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
        assert_eq!(request.url().as_str(), "http://localhost:5000/api/user/stats");
    }

    #[test]
    fn envelope_unwrapping() {
        assert_eq!(unwrap_envelope(json!({"success": true, "data": [1]})).unwrap(), json!([1]));
        assert_eq!(unwrap_envelope(json!({"yearly": {}})).unwrap(), json!({"yearly": {}}));
        assert_eq!(unwrap_envelope(json!([2])).unwrap(), json!([2]));
        let err = unwrap_envelope(json!({"success": false, "message": "Not allowed"})).unwrap_err();
        assert_eq!(err.user_message(), "Not allowed");
    }

    #[test]
    fn lists_may_be_wrapped_in_an_object() {
        let entries: Vec<HierarchyEntry> =
            decode_list(json!({"count": 1, "districts": [{"id": "d1", "title": "Kannur"}]})).unwrap();
        assert_eq!(entries.len(), 1);
        let empty: Vec<HierarchyEntry> = decode_list(Value::Null).unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn stats_are_fetched_with_the_session_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/admin/stats")
                    .header("Authorization", "Bearer admin-tok");
                then.status(200).json_body(json!({
                    "success": true,
                    "data": {"overall": {"totalSurveys": 42}, "monthly": {"averages": {"attendance": 12.5}}}
                }));
            })
            .await;

        let client = ApiClient::new(
            ApiConfig::new(server.base_url()),
            Session::new(Role::Admin, Some("admin-tok".into())),
        );
        let report = client.stats(DashboardScope::Main).await.unwrap();

        mock.assert_async().await;
        assert_eq!(report.overall.total_surveys, 42);
        assert_eq!(report.monthly.averages["attendance"], 12.5);
    }

    #[tokio::test]
    async fn create_area_survey_keeps_empty_states_and_drops_id() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/area/surveys")
                    .json_body_partial(
                        json!({"district": "X", "partA": {"pj": 1, "kh": "", "vkh": null}}).to_string(),
                    );
                then.status(201)
                    .json_body(json!({"success": true, "message": "Saved", "data": {"_id": "new-1"}}));
            })
            .await;

        let mut record = AreaSurvey::default();
        record.id = Some("stale".into());
        record.district = "X".into();
        record.part_a.pj = Count::Value(1);
        record.part_a.vkh = Count::Unanswered;

        let outcome = client_for(&server, Some("tok"))
            .submit_area_survey(&SubmitMode::Create, &record)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(outcome.id.as_deref(), Some("new-1"));
        assert_eq!(outcome.message.as_deref(), Some("Saved"));
    }

    #[tokio::test]
    async fn update_unit_survey_uses_admin_prefix_and_zeroes() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/unit-admin/unit-survey/s9")
                    .json_body_partial(json!({"workers": {"rukkun": 0, "karkun": 4}}).to_string());
                then.status(200).json_body(json!({"success": true}));
            })
            .await;

        let mut record = UnitSurvey::default();
        record.workers.karkun = Count::Value(4);
        client_for(&server, Some("tok"))
            .submit_unit_survey(&SubmitMode::Update("s9".into()), &record)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn failure_carries_the_server_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/area/surveys/missing");
                then.status(404).json_body(json!({"success": false, "message": "Survey not found"}));
            })
            .await;

        let err = client_for(&server, None)
            .get_area_survey("missing")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.user_message(), "Survey not found");
    }

    #[tokio::test]
    async fn success_false_is_a_rejection() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/unit/unit-survey/s1");
                then.status(200)
                    .json_body(json!({"success": false, "message": "Only drafts can be deleted"}));
            })
            .await;

        let err = client_for(&server, Some("tok"))
            .delete_unit_survey("s1")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Rejected { .. }));
        assert_eq!(err.user_message(), "Only drafts can be deleted");
    }

    #[tokio::test]
    async fn unit_surveys_are_listed_for_a_unit() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/unit/unit-surveys/unit/u3");
                then.status(200).json_body(json!({
                    "success": true,
                    "data": [
                        {"_id": "s1", "component": "u3", "month": "May", "year": 2024},
                        {"_id": "s2", "component": "u3", "month": "June", "year": 2024}
                    ]
                }));
            })
            .await;

        let surveys = client_for(&server, Some("tok"))
            .list_unit_surveys("u3")
            .await
            .unwrap();
        assert_eq!(surveys.len(), 2);
        assert_eq!(surveys[1].id.as_deref(), Some("s2"));
        assert_eq!(surveys[1].month, "June");
    }
}
