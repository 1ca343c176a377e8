//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the shared reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::js_bridge;
use crate::session;
use dioxus::prelude::*;
use log::error;
use survey_api::{ApiClient, ApiConfig, ApiError, Role, Session};

/// Shared application state for all survey apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Credentials read from storage at startup
    pub session: Signal<Session>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Success message shown after a save
    pub notice: Signal<Option<String>>,
    /// A create/update/delete call is in flight
    pub submitting: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with the stored session for `role`.
    pub fn new(role: Role) -> Self {
        Self {
            session: Signal::new(session::load_session(role)),
            loading: Signal::new(false),
            error_msg: Signal::new(None),
            notice: Signal::new(None),
            submitting: Signal::new(false),
        }
    }

    /// API client bound to the current session.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(ApiConfig::compiled(), self.session.read().clone())
    }

    /// Record a failed call as the visible error message.
    pub fn report_failure(&mut self, action: &str, err: &ApiError) {
        error!("{} failed: {}", action, err);
        self.error_msg.set(Some(err.user_message()));
    }

    /// Show the success notice, wait, then leave the page.
    pub async fn finish_and_redirect(mut self, message: String, url: &str) {
        self.error_msg.set(None);
        self.notice.set(Some(message));
        js_bridge::sleep_ms(js_bridge::REDIRECT_DELAY_MS).await;
        js_bridge::navigate_to(url);
    }

    /// Drop stored credentials and go back to the sign-in page.
    pub fn sign_out(&mut self, login_url: &str) {
        session::clear_session();
        let role = self.session.read().role();
        self.session.set(Session::anonymous(role));
        js_bridge::navigate_to(login_url);
    }
}
