//! Typed wrappers around browser interop.
//!
//! Charts are drawn by the Chart.js global, loaded from its CDN on first use.
//! Dialogs, timers, navigation and query parameters go through `web_sys`.

use js_sys::{Function, Promise};
use log::warn;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Delay between a successful submission notice and the redirect.
pub const REDIRECT_DELAY_MS: i32 = 2000;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Survey JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Inject the Chart.js script tag once. Call at app startup.
pub fn init_charts() {
    call_js(&format!(
        r#"
        if (typeof Chart === 'undefined' && !window.__surveyChartLoading) {{
            window.__surveyChartLoading = true;
            var script = document.createElement('script');
            script.src = '{CHART_JS_URL}';
            document.head.appendChild(script);
        }}
        window.__surveyCharts = window.__surveyCharts || {{}};
        "#
    ));
}

/// Render a chart into the container with the given DOM id.
///
/// `config_json` is a complete Chart.js configuration object. Polls until
/// Chart.js has loaded and the container exists, then replaces whatever
/// chart was previously drawn there.
pub fn render_chart(container_id: &str, config_json: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                var el = document.getElementById('{container_id}');
                if (typeof Chart !== 'undefined' && el) {{
                    clearInterval(poll);
                    try {{
                        window.__surveyCharts = window.__surveyCharts || {{}};
                        var previous = window.__surveyCharts['{container_id}'];
                        if (previous) {{ previous.destroy(); }}
                        el.innerHTML = '';
                        var canvas = document.createElement('canvas');
                        el.appendChild(canvas);
                        window.__surveyCharts['{container_id}'] = new Chart(canvas, {config_json});
                    }} catch(e) {{ console.error('[Survey] chart render error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy the chart in the given container, if any.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        r#"
        if (window.__surveyCharts && window.__surveyCharts['{container_id}']) {{
            window.__surveyCharts['{container_id}'].destroy();
            delete window.__surveyCharts['{container_id}'];
        }}
        var el = document.getElementById('{container_id}'); if (el) el.innerHTML = '';
        "#
    ));
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                warn!("alert failed: {}", message);
            }
        }
        None => warn!("no window for alert: {}", message),
    }
}

/// Blocking yes/no dialog; `false` when no dialog could be shown.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Resolve after `ms` milliseconds using `setTimeout`.
pub async fn sleep_ms(ms: i32) {
    let promise = Promise::new(&mut |resolve: Function, _reject: Function| {
        let scheduled = web_sys::window().map(|window| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .is_ok()
        });
        if scheduled != Some(true) {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// Navigate the current tab.
pub fn navigate_to(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        warn!("navigation to {} failed: {:?}", url, e);
    }
}

/// Non-empty value of a query string parameter of the current page.
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name).filter(|value| !value.trim().is_empty())
}
