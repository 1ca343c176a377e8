//! Survey Statistics Dashboard
//!
//! One app for the three dashboard levels, chosen with `?scope=unit`,
//! `?scope=district` or `?scope=main` (default: unit). The server returns
//! pre-aggregated statistics; this page only formats and charts them.
//!
//! Data flow:
//! 1. On mount: read the token for the scope's role, fetch the statistics once.
//! 2. Render overall cards, comparison table and monthly averages.
//! 3. Once data is present, draw the monthly, yearly and comparison charts
//!    with Chart.js.

use dioxus::prelude::*;
use log::info;
use survey_api::DashboardScope;
use survey_model::stats::{Comparison, MonthlyStats, StatsReport, YearlyStats};
use survey_ui::charts::{self, Series};
use survey_ui::components::{ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, PageHeader, StatCard};
use survey_ui::js_bridge;
use survey_ui::state::AppState;
use survey_utils::display::{format_average, format_change, format_count, format_percent};

/// DOM ids for the Chart.js containers.
const MONTHLY_CHART_ID: &str = "monthly-chart";
const YEARLY_CHART_ID: &str = "yearly-chart";
const COMPARISON_CHART_ID: &str = "comparison-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("stats-dashboard-root"))
        .launch(App);
}

fn scope_from_query() -> DashboardScope {
    match js_bridge::query_param("scope").map(|s| s.parse::<DashboardScope>()) {
        Some(Ok(scope)) => scope,
        Some(Err(e)) => {
            log::warn!("{}; showing the unit dashboard", e);
            DashboardScope::Unit
        }
        None => DashboardScope::Unit,
    }
}

/// "newMembers" -> "New members".
fn metric_label(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            out.push(' ');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn monthly_chart(monthly: &MonthlyStats) -> String {
    let labels: Vec<String> = monthly
        .surveys
        .iter()
        .map(|s| {
            let place = [&s.unit, &s.area, &s.district]
                .into_iter()
                .find(|p| !p.is_empty());
            match place {
                Some(place) => format!("{} ({})", s.period_label(), place),
                None => s.period_label(),
            }
        })
        .collect();
    let column = |f: fn(&survey_model::stats::MonthlySurveyStat) -> u64| -> Vec<f64> {
        monthly.surveys.iter().map(|s| f(s) as f64).collect()
    };
    charts::bar_chart(
        "Monthly activity",
        &labels,
        &[
            Series::new("Attendance", column(|s| s.attendance)),
            Series::new("New members", column(|s| s.new_members)),
            Series::new("Activities", column(|s| s.activities)),
            Series::new("Meetings held", column(|s| s.meetings_held)),
        ],
    )
}

fn yearly_chart(yearly: &YearlyStats) -> String {
    let labels: Vec<String> = yearly.months.iter().map(|m| m.label.clone()).collect();
    let counts = yearly.months.iter().map(|m| m.count as f64).collect();
    charts::line_chart(
        &format!("Surveys in {}", yearly.year),
        &labels,
        &[Series::new("Surveys", counts)],
    )
}

/// Rows of the comparison table: metric, current, previous, change.
fn comparison_rows(comparison: &Comparison) -> Vec<(&'static str, u64, u64, String)> {
    let (cur, prev) = (&comparison.current, &comparison.previous);
    [
        ("Surveys", cur.surveys, prev.surveys),
        ("Attendance", cur.attendance, prev.attendance),
        ("New members", cur.new_members, prev.new_members),
    ]
    .into_iter()
    .map(|(label, c, p)| (label, c, p, format_change(p as f64, c as f64)))
    .collect()
}

fn comparison_chart(comparison: &Comparison) -> String {
    let rows = comparison_rows(comparison);
    let labels: Vec<String> = rows.iter().map(|r| r.0.to_string()).collect();
    let name = |label: &str, fallback: &str| {
        if label.is_empty() {
            fallback.to_string()
        } else {
            label.to_string()
        }
    };
    charts::bar_chart(
        "",
        &labels,
        &[
            Series::new(
                name(&comparison.previous.label, "Previous"),
                rows.iter().map(|r| r.2 as f64).collect(),
            ),
            Series::new(
                name(&comparison.current.label, "Current"),
                rows.iter().map(|r| r.1 as f64).collect(),
            ),
        ],
    )
}

#[component]
fn App() -> Element {
    let scope = use_hook(scope_from_query);
    let mut state = use_context_provider(|| AppState::new(scope.role()));
    let mut report: Signal<Option<StatsReport>> = use_signal(|| None);

    // ─── Effect 1: fetch statistics once on mount ───
    use_hook(move || {
        js_bridge::init_charts();
        let client = state.client();
        state.loading.set(true);
        spawn(async move {
            match client.stats(scope).await {
                Ok(stats) => {
                    info!(
                        "Loaded {} statistics: {} surveys",
                        scope, stats.overall.total_surveys
                    );
                    report.set(Some(stats));
                }
                Err(e) => state.report_failure("Loading statistics", &e),
            }
            state.loading.set(false);
        });
    });

    // ─── Effect 2: draw charts whenever the report changes ───
    use_effect(move || {
        let Some(stats) = report.read().clone() else {
            return;
        };
        js_bridge::render_chart(MONTHLY_CHART_ID, &monthly_chart(&stats.monthly));
        js_bridge::render_chart(YEARLY_CHART_ID, &yearly_chart(&stats.yearly));
        js_bridge::render_chart(COMPARISON_CHART_ID, &comparison_chart(&stats.comparison));
    });

    use_drop(|| {
        for id in [MONTHLY_CHART_ID, YEARLY_CHART_ID, COMPARISON_CHART_ID] {
            js_bridge::destroy_chart(id);
        }
    });

    let body = if *state.loading.read() {
        rsx! { LoadingSpinner { message: "Loading statistics...".to_string() } }
    } else if let Some(err) = state.error_msg.read().as_ref() {
        rsx! { ErrorDisplay { message: err.clone() } }
    } else if let Some(stats) = report.read().as_ref() {
        rsx! { DashboardBody { scope, stats: stats.clone() } }
    } else {
        rsx! { p { "No statistics available." } }
    };

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1000px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            PageHeader {
                title: scope.title().to_string(),
                subtitle: "Survey statistics".to_string(),
            }
            {body}
        }
    }
}

#[component]
fn DashboardBody(scope: DashboardScope, stats: StatsReport) -> Element {
    let overall = &stats.overall;
    let rows = comparison_rows(&stats.comparison);
    let averages: Vec<(String, String)> = stats
        .monthly
        .averages
        .iter()
        .map(|(k, v)| (metric_label(k), format_average(*v)))
        .collect();
    let submitted_hint = format!(
        "{} of units",
        format_percent(overall.submitted_this_month as f64, overall.total_units as f64)
    );

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 12px; margin-bottom: 16px;",
            if scope == DashboardScope::Main {
                StatCard { label: "Districts".to_string(), value: format_count(overall.total_districts) }
            }
            if scope != DashboardScope::Unit {
                StatCard { label: "Areas".to_string(), value: format_count(overall.total_areas) }
            }
            StatCard { label: "Units".to_string(), value: format_count(overall.total_units) }
            StatCard { label: "Surveys".to_string(), value: format_count(overall.total_surveys) }
            StatCard {
                label: "Submitted this month".to_string(),
                value: format_count(overall.submitted_this_month),
                hint: submitted_hint,
            }
            StatCard { label: "Members".to_string(), value: format_count(overall.total_members) }
        }

        ChartHeader {
            title: "Monthly activity".to_string(),
            description: "Attendance, new members, activities and meetings per submitted survey".to_string(),
        }
        ChartContainer { id: MONTHLY_CHART_ID.to_string(), min_height: 360 }

        ChartHeader {
            title: format!("Surveys in {}", stats.yearly.year),
            description: format!("{} surveys this year", format_count(stats.yearly.total_surveys)),
        }
        ChartContainer { id: YEARLY_CHART_ID.to_string() }

        ChartHeader {
            title: "This period against the last".to_string(),
        }
        table {
            style: "border-collapse: collapse; width: 100%; margin-bottom: 8px;",
            thead {
                tr {
                    th { style: "text-align: left; padding: 6px;", "Metric" }
                    th { style: "text-align: right; padding: 6px;", "Current" }
                    th { style: "text-align: right; padding: 6px;", "Previous" }
                    th { style: "text-align: right; padding: 6px;", "Change" }
                }
            }
            tbody {
                for (label, current, previous, change) in rows {
                    tr {
                        key: "{label}",
                        style: "border-top: 1px solid #e0e0e0;",
                        td { style: "padding: 6px;", "{label}" }
                        td { style: "padding: 6px; text-align: right;", "{format_count(current)}" }
                        td { style: "padding: 6px; text-align: right;", "{format_count(previous)}" }
                        td { style: "padding: 6px; text-align: right;", "{change}" }
                    }
                }
            }
        }
        ChartContainer { id: COMPARISON_CHART_ID.to_string(), min_height: 260 }

        if !averages.is_empty() {
            ChartHeader { title: "Monthly averages".to_string() }
            ul {
                for (label, value) in averages {
                    li { key: "{label}", "{label}: {value}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use survey_model::stats::{MonthlySurveyStat, PeriodSummary};

    #[test]
    fn metric_labels_are_humanized() {
        assert_eq!(metric_label("newMembers"), "New members");
        assert_eq!(metric_label("attendance"), "Attendance");
    }

    #[test]
    fn comparison_rows_carry_change() {
        let comparison = Comparison {
            current: PeriodSummary {
                label: "June".into(),
                surveys: 10,
                attendance: 50,
                new_members: 3,
            },
            previous: PeriodSummary {
                label: "May".into(),
                surveys: 8,
                attendance: 40,
                new_members: 0,
            },
        };
        let rows = comparison_rows(&comparison);
        assert_eq!(rows[0], ("Surveys", 10, 8, "+25.0%".to_string()));
        assert_eq!(rows[2].3, "new");

        let config: Value = serde_json::from_str(&comparison_chart(&comparison)).unwrap();
        assert_eq!(config["data"]["datasets"][0]["label"], "May");
        assert_eq!(config["data"]["datasets"][1]["data"][1], 50.0);
    }

    #[test]
    fn monthly_labels_name_the_place() {
        let monthly = MonthlyStats {
            surveys: vec![MonthlySurveyStat {
                month: "May".into(),
                year: Some(2024),
                area: "Feroke".into(),
                attendance: 12,
                ..MonthlySurveyStat::default()
            }],
            ..MonthlyStats::default()
        };
        let config: Value = serde_json::from_str(&monthly_chart(&monthly)).unwrap();
        assert_eq!(config["data"]["labels"][0], "May 2024 (Feroke)");
        assert_eq!(config["data"]["datasets"][0]["data"][0], 12.0);
    }
}
