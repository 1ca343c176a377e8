//! Dashboard statistics on the terminal.

use anyhow::Context;
use log::info;
use std::fs::File;
use survey_api::{ApiClient, DashboardScope};
use survey_model::stats::StatsReport;
use survey_utils::display::{format_average, format_change, format_count, format_percent};

use crate::export::write_monthly_csv;

pub async fn run_stats(
    client: &ApiClient,
    scope: DashboardScope,
    csv_path: Option<&str>,
) -> anyhow::Result<()> {
    info!("Fetching {} statistics from {}", scope, client.config().base_url());
    let report = client
        .stats(scope)
        .await
        .with_context(|| format!("loading {} statistics", scope))?;

    print!("{}", summary_text(scope, &report));

    if let Some(path) = csv_path {
        let file = File::create(path).with_context(|| format!("creating {}", path))?;
        write_monthly_csv(file, &report.monthly)?;
        info!("Wrote {} monthly rows to {}", report.monthly.surveys.len(), path);
    }
    Ok(())
}

/// Plain-text rendering of the same figures the dashboard shows.
pub fn summary_text(scope: DashboardScope, report: &StatsReport) -> String {
    let overall = &report.overall;
    let mut out = format!("{}\n\n", scope.title());

    if scope == DashboardScope::Main {
        out += &format!("  Districts             {}\n", format_count(overall.total_districts));
    }
    if scope != DashboardScope::Unit {
        out += &format!("  Areas                 {}\n", format_count(overall.total_areas));
    }
    out += &format!("  Units                 {}\n", format_count(overall.total_units));
    out += &format!("  Surveys               {}\n", format_count(overall.total_surveys));
    out += &format!(
        "  Submitted this month  {} ({} of units)\n",
        format_count(overall.submitted_this_month),
        format_percent(overall.submitted_this_month as f64, overall.total_units as f64)
    );
    out += &format!("  Members               {}\n", format_count(overall.total_members));

    let (cur, prev) = (&report.comparison.current, &report.comparison.previous);
    out += &format!("\nCompared with {}\n", if prev.label.is_empty() { "the previous period" } else { prev.label.as_str() });
    for (label, c, p) in [
        ("Surveys", cur.surveys, prev.surveys),
        ("Attendance", cur.attendance, prev.attendance),
        ("New members", cur.new_members, prev.new_members),
    ] {
        out += &format!(
            "  {:<12} {:>8} {:>8} {:>8}\n",
            label,
            format_count(c),
            format_count(p),
            format_change(p as f64, c as f64)
        );
    }

    if !report.monthly.averages.is_empty() {
        out += "\nMonthly averages\n";
        for (metric, value) in &report.monthly.averages {
            out += &format!("  {:<12} {}\n", metric, format_average(*value));
        }
    }
    out
}
