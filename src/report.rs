//! Markdown coverage report.
//!
//! The enrichment has no failure reporting beyond these post-hoc statistics:
//! unresolvable names silently produce empty fields, and this report is where
//! the resulting coverage loss becomes visible.

use crate::error::LinkResult;
use crate::types::{CoverageReport, Platform};
use chrono::Local;
use std::fs;
use std::path::Path;

/// Render a coverage report as markdown
pub fn render_markdown(
    coverage: &CoverageReport,
    source: &Path,
    platforms: &[Platform],
) -> String {
    let mut out = String::new();

    out.push_str("# Social Links Coverage Report\n\n");
    out.push_str(&format!("- Source: `{}`\n", source.display()));
    out.push_str(&format!(
        "- Generated: {}\n\n",
        Local::now().format("%Y-%m-%d %H:%M")
    ));

    out.push_str("## Coverage\n\n");
    out.push_str("| Metric | Count |\n");
    out.push_str("|--------|-------|\n");
    out.push_str(&format!("| Total rows | {} |\n", coverage.total_rows));
    out.push_str(&format!(
        "| Handles constructed | {} |\n",
        coverage.constructed
    ));
    out.push_str(&format!(
        "| Missing names | {} |\n",
        coverage.missing_names
    ));
    out.push_str(&format!(
        "| Empty handles | {} |\n\n",
        coverage.empty_handles
    ));
    out.push_str(&format!(
        "**Coverage: {:.1}%** of rows received non-empty social links.\n\n",
        coverage.coverage_pct()
    ));

    out.push_str("## Columns\n\n");
    for platform in platforms {
        match platform.handle_column() {
            Some(handle_col) => out.push_str(&format!(
                "- {}: `{}`, `{}`\n",
                platform,
                platform.url_column(),
                handle_col
            )),
            None => out.push_str(&format!("- {}: `{}`\n", platform, platform.url_column())),
        }
    }
    out.push_str(&format!("- status: `{}`\n", crate::pipeline::STATUS_COLUMN));

    out
}

/// Render and write the report to a file
pub fn write_markdown(
    path: &Path,
    coverage: &CoverageReport,
    source: &Path,
    platforms: &[Platform],
) -> LinkResult<()> {
    let markdown = render_markdown(coverage, source, platforms);
    fs::write(path, markdown)?;
    Ok(())
}
