//! Single-pass enrichment of an artist table.
//!
//! Each row is transformed independently: clean the name, construct the
//! platform URLs, append the derived cells. No state is shared across rows,
//! and the row count of the input is preserved in both output views.

use crate::cleaner;
use crate::config::Config;
use crate::error::{LinkError, LinkResult};
use crate::types::{CellValue, CoverageReport, Platform, SheetTable};

/// Worksheet holding every input column plus the derived ones
pub const FULL_SHEET: &str = "Full Data";
/// Worksheet holding the reduced social-links view
pub const SOCIAL_SHEET: &str = "Social Links";
/// Derived column flagging how each row resolved
pub const STATUS_COLUMN: &str = "social_lookup_status";

/// Output of one enrichment run
#[derive(Debug)]
pub struct Enriched {
    pub full: SheetTable,
    pub social: SheetTable,
    pub coverage: CoverageReport,
    /// Header the artist names were read from
    pub artist_column: String,
    /// Header the country values were read from, when one was found
    pub country_column: Option<String>,
}

/// Enrich a table with constructed social links and build both views
pub fn enrich(table: &SheetTable, config: &Config) -> LinkResult<Enriched> {
    if table.column_count() == 0 {
        return Err(LinkError::Import(format!(
            "sheet '{}' has no columns",
            table.name
        )));
    }

    let platforms = config.enabled_platforms()?;
    let artist_idx = artist_column(table, config)?;
    let country_idx = country_column(table, config)?;

    let derived_headers = derived_headers(&platforms);

    let mut full = SheetTable::new(FULL_SHEET.to_string());
    full.headers = table.headers.clone();
    full.headers.extend(derived_headers.iter().cloned());

    let mut social = SheetTable::new(SOCIAL_SHEET.to_string());
    social.headers.push(table.headers[artist_idx].clone());
    if let Some(idx) = country_idx {
        social.headers.push(table.headers[idx].clone());
    }
    social.headers.extend(derived_headers);

    let mut coverage = CoverageReport::new();

    for (row_idx, row) in table.rows.iter().enumerate() {
        let raw_name = table.cell_text(row_idx, artist_idx);
        let links = cleaner::derive_links(&raw_name, config);
        coverage.record(links.status);

        let mut derived: Vec<CellValue> = Vec::with_capacity(2 * platforms.len() + 1);
        for platform in &platforms {
            derived.push(CellValue::Text(links.url(*platform)));
            if platform.handle_column().is_some() {
                derived.push(CellValue::Text(links.handle_for(*platform)));
            }
        }
        derived.push(CellValue::Text(links.status.to_string()));

        let mut full_row = row.clone();
        full_row.resize(table.column_count(), CellValue::Empty);
        full_row.extend(derived.iter().cloned());
        full.rows.push(full_row);

        let mut social_row = vec![CellValue::Text(raw_name)];
        if let Some(idx) = country_idx {
            social_row.push(CellValue::Text(table.cell_text(row_idx, idx)));
        }
        social_row.extend(derived);
        social.rows.push(social_row);
    }

    Ok(Enriched {
        artist_column: table.headers[artist_idx].clone(),
        country_column: country_idx.map(|idx| table.headers[idx].clone()),
        full,
        social,
        coverage,
    })
}

/// Recompute coverage from an already-enriched table's status column
pub fn coverage_of(table: &SheetTable) -> LinkResult<CoverageReport> {
    let status_idx = table
        .find_column_exact(STATUS_COLUMN)
        .ok_or_else(|| LinkError::MissingColumn(STATUS_COLUMN.to_string()))?;

    let mut coverage = CoverageReport::new();
    for row_idx in 0..table.row_count() {
        let text = table.cell_text(row_idx, status_idx);
        let status = crate::types::LookupStatus::from_str(&text).ok_or_else(|| {
            LinkError::Import(format!(
                "row {}: unrecognized lookup status '{}'",
                row_idx + 1,
                text
            ))
        })?;
        coverage.record(status);
    }
    Ok(coverage)
}

fn derived_headers(platforms: &[Platform]) -> Vec<String> {
    let mut headers = Vec::with_capacity(2 * platforms.len() + 1);
    for platform in platforms {
        headers.push(platform.url_column().to_string());
        if let Some(handle_col) = platform.handle_column() {
            headers.push(handle_col.to_string());
        }
    }
    headers.push(STATUS_COLUMN.to_string());
    headers
}

/// Resolve the artist-name column: config override, else first header
/// containing "artist" or "name", else column 0
fn artist_column(table: &SheetTable, config: &Config) -> LinkResult<usize> {
    if let Some(ref name) = config.artist_column {
        return table
            .find_column_exact(name)
            .ok_or_else(|| LinkError::MissingColumn(name.clone()));
    }
    Ok(table.find_column(&["artist", "name"]).unwrap_or(0))
}

/// Resolve the country column: config override, else first header
/// containing "country", else absent
fn country_column(table: &SheetTable, config: &Config) -> LinkResult<Option<usize>> {
    if let Some(ref name) = config.country_column {
        return table
            .find_column_exact(name)
            .map(Some)
            .ok_or_else(|| LinkError::MissingColumn(name.clone()));
    }
    Ok(table.find_column(&["country"]))
}
