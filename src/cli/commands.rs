use crate::cleaner;
use crate::config::Config;
use crate::error::LinkResult;
use crate::excel::{SheetImporter, WorkbookExporter};
use crate::pipeline;
use crate::report;
use crate::types::{CoverageReport, Platform};
use colored::Colorize;
use std::path::PathBuf;

/// Execute the enrich command
#[allow(clippy::too_many_arguments)]
pub fn enrich(
    input: PathBuf,
    output: PathBuf,
    sheet: Option<String>,
    config_path: Option<PathBuf>,
    report_path: Option<PathBuf>,
    dry_run: bool,
    verbose: bool,
) -> LinkResult<()> {
    println!("{}", "🔗 Socialink - Enriching artist sheet".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    if dry_run {
        println!(
            "{}",
            "📋 DRY RUN MODE - No files will be written\n".yellow()
        );
    }

    let config = Config::load(config_path.as_deref())?;
    let platforms = config.enabled_platforms()?;

    if verbose {
        println!("{}", "📖 Reading Excel file...".cyan());
    }

    let importer = SheetImporter::new(&input);
    let table = importer.import(sheet.as_deref())?;

    if verbose {
        println!(
            "   Sheet '{}': {} columns, {} rows",
            table.name,
            table.column_count(),
            table.row_count()
        );
        println!(
            "   Platforms: {}\n",
            platforms
                .iter()
                .map(|p| p.key())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    if verbose {
        println!("{}", "🧹 Cleaning names and constructing links...".cyan());
    }

    let enriched = pipeline::enrich(&table, &config)?;

    if verbose {
        println!("   Artist column:  {}", enriched.artist_column.bright_blue());
        match enriched.country_column {
            Some(ref country) => println!("   Country column: {}", country.bright_blue()),
            None => println!("   Country column: {}", "(none detected)".dimmed()),
        }
        println!();
    }

    print_coverage(&enriched.coverage);

    if dry_run {
        println!("{}", "📋 Dry run complete - no files written".yellow());
        return Ok(());
    }

    if verbose {
        println!("{}", "💾 Writing workbook...".cyan());
    }

    let exporter = WorkbookExporter::new(vec![enriched.full, enriched.social]);
    exporter.export(&output)?;

    println!("{}", "✅ Enrichment Complete!".bold().green());
    println!(
        "   {} + {} sheets written to {}",
        pipeline::FULL_SHEET.bright_blue(),
        pipeline::SOCIAL_SHEET.bright_blue(),
        output.display()
    );

    if let Some(report_path) = report_path {
        report::write_markdown(&report_path, &enriched.coverage, &input, &platforms)?;
        println!("   Coverage report: {}", report_path.display());
    }
    println!();

    Ok(())
}

/// Execute the handle command: clean names from the command line
pub fn handle(names: Vec<String>, config_path: Option<PathBuf>) -> LinkResult<()> {
    let config = Config::load(config_path.as_deref())?;
    let platforms = config.enabled_platforms()?;

    for name in &names {
        let links = cleaner::derive_links(name, &config);

        println!("{} {}", "🎤".bold(), name.bold());
        println!(
            "   handle: {}   status: {}",
            if links.handle.is_empty() {
                "(empty)".dimmed().to_string()
            } else {
                links.handle.bright_blue().bold().to_string()
            },
            links.status
        );

        for platform in &platforms {
            let url = links.url(*platform);
            if !url.is_empty() {
                println!("   {:<11} {}", format!("{}:", platform), url.cyan());
            }
        }
        println!();
    }

    Ok(())
}

/// Execute the coverage command: recompute stats from an enriched workbook
pub fn coverage(input: PathBuf, output: Option<PathBuf>) -> LinkResult<()> {
    println!("{}", "🔗 Socialink - Coverage".bold().green());
    println!("   File: {}\n", input.display());

    let importer = SheetImporter::new(&input);
    let table = importer.import(Some(pipeline::SOCIAL_SHEET))?;
    let coverage = pipeline::coverage_of(&table)?;

    print_coverage(&coverage);

    if let Some(output) = output {
        report::write_markdown(&output, &coverage, &input, &Platform::ALL)?;
        println!("   Coverage report: {}\n", output.display());
    }

    Ok(())
}

fn print_coverage(coverage: &CoverageReport) {
    println!("{}", "📊 Coverage:".bold().green());
    println!("   Total rows:          {}", coverage.total_rows);
    println!(
        "   Handles constructed: {}",
        coverage.constructed.to_string().green()
    );
    if coverage.missing_names > 0 {
        println!(
            "   Missing names:       {}",
            coverage.missing_names.to_string().yellow()
        );
    }
    if coverage.empty_handles > 0 {
        println!(
            "   Empty handles:       {}",
            coverage.empty_handles.to_string().yellow()
        );
    }
    println!(
        "   Coverage:            {}\n",
        format!("{:.1}%", coverage.coverage_pct()).bold()
    );
}
