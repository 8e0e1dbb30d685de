use clap::{Parser, Subcommand};
use socialink::cli;
use socialink::error::LinkResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "socialink")]
#[command(about = "Append heuristic social-media links to artist spreadsheets.")]
#[command(long_about = "Socialink - Social-link enrichment for artist spreadsheets

Cleans artist names into handles and appends constructed profile URLs for
Instagram, TikTok, YouTube, Twitter, SoundCloud and Facebook.

COMMANDS:
  enrich    - Read an .xlsx, append social columns, write a two-sheet workbook
  handle    - Show the cleaned handle and URLs for one or more names
  coverage  - Recompute coverage statistics from an enriched workbook

EXAMPLES:
  socialink enrich artists.xlsx artists_social.xlsx
  socialink enrich artists.xlsx out.xlsx --report coverage.md
  socialink handle \"DJ Isaac\" \"Charlotte de Witte\"
  socialink coverage artists_social.xlsx")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Enrich an artist spreadsheet with social-media links.

Reads one worksheet (default: Sheet1, else the first sheet), locates the
artist-name column, and appends per-platform URL/handle columns plus a
social_lookup_status flag. The output workbook has two sheets:

  Full Data     - every input column plus the derived columns
  Social Links  - artist, country (when present) and the derived columns only

Row count is always preserved. Names that are blank, placeholders (\"nan\"),
or clean down to nothing produce empty link fields and lower the coverage
percentage; they never fail the run.

CONFIG (optional YAML via --config):
  strip_prefixes: [dj, lil, young, big, the, mc]
  platforms: [instagram, tiktok, youtube, twitter, soundcloud, facebook]
  artist_column: Artist
  country_column: Artist country

Use --dry-run to see coverage without writing files.")]
    /// Enrich a spreadsheet with constructed social links
    Enrich {
        /// Path to input Excel file (.xlsx)
        input: PathBuf,

        /// Output Excel file path (.xlsx)
        output: PathBuf,

        /// Worksheet to read (default: Sheet1, else the first sheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Path to YAML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Also write a markdown coverage report to this path
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Preview coverage without writing files
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Show verbose processing steps
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Show the cleaned handle and constructed URLs for names.

Runs the same cleaner the enrich command uses:
  lowercase → strip prefix words (dj, lil, young, big, the, mc)
  → keep ASCII alphanumerics only

EXAMPLES:
  socialink handle \"DJ Isaac\"
  → handle: isaac
  → instagram: https://www.instagram.com/isaac

  socialink handle \"東京事変\"
  → handle: (empty), status: empty_handle")]
    /// Show the cleaned handle and URLs for one or more names
    Handle {
        /// Artist name(s) to clean
        #[arg(required = true)]
        names: Vec<String>,

        /// Path to YAML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    #[command(long_about = "Recompute coverage statistics from an enriched workbook.

Reads the 'Social Links' sheet written by the enrich command and counts rows
per lookup status (constructed / missing_name / empty_handle).

EXAMPLES:
  socialink coverage artists_social.xlsx
  socialink coverage artists_social.xlsx --output coverage.md")]
    /// Recompute coverage stats from an enriched workbook
    Coverage {
        /// Path to an enriched Excel file (.xlsx)
        input: PathBuf,

        /// Write a markdown coverage report to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> LinkResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Enrich {
            input,
            output,
            sheet,
            config,
            report,
            dry_run,
            verbose,
        } => cli::enrich(input, output, sheet, config, report, dry_run, verbose),

        Commands::Handle { names, config } => cli::handle(names, config),

        Commands::Coverage { input, output } => cli::coverage(input, output),
    }
}
