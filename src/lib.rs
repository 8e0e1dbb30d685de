//! Socialink - heuristic social-link enrichment for artist spreadsheets
//!
//! This library reads artist-metadata spreadsheets, derives a cleaned handle
//! from each artist name, constructs per-platform profile URLs from fixed
//! templates, and writes an augmented workbook with a full view and a reduced
//! "Social Links" view.
//!
//! # Features
//!
//! - Name-to-handle cleaner (lowercase, prefix strip, ASCII-alphanumeric)
//! - URL templates for Instagram, TikTok, YouTube, Twitter, SoundCloud, Facebook
//! - Two-view .xlsx output (full data + social links only)
//! - Markdown coverage reports
//!
//! # Example
//!
//! ```no_run
//! use socialink::config::Config;
//! use socialink::excel::{SheetImporter, WorkbookExporter};
//! use socialink::pipeline;
//!
//! let table = SheetImporter::new("artists.xlsx").import(None)?;
//! let enriched = pipeline::enrich(&table, &Config::default())?;
//!
//! println!("Coverage: {:.1}%", enriched.coverage.coverage_pct());
//!
//! let exporter = WorkbookExporter::new(vec![enriched.full, enriched.social]);
//! exporter.export("artists_social.xlsx".as_ref())?;
//! # Ok::<(), socialink::error::LinkError>(())
//! ```

pub mod cleaner;
pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod links;
pub mod pipeline;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use error::{LinkError, LinkResult};
pub use types::{CellValue, CoverageReport, LookupStatus, Platform, SheetTable, SocialLinks};
