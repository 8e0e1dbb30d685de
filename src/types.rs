use std::fmt;

//==============================================================================
// Spreadsheet Model
//==============================================================================

/// A single spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Empty,
}

impl CellValue {
    /// Render the cell as display text (numbers lose trailing zeros, empty → "")
    pub fn to_display(&self) -> String {
        match self {
            CellValue::Number(n) => {
                // Round to 6 decimal places, then trim trailing zeros so
                // "42.0" renders as "42" (pandas-style)
                let rounded = (n * 1e6).round() / 1e6;
                format!("{:.6}", rounded)
                    .trim_end_matches('0')
                    .trim_end_matches('.')
                    .to_string()
            }
            CellValue::Text(s) => s.clone(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// A row-major table read from one worksheet
#[derive(Debug, Clone)]
pub struct SheetTable {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    pub fn new(name: String) -> Self {
        Self {
            name,
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Find the first column whose header contains any needle (case-insensitive)
    pub fn find_column(&self, needles: &[&str]) -> Option<usize> {
        self.headers.iter().position(|h| {
            let lower = h.to_lowercase();
            needles.iter().any(|n| lower.contains(n))
        })
    }

    /// Find a column by exact header name (case-insensitive)
    pub fn find_column_exact(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
    }

    /// Get a cell as display text, empty string when the row is ragged
    pub fn cell_text(&self, row: usize, col: usize) -> String {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(CellValue::to_display)
            .unwrap_or_default()
    }

    /// Validate all rows have the same width as the header row
    pub fn validate_widths(&self) -> Result<(), String> {
        let width = self.column_count();
        for (idx, row) in self.rows.iter().enumerate() {
            if row.len() != width {
                return Err(format!(
                    "Row {} has {} cells, expected {}",
                    idx + 1,
                    row.len(),
                    width
                ));
            }
        }
        Ok(())
    }
}

//==============================================================================
// Platforms
//==============================================================================

/// Social platforms the pipeline constructs links for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Instagram,
    TikTok,
    YouTube,
    Twitter,
    SoundCloud,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Instagram,
        Platform::TikTok,
        Platform::YouTube,
        Platform::Twitter,
        Platform::SoundCloud,
        Platform::Facebook,
    ];

    /// Lowercase key used in config files
    pub fn key(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::TikTok => "tiktok",
            Platform::YouTube => "youtube",
            Platform::Twitter => "twitter",
            Platform::SoundCloud => "soundcloud",
            Platform::Facebook => "facebook",
        }
    }

    pub fn from_key(key: &str) -> Option<Platform> {
        Platform::ALL
            .into_iter()
            .find(|p| p.key() == key.to_lowercase())
    }

    /// Output column holding the constructed profile URL
    pub fn url_column(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram_url",
            Platform::TikTok => "tiktok_url",
            Platform::YouTube => "youtube_url",
            Platform::Twitter => "twitter_url",
            Platform::SoundCloud => "soundcloud_url",
            Platform::Facebook => "facebook_url",
        }
    }

    /// Output column holding the handle; Facebook gets a URL column only
    pub fn handle_column(&self) -> Option<&'static str> {
        match self {
            Platform::Instagram => Some("instagram_handle"),
            Platform::TikTok => Some("tiktok_handle"),
            Platform::YouTube => Some("youtube_handle"),
            Platform::Twitter => Some("twitter_handle"),
            Platform::SoundCloud => Some("soundcloud_handle"),
            Platform::Facebook => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

//==============================================================================
// Derived Fields
//==============================================================================

/// Per-row outcome of the name-to-handle derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    /// A non-empty handle was constructed
    Constructed,
    /// The name cell was blank or a placeholder ("nan")
    MissingName,
    /// The name cleaned down to nothing (e.g. non-Latin script)
    EmptyHandle,
}

impl LookupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupStatus::Constructed => "constructed",
            LookupStatus::MissingName => "missing_name",
            LookupStatus::EmptyHandle => "empty_handle",
        }
    }

    pub fn from_str(s: &str) -> Option<LookupStatus> {
        match s {
            "constructed" => Some(LookupStatus::Constructed),
            "missing_name" => Some(LookupStatus::MissingName),
            "empty_handle" => Some(LookupStatus::EmptyHandle),
            _ => None,
        }
    }
}

impl fmt::Display for LookupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived social fields for one artist row.
///
/// All URL and handle strings are a pure function of `handle`; an empty
/// handle yields empty strings everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLinks {
    pub handle: String,
    pub status: LookupStatus,
}

impl SocialLinks {
    /// Constructed profile URL for a platform, empty when there is no handle
    pub fn url(&self, platform: Platform) -> String {
        crate::links::profile_url(platform, &self.handle)
    }

    /// Handle string for a platform's handle column, empty when there is no handle
    pub fn handle_for(&self, platform: Platform) -> String {
        match platform.handle_column() {
            Some(_) if !self.handle.is_empty() => self.handle.clone(),
            _ => String::new(),
        }
    }
}

//==============================================================================
// Coverage
//==============================================================================

/// Post-hoc statistics over one enriched table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageReport {
    pub total_rows: usize,
    pub constructed: usize,
    pub missing_names: usize,
    pub empty_handles: usize,
}

impl CoverageReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, status: LookupStatus) {
        self.total_rows += 1;
        match status {
            LookupStatus::Constructed => self.constructed += 1,
            LookupStatus::MissingName => self.missing_names += 1,
            LookupStatus::EmptyHandle => self.empty_handles += 1,
        }
    }

    /// Fraction of rows with a non-empty handle, as a percentage
    pub fn coverage_pct(&self) -> f64 {
        if self.total_rows == 0 {
            return 0.0;
        }
        self.constructed as f64 * 100.0 / self.total_rows as f64
    }
}
