//! Name-to-handle cleaner.
//!
//! Lowercases the artist name, strips a fixed set of leading prefix words
//! ("DJ Isaac" → "isaac"), and keeps only ASCII alphanumerics. Deterministic
//! and total: the same name always yields the same handle, and no input can
//! make it fail.

use crate::config::Config;
use crate::types::{LookupStatus, SocialLinks};

/// Values an upstream export uses where a name is absent
const PLACEHOLDER_NAMES: [&str; 3] = ["nan", "none", "null"];

/// True when a name cell is blank or a known placeholder
pub fn is_missing_name(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty()
        || PLACEHOLDER_NAMES
            .iter()
            .any(|p| trimmed.eq_ignore_ascii_case(p))
}

/// Clean an artist name into a handle.
///
/// Prefix words are stripped repeatedly from the front, whole-word only.
/// If stripping would consume the entire name ("DJ" alone), the unstripped
/// form is kept so the handle does not go empty by accident. Non-Latin
/// scripts collapse to an empty handle.
pub fn clean_handle(name: &str, prefixes: &[String]) -> String {
    let lowered = name.trim().to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let mut rest = &tokens[..];
    while !rest.is_empty() && prefixes.iter().any(|p| p.eq_ignore_ascii_case(rest[0])) {
        rest = &rest[1..];
    }
    if rest.is_empty() {
        rest = &tokens[..];
    }

    rest.join("")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Derive the social fields for one raw name cell
pub fn derive_links(raw_name: &str, config: &Config) -> SocialLinks {
    if is_missing_name(raw_name) {
        return SocialLinks {
            handle: String::new(),
            status: LookupStatus::MissingName,
        };
    }

    let handle = clean_handle(raw_name, &config.strip_prefixes);
    let status = if handle.is_empty() {
        LookupStatus::EmptyHandle
    } else {
        LookupStatus::Constructed
    };

    SocialLinks { handle, status }
}
