//! URL constructor: fixed per-platform templates over a cleaned handle.
//!
//! Purely templated string formatting. No network calls, no existence
//! checks; an empty handle yields an empty URL.

use crate::types::Platform;

/// Build the profile URL for a platform from a handle
pub fn profile_url(platform: Platform, handle: &str) -> String {
    if handle.is_empty() {
        return String::new();
    }
    match platform {
        Platform::Instagram => format!("https://www.instagram.com/{handle}"),
        Platform::TikTok => format!("https://www.tiktok.com/@{handle}"),
        Platform::YouTube => format!("https://www.youtube.com/@{handle}"),
        Platform::Twitter => format!("https://twitter.com/{handle}"),
        Platform::SoundCloud => format!("https://soundcloud.com/{handle}"),
        Platform::Facebook => format!("https://www.facebook.com/{handle}"),
    }
}
