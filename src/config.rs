//! Optional YAML configuration.
//!
//! Every field has a default, so an absent or empty config file behaves the
//! same as no config at all:
//!
//! ```yaml
//! strip_prefixes: [dj, lil, young, big, the, mc]
//! platforms: [instagram, tiktok, youtube, twitter, soundcloud, facebook]
//! artist_column: Artist
//! country_column: Artist country
//! ```

use crate::error::{LinkError, LinkResult};
use crate::types::Platform;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Leading words stripped from names before building the handle
    pub strip_prefixes: Vec<String>,

    /// Platform keys to construct links for (order = output column order)
    pub platforms: Vec<String>,

    /// Exact header of the artist-name column; auto-detected when unset
    pub artist_column: Option<String>,

    /// Exact header of the country column; auto-detected when unset
    pub country_column: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strip_prefixes: ["dj", "lil", "young", "big", "the", "mc"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            platforms: Platform::ALL.iter().map(|p| p.key().to_string()).collect(),
            artist_column: None,
            country_column: None,
        }
    }
}

impl Config {
    /// Load a config file, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> LinkResult<Self> {
        match path {
            Some(path) => {
                let content = fs::read_to_string(path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }

    /// Resolve configured platform keys, rejecting unknown ones
    pub fn enabled_platforms(&self) -> LinkResult<Vec<Platform>> {
        if self.platforms.is_empty() {
            return Err(LinkError::Config(
                "at least one platform must be enabled".to_string(),
            ));
        }
        self.platforms
            .iter()
            .map(|key| {
                Platform::from_key(key).ok_or_else(|| {
                    LinkError::Config(format!(
                        "unknown platform '{}' (expected one of: {})",
                        key,
                        Platform::ALL.map(|p| p.key()).join(", ")
                    ))
                })
            })
            .collect()
    }

    fn validate(&self) -> LinkResult<()> {
        self.enabled_platforms().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_all_platforms() {
        let config = Config::default();
        assert_eq!(config.enabled_platforms().unwrap(), Platform::ALL.to_vec());
        assert!(config.strip_prefixes.contains(&"dj".to_string()));
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("platforms: [instagram]").unwrap();
        assert_eq!(
            config.enabled_platforms().unwrap(),
            vec![Platform::Instagram]
        );
        // strip_prefixes still defaulted
        assert!(config.strip_prefixes.contains(&"the".to_string()));
        assert_eq!(config.artist_column, None);
    }

    #[test]
    fn test_unknown_platform_rejected() {
        let config: Config = serde_yaml::from_str("platforms: [myspace]").unwrap();
        let err = config.enabled_platforms().unwrap_err();
        assert!(err.to_string().contains("myspace"));
    }

    #[test]
    fn test_empty_platform_list_rejected() {
        let config: Config = serde_yaml::from_str("platforms: []").unwrap();
        assert!(config.enabled_platforms().is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("strip_prefix: [dj]");
        assert!(result.is_err());
    }
}
