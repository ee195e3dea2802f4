//! Site service configuration types.

use serde::{Deserialize, Serialize};

/// Top-level service configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Hosted backend connection settings.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Listing and home-page limits.
    #[serde(default)]
    pub listing: ListingConfig,
}

/// Connection settings for the hosted content backend.
///
/// An empty `url`/`anon_key` pair is valid — the service then runs
/// entirely from seed content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project base URL (e.g. `https://xyzcompany.supabase.co`).
    #[serde(default)]
    pub url: String,

    /// Anonymous API key, sent as both `apikey` header and bearer token.
    #[serde(default)]
    pub anon_key: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl BackendConfig {
    /// True when both the URL and the key are present.
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.anon_key.trim().is_empty()
    }
}

/// Row limits for the home page and listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Featured mandates shown on the home page.
    #[serde(default = "default_featured_limit")]
    pub featured_mandate_limit: u32,

    /// Featured testimonials shown on the home page.
    #[serde(default = "default_testimonial_limit")]
    pub testimonial_limit: u32,

    /// Services shown in the home-page summary.
    #[serde(default = "default_home_service_limit")]
    pub home_service_limit: u32,
}

// ── Defaults ──────────────────────────────────────────────────────────

fn default_request_timeout() -> u64 {
    15
}

fn default_featured_limit() -> u32 {
    3
}

fn default_testimonial_limit() -> u32 {
    3
}

fn default_home_service_limit() -> u32 {
    4
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            featured_mandate_limit: default_featured_limit(),
            testimonial_limit: default_testimonial_limit(),
            home_service_limit: default_home_service_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_unconfigured() {
        let cfg = SiteConfig::default();
        assert!(!cfg.backend.is_configured());
        assert_eq!(cfg.backend.request_timeout_secs, 15);
        assert_eq!(cfg.listing.featured_mandate_limit, 3);
        assert_eq!(cfg.listing.home_service_limit, 4);
    }

    #[test]
    fn test_partial_url_is_not_configured() {
        let mut cfg = BackendConfig::default();
        cfg.url = "https://example.supabase.co".into();
        assert!(!cfg.is_configured());
        cfg.anon_key = "anon".into();
        assert!(cfg.is_configured());
    }
}
