//! Configuration loader — merges env vars, .env file, and config.toml.

use std::path::Path;

use common::config::SiteConfig;
use common::Error;

fn parse_positive_u64(raw: &str, env_name: &str) -> Result<u64, Error> {
    let parsed = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| Error::Config(format!("{env_name} must be an integer > 0")))?;
    if parsed == 0 {
        return Err(Error::Config(format!("{env_name} must be an integer > 0")));
    }
    Ok(parsed)
}

fn parse_positive_u32(raw: &str, env_name: &str) -> Result<u32, Error> {
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| Error::Config(format!("{env_name} must be an integer > 0")))?;
    if parsed == 0 {
        return Err(Error::Config(format!("{env_name} must be an integer > 0")));
    }
    Ok(parsed)
}

fn validate_config(config: &SiteConfig) -> Result<(), Error> {
    let mut issues: Vec<String> = Vec::new();

    let url = config.backend.url.trim();
    let key = config.backend.anon_key.trim();
    if !url.is_empty() && !url.starts_with("http://") && !url.starts_with("https://") {
        issues.push("backend.url must start with http:// or https://".into());
    }
    // Seed-only mode (both empty) is valid; half a credential pair is not.
    if url.is_empty() != key.is_empty() {
        issues.push(
            "backend.url and backend.anon_key must be set together \
             (leave both empty for seed-only mode)"
                .into(),
        );
    }

    if config.backend.request_timeout_secs == 0 {
        issues.push("backend.request_timeout_secs must be > 0".into());
    }
    if config.listing.featured_mandate_limit == 0 {
        issues.push("listing.featured_mandate_limit must be > 0".into());
    }
    if config.listing.testimonial_limit == 0 {
        issues.push("listing.testimonial_limit must be > 0".into());
    }
    if config.listing.home_service_limit == 0 {
        issues.push("listing.home_service_limit must be > 0".into());
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "Invalid config:\n - {}",
            issues.join("\n - ")
        )))
    }
}

/// Load site configuration from environment and optional config file.
pub fn load_config() -> Result<SiteConfig, Error> {
    // 1. Load .env file from project root or parent directories.
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env file loaded: {}", e);
    }

    // 2. Start with defaults.
    let mut config = SiteConfig::default();

    // 3. Try loading config.toml if it exists.
    let config_path = Path::new("config.toml");
    if config_path.exists() {
        let contents = std::fs::read_to_string(config_path)
            .map_err(|e| Error::Config(format!("Failed to read config.toml: {}", e)))?;
        config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config.toml: {}", e)))?;
    }

    // 4. Override with environment variables (highest priority).
    if let Ok(url) = std::env::var("SUPABASE_URL") {
        config.backend.url = url;
    }
    if let Ok(key) = std::env::var("SUPABASE_ANON_KEY") {
        config.backend.anon_key = key;
    }
    if let Ok(raw) = std::env::var("SITE_REQUEST_TIMEOUT_SECS") {
        config.backend.request_timeout_secs =
            parse_positive_u64(&raw, "SITE_REQUEST_TIMEOUT_SECS")?;
    }
    if let Ok(raw) = std::env::var("SITE_FEATURED_MANDATE_LIMIT") {
        config.listing.featured_mandate_limit =
            parse_positive_u32(&raw, "SITE_FEATURED_MANDATE_LIMIT")?;
    }
    if let Ok(raw) = std::env::var("SITE_TESTIMONIAL_LIMIT") {
        config.listing.testimonial_limit = parse_positive_u32(&raw, "SITE_TESTIMONIAL_LIMIT")?;
    }
    if let Ok(raw) = std::env::var("SITE_HOME_SERVICE_LIMIT") {
        config.listing.home_service_limit = parse_positive_u32(&raw, "SITE_HOME_SERVICE_LIMIT")?;
    }

    // 5. Validate. A missing backend is fine — the site then renders
    // from seed content only, exactly as when the hosted project is
    // absent.
    validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(validate_config(&SiteConfig::default()).is_ok());
    }

    #[test]
    fn test_half_a_credential_pair_is_rejected() {
        let mut config = SiteConfig::default();
        config.backend.url = "https://example.supabase.co".into();
        assert!(validate_config(&config).is_err());

        config.backend.anon_key = "anon".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_bad_scheme_is_rejected() {
        let mut config = SiteConfig::default();
        config.backend.url = "example.supabase.co".into();
        config.backend.anon_key = "anon".into();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_positive_parsers_reject_zero() {
        assert!(parse_positive_u32("0", "X").is_err());
        assert!(parse_positive_u64("nope", "X").is_err());
        assert_eq!(parse_positive_u32(" 3 ", "X").unwrap(), 3);
    }
}
