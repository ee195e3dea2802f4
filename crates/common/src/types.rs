//! Domain types shared across the site service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Mandates ──────────────────────────────────────────────────────────

/// A mandate row as returned by the backend — every field optional.
///
/// Rows are normalized into [`Mandate`] exactly once at ingestion, so
/// nothing downstream ever handles a missing field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MandateRow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub deal_type: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub deal_size: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A deal mandate listing, with ingestion defaults applied.
///
/// Records are immutable once constructed — the listing pipeline only
/// ever rebuilds vectors, never mutates a record in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mandate {
    /// Backend id for remote records, `seed-<n>-<slug>` for seed records.
    pub id: String,
    /// Display name; also the case-insensitive de-duplication key.
    pub title: String,
    pub deal_type: String,
    /// Drives the sector filter; empty sectors are excluded from the
    /// filter option set.
    pub sector: String,
    /// Display-only money-range text; no numeric semantics.
    pub deal_size: String,
    /// Free text; conventionally one of Active / Pending / Closed.
    pub status: String,
    pub description: String,
    pub featured: bool,
    /// Sort key. Missing or unparseable timestamps normalize to the Unix
    /// epoch so such records sort as the oldest.
    pub created_at: DateTime<Utc>,
}

impl Mandate {
    /// Normalize a backend row, applying the defined fallback values.
    pub fn from_row(row: MandateRow) -> Self {
        Self {
            id: row.id.unwrap_or_default(),
            title: row.title.unwrap_or_default(),
            deal_type: row.deal_type.unwrap_or_default(),
            sector: row.sector.unwrap_or_default(),
            deal_size: row.deal_size.unwrap_or_default(),
            status: row.status.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            featured: row.featured.unwrap_or(false),
            created_at: parse_timestamp(row.created_at.as_deref()),
        }
    }

    /// Status bucket used for presentation styling.
    pub fn status_kind(&self) -> StatusKind {
        StatusKind::parse(&self.status)
    }
}

/// Recognized status buckets; anything else renders with the default
/// treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Active,
    Pending,
    Closed,
    Other,
}

impl StatusKind {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "active" => StatusKind::Active,
            "pending" => StatusKind::Pending,
            "closed" => StatusKind::Closed,
            _ => StatusKind::Other,
        }
    }
}

/// Parse an RFC 3339 timestamp, falling back to the Unix epoch.
pub fn parse_timestamp(raw: Option<&str>) -> DateTime<Utc> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}

// ── Home-page content ─────────────────────────────────────────────────

/// A client testimonial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub client_role: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub rating: i64,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// An advisory service description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub order_index: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A company shown in the trust bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustedCompany {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub order_index: i64,
}

/// A contact-form submission to insert into the backend.
#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_item: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row_applies_defaults() {
        let mandate = Mandate::from_row(MandateRow::default());
        assert_eq!(mandate.id, "");
        assert_eq!(mandate.title, "");
        assert_eq!(mandate.sector, "");
        assert!(!mandate.featured);
        assert_eq!(mandate.created_at, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_from_row_keeps_present_fields() {
        let row = MandateRow {
            id: Some("m-1".into()),
            title: Some("Deal A".into()),
            sector: Some("Tech".into()),
            status: Some("Active".into()),
            created_at: Some("2025-06-01T09:00:00Z".into()),
            ..MandateRow::default()
        };
        let mandate = Mandate::from_row(row);
        assert_eq!(mandate.id, "m-1");
        assert_eq!(mandate.title, "Deal A");
        assert_eq!(mandate.created_at.to_rfc3339(), "2025-06-01T09:00:00+00:00");
    }

    #[test]
    fn test_parse_timestamp_fallback() {
        assert_eq!(parse_timestamp(None), DateTime::UNIX_EPOCH);
        assert_eq!(parse_timestamp(Some("not-a-date")), DateTime::UNIX_EPOCH);
        assert_eq!(parse_timestamp(Some("")), DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_parse_timestamp_offset_normalized_to_utc() {
        let ts = parse_timestamp(Some("2025-06-01T19:00:00+10:00"));
        assert_eq!(ts.to_rfc3339(), "2025-06-01T09:00:00+00:00");
    }

    #[test]
    fn test_status_kind_recognition() {
        assert_eq!(StatusKind::parse("Active"), StatusKind::Active);
        assert_eq!(StatusKind::parse(" pending "), StatusKind::Pending);
        assert_eq!(StatusKind::parse("CLOSED"), StatusKind::Closed);
        assert_eq!(StatusKind::parse("Negotiating"), StatusKind::Other);
        assert_eq!(StatusKind::parse(""), StatusKind::Other);
    }

    #[test]
    fn test_contact_submission_skips_absent_fields() {
        let submission = ContactSubmission {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            phone: None,
            company: None,
            message: "Hello".into(),
            submission_type: None,
            portfolio_item: None,
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("phone").is_none());
        assert!(json.get("submission_type").is_none());
        assert_eq!(json["name"], "Jane");
    }

    #[test]
    fn test_mandate_row_tolerates_sparse_json() {
        let row: MandateRow =
            serde_json::from_str(r#"{"title":"Deal B","status":"Closed"}"#).unwrap();
        let mandate = Mandate::from_row(row);
        assert_eq!(mandate.title, "Deal B");
        assert_eq!(mandate.status_kind(), StatusKind::Closed);
        assert_eq!(mandate.created_at, DateTime::UNIX_EPOCH);
    }
}
