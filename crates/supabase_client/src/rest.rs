//! REST client for the hosted content backend (Supabase / PostgREST).
//!
//! Covers: mandate queries, home-page content (testimonials, services,
//! trusted companies), and contact-form inserts. The anonymous key is
//! sent as both the `apikey` header and a bearer token, per the
//! PostgREST convention.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use common::config::BackendConfig;
use common::{
    ContactSubmission, Error, Mandate, MandateRow, MandateSource, Result, Service, Testimonial,
    TrustedCompany,
};

/// Async REST client for the content backend.
#[derive(Debug, Clone)]
pub struct SupabaseRestClient {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseRestClient {
    /// Create a new REST client from backend settings.
    pub fn new(config: &BackendConfig) -> Self {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(4)
            .tcp_keepalive(Duration::from_secs(30))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to build reqwest client");

        Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
        }
    }

    /// URL helper for a table under `/rest/v1/`.
    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// GET rows from one table with the given query string.
    async fn get_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let resp = self
            .client
            .get(self.table_url(table))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .query(query)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = resp.status().as_u16();
        if !(200..300).contains(&status) {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Backend {
                status,
                message: body,
            });
        }

        let rows: Vec<T> = resp.json().await.map_err(|e| Error::Http(e.to_string()))?;
        debug!("Fetched {} rows from {}", rows.len(), table);
        Ok(rows)
    }

    // ── Mandates ─────────────────────────────────────────────────────

    /// Fetch every mandate, newest first.
    pub async fn list_mandates(&self) -> Result<Vec<Mandate>> {
        let rows: Vec<MandateRow> = self
            .get_rows(
                "mandates",
                &[("select", "*"), ("order", "created_at.desc")],
            )
            .await?;
        Ok(rows.into_iter().map(Mandate::from_row).collect())
    }

    /// Fetch the featured mandates for the home page, newest first.
    pub async fn featured_mandates(&self, limit: u32) -> Result<Vec<Mandate>> {
        let limit = limit.to_string();
        let rows: Vec<MandateRow> = self
            .get_rows(
                "mandates",
                &[
                    ("select", "*"),
                    ("featured", "eq.true"),
                    ("order", "created_at.desc"),
                    ("limit", &limit),
                ],
            )
            .await?;
        Ok(rows.into_iter().map(Mandate::from_row).collect())
    }

    // ── Home-page content ────────────────────────────────────────────

    /// Fetch the featured testimonials, newest first.
    pub async fn featured_testimonials(&self, limit: u32) -> Result<Vec<Testimonial>> {
        let limit = limit.to_string();
        self.get_rows(
            "testimonials",
            &[
                ("select", "*"),
                ("featured", "eq.true"),
                ("order", "created_at.desc"),
                ("limit", &limit),
            ],
        )
        .await
    }

    /// Fetch services in display order, optionally limited.
    pub async fn list_services(&self, limit: Option<u32>) -> Result<Vec<Service>> {
        let mut query: Vec<(&str, String)> = vec![
            ("select", "*".to_string()),
            ("order", "order_index.asc".to_string()),
        ];
        if let Some(n) = limit {
            query.push(("limit", n.to_string()));
        }
        let query: Vec<(&str, &str)> = query.iter().map(|(k, v)| (*k, v.as_str())).collect();
        self.get_rows("services", &query).await
    }

    /// Fetch the trust-bar companies in display order.
    pub async fn trusted_companies(&self) -> Result<Vec<TrustedCompany>> {
        self.get_rows(
            "trusted_companies",
            &[("select", "*"), ("order", "order_index.asc")],
        )
        .await
    }

    // ── Contact submissions ──────────────────────────────────────────

    /// Insert one contact-form submission. Not retried on failure.
    pub async fn submit_contact(&self, submission: &ContactSubmission) -> Result<()> {
        let resp = self
            .client
            .post(self.table_url("contact_submissions"))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=minimal")
            .json(&[submission])
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = resp.status().as_u16();
        if !(200..300).contains(&status) {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Backend {
                status,
                message: body,
            });
        }

        debug!("Contact submission accepted ({})", status);
        Ok(())
    }

    // ── Health ───────────────────────────────────────────────────────

    /// Cheap reachability probe: select a single mandate id.
    pub async fn health_check(&self) -> Result<()> {
        let _rows: Vec<serde_json::Value> = self
            .get_rows("mandates", &[("select", "id"), ("limit", "1")])
            .await?;
        Ok(())
    }
}

#[async_trait]
impl MandateSource for SupabaseRestClient {
    async fn fetch_mandates(&self) -> Result<Vec<Mandate>> {
        self.list_mandates().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SupabaseRestClient {
        SupabaseRestClient::new(&BackendConfig {
            url: server.uri(),
            anon_key: "test-anon-key".into(),
            request_timeout_secs: 5,
        })
    }

    #[tokio::test]
    async fn test_list_mandates_normalizes_rows() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/mandates"))
            .and(query_param("order", "created_at.desc"))
            .and(header("apikey", "test-anon-key"))
            .and(header("Authorization", "Bearer test-anon-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": "m-1",
                    "title": "Remote Deal",
                    "sector": "Energy",
                    "status": "Active",
                    "created_at": "2025-06-01T09:00:00Z"
                },
                {
                    "id": "m-2",
                    "title": "Sparse Deal"
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let mandates = client_for(&server).list_mandates().await.unwrap();

        assert_eq!(mandates.len(), 2);
        assert_eq!(mandates[0].title, "Remote Deal");
        assert_eq!(mandates[0].sector, "Energy");
        // Sparse rows get ingestion defaults, not errors.
        assert_eq!(mandates[1].deal_type, "");
        assert_eq!(mandates[1].created_at, chrono::DateTime::UNIX_EPOCH);
    }

    #[tokio::test]
    async fn test_featured_mandates_query_shape() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/mandates"))
            .and(query_param("featured", "eq.true"))
            .and(query_param("order", "created_at.desc"))
            .and(query_param("limit", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let mandates = client_for(&server).featured_mandates(3).await.unwrap();
        assert!(mandates.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_maps_to_backend_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/mandates"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string(r#"{"message":"Invalid API key"}"#),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).list_mandates().await.unwrap_err();
        match err {
            Error::Backend { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("Invalid API key"));
            }
            other => panic!("expected Backend error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_services_orders_by_index() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/services"))
            .and(query_param("order", "order_index.asc"))
            .and(query_param("limit", "4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "1", "title": "Capital Raising", "order_index": 1}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let services = client_for(&server).list_services(Some(4)).await.unwrap();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].title, "Capital Raising");
    }

    #[tokio::test]
    async fn test_submit_contact_posts_array_body() {
        let server = MockServer::start().await;

        let submission = ContactSubmission {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: None,
            company: Some("Example Co".into()),
            message: "I would like more information about: Solar EPC Roll-Up\n\n".into(),
            submission_type: Some("portfolio_inquiry".into()),
            portfolio_item: Some("Solar EPC Roll-Up".into()),
        };

        Mock::given(method("POST"))
            .and(path("/rest/v1/contact_submissions"))
            .and(header("Prefer", "return=minimal"))
            .and(body_json(serde_json::json!([{
                "name": "Jane Doe",
                "email": "jane@example.com",
                "company": "Example Co",
                "message": "I would like more information about: Solar EPC Roll-Up\n\n",
                "submission_type": "portfolio_inquiry",
                "portfolio_item": "Solar EPC Roll-Up"
            }])))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).submit_contact(&submission).await.unwrap();
    }

    #[tokio::test]
    async fn test_submit_contact_surfaces_rejection() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/v1/contact_submissions"))
            .respond_with(ResponseTemplate::new(403).set_body_string("row-level security"))
            .mount(&server)
            .await;

        let submission = ContactSubmission {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            phone: None,
            company: None,
            message: "Hello".into(),
            submission_type: None,
            portfolio_item: None,
        };

        let err = client_for(&server)
            .submit_contact(&submission)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Backend { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_health_check_ok() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/mandates"))
            .and(query_param("select", "id"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        client_for(&server).health_check().await.unwrap();
    }
}
