//! Remote provider interface for the mandate listing.

use async_trait::async_trait;

use crate::types::Mandate;
use crate::Result;

/// A source of mandate records.
///
/// The concrete implementation lives in the backend client crate; the
/// listing pipeline only ever sees this trait, so tests substitute
/// static or failing sources. A failed or empty fetch means "no remote
/// data available" — callers keep whatever they are already showing.
#[async_trait]
pub trait MandateSource: Send + Sync {
    /// Fetch all mandates, ordered by creation time descending.
    async fn fetch_mandates(&self) -> Result<Vec<Mandate>>;
}
