//! Background refresh of the mandate listing.
//!
//! One fetch per page visit: the seed list renders first and the remote
//! result is merged in whenever it arrives. The handle returned by
//! [`spawn_refresh`] revokes the update on teardown, so a result that
//! resolves after the view is gone is discarded instead of applied.
//! Nothing is retried; a failed fetch leaves the seed view in place.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use common::MandateSource;

use crate::listing::ListingState;

/// Listing state shared between the view and the refresh task.
pub type SharedListing = Arc<RwLock<ListingState>>;

/// Wrap a listing for use with [`spawn_refresh`].
pub fn new_shared_listing(state: ListingState) -> SharedListing {
    Arc::new(RwLock::new(state))
}

/// Handle to the in-flight refresh.
///
/// Dropping the handle revokes it — the fetch task is aborted and any
/// result that already resolved is discarded rather than applied.
#[derive(Debug)]
pub struct RefreshHandle {
    cancelled: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    /// Revoke the refresh without waiting for it.
    pub fn revoke(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(task) = &self.task {
            task.abort();
        }
    }

    /// Wait for the refresh to settle — applied, fallen back, or
    /// revoked.
    pub async fn settled(mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.revoke();
    }
}

/// Spawn the single background fetch for this page visit.
///
/// On success the result is merged into `state` (remote rows win title
/// collisions); on failure a warning is logged and the current list
/// stands.
pub fn spawn_refresh(state: SharedListing, source: Arc<dyn MandateSource>) -> RefreshHandle {
    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = cancelled.clone();

    let task = tokio::spawn(async move {
        let fetched = source.fetch_mandates().await;

        // The view may have been torn down while the request was in
        // flight; a late result must not be applied.
        if flag.load(Ordering::SeqCst) {
            debug!("listing torn down before refresh resolved; discarding result");
            return;
        }

        match fetched {
            Ok(remote) => {
                let remote_count = remote.len();
                let mut listing = state.write().await;
                listing.apply_remote(remote);
                info!(
                    "mandate listing refreshed: {} remote rows, {} total",
                    remote_count,
                    listing.total()
                );
            }
            Err(e) => {
                warn!("mandate refresh failed, keeping local catalogue: {}", e);
            }
        }
    });

    RefreshHandle {
        cancelled,
        task: Some(task),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListingState;
    use async_trait::async_trait;
    use common::{parse_timestamp, Error, Mandate, Result};
    use std::time::Duration;

    fn make_mandate(title: &str, status: &str, created_at: &str) -> Mandate {
        Mandate {
            id: format!("remote-{}", title.to_lowercase()),
            title: title.into(),
            deal_type: "Capital Raising".into(),
            sector: "Technology".into(),
            deal_size: "$10M".into(),
            status: status.into(),
            description: String::new(),
            featured: false,
            created_at: parse_timestamp(Some(created_at)),
        }
    }

    struct StaticSource(Vec<Mandate>);

    #[async_trait]
    impl MandateSource for StaticSource {
        async fn fetch_mandates(&self) -> Result<Vec<Mandate>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl MandateSource for FailingSource {
        async fn fetch_mandates(&self) -> Result<Vec<Mandate>> {
            Err(Error::Http("connection refused".into()))
        }
    }

    struct StallingSource(Vec<Mandate>);

    #[async_trait]
    impl MandateSource for StallingSource {
        async fn fetch_mandates(&self) -> Result<Vec<Mandate>> {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok(self.0.clone())
        }
    }

    fn seed_state() -> ListingState {
        ListingState::new(vec![make_mandate("Deal A", "Active", "2025-01-01T00:00:00Z")])
    }

    #[tokio::test]
    async fn test_refresh_applies_remote_result() {
        let shared = new_shared_listing(seed_state());
        let source = Arc::new(StaticSource(vec![make_mandate(
            "Deal A",
            "Closed",
            "2025-06-01T00:00:00Z",
        )]));

        spawn_refresh(shared.clone(), source).settled().await;

        let listing = shared.read().await;
        assert_eq!(listing.total(), 1);
        assert_eq!(listing.all()[0].status, "Closed");
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_seed() {
        let shared = new_shared_listing(seed_state());

        spawn_refresh(shared.clone(), Arc::new(FailingSource))
            .settled()
            .await;

        let listing = shared.read().await;
        assert_eq!(listing.total(), 1);
        assert_eq!(listing.all()[0].status, "Active");
    }

    #[tokio::test]
    async fn test_refresh_empty_result_keeps_seed() {
        let shared = new_shared_listing(seed_state());

        spawn_refresh(shared.clone(), Arc::new(StaticSource(Vec::new())))
            .settled()
            .await;

        let listing = shared.read().await;
        assert_eq!(listing.total(), 1);
        assert_eq!(listing.all()[0].title, "Deal A");
    }

    #[tokio::test]
    async fn test_revoked_refresh_discards_result() {
        let shared = new_shared_listing(seed_state());
        let source = Arc::new(StallingSource(vec![make_mandate(
            "Deal B",
            "Active",
            "2025-06-01T00:00:00Z",
        )]));

        let mut handle = spawn_refresh(shared.clone(), source);
        handle.revoke();
        handle.settled().await;

        // Give any stray write a chance to land before asserting.
        tokio::time::sleep(Duration::from_millis(300)).await;

        let listing = shared.read().await;
        assert_eq!(listing.total(), 1);
        assert_eq!(listing.all()[0].title, "Deal A");
    }

    #[tokio::test]
    async fn test_dropping_handle_revokes_refresh() {
        let shared = new_shared_listing(seed_state());
        let source = Arc::new(StallingSource(vec![make_mandate(
            "Deal B",
            "Active",
            "2025-06-01T00:00:00Z",
        )]));

        drop(spawn_refresh(shared.clone(), source));
        tokio::time::sleep(Duration::from_millis(300)).await;

        let listing = shared.read().await;
        assert_eq!(listing.total(), 1);
    }
}
