//! Content assembly for the netgen site.
//!
//! Owns the mandate listing pipeline (seed → merge → sort → filter),
//! the background refresh session, and the fixed fallback content for
//! the home and services pages.

pub mod fallback;
pub mod listing;
pub mod seed;
pub mod session;

pub use fallback::{
    fallback_featured_mandate, fallback_services, fallback_testimonials, featured_with_fallback,
    services_with_fallback, testimonials_with_fallback,
};
pub use listing::{
    merge_with_seed, sector_options, sort_newest_first, ListingState, SectorFilter, StatusFilter,
    STATUS_OPTIONS,
};
pub use seed::seed_mandates;
pub use session::{new_shared_listing, spawn_refresh, RefreshHandle, SharedListing};
