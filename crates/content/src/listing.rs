//! Mandate listing pipeline — merge, sort, filter.
//!
//! The portfolio view renders from one canonical in-memory list: the
//! seed catalogue merged with whatever the backend returned, sorted
//! newest first. Filtering is recomputed synchronously on every change
//! and never memoized across sessions.

use std::collections::HashSet;

use common::Mandate;

// ── Filters ───────────────────────────────────────────────────────────

/// Sector filter — the "All" sentinel or one exact sector value.
///
/// Sector matching is exact-case while status matching is
/// case-insensitive; the asymmetry matches the production site's
/// observed behavior.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SectorFilter {
    #[default]
    All,
    Sector(String),
}

impl SectorFilter {
    /// Parse user input; "all" in any casing (or blank) selects the
    /// sentinel.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            SectorFilter::All
        } else {
            SectorFilter::Sector(trimmed.to_string())
        }
    }

    pub fn matches(&self, mandate: &Mandate) -> bool {
        match self {
            SectorFilter::All => true,
            SectorFilter::Sector(sector) => mandate.sector == *sector,
        }
    }
}

impl std::fmt::Display for SectorFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectorFilter::All => f.write_str("All"),
            SectorFilter::Sector(sector) => f.write_str(sector),
        }
    }
}

/// Status filter — the "Any" sentinel or one status value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Any,
    Status(String),
}

impl StatusFilter {
    /// Parse user input; "any" in any casing (or blank) selects the
    /// sentinel.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("any") {
            StatusFilter::Any
        } else {
            StatusFilter::Status(trimmed.to_string())
        }
    }

    pub fn matches(&self, mandate: &Mandate) -> bool {
        match self {
            StatusFilter::Any => true,
            StatusFilter::Status(status) => mandate.status.eq_ignore_ascii_case(status),
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::Any => f.write_str("Any"),
            StatusFilter::Status(status) => f.write_str(status),
        }
    }
}

/// The status choices offered alongside the sector dropdown.
pub const STATUS_OPTIONS: [&str; 4] = ["Any", "Active", "Pending", "Closed"];

// ── Pipeline stages ───────────────────────────────────────────────────

/// Merge remote rows with the seed list.
///
/// Remote rows come first and win title collisions — backend content is
/// authoritative. A seed row survives only when no remote row shares
/// its lowercased title. Duplicates within a single source are left
/// alone; de-duplication applies across sources only.
pub fn merge_with_seed(remote: Vec<Mandate>, seed: Vec<Mandate>) -> Vec<Mandate> {
    let seen: HashSet<String> = remote.iter().map(|m| m.title.to_lowercase()).collect();

    let mut merged = remote;
    merged.extend(
        seed.into_iter()
            .filter(|m| !seen.contains(&m.title.to_lowercase())),
    );
    merged
}

/// Stable sort, newest first.
///
/// Equal timestamps keep their merge order; records whose timestamp was
/// normalized to the epoch land at the end.
pub fn sort_newest_first(mandates: &mut [Mandate]) {
    mandates.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Distinct non-empty sectors in observed order, prefixed with "All".
pub fn sector_options(mandates: &[Mandate]) -> Vec<String> {
    let mut options = vec!["All".to_string()];
    for mandate in mandates {
        if mandate.sector.is_empty() {
            continue;
        }
        if !options[1..].contains(&mandate.sector) {
            options.push(mandate.sector.clone());
        }
    }
    options
}

// ── Listing state ─────────────────────────────────────────────────────

/// The canonical list plus the current filter selection.
///
/// Owned by the page-level view. The only writers are the initial seed
/// assignment and the merge result once the backend fetch resolves;
/// those two are sequential, never concurrent.
#[derive(Debug, Clone, Default)]
pub struct ListingState {
    mandates: Vec<Mandate>,
    sector: SectorFilter,
    status: StatusFilter,
}

impl ListingState {
    /// Start from the seed catalogue, unfiltered, in authored order.
    pub fn new(seed: Vec<Mandate>) -> Self {
        Self {
            mandates: seed,
            sector: SectorFilter::All,
            status: StatusFilter::Any,
        }
    }

    /// Apply the remote fetch result: merge with the current list, then
    /// re-sort. An empty remote list flows through the same path and
    /// leaves the list unchanged.
    pub fn apply_remote(&mut self, remote: Vec<Mandate>) {
        let current = std::mem::take(&mut self.mandates);
        let mut merged = merge_with_seed(remote, current);
        sort_newest_first(&mut merged);
        self.mandates = merged;
    }

    pub fn set_sector(&mut self, sector: SectorFilter) {
        self.sector = sector;
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
    }

    /// Reset both filters to their sentinels.
    pub fn clear_filters(&mut self) {
        self.sector = SectorFilter::All;
        self.status = StatusFilter::Any;
    }

    pub fn sector(&self) -> &SectorFilter {
        &self.sector
    }

    pub fn status(&self) -> &StatusFilter {
        &self.status
    }

    /// Every mandate in the canonical list.
    pub fn all(&self) -> &[Mandate] {
        &self.mandates
    }

    /// Size of the canonical list.
    pub fn total(&self) -> usize {
        self.mandates.len()
    }

    /// The filtered view, recomputed on every call.
    pub fn visible(&self) -> Vec<&Mandate> {
        self.mandates
            .iter()
            .filter(|m| self.sector.matches(m) && self.status.matches(m))
            .collect()
    }

    /// Sector filter options derived from the canonical list.
    pub fn sectors(&self) -> Vec<String> {
        sector_options(&self.mandates)
    }

    /// Count of non-sentinel filters currently active.
    pub fn active_filter_count(&self) -> usize {
        usize::from(self.sector != SectorFilter::All)
            + usize::from(self.status != StatusFilter::Any)
    }
}
