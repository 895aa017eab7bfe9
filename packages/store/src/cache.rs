//! # Query cache — stale-time windows and explicit invalidation
//!
//! The one shared mutable resource in the client. Reads go through typed
//! [`QueryKey`]s; each key family has a fixed stale-time window during which
//! a cached value is served without a network request. Writes never touch
//! the cache directly: every [`Mutation`] names the exact set of
//! [`QueryFamily`]s it invalidates, and [`QueryCache::apply`] drops those
//! entries wholesale. Invalidation is coarse (by family), never per-record.
//!
//! | Family | Stale time |
//! |--------|-----------|
//! | `CurrentUser` | 5 min |
//! | `DashboardSummary` | 2 min |
//! | `DashboardCharts` | 5 min |
//! | `RecentTransactions` | 1 min |
//! | `AllTransactions` | 2 min |
//! | `AiTemplates` | 10 min |
//!
//! Values are stored as `serde_json::Value` so the cache has no compile-time
//! coupling to the DTO crate; callers round-trip through serde at the edge.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;

const MINUTE_MS: u64 = 60 * 1000;

/// Coarse resource families, the unit of invalidation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryFamily {
    CurrentUser,
    DashboardSummary,
    DashboardCharts,
    RecentTransactions,
    AllTransactions,
    AiTemplates,
}

impl QueryFamily {
    /// Duration after a successful fetch during which the cached value is
    /// served without a new request.
    pub fn stale_time_ms(self) -> u64 {
        match self {
            QueryFamily::CurrentUser => 5 * MINUTE_MS,
            QueryFamily::DashboardSummary => 2 * MINUTE_MS,
            QueryFamily::DashboardCharts => 5 * MINUTE_MS,
            QueryFamily::RecentTransactions => MINUTE_MS,
            QueryFamily::AllTransactions => 2 * MINUTE_MS,
            QueryFamily::AiTemplates => 10 * MINUTE_MS,
        }
    }
}

/// Fully-qualified cache key for one read query.
///
/// For the transaction list, the page and the canonical filter encoding are
/// part of the key: navigating back to a previously seen page+filter
/// combination inside the freshness window is a cache hit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    CurrentUser {
        user_id: String,
    },
    DashboardSummary {
        user_id: String,
    },
    DashboardCharts {
        user_id: String,
        period: String,
    },
    RecentTransactions {
        user_id: String,
    },
    AllTransactions {
        user_id: String,
        page: u32,
        /// Canonical query-string encoding of the active filter set.
        filters: String,
    },
    AiTemplates,
}

impl QueryKey {
    pub fn family(&self) -> QueryFamily {
        match self {
            QueryKey::CurrentUser { .. } => QueryFamily::CurrentUser,
            QueryKey::DashboardSummary { .. } => QueryFamily::DashboardSummary,
            QueryKey::DashboardCharts { .. } => QueryFamily::DashboardCharts,
            QueryKey::RecentTransactions { .. } => QueryFamily::RecentTransactions,
            QueryKey::AllTransactions { .. } => QueryFamily::AllTransactions,
            QueryKey::AiTemplates => QueryFamily::AiTemplates,
        }
    }
}

/// Write operations, named so their invalidation sets are explicit and
/// exhaustively checkable rather than scattered string keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    CreateUser,
    UpdateProfile,
    UpdatePermissions,
    AddTransaction,
    AddAsset,
    AddInvestment,
    AddLiability,
}

impl Mutation {
    /// The dependency table: exactly which read families each write makes
    /// stale. Over-invalidation wastes a refetch; under-invalidation shows
    /// stale money on screen, so keep this table honest.
    pub fn invalidates(self) -> &'static [QueryFamily] {
        match self {
            Mutation::CreateUser => &[QueryFamily::CurrentUser],
            Mutation::UpdateProfile => &[QueryFamily::CurrentUser, QueryFamily::DashboardSummary],
            Mutation::UpdatePermissions => &[QueryFamily::CurrentUser],
            Mutation::AddTransaction => &[
                QueryFamily::DashboardSummary,
                QueryFamily::DashboardCharts,
                QueryFamily::RecentTransactions,
                QueryFamily::AllTransactions,
            ],
            Mutation::AddAsset => &[QueryFamily::DashboardSummary],
            Mutation::AddInvestment => {
                &[QueryFamily::DashboardSummary, QueryFamily::DashboardCharts]
            }
            Mutation::AddLiability => &[QueryFamily::DashboardSummary],
        }
    }
}

#[derive(Clone, Debug)]
struct Entry {
    value: serde_json::Value,
    fetched_at_ms: u64,
}

/// Shared, cheaply clonable query cache. All handles see the same entries.
#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    entries: Arc<Mutex<HashMap<QueryKey, Entry>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a still-fresh cached value, deserialized to the caller's type.
    /// Returns `None` when the key is absent, expired, or (after a DTO
    /// change) no longer decodes.
    pub fn get_fresh<T: DeserializeOwned>(&self, key: &QueryKey, now_ms: u64) -> Option<T> {
        let entries = self.entries.lock().unwrap();
        let entry = entries.get(key)?;
        let age = now_ms.saturating_sub(entry.fetched_at_ms);
        if age >= key.family().stale_time_ms() {
            return None;
        }
        serde_json::from_value(entry.value.clone()).ok()
    }

    /// Store a freshly fetched value.
    pub fn put<T: Serialize>(&self, key: QueryKey, value: &T, now_ms: u64) {
        let json = match serde_json::to_value(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("failed to cache query result: {e}");
                return;
            }
        };
        self.entries.lock().unwrap().insert(
            key,
            Entry {
                value: json,
                fetched_at_ms: now_ms,
            },
        );
    }

    /// Drop every entry of one family.
    pub fn invalidate(&self, family: QueryFamily) {
        self.entries
            .lock()
            .unwrap()
            .retain(|key, _| key.family() != family);
    }

    /// Apply a mutation's invalidation set after it succeeded.
    pub fn apply(&self, mutation: Mutation) {
        for family in mutation.invalidates() {
            self.invalidate(*family);
        }
        tracing::debug!(?mutation, "invalidated query families");
    }

    /// Drop everything, e.g. on sign-out.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_key() -> QueryKey {
        QueryKey::CurrentUser {
            user_id: "u1".to_string(),
        }
    }

    fn summary_key() -> QueryKey {
        QueryKey::DashboardSummary {
            user_id: "u1".to_string(),
        }
    }

    fn tx_key(page: u32, filters: &str) -> QueryKey {
        QueryKey::AllTransactions {
            user_id: "u1".to_string(),
            page,
            filters: filters.to_string(),
        }
    }

    #[test]
    fn fresh_value_is_served_within_window() {
        let cache = QueryCache::new();
        cache.put(summary_key(), &42u32, 1_000);

        let hit: Option<u32> = cache.get_fresh(&summary_key(), 1_000 + MINUTE_MS);
        assert_eq!(hit, Some(42));
    }

    #[test]
    fn value_expires_at_stale_time() {
        let cache = QueryCache::new();
        cache.put(summary_key(), &42u32, 1_000);

        // DashboardSummary stale time is 2 minutes
        let just_inside: Option<u32> = cache.get_fresh(&summary_key(), 1_000 + 2 * MINUTE_MS - 1);
        let just_outside: Option<u32> = cache.get_fresh(&summary_key(), 1_000 + 2 * MINUTE_MS);
        assert_eq!(just_inside, Some(42));
        assert_eq!(just_outside, None);
    }

    #[test]
    fn page_and_filters_are_part_of_the_key() {
        let cache = QueryCache::new();
        cache.put(tx_key(1, "type=expense"), &"page-one", 0);

        let other_page: Option<String> = cache.get_fresh(&tx_key(2, "type=expense"), 0);
        let other_filters: Option<String> = cache.get_fresh(&tx_key(1, ""), 0);
        let same: Option<String> = cache.get_fresh(&tx_key(1, "type=expense"), 0);

        assert!(other_page.is_none());
        assert!(other_filters.is_none());
        assert_eq!(same.as_deref(), Some("page-one"));
    }

    #[test]
    fn add_transaction_invalidates_the_dashboard_and_the_list() {
        let cache = QueryCache::new();
        cache.put(summary_key(), &1u32, 0);
        cache.put(tx_key(1, ""), &2u32, 0);
        cache.put(user_key(), &3u32, 0);

        cache.apply(Mutation::AddTransaction);

        assert_eq!(cache.get_fresh::<u32>(&summary_key(), 1), None);
        assert_eq!(cache.get_fresh::<u32>(&tx_key(1, ""), 1), None);
        // the current user is untouched by a new transaction
        assert_eq!(cache.get_fresh::<u32>(&user_key(), 1), Some(3));
    }

    #[test]
    fn add_asset_only_invalidates_the_summary() {
        let cache = QueryCache::new();
        cache.put(summary_key(), &1u32, 0);
        cache.put(tx_key(1, ""), &2u32, 0);

        cache.apply(Mutation::AddAsset);

        assert_eq!(cache.get_fresh::<u32>(&summary_key(), 1), None);
        assert_eq!(cache.get_fresh::<u32>(&tx_key(1, ""), 1), Some(2));
    }

    #[test]
    fn profile_and_permission_updates_refresh_the_user() {
        for mutation in [Mutation::UpdateProfile, Mutation::UpdatePermissions] {
            let cache = QueryCache::new();
            cache.put(user_key(), &1u32, 0);
            cache.apply(mutation);
            assert_eq!(cache.get_fresh::<u32>(&user_key(), 1), None);
        }
    }

    #[test]
    fn clear_drops_everything() {
        let cache = QueryCache::new();
        cache.put(user_key(), &1u32, 0);
        cache.put(summary_key(), &2u32, 0);

        cache.clear();

        assert_eq!(cache.get_fresh::<u32>(&user_key(), 1), None);
        assert_eq!(cache.get_fresh::<u32>(&summary_key(), 1), None);
    }
}
