//! The paginated, filtered transaction list and its filter → query-string
//! rules: empty fields are omitted from the request entirely (never sent as
//! empty strings), and the catch-all kind filter is omitted too.

use crate::client::{ApiClient, ApiError};
use crate::types::TransactionsPage;

/// Kind filter for the transaction list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl KindFilter {
    /// Wire value, `None` for the catch-all.
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            KindFilter::All => None,
            KindFilter::Income => Some("income"),
            KindFilter::Expense => Some("expense"),
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "income" => KindFilter::Income,
            "expense" => KindFilter::Expense,
            _ => KindFilter::All,
        }
    }
}

/// The full filter set of the transactions page. Fields hold the raw input
/// text; emptiness means "not filtering on this".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionFilters {
    pub search: String,
    pub category: String,
    pub date_from: String,
    pub date_to: String,
    pub amount_min: String,
    pub amount_max: String,
    pub kind: KindFilter,
}

impl TransactionFilters {
    /// Query pairs for the outgoing request, empty fields omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let mut push = |name: &'static str, value: &str| {
            let value = value.trim();
            if !value.is_empty() {
                pairs.push((name, value.to_string()));
            }
        };
        push("search", &self.search);
        push("category", &self.category);
        push("date_from", &self.date_from);
        push("date_to", &self.date_to);
        push("amount_min", &self.amount_min);
        push("amount_max", &self.amount_max);
        if let Some(kind) = self.kind.as_param() {
            pairs.push(("type", kind.to_string()));
        }
        pairs
    }

    /// Canonical encoding for cache keys: same filters, same string.
    pub fn canonical(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

impl ApiClient {
    /// GET `/api/v1/transactions/all`
    ///
    /// Out-of-range pages are not pre-validated here; the gateway's answer
    /// (e.g. an empty list) is returned as-is.
    pub async fn all_transactions(
        &self,
        user_id: &str,
        page: u32,
        limit: u32,
        filters: &TransactionFilters,
    ) -> Result<TransactionsPage, ApiError> {
        let mut query = vec![
            ("user_id", user_id.to_string()),
            ("page", page.to_string()),
            ("limit", limit.to_string()),
        ];
        query.extend(filters.query_pairs());
        self.get_json("/api/v1/transactions/all", &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_produce_no_pairs() {
        let filters = TransactionFilters::default();
        assert!(filters.query_pairs().is_empty());
        assert!(filters.is_empty());
        assert_eq!(filters.canonical(), "");
    }

    #[test]
    fn blank_fields_are_omitted_not_sent_empty() {
        let filters = TransactionFilters {
            search: "coffee".to_string(),
            category: "".to_string(),
            date_from: "   ".to_string(),
            ..Default::default()
        };
        let pairs = filters.query_pairs();
        assert_eq!(pairs, vec![("search", "coffee".to_string())]);
    }

    #[test]
    fn the_catch_all_kind_is_omitted() {
        let mut filters = TransactionFilters::default();
        assert!(filters.query_pairs().is_empty());

        filters.kind = KindFilter::Expense;
        assert_eq!(
            filters.query_pairs(),
            vec![("type", "expense".to_string())]
        );
    }

    #[test]
    fn canonical_encoding_is_stable_per_filter_set() {
        let filters = TransactionFilters {
            search: "rent".to_string(),
            kind: KindFilter::Expense,
            amount_max: "2000".to_string(),
            ..Default::default()
        };
        assert_eq!(filters.canonical(), "search=rent&amount_max=2000&type=expense");
        // identical filters encode identically (the cache key relies on it)
        assert_eq!(filters.canonical(), filters.clone().canonical());
    }

    #[test]
    fn kind_filter_round_trips_from_select_values() {
        assert_eq!(KindFilter::from_value("income"), KindFilter::Income);
        assert_eq!(KindFilter::from_value("expense"), KindFilter::Expense);
        assert_eq!(KindFilter::from_value("all"), KindFilter::All);
        assert_eq!(KindFilter::from_value("junk"), KindFilter::All);
    }
}
