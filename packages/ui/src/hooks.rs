//! Data-fetch plumbing shared by every page: reads resolve through the
//! query cache, writes apply the mutation invalidation table afterwards.

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;

use api::ApiError;
use store::{Mutation, QueryCache, QueryKey};

/// Render-ready request state. A tagged variant instead of `is_loading` /
/// `is_error` flag pairs, so match arms cover every case.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> QueryState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => QueryState::Ready(value),
            Err(e) => QueryState::Failed(e.to_string()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            QueryState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }
}

/// Resolve one read query through the cache.
///
/// A fresh cached value short-circuits without touching the network. On a
/// miss the fetch runs, with a single retry — the only automatic retry in
/// the client — before the error surfaces to the caller.
pub async fn cached_query<T, F, Fut>(
    cache: &QueryCache,
    key: QueryKey,
    fetch: F,
) -> Result<T, ApiError>
where
    T: Serialize + DeserializeOwned,
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let now = store::time::now_millis();
    if let Some(hit) = cache.get_fresh::<T>(&key, now) {
        tracing::debug!(?key, "query cache hit");
        return Ok(hit);
    }

    let value = match fetch().await {
        Ok(value) => value,
        Err(first) => {
            tracing::warn!(?key, "query failed, retrying once: {first}");
            fetch().await?
        }
    };

    cache.put(key, &value, store::time::now_millis());
    Ok(value)
}

/// Run a write request; on success apply its invalidation set to the cache.
/// Failed mutations leave the cache untouched.
pub async fn run_mutation<T, Fut>(
    cache: &QueryCache,
    mutation: Mutation,
    request: Fut,
) -> Result<T, ApiError>
where
    Fut: Future<Output = Result<T, ApiError>>,
{
    let value = request.await?;
    cache.apply(mutation);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn key() -> QueryKey {
        QueryKey::DashboardSummary {
            user_id: "u1".to_string(),
        }
    }

    fn counting_fetch(
        calls: &Rc<Cell<u32>>,
        results: &'static [Result<u32, u16>],
    ) -> impl Fn() -> std::pin::Pin<Box<dyn Future<Output = Result<u32, ApiError>>>> {
        let calls = calls.clone();
        move || {
            let n = calls.get();
            calls.set(n + 1);
            let outcome = results[n as usize % results.len()];
            Box::pin(async move {
                outcome.map_err(|status| ApiError::Http {
                    status,
                    message: "boom".to_string(),
                })
            })
        }
    }

    #[tokio::test]
    async fn second_read_within_the_window_is_a_cache_hit() {
        let cache = QueryCache::new();
        let calls = Rc::new(Cell::new(0));
        let fetch = counting_fetch(&calls, &[Ok(7)]);

        let first = cached_query(&cache, key(), &fetch).await.unwrap();
        let second = cached_query(&cache, key(), &fetch).await.unwrap();

        assert_eq!(first, 7);
        assert_eq!(second, 7);
        assert_eq!(calls.get(), 1, "only one network call for two reads");
    }

    #[tokio::test]
    async fn a_failed_fetch_is_retried_exactly_once() {
        let cache = QueryCache::new();
        let calls = Rc::new(Cell::new(0));
        // first attempt fails, the retry succeeds
        let fetch = counting_fetch(&calls, &[Err(500), Ok(3)]);

        let value = cached_query(&cache, key(), &fetch).await.unwrap();
        assert_eq!(value, 3);
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn persistent_failure_surfaces_after_the_single_retry() {
        let cache = QueryCache::new();
        let calls = Rc::new(Cell::new(0));
        let fetch = counting_fetch(&calls, &[Err(500)]);

        let result = cached_query(&cache, key(), &fetch).await;
        assert!(result.is_err());
        assert_eq!(calls.get(), 2, "one attempt plus one retry, nothing more");
        // nothing was cached
        assert!(cache.get_fresh::<u32>(&key(), store::time::now_millis()).is_none());
    }

    #[tokio::test]
    async fn invalidation_forces_a_refetch() {
        let cache = QueryCache::new();
        let calls = Rc::new(Cell::new(0));
        let fetch = counting_fetch(&calls, &[Ok(1)]);

        cached_query(&cache, key(), &fetch).await.unwrap();
        cache.apply(Mutation::AddTransaction);
        cached_query(&cache, key(), &fetch).await.unwrap();

        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn successful_mutation_applies_its_invalidation_set() {
        let cache = QueryCache::new();
        cache.put(key(), &9u32, store::time::now_millis());

        let result: Result<(), ApiError> =
            run_mutation(&cache, Mutation::AddTransaction, async { Ok(()) }).await;
        assert!(result.is_ok());
        assert!(cache.get_fresh::<u32>(&key(), store::time::now_millis()).is_none());
    }

    #[tokio::test]
    async fn failed_mutation_leaves_the_cache_alone() {
        let cache = QueryCache::new();
        cache.put(key(), &9u32, store::time::now_millis());

        let result: Result<(), ApiError> = run_mutation(&cache, Mutation::AddTransaction, async {
            Err(ApiError::Network("offline".to_string()))
        })
        .await;
        assert!(result.is_err());
        assert_eq!(
            cache.get_fresh::<u32>(&key(), store::time::now_millis()),
            Some(9)
        );
    }

    #[test]
    fn query_state_matches_exhaustively() {
        let ready = QueryState::from_result(Ok(5u32));
        assert_eq!(ready.ready(), Some(&5));
        assert!(!ready.is_loading());

        let failed: QueryState<u32> = QueryState::from_result(Err(ApiError::Network(
            "connection reset".to_string(),
        )));
        assert!(matches!(failed, QueryState::Failed(_)));
    }
}
