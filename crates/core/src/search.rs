//! Ordered fallback search
//!
//! A search is an ordered list of tiers. Each tier is a lazily started future
//! yielding `Option<Vec<T>>`; `None` or an empty vector means "nothing here,
//! try the next tier". Tiers run strictly one after another and later tiers
//! are never started once one has produced results.

use futures::future::BoxFuture;
use std::future::Future;

type TierFn<'a, T> = Box<dyn FnOnce() -> BoxFuture<'a, Option<Vec<T>>> + Send + 'a>;

/// One named strategy in a [`SearchChain`]
pub struct Tier<'a, T> {
    name: &'static str,
    run: TierFn<'a, T>,
}

impl<'a, T> Tier<'a, T> {
    pub fn new<F, Fut>(name: &'static str, run: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'a,
        Fut: Future<Output = Option<Vec<T>>> + Send + 'a,
    {
        Self {
            name,
            run: Box::new(move || Box::pin(run())),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Result of running a chain
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<T> {
    /// Tier that produced the results, `None` when every tier came up empty
    pub tier: Option<&'static str>,
    pub results: Vec<T>,
}

impl<T> SearchOutcome<T> {
    pub fn empty() -> Self {
        Self {
            tier: None,
            results: Vec::new(),
        }
    }
}

/// Run tiers in order and stop at the first one with results
pub async fn first_successful<T>(tiers: Vec<Tier<'_, T>>) -> SearchOutcome<T> {
    for tier in tiers {
        match (tier.run)().await {
            Some(results) if !results.is_empty() => {
                return SearchOutcome {
                    tier: Some(tier.name),
                    results,
                };
            }
            _ => continue,
        }
    }

    SearchOutcome::empty()
}

/// Builder over [`first_successful`]
pub struct SearchChain<'a, T> {
    tiers: Vec<Tier<'a, T>>,
}

impl<'a, T> Default for SearchChain<'a, T> {
    fn default() -> Self {
        Self { tiers: Vec::new() }
    }
}

impl<'a, T> SearchChain<'a, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tier<F, Fut>(mut self, name: &'static str, run: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'a,
        Fut: Future<Output = Option<Vec<T>>> + Send + 'a,
    {
        self.tiers.push(Tier::new(name, run));
        self
    }

    pub fn tier_names(&self) -> Vec<&'static str> {
        self.tiers.iter().map(Tier::name).collect()
    }

    pub async fn run(self) -> SearchOutcome<T> {
        first_successful(self.tiers).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_tier(
        log: &Arc<Mutex<Vec<&'static str>>>,
        name: &'static str,
        result: Option<Vec<u32>>,
    ) -> Tier<'static, u32> {
        let log = Arc::clone(log);
        Tier::new(name, move || async move {
            log.lock().unwrap().push(name);
            result
        })
    }

    #[tokio::test]
    async fn test_stops_at_first_non_empty_tier() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let outcome = first_successful(vec![
            recording_tier(&log, "direct", None),
            recording_tier(&log, "filter", Some(vec![1, 2])),
            recording_tier(&log, "scan", Some(vec![3])),
        ])
        .await;

        assert_eq!(outcome.tier, Some("filter"));
        assert_eq!(outcome.results, vec![1, 2]);
        assert_eq!(*log.lock().unwrap(), vec!["direct", "filter"]);
    }

    #[tokio::test]
    async fn test_empty_result_falls_through() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let outcome = first_successful(vec![
            recording_tier(&log, "direct", Some(vec![])),
            recording_tier(&log, "scan", Some(vec![9])),
        ])
        .await;

        assert_eq!(outcome.tier, Some("scan"));
        assert_eq!(*log.lock().unwrap(), vec!["direct", "scan"]);
    }

    #[tokio::test]
    async fn test_all_tiers_empty() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let outcome = first_successful(vec![
            recording_tier(&log, "direct", None),
            recording_tier(&log, "scan", Some(vec![])),
        ])
        .await;

        assert_eq!(outcome, SearchOutcome::empty());
        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_first_tier_short_circuits() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let outcome = SearchChain::new()
            .tier("direct", {
                let log = Arc::clone(&log);
                move || async move {
                    log.lock().unwrap().push("direct");
                    Some(vec![25u32])
                }
            })
            .tier("scan", {
                let log = Arc::clone(&log);
                move || async move {
                    log.lock().unwrap().push("scan");
                    Some(vec![26u32])
                }
            })
            .run()
            .await;

        assert_eq!(outcome.results, vec![25]);
        assert_eq!(*log.lock().unwrap(), vec!["direct"]);
    }

    #[test]
    fn test_tier_names_keep_order() {
        let chain: SearchChain<'_, u32> = SearchChain::new()
            .tier("direct", || async { None })
            .tier("name-filter", || async { None })
            .tier("list-filter", || async { None });

        assert_eq!(
            chain.tier_names(),
            vec!["direct", "name-filter", "list-filter"]
        );
    }
}
