//! Order-preserving concurrent map.
//!
//! [`FanOut`] drives one future per input item on the calling task and
//! returns the outputs in input order, regardless of completion order.

use std::future::Future;
use std::num::NonZeroUsize;

use futures::future::join_all;
use futures::stream::{self, StreamExt};

/// Concurrency policy for a batch of independent sub-requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanOut {
    limit: Option<NonZeroUsize>,
}

impl FanOut {
    /// Start every item at once.
    pub fn unbounded() -> Self {
        Self { limit: None }
    }

    /// Keep at most `limit` items in flight.
    pub fn limited(limit: NonZeroUsize) -> Self {
        Self { limit: Some(limit) }
    }

    /// Build from an optional configured cap. `None` and `Some(0)` are
    /// unbounded.
    pub fn from_limit(limit: Option<usize>) -> Self {
        Self {
            limit: limit.and_then(NonZeroUsize::new),
        }
    }

    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }

    /// Apply `f` to every item concurrently and collect results in input order.
    pub async fn map<T, R, F, Fut>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        F: FnMut(T) -> Fut,
        Fut: Future<Output = R>,
    {
        match self.limit {
            None => join_all(items.into_iter().map(f)).await,
            Some(limit) => stream::iter(items).map(f).buffered(limit.get()).collect().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    /// Later items finish first; output must still follow input order.
    async fn delayed_echo(n: u64) -> u64 {
        tokio::time::sleep(Duration::from_millis(50 - n * 10)).await;
        n
    }

    #[tokio::test]
    async fn unbounded_preserves_input_order() {
        let out = FanOut::unbounded().map(vec![0, 1, 2, 3, 4], delayed_echo).await;
        assert_eq!(out, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn limited_preserves_input_order() {
        let limit = NonZeroUsize::new(2).unwrap();
        let out = FanOut::limited(limit).map(vec![0, 1, 2, 3, 4], delayed_echo).await;
        assert_eq!(out, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn empty_input_yields_empty_output() {
        let out: Vec<u64> = FanOut::unbounded().map(Vec::new(), delayed_echo).await;
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn unbounded_runs_all_items_concurrently() {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        FanOut::unbounded()
            .map((0..8).collect::<Vec<_>>(), |_| {
                let in_flight = in_flight.clone();
                let peak = peak.clone();
                async move {
                    let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    in_flight.fetch_sub(1, Ordering::SeqCst);
                }
            })
            .await;

        assert_eq!(peak.load(Ordering::SeqCst), 8);
    }

    #[tokio::test]
    async fn limited_caps_items_in_flight() {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        FanOut::from_limit(Some(3))
            .map((0..10).collect::<Vec<_>>(), |_| {
                let in_flight = in_flight.clone();
                let peak = peak.clone();
                async move {
                    let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    in_flight.fetch_sub(1, Ordering::SeqCst);
                }
            })
            .await;

        assert!(peak.load(Ordering::SeqCst) <= 3);
    }

    #[test]
    fn zero_limit_means_unbounded() {
        assert_eq!(FanOut::from_limit(Some(0)), FanOut::unbounded());
        assert_eq!(FanOut::from_limit(None).limit(), None);
        assert_eq!(FanOut::from_limit(Some(4)).limit().map(|n| n.get()), Some(4));
    }
}
