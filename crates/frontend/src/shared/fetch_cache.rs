//! Short-lived fetch cache for order lists
//!
//! A tab component mounts, fetches, and unmounts freely (tab switches,
//! dev-mode double-invocation of effects). Without coordination every mount
//! would hit the network again. Each screen owns one `FetchCache`; it keeps
//! the last successful result for a short TTL and shares an in-flight
//! future between overlapping callers, so the same logical request never
//! runs twice concurrently.
//!
//! The cache is an explicit state machine (Idle → Fetching → Ready, Ready
//! going stale by clock comparison) rather than a timer-based expiry: the
//! clock is injected, which lets tests advance virtual time.

use futures::future::{LocalBoxFuture, Shared};
use futures::FutureExt;
use std::cell::RefCell;
use std::rc::Rc;

/// Default lifetime of a cached result
pub const DEFAULT_TTL_MS: f64 = 5_000.0;

/// Millisecond clock, injectable for tests
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock backed by `Date.now()`
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

type SharedFetch<T> = Shared<LocalBoxFuture<'static, Result<T, String>>>;

enum Slot<T> {
    Idle,
    Fetching(SharedFetch<T>),
    Ready { data: T, fetched_at: f64 },
}

struct Inner<T> {
    slot: Slot<T>,
    /// Bumped on every new fetch and on invalidation; a finishing fetch only
    /// writes back if its generation is still current, so a stale completion
    /// never clobbers a newer one.
    generation: u64,
}

/// Per-screen request cache with TTL and in-flight de-duplication
///
/// Cloning is cheap and shares state; the UI is single-threaded, so
/// interior mutability is `Rc<RefCell>`.
pub struct FetchCache<T: Clone + 'static> {
    inner: Rc<RefCell<Inner<T>>>,
    clock: Rc<dyn Clock>,
    ttl_ms: f64,
}

impl<T: Clone + 'static> Clone for FetchCache<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            clock: Rc::clone(&self.clock),
            ttl_ms: self.ttl_ms,
        }
    }
}

impl<T: Clone + 'static> FetchCache<T> {
    pub fn new(clock: Rc<dyn Clock>, ttl_ms: f64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                slot: Slot::Idle,
                generation: 0,
            })),
            clock,
            ttl_ms,
        }
    }

    /// Cache on the browser wall clock with the default TTL
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserClock), DEFAULT_TTL_MS)
    }

    /// Resolve the cached value, an in-flight fetch, or a fresh fetch.
    ///
    /// `fetch_fn` is invoked only on a cache miss: a fresh result within the
    /// TTL is returned as-is, and a fetch already in flight is awaited by
    /// every caller instead of being reissued. Errors are not cached; the
    /// failing fetch resets the slot so the next caller retries, and the
    /// error is propagated to everyone awaiting the shared future.
    pub async fn request<F>(&self, fetch_fn: F) -> Result<T, String>
    where
        F: FnOnce() -> LocalBoxFuture<'static, Result<T, String>>,
    {
        enum Step<T: Clone + 'static> {
            Hit(T),
            Join(SharedFetch<T>),
            Start,
        }

        let shared = {
            let mut inner = self.inner.borrow_mut();
            let now = self.clock.now_ms();

            let step = match &inner.slot {
                Slot::Ready { data, fetched_at } if now - fetched_at < self.ttl_ms => {
                    Step::Hit(data.clone())
                }
                Slot::Fetching(in_flight) => Step::Join(in_flight.clone()),
                // Idle, or Ready past its TTL: start a fresh fetch
                _ => Step::Start,
            };

            match step {
                Step::Hit(data) => return Ok(data),
                Step::Join(in_flight) => in_flight,
                Step::Start => {
                    inner.generation += 1;
                    let generation = inner.generation;
                    // Freshness is measured from fetch start, not completion
                    let fetched_at = now;
                    let fut = fetch_fn();
                    let inner_rc = Rc::clone(&self.inner);
                    let wrapped: LocalBoxFuture<'static, Result<T, String>> = async move {
                        let result = fut.await;
                        let mut inner = inner_rc.borrow_mut();
                        if inner.generation == generation {
                            inner.slot = match &result {
                                Ok(data) => Slot::Ready {
                                    data: data.clone(),
                                    fetched_at,
                                },
                                Err(_) => Slot::Idle,
                            };
                        }
                        result
                    }
                    .boxed_local();
                    let shared = wrapped.shared();
                    inner.slot = Slot::Fetching(shared.clone());
                    shared
                }
            }
        };
        shared.await
    }

    /// Drop whatever is cached so the next `request` hits the network.
    /// Called after state-changing actions (e.g. a cancellation).
    pub fn invalidate(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.generation += 1;
        inner.slot = Slot::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use std::cell::Cell;

    #[derive(Clone)]
    struct ManualClock(Rc<Cell<f64>>);

    impl ManualClock {
        fn new() -> Self {
            Self(Rc::new(Cell::new(0.0)))
        }
        fn advance(&self, ms: f64) {
            self.0.set(self.0.get() + ms);
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> f64 {
            self.0.get()
        }
    }

    fn counting_fetch(
        calls: Rc<Cell<usize>>,
        result: Result<Vec<u32>, String>,
    ) -> impl FnOnce() -> LocalBoxFuture<'static, Result<Vec<u32>, String>> {
        move || {
            calls.set(calls.get() + 1);
            async move { result }.boxed_local()
        }
    }

    #[test]
    fn test_concurrent_requests_share_one_fetch() {
        let clock = ManualClock::new();
        let cache: FetchCache<Vec<u32>> = FetchCache::new(Rc::new(clock), DEFAULT_TTL_MS);

        let calls = Rc::new(Cell::new(0usize));
        let results: Rc<RefCell<Vec<Result<Vec<u32>, String>>>> = Rc::new(RefCell::new(Vec::new()));
        let (tx, rx) = oneshot::channel::<Result<Vec<u32>, String>>();
        let rx = rx.shared();

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        for _ in 0..2 {
            let cache = cache.clone();
            let calls = Rc::clone(&calls);
            let results = Rc::clone(&results);
            let rx = rx.clone();
            spawner
                .spawn_local(async move {
                    let out = cache
                        .request(move || {
                            calls.set(calls.get() + 1);
                            async move { rx.await.expect("sender kept alive") }.boxed_local()
                        })
                        .await;
                    results.borrow_mut().push(out);
                })
                .expect("spawn");
        }

        // Both callers are now parked on the same in-flight fetch
        pool.run_until_stalled();
        assert_eq!(calls.get(), 1);
        assert!(results.borrow().is_empty());

        tx.send(Ok(vec![7, 8])).expect("receivers alive");
        pool.run_until_stalled();

        let results = results.borrow();
        assert_eq!(results.len(), 2);
        for out in results.iter() {
            assert_eq!(out.as_ref().expect("both succeed"), &vec![7, 8]);
        }
    }

    #[test]
    fn test_fresh_result_served_without_refetch() {
        let clock = ManualClock::new();
        let cache: FetchCache<Vec<u32>> =
            FetchCache::new(Rc::new(clock.clone()), DEFAULT_TTL_MS);
        let calls = Rc::new(Cell::new(0usize));

        let first = futures::executor::block_on(
            cache.request(counting_fetch(Rc::clone(&calls), Ok(vec![1]))),
        );
        assert_eq!(first, Ok(vec![1]));
        assert_eq!(calls.get(), 1);

        clock.advance(4_999.0);
        let second = futures::executor::block_on(
            cache.request(counting_fetch(Rc::clone(&calls), Ok(vec![2]))),
        );
        // Still within TTL: cached data, fetch_fn untouched
        assert_eq!(second, Ok(vec![1]));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_ttl_expiry_refetches() {
        let clock = ManualClock::new();
        let cache: FetchCache<Vec<u32>> =
            FetchCache::new(Rc::new(clock.clone()), DEFAULT_TTL_MS);
        let calls = Rc::new(Cell::new(0usize));

        let _ = futures::executor::block_on(
            cache.request(counting_fetch(Rc::clone(&calls), Ok(vec![1]))),
        );
        clock.advance(5_000.0);
        let refreshed = futures::executor::block_on(
            cache.request(counting_fetch(Rc::clone(&calls), Ok(vec![2]))),
        );
        assert_eq!(refreshed, Ok(vec![2]));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let clock = ManualClock::new();
        let cache: FetchCache<Vec<u32>> = FetchCache::new(Rc::new(clock), DEFAULT_TTL_MS);
        let calls = Rc::new(Cell::new(0usize));

        let failed = futures::executor::block_on(cache.request(counting_fetch(
            Rc::clone(&calls),
            Err("network down".to_string()),
        )));
        assert_eq!(failed, Err("network down".to_string()));

        // The failure reset the slot, so the next caller retries immediately
        let retried = futures::executor::block_on(
            cache.request(counting_fetch(Rc::clone(&calls), Ok(vec![3]))),
        );
        assert_eq!(retried, Ok(vec![3]));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_invalidate_forces_refetch_within_ttl() {
        let clock = ManualClock::new();
        let cache: FetchCache<Vec<u32>> = FetchCache::new(Rc::new(clock), DEFAULT_TTL_MS);
        let calls = Rc::new(Cell::new(0usize));

        let _ = futures::executor::block_on(
            cache.request(counting_fetch(Rc::clone(&calls), Ok(vec![1]))),
        );
        cache.invalidate();
        let refreshed = futures::executor::block_on(
            cache.request(counting_fetch(Rc::clone(&calls), Ok(vec![4]))),
        );
        assert_eq!(refreshed, Ok(vec![4]));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_stale_completion_does_not_clobber_newer_fetch() {
        let clock = ManualClock::new();
        let cache: FetchCache<Vec<u32>> = FetchCache::new(Rc::new(clock), DEFAULT_TTL_MS);

        let (tx_old, rx_old) = oneshot::channel::<Result<Vec<u32>, String>>();
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        {
            let cache = cache.clone();
            spawner
                .spawn_local(async move {
                    let _ = cache
                        .request(move || {
                            async move { rx_old.await.expect("sender kept alive") }.boxed_local()
                        })
                        .await;
                })
                .expect("spawn");
        }
        pool.run_until_stalled();

        // A cancellation invalidates while the old fetch is still in flight,
        // and a new fetch resolves first.
        cache.invalidate();
        let fresh = {
            let cache = cache.clone();
            futures::executor::block_on(
                cache.request(|| async move { Ok(vec![9]) }.boxed_local()),
            )
        };
        assert_eq!(fresh, Ok(vec![9]));

        // Old fetch finally lands with outdated data
        tx_old.send(Ok(vec![1])).expect("receiver alive");
        pool.run_until_stalled();

        // The newer result is still what the cache serves
        let calls = Rc::new(Cell::new(0usize));
        let served = futures::executor::block_on(
            cache.request(counting_fetch(Rc::clone(&calls), Ok(vec![0]))),
        );
        assert_eq!(served, Ok(vec![9]));
        assert_eq!(calls.get(), 0);
    }
}
