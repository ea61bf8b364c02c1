use contracts::domain::a001_booking::RawOrder;
use leptos::prelude::*;

use crate::shared::fetch_cache::FetchCache;

/// The per-screen order caches, constructed once at startup and handed to
/// the tabs via context. Active orders and history are independent
/// instances: invalidating one never disturbs the other.
#[derive(Clone)]
pub struct OrdersCaches {
    pub all_orders: FetchCache<Vec<RawOrder>>,
    pub history: FetchCache<Vec<RawOrder>>,
}

impl OrdersCaches {
    pub fn new() -> Self {
        Self {
            all_orders: FetchCache::browser(),
            history: FetchCache::browser(),
        }
    }

    /// Drop both screens' data, e.g. after a cancellation that moves an
    /// order from the active list into history.
    pub fn invalidate_all(&self) {
        self.all_orders.invalidate();
        self.history.invalidate();
    }
}

impl Default for OrdersCaches {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the caches to the component tree. The cache shares state via
/// `Rc`, so the handle is arena-stored with local storage.
pub fn provide_orders_caches() {
    provide_context(StoredValue::new_local(OrdersCaches::new()));
}

/// Hook to reach the caches from the order tabs
pub fn use_orders_caches() -> StoredValue<OrdersCaches, LocalStorage> {
    use_context::<StoredValue<OrdersCaches, LocalStorage>>()
        .expect("OrdersCaches not provided in context")
}
