use contracts::domain::a001_booking::{transform, RawOrder, ViewOrder};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_booking::api;
use crate::domain::a001_booking::caches::use_orders_caches;
use crate::domain::a001_booking::ui::cards::OrderStatusCard;
use crate::shared::toast::use_toasts;
use crate::system::auth::get_session;

fn fetch() -> LocalBoxFuture<'static, Result<Vec<RawOrder>, String>> {
    api::fetch_client_orders().boxed_local()
}

/// Active orders of the signed-in client
#[component]
pub fn AllOrdersTab() -> impl IntoView {
    let caches = use_orders_caches();
    let toasts = use_toasts();

    let (orders, set_orders) = signal::<Vec<ViewOrder>>(Vec::new());
    let (loading, set_loading) = signal(true);

    let load = move || {
        // Not signed in yet: empty state, and the cache stays untouched
        if get_session().is_none() {
            set_orders.try_set(Vec::new());
            set_loading.try_set(false);
            return;
        }
        let cache = caches.get_value().all_orders;
        spawn_local(async move {
            // try_set throughout: the tab may unmount while we await, and a
            // disposed signal must be ignored, not written to
            set_loading.try_set(true);
            match cache.request(fetch).await {
                Ok(raw) => {
                    set_orders.try_set(transform(raw));
                }
                Err(e) => {
                    log!("Failed to load orders: {}", e);
                    toasts.error(format!("Could not load your orders: {}", e));
                    // keep whatever was on screen; first load stays empty
                }
            }
            set_loading.try_set(false);
        });
    };

    Effect::new(move |_| load());

    let on_cancel = Callback::new(move |booking_id: String| {
        spawn_local(async move {
            match api::cancel_booking(booking_id).await {
                Ok(_) => {
                    // the order moved server-side; both lists are stale now
                    caches.get_value().invalidate_all();
                    load();
                }
                Err(e) => {
                    log!("Cancel failed: {}", e);
                    toasts.error(format!("Could not cancel the order: {}", e));
                }
            }
        });
    });

    view! {
        <div class="orders-tab orders-tab--active-orders">
            <div class="orders-tab__toolbar">
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        caches.get_value().all_orders.invalidate();
                        load();
                    }
                >
                    "Refresh"
                </Button>
            </div>
            {move || {
                if loading.get() {
                    return view! { <div class="orders-tab__loading">"Loading orders..."</div> }
                        .into_any();
                }
                let list = orders.get();
                if list.is_empty() {
                    return view! { <div class="orders-tab__empty">"No active orders yet."</div> }
                        .into_any();
                }
                view! {
                    <div class="orders-tab__list">
                        {list
                            .into_iter()
                            .map(|order| view! { <OrderStatusCard order=order on_cancel=on_cancel /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
