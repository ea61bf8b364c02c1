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
    api::fetch_client_history().boxed_local()
}

/// Completed and canceled orders; terminal, so no cancel action ever shows
#[component]
pub fn HistoryTab() -> impl IntoView {
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
        let cache = caches.get_value().history;
        spawn_local(async move {
            set_loading.try_set(true);
            match cache.request(fetch).await {
                Ok(raw) => {
                    set_orders.try_set(transform(raw));
                }
                Err(e) => {
                    log!("Failed to load order history: {}", e);
                    toasts.error(format!("Could not load your order history: {}", e));
                }
            }
            set_loading.try_set(false);
        });
    };

    Effect::new(move |_| load());

    // History cards are terminal; the dispatcher still wants the callback
    let on_cancel = Callback::new(move |booking_id: String| {
        log!("cancel requested for terminal order {}, ignoring", booking_id);
    });

    view! {
        <div class="orders-tab orders-tab--history">
            <div class="orders-tab__toolbar">
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        caches.get_value().history.invalidate();
                        load();
                    }
                >
                    "Refresh"
                </Button>
            </div>
            {move || {
                if loading.get() {
                    return view! { <div class="orders-tab__loading">"Loading history..."</div> }
                        .into_any();
                }
                let list = orders.get();
                if list.is_empty() {
                    return view! { <div class="orders-tab__empty">"No past orders yet."</div> }
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
