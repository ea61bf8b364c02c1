pub mod all_orders;
pub mod history;

use leptos::prelude::*;

use all_orders::AllOrdersTab;
use history::HistoryTab;

/// Client-facing orders screen with the two list tabs
#[component]
pub fn ClientOrdersPage() -> impl IntoView {
    let (active_tab, set_active_tab) = signal("orders");

    let tab_class = move |tab: &'static str| {
        if active_tab.get() == tab {
            "orders-page__tab orders-page__tab--active"
        } else {
            "orders-page__tab"
        }
    };

    view! {
        <div class="orders-page">
            <h2 class="orders-page__title">"Your orders"</h2>
            <div class="orders-page__tabs">
                <button class=move || tab_class("orders") on:click=move |_| set_active_tab.set("orders")>
                    "Active orders"
                </button>
                <button class=move || tab_class("history") on:click=move |_| set_active_tab.set("history")>
                    "History"
                </button>
            </div>
            {move || match active_tab.get() {
                "history" => view! { <HistoryTab /> }.into_any(),
                _ => view! { <AllOrdersTab /> }.into_any(),
            }}
        </div>
    }
}
