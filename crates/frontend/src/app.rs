use leptos::prelude::*;

use crate::domain::a001_booking::caches::provide_orders_caches;
use crate::routes::routes::AppRoutes;
use crate::shared::toast::ToastService;
use crate::system::auth::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Order caches live for the whole app session; tabs share them across
    // remounts, which is the whole point of the fetch cache.
    provide_orders_caches();

    // Centralized toast reporting for non-auth request failures
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
