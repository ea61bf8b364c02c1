use leptos::prelude::*;

use crate::domain::a001_booking::ui::ClientOrdersPage;
use crate::shared::toast::ToastHost;

/// Top-level page composition
///
/// The orders screen renders regardless of auth state: without a session
/// the fetchers short-circuit to empty lists, which the tabs show as their
/// empty state until the external provider signs the user in.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <main class="app-main">
            <ClientOrdersPage />
        </main>
        <ToastHost />
    }
}
