use contracts::domain::a001_booking::ViewOrder;
use leptos::prelude::*;

use super::{CancelButton, CardShell, FilesSummary};
use crate::shared::date_utils::format_date_opt;

/// Paid order the creative is actively working on
#[component]
pub fn InProgressCard(order: ViewOrder, on_cancel: Callback<String>) -> impl IntoView {
    let approved_date = order.approved_date.clone();
    let shell_order = order.clone();
    let files_order = order.clone();
    let cancel_order = order.clone();

    view! {
        <CardShell order=shell_order>
            <div class="order-card__body">
                <div class="order-card__row">
                    <span class="order-card__label">"Approved"</span>
                    <span class="order-card__value">
                        {format_date_opt(approved_date.as_deref())}
                    </span>
                </div>
                <FilesSummary order=files_order />
                <p class="order-card__hint">
                    "The creative is working on your order. Drafts show up here."
                </p>
            </div>
            <CancelButton order=cancel_order on_cancel=on_cancel />
        </CardShell>
    }
}
