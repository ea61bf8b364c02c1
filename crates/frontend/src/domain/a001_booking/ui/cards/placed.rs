use contracts::domain::a001_booking::ViewOrder;
use leptos::prelude::*;

use super::{CancelButton, CardShell};
use crate::shared::date_utils::format_date_opt;

/// Order received by the creative, waiting for approval
#[component]
pub fn PlacedCard(order: ViewOrder, on_cancel: Callback<String>) -> impl IntoView {
    let calendar_date = order.calendar_date.clone();
    let payment_label = order.payment_option.display_name();
    let shell_order = order.clone();
    let cancel_order = order.clone();

    view! {
        <CardShell order=shell_order>
            <div class="order-card__body">
                <div class="order-card__row">
                    <span class="order-card__label">"Session date"</span>
                    <span class="order-card__value">
                        {format_date_opt(calendar_date.as_deref())}
                    </span>
                </div>
                <div class="order-card__row">
                    <span class="order-card__label">"Payment"</span>
                    <span class="order-card__value">{payment_label}</span>
                </div>
                <p class="order-card__hint">
                    "Waiting for the creative to confirm your booking."
                </p>
            </div>
            <CancelButton order=cancel_order on_cancel=on_cancel />
        </CardShell>
    }
}
