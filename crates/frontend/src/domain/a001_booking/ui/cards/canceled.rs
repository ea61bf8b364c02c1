use contracts::domain::a001_booking::ViewOrder;
use leptos::prelude::*;

use super::CardShell;
use crate::shared::date_utils::format_date_opt;

/// Canceled order, kept in history with its cancellation date
#[component]
pub fn CanceledCard(order: ViewOrder) -> impl IntoView {
    let canceled_date = order.canceled_date.clone();
    let shell_order = order.clone();

    view! {
        <CardShell order=shell_order>
            <div class="order-card__body">
                <div class="order-card__row">
                    <span class="order-card__label">"Canceled"</span>
                    <span class="order-card__value">
                        {format_date_opt(canceled_date.as_deref())}
                    </span>
                </div>
            </div>
        </CardShell>
    }
}
