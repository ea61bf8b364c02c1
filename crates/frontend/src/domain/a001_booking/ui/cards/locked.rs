use contracts::domain::a001_booking::ViewOrder;
use leptos::prelude::*;

use super::{format_money, CardShell, FilesSummary};
use crate::shared::date_utils::format_date_opt;

/// Deliverables are ready but held until the remaining balance clears
#[component]
pub fn LockedCard(order: ViewOrder) -> impl IntoView {
    let approved_date = order.approved_date.clone();
    let amount_remaining = order.amount_remaining;
    let shell_order = order.clone();
    let files_order = order.clone();

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
                <div class="order-card__row">
                    <span class="order-card__label">"Outstanding balance"</span>
                    <span class="order-card__value">{format_money(amount_remaining)}</span>
                </div>
                <p class="order-card__hint">
                    "Your files are ready and unlock once the balance is settled."
                </p>
            </div>
        </CardShell>
    }
}
