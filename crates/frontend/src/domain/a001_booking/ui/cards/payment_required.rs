use contracts::domain::a001_booking::ViewOrder;
use contracts::enums::PaymentOption;
use leptos::prelude::*;

use super::{format_money, CancelButton, CardShell};

/// Booking approved, payment due before work starts
///
/// Renders only the upfront and split flows; any other option the order
/// carries is coerced to upfront by
/// [`PaymentOption::constrain_for_payment_request`].
#[component]
pub fn PaymentRequiredCard(order: ViewOrder, on_cancel: Callback<String>) -> impl IntoView {
    let option = order.payment_request_option();
    let price = order.price.unwrap_or(0.0);
    let amount_paid = order.amount_paid;
    let deposit = order.deposit_amount;
    let remaining = order.remaining_amount;
    let shell_order = order.clone();
    let cancel_order = order.clone();

    let amounts = match option {
        PaymentOption::SplitPayment => view! {
            <div class="order-card__row">
                <span class="order-card__label">"Deposit due now"</span>
                <span class="order-card__value">
                    {format_money(deposit.unwrap_or(0.0))}
                </span>
            </div>
            <div class="order-card__row">
                <span class="order-card__label">"Due on completion"</span>
                <span class="order-card__value">
                    {format_money(remaining.unwrap_or(0.0))}
                </span>
            </div>
        }
        .into_any(),
        _ => view! {
            <div class="order-card__row">
                <span class="order-card__label">"Due now"</span>
                <span class="order-card__value">{format_money(price)}</span>
            </div>
        }
        .into_any(),
    };

    view! {
        <CardShell order=shell_order>
            <div class="order-card__body">
                {amounts}
                <div class="order-card__row">
                    <span class="order-card__label">"Paid so far"</span>
                    <span class="order-card__value">{format_money(amount_paid)}</span>
                </div>
                <p class="order-card__hint">
                    "Complete the payment to move your order into production."
                </p>
            </div>
            <CancelButton order=cancel_order on_cancel=on_cancel />
        </CardShell>
    }
}
