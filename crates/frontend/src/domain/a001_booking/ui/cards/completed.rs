use contracts::domain::a001_booking::ViewOrder;
use leptos::prelude::*;

use super::{CardShell, FileList, FilesSummary, InvoiceList};
use crate::shared::date_utils::format_date_opt;

/// Closed order; files and invoices stay browsable from history
#[component]
pub fn CompletedCard(order: ViewOrder) -> impl IntoView {
    let approved_date = order.approved_date.clone();
    let shell_order = order.clone();
    let summary_order = order.clone();
    let files_order = order.clone();
    let invoices_order = order.clone();

    view! {
        <CardShell order=shell_order>
            <div class="order-card__body">
                <div class="order-card__row">
                    <span class="order-card__label">"Approved"</span>
                    <span class="order-card__value">
                        {format_date_opt(approved_date.as_deref())}
                    </span>
                </div>
                <FilesSummary order=summary_order />
                <FileList order=files_order />
                <InvoiceList order=invoices_order />
            </div>
        </CardShell>
    }
}
