use contracts::domain::a001_booking::ViewOrder;
use leptos::prelude::*;

use super::{CardShell, FileList, FilesSummary, InvoiceList};

/// Balance settled, deliverables available to the client
#[component]
pub fn DownloadCard(order: ViewOrder) -> impl IntoView {
    let shell_order = order.clone();
    let summary_order = order.clone();
    let files_order = order.clone();
    let invoices_order = order.clone();

    view! {
        <CardShell order=shell_order>
            <div class="order-card__body">
                <FilesSummary order=summary_order />
                <FileList order=files_order />
                <InvoiceList order=invoices_order />
                <p class="order-card__hint">
                    "Everything is paid for. Grab your files while they are hosted."
                </p>
            </div>
        </CardShell>
    }
}
