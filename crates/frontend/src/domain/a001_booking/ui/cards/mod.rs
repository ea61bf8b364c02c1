pub mod canceled;
pub mod completed;
pub mod download;
pub mod in_progress;
pub mod locked;
pub mod payment_required;
pub mod placed;

use contracts::domain::a001_booking::ViewOrder;
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::format_date_opt;

use canceled::CanceledCard;
use completed::CompletedCard;
use download::DownloadCard;
use in_progress::InProgressCard;
use locked::LockedCard;
use payment_required::PaymentRequiredCard;
use placed::PlacedCard;

/// Select the presentation variant for a normalized order.
///
/// The match is exhaustive over [`OrderStatus`], so a status added to the
/// enum without a card here is a compile error, not a blank card at
/// runtime. Unknown backend strings never reach this point; the
/// transformer already folded them into `Placed`.
#[component]
pub fn OrderStatusCard(order: ViewOrder, on_cancel: Callback<String>) -> impl IntoView {
    match order.status {
        OrderStatus::Placed => view! { <PlacedCard order=order on_cancel=on_cancel /> }.into_any(),
        OrderStatus::PaymentRequired => {
            view! { <PaymentRequiredCard order=order on_cancel=on_cancel /> }.into_any()
        }
        OrderStatus::InProgress => {
            view! { <InProgressCard order=order on_cancel=on_cancel /> }.into_any()
        }
        OrderStatus::Locked => view! { <LockedCard order=order /> }.into_any(),
        OrderStatus::Download => view! { <DownloadCard order=order /> }.into_any(),
        OrderStatus::Completed => view! { <CompletedCard order=order /> }.into_any(),
        OrderStatus::Canceled => view! { <CanceledCard order=order /> }.into_any(),
    }
}

pub(crate) fn format_money(value: f64) -> String {
    format!("${:.2}", value)
}

/// Common card chrome: service identity, creative, status badge, order date
#[component]
pub(crate) fn CardShell(order: ViewOrder, children: Children) -> impl IntoView {
    let status = order.status;
    view! {
        <div class=format!("order-card order-card--{}", status.ui_code())>
            <div class="order-card__header">
                <span class="order-card__service">
                    {order.service_title.clone().unwrap_or_else(|| "Service".to_string())}
                </span>
                <span class=format!("order-card__badge order-card__badge--{}", status.ui_code())>
                    {status.display_name()}
                </span>
            </div>
            <div class="order-card__meta">
                <span class="order-card__creative">
                    {order.creative_name.clone().unwrap_or_else(|| "—".to_string())}
                </span>
                <span class="order-card__date">
                    "Ordered " {format_date_opt(order.order_date.as_deref())}
                </span>
            </div>
            {children()}
        </div>
    }
}

/// File summary line for the working/delivery variants.
///
/// Distinguishes "no file data yet" (section hidden) from "0 files"
/// (section shown with a zero count).
#[component]
pub(crate) fn FilesSummary(order: ViewOrder) -> impl IntoView {
    match order.file_count {
        None => view! { <></> }.into_any(),
        Some(count) => {
            let size = order.file_size.clone().unwrap_or_else(|| "0.00 KB".to_string());
            view! {
                <div class="order-card__files-summary">
                    <span class="order-card__file-count">
                        {if count == 1 { "1 file".to_string() } else { format!("{} files", count) }}
                    </span>
                    <span class="order-card__file-size">{size}</span>
                </div>
            }
            .into_any()
        }
    }
}

/// Deliverables by name, with the 0-files state rendered rather than hidden
#[component]
pub(crate) fn FileList(order: ViewOrder) -> impl IntoView {
    match order.file_count {
        None => view! { <></> }.into_any(),
        Some(0) => view! {
            <div class="order-card__files order-card__files--empty">"0 files"</div>
        }
        .into_any(),
        Some(_) => view! {
            <ul class="order-card__files">
                {order
                    .files
                    .iter()
                    .map(|file| {
                        view! {
                            <li class="order-card__file">
                                <span class="order-card__file-name">{file.name.clone()}</span>
                                <span class="order-card__file-size">
                                    {file.size.clone().unwrap_or_else(|| "—".to_string())}
                                </span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
    }
}

/// Invoices and receipts, linked when the backend provides a URL
#[component]
pub(crate) fn InvoiceList(order: ViewOrder) -> impl IntoView {
    if order.invoices.is_empty() {
        return view! { <></> }.into_any();
    }
    view! {
        <ul class="order-card__invoices">
            {order
                .invoices
                .iter()
                .map(|invoice| {
                    let label = format!("{} ({})", invoice.name, invoice.invoice_type);
                    match invoice.download_url.clone() {
                        Some(url) => view! {
                            <li class="order-card__invoice">
                                <a href=url target="_blank">{label}</a>
                            </li>
                        }
                        .into_any(),
                        None => view! {
                            <li class="order-card__invoice">{label}</li>
                        }
                        .into_any(),
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

/// Cancel action, shown only while the backend still allows cancellation
#[component]
pub(crate) fn CancelButton(order: ViewOrder, on_cancel: Callback<String>) -> impl IntoView {
    if !order.is_cancelable() {
        return view! { <></> }.into_any();
    }
    let booking_id = order.id.clone();
    view! {
        <div class="order-card__actions">
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Secondary
                on_click=move |_| on_cancel.run(booking_id.clone())
            >
                "Cancel order"
            </Button>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::format_money;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(50.0), "$50.00");
        assert_eq!(format_money(33.334), "$33.33");
        assert_eq!(format_money(0.0), "$0.00");
    }
}
