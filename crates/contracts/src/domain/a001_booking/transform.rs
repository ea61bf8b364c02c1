//! Raw → view normalization for client bookings
//!
//! Pure and total: no I/O, no panics. Malformed or missing backend fields
//! degrade to the documented defaults instead of erroring, so one bad order
//! never takes down the whole list.

use super::file_size::aggregate_sizes;
use super::raw::RawOrder;
use super::view::ViewOrder;
use crate::enums::{OrderStatus, PaymentOption};

/// Round to the cent
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Normalize one backend order
pub fn transform_one(raw: RawOrder) -> ViewOrder {
    let payment_option = PaymentOption::normalize(raw.payment_option.as_deref(), raw.price);
    let status = OrderStatus::from_backend(raw.status.as_deref().unwrap_or(""));

    let amount_paid = raw.amount_paid.unwrap_or(0.0);
    let amount_remaining = round2(raw.price.unwrap_or(0.0) - amount_paid);

    // Deposit and remainder are rounded independently so they re-sum to the
    // price at cent precision instead of drifting.
    let (deposit_amount, remaining_amount) = if payment_option == PaymentOption::SplitPayment {
        let price = raw.price.unwrap_or(0.0);
        let deposit = round2(price * 0.5);
        (Some(deposit), Some(round2(price - deposit)))
    } else {
        (None, None)
    };

    let (file_count, file_size, files) = match raw.files {
        Some(files) => {
            let aggregate = aggregate_sizes(files.iter().filter_map(|f| f.size.as_deref()));
            (Some(files.len()), Some(aggregate), files)
        }
        None => (None, None, Vec::new()),
    };

    ViewOrder {
        id: raw.id,
        service_id: raw.service_id,
        service_title: raw.service_title,
        service_image: raw.service_image,
        creative_id: raw.creative_id,
        creative_name: raw.creative_name,
        order_date: raw.order_date,
        calendar_date: raw.booking_date,
        canceled_date: raw.canceled_date,
        approved_date: raw.approved_at,
        price: raw.price,
        payment_option,
        status,
        amount_paid,
        amount_remaining,
        deposit_amount,
        remaining_amount,
        file_count,
        file_size,
        files,
        invoices: raw.invoices.unwrap_or_default(),
    }
}

/// Normalize a fetched order list
pub fn transform(raw: Vec<RawOrder>) -> Vec<ViewOrder> {
    raw.into_iter().map(transform_one).collect()
}
