use serde::{Deserialize, Serialize};

use super::raw::{RawInvoice, RawOrderFile};
use crate::enums::{OrderStatus, PaymentOption};

/// Normalized, UI-ready booking record
///
/// Produced once per fetch by [`super::transform::transform`]; components
/// only ever see this shape, never [`super::raw::RawOrder`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewOrder {
    pub id: String,
    pub service_id: Option<String>,
    pub service_title: Option<String>,
    pub service_image: Option<String>,
    pub creative_id: Option<String>,
    pub creative_name: Option<String>,
    pub order_date: Option<String>,
    /// Booking slot shown on the calendar; `None` when no slot was chosen
    pub calendar_date: Option<String>,
    pub canceled_date: Option<String>,
    pub approved_date: Option<String>,
    pub price: Option<f64>,
    pub payment_option: PaymentOption,
    pub status: OrderStatus,
    pub amount_paid: f64,
    pub amount_remaining: f64,
    /// Set only for split payments: half the price, rounded to the cent
    pub deposit_amount: Option<f64>,
    /// Set only for split payments: price minus the deposit
    pub remaining_amount: Option<f64>,
    /// `Some(0)` means the backend sent an empty files array (show "0
    /// files"); `None` means it sent no file data at all (hide the section)
    pub file_count: Option<usize>,
    /// Aggregate of all file sizes, present whenever file data is present
    pub file_size: Option<String>,
    pub files: Vec<RawOrderFile>,
    pub invoices: Vec<RawInvoice>,
}

impl ViewOrder {
    /// Payment option as the payment-required card renders it
    pub fn payment_request_option(&self) -> PaymentOption {
        self.payment_option.constrain_for_payment_request()
    }

    pub fn has_file_data(&self) -> bool {
        self.file_count.is_some()
    }

    pub fn is_cancelable(&self) -> bool {
        self.status.is_cancelable()
    }
}
