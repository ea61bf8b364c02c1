use serde::{Deserialize, Serialize};

/// Lifecycle status of a client booking
///
/// Transitions are performed server-side; the frontend only observes them
/// via re-fetch. The flow is
/// placed → payment-required → in-progress → locked → download → completed,
/// with canceled reachable from placed, payment-required and in-progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Placed,
    PaymentRequired,
    InProgress,
    Locked,
    Download,
    Completed,
    Canceled,
}

impl OrderStatus {
    /// Parse the backend's snake_case status string.
    ///
    /// Unknown values land in [`OrderStatus::fallback`] so a new backend
    /// status never propagates an unmapped string into the UI.
    pub fn from_backend(status: &str) -> Self {
        match status {
            "placed" => OrderStatus::Placed,
            "payment_required" => OrderStatus::PaymentRequired,
            "in_progress" => OrderStatus::InProgress,
            "locked" => OrderStatus::Locked,
            "download" => OrderStatus::Download,
            "completed" => OrderStatus::Completed,
            "canceled" => OrderStatus::Canceled,
            other => Self::fallback(other),
        }
    }

    /// Named fallback for statuses this build does not know about.
    fn fallback(raw: &str) -> Self {
        log::warn!("unknown booking status '{}', treating as placed", raw);
        OrderStatus::Placed
    }

    /// Hyphenated code used in UI routing and CSS hooks
    pub fn ui_code(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::PaymentRequired => "payment-required",
            OrderStatus::InProgress => "in-progress",
            OrderStatus::Locked => "locked",
            OrderStatus::Download => "download",
            OrderStatus::Completed => "completed",
            OrderStatus::Canceled => "canceled",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::PaymentRequired => "Payment required",
            OrderStatus::InProgress => "In progress",
            OrderStatus::Locked => "Locked",
            OrderStatus::Download => "Ready to download",
            OrderStatus::Completed => "Completed",
            OrderStatus::Canceled => "Canceled",
        }
    }

    /// Cancellation is only offered before work is locked in
    pub fn is_cancelable(&self) -> bool {
        matches!(
            self,
            OrderStatus::Placed | OrderStatus::PaymentRequired | OrderStatus::InProgress
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_backend_known_values() {
        assert_eq!(OrderStatus::from_backend("placed"), OrderStatus::Placed);
        assert_eq!(
            OrderStatus::from_backend("payment_required"),
            OrderStatus::PaymentRequired
        );
        assert_eq!(
            OrderStatus::from_backend("in_progress"),
            OrderStatus::InProgress
        );
        assert_eq!(OrderStatus::from_backend("locked"), OrderStatus::Locked);
        assert_eq!(OrderStatus::from_backend("download"), OrderStatus::Download);
        assert_eq!(
            OrderStatus::from_backend("completed"),
            OrderStatus::Completed
        );
        assert_eq!(OrderStatus::from_backend("canceled"), OrderStatus::Canceled);
    }

    #[test]
    fn test_unknown_status_falls_back_to_placed() {
        assert_eq!(OrderStatus::from_backend("refunded"), OrderStatus::Placed);
        assert_eq!(OrderStatus::from_backend(""), OrderStatus::Placed);
        assert_eq!(
            OrderStatus::from_backend("PAYMENT_REQUIRED"),
            OrderStatus::Placed
        );
    }

    #[test]
    fn test_ui_code_hyphenation() {
        assert_eq!(OrderStatus::PaymentRequired.ui_code(), "payment-required");
        assert_eq!(OrderStatus::InProgress.ui_code(), "in-progress");
        assert_eq!(OrderStatus::Placed.ui_code(), "placed");
    }

    #[test]
    fn test_cancelable_statuses() {
        assert!(OrderStatus::Placed.is_cancelable());
        assert!(OrderStatus::PaymentRequired.is_cancelable());
        assert!(OrderStatus::InProgress.is_cancelable());
        assert!(!OrderStatus::Locked.is_cancelable());
        assert!(!OrderStatus::Completed.is_cancelable());
    }
}
