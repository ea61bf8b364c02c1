use serde::{Deserialize, Serialize};

/// How a client pays for a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentOption {
    Free,
    PaymentUpfront,
    SplitPayment,
    PaymentLater,
}

impl PaymentOption {
    /// Normalize the backend's `payment_option` against the order price.
    ///
    /// A zero or absent price always means a free booking, whatever the
    /// backend sent in `payment_option`.
    pub fn normalize(raw: Option<&str>, price: Option<f64>) -> Self {
        if price.unwrap_or(0.0) == 0.0 {
            return PaymentOption::Free;
        }
        match raw {
            Some("upfront") => PaymentOption::PaymentUpfront,
            Some("split") => PaymentOption::SplitPayment,
            Some("later") => PaymentOption::PaymentLater,
            _ => PaymentOption::PaymentUpfront,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            PaymentOption::Free => "free",
            PaymentOption::PaymentUpfront => "payment_upfront",
            PaymentOption::SplitPayment => "split_payment",
            PaymentOption::PaymentLater => "payment_later",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentOption::Free => "Free",
            PaymentOption::PaymentUpfront => "Pay in full",
            PaymentOption::SplitPayment => "Split payment",
            PaymentOption::PaymentLater => "Pay later",
        }
    }

    /// Constrain the option for the payment-required card.
    ///
    /// That card only knows how to render upfront and split flows. The
    /// backend's canonical `payment_required` status should never carry
    /// another option; if one slips through we deliberately misrepresent it
    /// as upfront (matching the shipped behavior) and log the rewrite so the
    /// case is observable.
    pub fn constrain_for_payment_request(&self) -> Self {
        match self {
            PaymentOption::PaymentUpfront | PaymentOption::SplitPayment => *self,
            other => {
                log::warn!(
                    "payment-required order carried option '{}', coercing to payment_upfront",
                    other.code()
                );
                PaymentOption::PaymentUpfront
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_or_missing_price_forces_free() {
        assert_eq!(
            PaymentOption::normalize(Some("split"), Some(0.0)),
            PaymentOption::Free
        );
        assert_eq!(
            PaymentOption::normalize(Some("upfront"), None),
            PaymentOption::Free
        );
        assert_eq!(
            PaymentOption::normalize(Some("later"), Some(0.0)),
            PaymentOption::Free
        );
    }

    #[test]
    fn test_normalize_with_price() {
        assert_eq!(
            PaymentOption::normalize(Some("upfront"), Some(50.0)),
            PaymentOption::PaymentUpfront
        );
        assert_eq!(
            PaymentOption::normalize(Some("split"), Some(50.0)),
            PaymentOption::SplitPayment
        );
        assert_eq!(
            PaymentOption::normalize(Some("later"), Some(50.0)),
            PaymentOption::PaymentLater
        );
        // Unknown option on a priced order defaults to upfront
        assert_eq!(
            PaymentOption::normalize(Some("installments"), Some(50.0)),
            PaymentOption::PaymentUpfront
        );
        assert_eq!(
            PaymentOption::normalize(None, Some(50.0)),
            PaymentOption::PaymentUpfront
        );
    }

    #[test]
    fn test_constrain_for_payment_request() {
        assert_eq!(
            PaymentOption::SplitPayment.constrain_for_payment_request(),
            PaymentOption::SplitPayment
        );
        assert_eq!(
            PaymentOption::PaymentUpfront.constrain_for_payment_request(),
            PaymentOption::PaymentUpfront
        );
        assert_eq!(
            PaymentOption::PaymentLater.constrain_for_payment_request(),
            PaymentOption::PaymentUpfront
        );
        assert_eq!(
            PaymentOption::Free.constrain_for_payment_request(),
            PaymentOption::PaymentUpfront
        );
    }
}
