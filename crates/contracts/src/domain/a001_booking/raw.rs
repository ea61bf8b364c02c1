use serde::{Deserialize, Serialize};

/// Backend booking record, exactly as the REST API serializes it
///
/// Everything the backend may omit is an `Option`; dates are ISO 8601
/// strings and stay strings until the UI formats them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawOrder {
    pub id: String,
    pub service_id: Option<String>,
    pub service_title: Option<String>,
    pub service_image: Option<String>,
    pub creative_id: Option<String>,
    pub creative_name: Option<String>,
    pub order_date: Option<String>,
    pub booking_date: Option<String>,
    pub canceled_date: Option<String>,
    pub approved_at: Option<String>,
    pub price: Option<f64>,
    /// One of "upfront", "split", "later"
    pub payment_option: Option<String>,
    pub amount_paid: Option<f64>,
    /// Snake_case lifecycle status, see [`crate::enums::OrderStatus`]
    pub status: Option<String>,
    pub files: Option<Vec<RawOrderFile>>,
    pub invoices: Option<Vec<RawInvoice>>,
}

/// Deliverable attached to a booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawOrderFile {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    /// Human string from the backend, e.g. "3.2 MB"
    pub size: Option<String>,
}

/// Invoice or receipt attached to a booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInvoice {
    #[serde(rename = "type")]
    pub invoice_type: String,
    pub name: String,
    pub download_url: Option<String>,
    pub session_id: Option<String>,
}

/// `GET /api/bookings/client` and `GET /api/bookings/client/history`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientOrdersResponse {
    pub orders: Vec<RawOrder>,
}

/// `POST /api/bookings/cancel`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelBookingRequest {
    pub booking_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelBookingResponse {
    pub success: bool,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_order_deserializes_with_missing_fields() {
        let json = r#"{ "id": "bk_17", "status": "placed" }"#;
        let order: RawOrder = serde_json::from_str(json).expect("minimal order");
        assert_eq!(order.id, "bk_17");
        assert_eq!(order.status.as_deref(), Some("placed"));
        assert!(order.price.is_none());
        assert!(order.files.is_none());
        assert!(order.invoices.is_none());
    }

    #[test]
    fn test_file_and_invoice_field_renames() {
        let json = r#"{
            "id": "bk_18",
            "files": [{ "id": "f1", "name": "mix.wav", "type": "audio", "size": "3.2 MB" }],
            "invoices": [{ "type": "deposit", "name": "INV-1", "download_url": null, "session_id": "cs_123" }]
        }"#;
        let order: RawOrder = serde_json::from_str(json).expect("order with attachments");
        let files = order.files.expect("files present");
        assert_eq!(files[0].file_type.as_deref(), Some("audio"));
        let invoices = order.invoices.expect("invoices present");
        assert_eq!(invoices[0].invoice_type, "deposit");
        assert_eq!(invoices[0].session_id.as_deref(), Some("cs_123"));
    }
}
