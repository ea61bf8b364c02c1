pub mod order_status;
pub mod payment_option;

pub use order_status::OrderStatus;
pub use payment_option::PaymentOption;
