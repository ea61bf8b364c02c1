pub mod file_size;
pub mod raw;
pub mod transform;
pub mod view;

pub use raw::{
    CancelBookingRequest, CancelBookingResponse, ClientOrdersResponse, RawInvoice, RawOrder,
    RawOrderFile,
};
pub use transform::transform;
pub use view::ViewOrder;
