pub mod cards;
pub mod list;

pub use list::ClientOrdersPage;
