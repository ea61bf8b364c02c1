pub mod api;
pub mod caches;
pub mod ui;
