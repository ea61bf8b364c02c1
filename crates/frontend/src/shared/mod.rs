pub mod api_utils;
pub mod date_utils;
pub mod fetch_cache;
pub mod toast;
