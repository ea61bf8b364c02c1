pub mod context;
pub mod storage;

pub use context::{get_session, AuthProvider, AuthState};
