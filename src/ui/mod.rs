pub mod app;
pub mod app_context;
pub mod components;
pub mod search_context;
pub mod session;

pub use app::*;
pub use app_context::*;
