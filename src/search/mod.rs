pub mod coordinator;
pub mod query;

pub use coordinator::{SearchCommit, SearchCoordinator, DEBOUNCE_INTERVAL, SEARCH_PATH};
pub use query::QueryParams;
