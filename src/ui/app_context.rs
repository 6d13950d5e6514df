use dioxus::prelude::*;

use crate::api::MovieClient;
use crate::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub movies: MovieClient,
}

/// Hook to access app-wide services
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}

/// Hook to access the backend movie client
pub fn use_movie_client() -> MovieClient {
    use_app_context().movies
}
