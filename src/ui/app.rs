use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;

use crate::api::MovieClient;
use crate::config::Config;
use crate::search::{QueryParams, SEARCH_PATH};
use crate::ui::app_context::AppContext;
use crate::ui::components::*;
use crate::ui::session::SessionProvider;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
    #[route("/?:..query")]
    Home { query: QueryParams },
    #[route("/watch-history?:..query")]
    WatchHistory { query: QueryParams },
    #[route("/search?:..query")]
    Search { query: QueryParams },
}

impl Route {
    /// The path component, without the query string.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home { .. } => "/",
            Route::WatchHistory { .. } => "/watch-history",
            Route::Search { .. } => SEARCH_PATH,
        }
    }

    pub fn query(&self) -> &QueryParams {
        match self {
            Route::Home { query } | Route::WatchHistory { query } | Route::Search { query } => {
                query
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    let app_ctx = use_hook(|| {
        let config = Config::load();
        AppContext {
            movies: MovieClient::new(config.backend_url.clone()),
            config,
        }
    });
    use_context_provider(|| app_ctx);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        SessionProvider {
            Router::<Route> {}
        }
    }
}

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("flickpick")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}
