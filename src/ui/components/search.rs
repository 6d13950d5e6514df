use dioxus::prelude::*;
use tracing::debug;

use crate::api::Movie;
use crate::search::QueryParams;
use crate::ui::app_context::use_movie_client;
use crate::ui::search_context::use_search_context;
use crate::ui::session::use_session;
use crate::ui::Route;

use super::MovieCard;

/// Search results page
#[component]
pub fn Search(query: QueryParams) -> Element {
    let navigator = use_navigator();
    let search = use_search_context();
    let session = use_session();
    let client = use_movie_client();

    let search_param = search.search_param();
    let mut movies = use_signal(Vec::<Movie>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    // Clearing the input leaves the results page. This is the results
    // view's policy; the coordinator only supplies the return target.
    {
        let search = search.clone();
        let search_input = search.search_input();
        use_effect(move || {
            if search_input.read().is_empty() {
                let target = search.clear_url();
                debug!("Search cleared, returning to {}", target);
                if let Ok(route) = target.parse::<Route>() {
                    navigator.push(route);
                }
            }
        });
    }

    // Load the catalog on component mount
    use_effect(move || {
        let client = client.clone();
        spawn(async move {
            let Some(session) = session() else {
                loading.set(false);
                return;
            };
            loading.set(true);
            error.set(None);

            match client.all_movies(&session.user.email).await {
                Ok(list) => {
                    movies.set(list);
                    loading.set(false);
                }
                Err(e) => {
                    error.set(Some(format!("Failed to load movies: {}", e)));
                    loading.set(false);
                }
            }
        });
    });

    rsx! {
        main { class: "w-full flex flex-col h-full",
            div { class: "container mx-auto px-4 mt-8",
                if !search_param.read().is_empty() {
                    h1 { class: "text-2xl font-bold text-white mb-6",
                        "Results for \"{search_param}\""
                    }
                }

                if loading() {
                    div { class: "flex justify-center items-center py-12",
                        div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500" }
                    }
                } else if let Some(err) = error() {
                    div { class: "bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded mb-4",
                        p { "{err}" }
                    }
                } else {
                    div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                        for movie in movies() {
                            MovieCard {
                                id: movie.id,
                                name: movie.name.clone(),
                                description: movie.description.clone(),
                                rating: movie.rating,
                            }
                        }
                    }
                }
            }
        }
    }
}
