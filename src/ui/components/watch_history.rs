use dioxus::prelude::*;

use crate::api::Movie;
use crate::search::QueryParams;
use crate::ui::app_context::use_movie_client;
use crate::ui::session::use_session;

use super::MovieCard;

/// Watch-history page showing the user's rated movies
#[component]
pub fn WatchHistory(query: QueryParams) -> Element {
    let session = use_session();
    let client = use_movie_client();

    let mut movies = use_signal(Vec::<Movie>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        let client = client.clone();
        spawn(async move {
            let Some(session) = session() else {
                loading.set(false);
                return;
            };
            loading.set(true);
            error.set(None);

            match client.rated_movies(&session.user.email).await {
                Ok(list) => {
                    movies.set(list);
                    loading.set(false);
                }
                Err(e) => {
                    error.set(Some(format!("Failed to load watch history: {}", e)));
                    loading.set(false);
                }
            }
        });
    });

    if loading() {
        return rsx! {
            div {}
        };
    }

    rsx! {
        main { class: "w-full flex flex-col h-full",
            div { class: "container mx-auto px-4 mt-8",
                h1 { class: "text-2xl font-bold text-white mb-6", "Watch History" }

                if let Some(err) = error() {
                    div { class: "bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded mb-4",
                        p { "{err}" }
                    }
                } else if movies().is_empty() {
                    p { class: "text-gray-400", "You haven't rated any movies yet." }
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
