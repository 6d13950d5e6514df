use dioxus::prelude::*;

use crate::search::QueryParams;
use crate::ui::Route;

/// Home page
#[component]
pub fn Home(query: QueryParams) -> Element {
    rsx! {
        div { class: "container mx-auto p-6",
            div { class: "text-center py-12",
                h1 { class: "text-4xl font-bold text-white mb-4", "Welcome to flickpick" }
                p { class: "text-xl text-gray-400 mb-8",
                    "Find your next movie, or revisit the ones you've rated"
                }
                div { class: "flex justify-center space-x-4",
                    Link {
                        to: Route::WatchHistory { query: QueryParams::new() },
                        class: "bg-blue-600 text-white px-6 py-3 rounded-lg hover:bg-blue-700 transition-colors",
                        "Watch History"
                    }
                }
                p { class: "text-gray-500 mt-8",
                    "Start typing in the search bar above to look for a movie."
                }
            }
        }
    }
}
