use dioxus::prelude::*;

use crate::search::QueryParams;
use crate::ui::search_context::use_search_context;
use crate::ui::Route;

/// Top navigation bar with the debounced search input.
#[component]
pub fn TopBar() -> Element {
    let search = use_search_context();
    let search_input = search.search_input();
    let is_input_active = search.is_input_active();

    let mut on_input = search.clone();
    let mut on_focus = search.clone();
    let mut on_blur = search.clone();

    let input_class = if is_input_active() {
        "w-full max-w-xl p-2 rounded-lg bg-gray-700 text-white ring-2 ring-blue-500 outline-none"
    } else {
        "w-full max-w-xl p-2 rounded-lg bg-gray-700 text-white outline-none"
    };

    rsx! {
        header { class: "h-20 bg-gray-800 text-white px-6 flex items-center space-x-6",
            Link {
                to: Route::Home { query: QueryParams::new() },
                class: "text-xl font-bold hover:text-blue-300 transition-colors",
                "flickpick"
            }
            Link {
                to: Route::WatchHistory { query: QueryParams::new() },
                class: "hover:text-blue-300 transition-colors",
                "Watch History"
            }
            div { class: "flex-1 flex justify-end",
                input {
                    class: "{input_class}",
                    placeholder: "Search movies...",
                    value: "{search_input}",
                    oninput: move |event| on_input.set_search_input(event.value()),
                    onfocus: move |_| on_focus.set_is_input_active(true),
                    onblur: move |_| on_blur.set_is_input_active(false),
                }
            }
        }
    }
}
