use dioxus::prelude::*;

use crate::ui::search_context::SearchContextProvider;
use crate::ui::session::use_session;
use crate::ui::Route;

use super::TopBar;

/// Layout component that wraps every page with the search context, the top
/// bar, and the session gate.
#[component]
pub fn Shell() -> Element {
    let session = use_session();

    rsx! {
        SearchContextProvider {
            TopBar {}
            if session.read().is_some() {
                Outlet::<Route> {}
            } else {
                div {
                    style: "height: calc(100vh - 80px)",
                    class: "w-full grid place-items-center text-gray-300",
                    "Sign in to use app"
                }
            }
        }
    }
}
