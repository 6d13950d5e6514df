use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;

use crate::search::{SearchCoordinator, SearchCommit};
use crate::ui::Route;

/// Shared search state that tracks the debounced search term across the app.
///
/// Signals are the reactive view the components render from; the
/// [`SearchCoordinator`] behind them owns the debounce and is the
/// authority. Setters write both.
#[derive(Clone)]
pub struct SearchContext {
    search_input: Signal<String>,
    is_input_active: Signal<bool>,
    search_param: Signal<String>,
    last_page: Signal<String>,
    coordinator: Rc<SearchCoordinator>,
}

impl SearchContext {
    /// Live input text, updated on every keystroke.
    pub fn search_input(&self) -> Signal<String> {
        self.search_input
    }

    pub fn set_search_input(&mut self, value: String) {
        self.search_input.set(value.clone());
        self.coordinator.set_search_input(value);
    }

    pub fn is_input_active(&self) -> Signal<bool> {
        self.is_input_active
    }

    pub fn set_is_input_active(&mut self, active: bool) {
        self.is_input_active.set(active);
        self.coordinator.set_is_input_active(active);
    }

    /// Committed search term, updated after the debounce window elapses.
    pub fn search_param(&self) -> Signal<String> {
        self.search_param
    }

    pub fn set_search_param(&mut self, value: String) {
        self.search_param.set(value.clone());
        self.coordinator.set_search_param(value);
    }

    /// The most recent non-search page.
    pub fn last_page(&self) -> Signal<String> {
        self.last_page
    }

    /// Navigation target when the search is cleared: `last_page` with `q`
    /// stripped and other query parameters preserved.
    pub fn clear_url(&self) -> String {
        self.coordinator.clear_url()
    }
}

/// Provider component to make search context available throughout the app
///
/// Mounts once per layout instance; the coordinator seeds its state from
/// the URL the app landed on, so a shared `/search?q=...` link reproduces
/// the same state.
#[component]
pub fn SearchContextProvider(children: Element) -> Element {
    let route = use_route::<Route>();
    let navigator = use_navigator();

    let (coordinator, receiver) = use_hook(|| {
        let (coordinator, receiver) = SearchCoordinator::new(route.path(), route.query().clone());
        (Rc::new(coordinator), Rc::new(RefCell::new(Some(receiver))))
    });

    let search_ctx = use_hook(|| SearchContext {
        search_input: Signal::new(coordinator.search_input()),
        is_input_active: Signal::new(coordinator.is_input_active()),
        search_param: Signal::new(coordinator.search_param()),
        last_page: Signal::new(coordinator.last_page()),
        coordinator: coordinator.clone(),
    });
    use_context_provider(|| search_ctx.clone());

    // Pump committed searches into the signal mirror and the router. The
    // task is owned by this scope, so it stops when the provider unmounts.
    {
        let mut search_param = search_ctx.search_param;
        let receiver = receiver.clone();
        use_hook(move || {
            spawn(async move {
                let mut receiver = receiver
                    .borrow_mut()
                    .take()
                    .expect("search commit receiver already taken");
                while let Some(SearchCommit { param, url }) = receiver.recv().await {
                    search_param.set(param);
                    if let Ok(target) = url.parse::<Route>() {
                        navigator.push(target);
                    } else {
                        warn!("Committed search produced an unroutable URL: {}", url);
                    }
                }
            })
        });
    }

    // Track the last non-search page for clear-search recovery
    {
        let coordinator = coordinator.clone();
        let mut last_page = search_ctx.last_page;
        use_effect(use_reactive!(|(route,)| {
            coordinator.route_changed(route.path(), route.query().clone());
            last_page.set(coordinator.last_page());
        }));
    }

    rsx! {
        {children}
    }
}

/// Hook to access the search context. Panics when called outside a
/// `SearchContextProvider`.
pub fn use_search_context() -> SearchContext {
    use_context::<SearchContext>()
}
