use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::debug;

use super::query::QueryParams;

/// Quiet period after the last keystroke before a search term commits.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(500);

/// Path of the search results page.
pub const SEARCH_PATH: &str = "/search";

/// Navigation request emitted when a debounced search term commits.
///
/// `url` is the results path with `q` set to `param` and all other query
/// parameters of the page the user was on preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCommit {
    pub param: String,
    pub url: String,
}

struct CoordinatorState {
    search_input: String,
    is_input_active: bool,
    search_param: String,
    last_page: String,
    query: QueryParams,
    pending: Option<JoinHandle<()>>,
    generation: u64,
}

/// Owns the search text, the committed search term, and the debounce task
/// that turns one into the other.
///
/// Constructed once per provider mount and handed by reference to the views
/// that need it. Committed searches surface as [`SearchCommit`] values on
/// the channel returned by [`SearchCoordinator::new`]; the UI drains that
/// channel into the router.
pub struct SearchCoordinator {
    state: Arc<Mutex<CoordinatorState>>,
    commits: UnboundedSender<SearchCommit>,
}

impl SearchCoordinator {
    /// Create a coordinator seeded from the URL the app mounted on.
    ///
    /// A `q` query parameter seeds both the live input and the committed
    /// term, so a shared search link reproduces the same state before any
    /// user interaction.
    pub fn new(path: &str, query: QueryParams) -> (Self, UnboundedReceiver<SearchCommit>) {
        let initial = query.get("q").unwrap_or_default().to_string();
        let (commits, receiver) = mpsc::unbounded_channel();
        let state = CoordinatorState {
            is_input_active: !initial.is_empty(),
            search_input: initial.clone(),
            search_param: initial,
            last_page: if path == SEARCH_PATH {
                "/".to_string()
            } else {
                path.to_string()
            },
            query,
            pending: None,
            generation: 0,
        };
        (
            Self {
                state: Arc::new(Mutex::new(state)),
                commits,
            },
            receiver,
        )
    }

    fn lock(&self) -> MutexGuard<'_, CoordinatorState> {
        self.state.lock().expect("search coordinator state poisoned")
    }

    pub fn search_input(&self) -> String {
        self.lock().search_input.clone()
    }

    /// Record a keystroke and restart the debounce window.
    ///
    /// Any pending commit is cancelled unconditionally. A non-empty value
    /// schedules a new commit task; an empty value only cancels, clearing
    /// is the results view's business.
    pub fn set_search_input(&self, value: String) {
        let mut state = self.lock();
        state.search_input = value.clone();
        state.generation += 1;
        if let Some(pending) = state.pending.take() {
            pending.abort();
        }
        if value.is_empty() {
            return;
        }

        let generation = state.generation;
        let shared = Arc::clone(&self.state);
        let commits = self.commits.clone();
        state.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(DEBOUNCE_INTERVAL).await;
            let mut state = shared.lock().expect("search coordinator state poisoned");
            // A newer keystroke won the race against our abort
            if state.generation != generation {
                return;
            }
            state.pending = None;
            state.search_param = value.clone();
            let url = format!(
                "{}{}",
                SEARCH_PATH,
                state.query.with("q", &value).to_query_string()
            );
            debug!(param = %value, %url, "committing debounced search");
            let _ = commits.send(SearchCommit { param: value, url });
        }));
    }

    pub fn is_input_active(&self) -> bool {
        self.lock().is_input_active
    }

    pub fn set_is_input_active(&self, active: bool) {
        self.lock().is_input_active = active;
    }

    pub fn search_param(&self) -> String {
        self.lock().search_param.clone()
    }

    /// Override the committed term directly, without debounce or navigation.
    pub fn set_search_param(&self, value: String) {
        self.lock().search_param = value;
    }

    /// The most recent non-search path, the return target when a search is
    /// cleared.
    pub fn last_page(&self) -> String {
        self.lock().last_page.clone()
    }

    /// Record a navigation observed by the host router.
    ///
    /// Paths other than the results path become the new `last_page`; the
    /// stored query is refreshed either way so later commits preserve it.
    pub fn route_changed(&self, path: &str, query: QueryParams) {
        let mut state = self.lock();
        if path != SEARCH_PATH {
            state.last_page = path.to_string();
        }
        state.query = query;
    }

    /// Where the results view should go when the input is cleared:
    /// `last_page` with `q` stripped and everything else kept.
    pub fn clear_url(&self) -> String {
        let state = self.lock();
        format!(
            "{}{}",
            state.last_page,
            state.query.without("q").to_query_string()
        )
    }

    /// Abort the outstanding debounce task, if any.
    pub fn cancel_pending(&self) {
        let mut state = self.lock();
        // The abort only lands at an await point; the generation bump stops
        // a task that already woke from its sleep
        state.generation += 1;
        if let Some(pending) = state.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for SearchCoordinator {
    fn drop(&mut self) {
        // No commit may fire after the owning provider is gone
        self.cancel_pending();
    }
}
