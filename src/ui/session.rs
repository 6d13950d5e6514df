use dioxus::prelude::*;

use crate::ui::app_context::use_app_context;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    pub email: String,
    pub name: Option<String>,
}

/// An active sign-in, as handed to us by the auth provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: SessionUser,
}

/// Shared session state that tracks the signed-in user across the app
#[derive(Clone)]
pub struct SessionState {
    pub session: Signal<Option<Session>>,
}

/// Provider component to make session state available throughout the app
///
/// The real authentication backend is external; in this build the session
/// is seeded from config so the rest of the app can gate on it the same
/// way.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let config = use_app_context().config;
    let session = use_signal(|| {
        config.user_email.clone().map(|email| Session {
            user: SessionUser {
                email,
                name: config.user_name.clone(),
            },
        })
    });

    use_context_provider(|| SessionState { session });

    rsx! {
        {children}
    }
}

/// Hook to access the current session
pub fn use_session() -> Signal<Option<Session>> {
    let state = use_context::<SessionState>();
    state.session
}
