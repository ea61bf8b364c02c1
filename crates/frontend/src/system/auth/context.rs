use contracts::system::auth::Session;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
}

/// Auth context provider component
///
/// Restores the session the external auth provider left in localStorage.
/// Absence of a token is not an error: the order screens simply render
/// their empty state until the provider signs the user in.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    Effect::new(move |_| {
        if let Some(access_token) = storage::get_access_token() {
            set_auth_state.set(AuthState {
                session: Some(Session { access_token }),
            });
        }
    });

    provide_context(auth_state);

    children()
}

/// Current session, if the provider has signed the user in.
///
/// Non-reactive read: fetch functions call this at request time, and a `401`
/// later tells them the session lapsed in between.
pub fn get_session() -> Option<Session> {
    use_context::<ReadSignal<AuthState>>()
        .and_then(|auth_state| auth_state.get_untracked().session)
        .or_else(|| {
            storage::get_access_token().map(|access_token| Session { access_token })
        })
}
