//! Session context: who is signed in, where that fact is persisted, and the
//! shared client/cache handles every page reaches through context.
//!
//! [`SessionProvider`] owns the whole lifecycle: on mount it restores any
//! persisted session, hands the bearer token to the [`ApiClient`] and
//! installs the global 401 handler; signing out (and that handler) clear the
//! persisted session, the token and the query cache in one place. Nothing
//! here is a singleton — components get at it with [`use_session`].

use std::sync::Arc;

use dioxus::prelude::*;

use api::{ApiClient, IdentityClient, IdentitySession, NewUser};
use store::{FinancioConfig, QueryCache, SessionStore, StoredSession};

/// Identity fields resolved for the current session.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionUser {
    pub user_id: String,
    pub name: String,
    pub email: String,
}

/// Reactive session state. `loading` is only true before the provider has
/// looked at persisted storage.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.user_id.as_str())
    }
}

/// Handle to the platform session store, shared through context.
#[derive(Clone)]
pub struct SessionHandle {
    pub store: Arc<dyn SessionStore>,
}

/// One-shot handoff slot for the initial message injected into the full
/// chat view (from the widget's "open full chat" or an AI-studio template).
/// Consumed exactly once; navigation carries nothing else across surfaces.
#[derive(Clone, Copy)]
pub struct PendingPrompt(pub Signal<Option<String>>);

impl PendingPrompt {
    pub fn set(mut self, prompt: String) {
        self.0.set(Some(prompt));
    }

    /// Take the prompt out, leaving the slot empty.
    pub fn take(mut self) -> Option<String> {
        self.0.write().take()
    }
}

/// Current session state; updates when the user signs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

pub fn use_pending_prompt() -> PendingPrompt {
    use_context::<PendingPrompt>()
}

/// Provider component owning session state and the shared client handles.
/// Wrap the router with it; every page assumes these contexts exist.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let config = use_hook(FinancioConfig::load);

    let handle = use_context_provider(|| SessionHandle {
        store: store::platform_store(),
    });

    let client = use_context_provider({
        let config = config.clone();
        move || ApiClient::new(&config)
    });
    use_context_provider({
        let config = config.clone();
        move || IdentityClient::new(&config)
    });
    let cache = use_context_provider(QueryCache::new);
    use_context_provider(|| PendingPrompt(Signal::new(None)));

    // Restore the persisted session before the first child render so the
    // token is in place for whatever fetches the first page issues.
    let restored = use_hook(|| {
        let stored = handle.store.load();
        if let Some(stored) = &stored {
            client.set_token(Some(stored.token.clone()));
        }
        stored
    });
    let session = use_signal(|| SessionState {
        user: restored.map(|s| SessionUser {
            user_id: s.user_id,
            name: s.name,
            email: s.email,
        }),
        loading: false,
    });
    use_context_provider(|| session);

    // Global 401 handling: drop credentials once, then bounce to login.
    use_hook(|| {
        let store = handle.store.clone();
        let hook_client = client.clone();
        let hook_cache = cache.clone();
        let hook_session = session;
        client.set_unauthorized_hook(move || {
            tracing::info!("unauthorized response, clearing session");
            store.clear();
            hook_client.set_token(None);
            hook_cache.clear();
            let mut hook_session = hook_session;
            hook_session.set(SessionState {
                user: None,
                loading: false,
            });
            crate::platform::redirect("/login");
        });
    });

    rsx! {
        {children}
    }
}

/// Finish a sign-in/sign-up: hand the token to the gateway client, register
/// the user (a 409 from an earlier registration is success), persist the
/// session and flip the reactive state. Registration failures are logged
/// and do not block the session — the backend remains reachable for reads.
pub async fn establish_session(
    client: &ApiClient,
    handle: &SessionHandle,
    mut session: Signal<SessionState>,
    identity: IdentitySession,
) {
    let name = if identity.display_name.trim().is_empty() {
        identity.email.clone()
    } else {
        identity.display_name.clone()
    };

    client.set_token(Some(identity.id_token.clone()));

    if let Err(e) = client
        .create_user(&NewUser {
            user_id: identity.user_id.clone(),
            name: name.clone(),
        })
        .await
    {
        tracing::error!("failed to register user with gateway: {e}");
    }

    handle.store.save(&StoredSession {
        token: identity.id_token,
        user_id: identity.user_id.clone(),
        email: identity.email.clone(),
        name: name.clone(),
    });

    session.set(SessionState {
        user: Some(SessionUser {
            user_id: identity.user_id,
            name,
            email: identity.email,
        }),
        loading: false,
    });
}

/// Sign out: clear persisted credentials, the bearer token, the query cache
/// and the reactive state. The caller handles navigation.
pub fn sign_out(
    client: &ApiClient,
    cache: &QueryCache,
    handle: &SessionHandle,
    mut session: Signal<SessionState>,
) {
    handle.store.clear();
    client.set_token(None);
    cache.clear();
    session.set(SessionState {
        user: None,
        loading: false,
    });
}
