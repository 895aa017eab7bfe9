//! Login page: identity provider sign-in, then gateway registration and
//! session persistence.

use dioxus::prelude::*;

use api::{ApiClient, IdentityClient};
use ui::{establish_session, use_session, Banner, BannerKind, Button, SessionHandle};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let client = use_context::<ApiClient>();
    let identity = use_context::<IdentityClient>();
    let handle = use_context::<SessionHandle>();
    let session = use_session();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // Already signed in: straight to the dashboard.
    if !session().loading && session().is_authenticated() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let submit = move |_: FormEvent| {
        if submitting() || email().trim().is_empty() || password().is_empty() {
            return;
        }
        submitting.set(true);
        error.set(None);

        let client = client.clone();
        let identity = identity.clone();
        let handle = handle.clone();
        spawn(async move {
            match identity.sign_in(email().trim(), &password()).await {
                Ok(identity_session) => {
                    establish_session(&client, &handle, session, identity_session).await;
                    submitting.set(false);
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::error!("sign-in failed: {e}");
                    submitting.set(false);
                    error.set(Some("Sign-in failed. Check your email and password.".to_string()));
                }
            }
        });
    };

    let banner = error().map(|message| {
        rsx! {
            Banner { kind: BannerKind::Error, message }
        }
    });

    rsx! {
        div {
            class: "auth-page",
            form {
                class: "auth-card",
                onsubmit: submit,
                h1 { "Welcome back" }
                p { class: "auth-subtitle", "Sign in to your Financio account" }

                div {
                    class: "form-field",
                    label { r#for: "login-email", "Email" }
                    input {
                        id: "login-email",
                        r#type: "email",
                        placeholder: "you@example.com",
                        required: true,
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "login-password", "Password" }
                    input {
                        id: "login-password",
                        r#type: "password",
                        required: true,
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                {banner}

                Button {
                    disabled: submitting(),
                    class: "auth-submit",
                    if submitting() { "Signing in…" } else { "Sign in" }
                }

                p {
                    class: "auth-switch",
                    "No account yet? "
                    Link { to: Route::Signup {}, "Create one" }
                }
            }
        }
    }
}
