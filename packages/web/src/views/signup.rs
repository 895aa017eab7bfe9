use dioxus::prelude::*;

use api::{ApiClient, IdentityClient};
use ui::{establish_session, use_session, Banner, BannerKind, Button, SessionHandle};

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let client = use_context::<ApiClient>();
    let identity = use_context::<IdentityClient>();
    let handle = use_context::<SessionHandle>();
    let session = use_session();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    if !session().loading && session().is_authenticated() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let submit = move |_: FormEvent| {
        if submitting() {
            return;
        }
        if password().len() < 8 {
            error.set(Some("Password must be at least 8 characters.".to_string()));
            return;
        }
        if password() != confirm() {
            error.set(Some("Passwords do not match.".to_string()));
            return;
        }
        submitting.set(true);
        error.set(None);

        let client = client.clone();
        let identity = identity.clone();
        let handle = handle.clone();
        spawn(async move {
            match identity
                .sign_up(name().trim(), email().trim(), &password())
                .await
            {
                Ok(identity_session) => {
                    establish_session(&client, &handle, session, identity_session).await;
                    submitting.set(false);
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::error!("sign-up failed: {e}");
                    submitting.set(false);
                    error.set(Some("Could not create the account. Please try again.".to_string()));
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
                h1 { "Create your account" }
                p { class: "auth-subtitle", "A few seconds and your money has a home" }

                div {
                    class: "form-field",
                    label { r#for: "signup-name", "Name" }
                    input {
                        id: "signup-name",
                        r#type: "text",
                        placeholder: "Ada Lovelace",
                        required: true,
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "signup-email", "Email" }
                    input {
                        id: "signup-email",
                        r#type: "email",
                        placeholder: "you@example.com",
                        required: true,
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "signup-password", "Password" }
                    input {
                        id: "signup-password",
                        r#type: "password",
                        required: true,
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "signup-confirm", "Confirm password" }
                    input {
                        id: "signup-confirm",
                        r#type: "password",
                        required: true,
                        value: "{confirm}",
                        oninput: move |evt| confirm.set(evt.value()),
                    }
                }

                {banner}

                Button {
                    disabled: submitting(),
                    class: "auth-submit",
                    if submitting() { "Creating account…" } else { "Create account" }
                }

                p {
                    class: "auth-switch",
                    "Already registered? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
