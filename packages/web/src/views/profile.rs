//! Profile settings: identity fields (read-only) plus the two figures the
//! user maintains by hand — credit score and retirement balance.

use dioxus::prelude::*;

use api::{ApiClient, ProfilePatch, User};
use store::{Mutation, QueryCache, QueryKey};
use ui::{cached_query, run_mutation, use_session, Banner, BannerKind, Button, QueryState, Spinner};

use crate::views::{AppHeader, RequireAuth};

#[component]
pub fn Profile() -> Element {
    let client = use_context::<ApiClient>();
    let cache = use_context::<QueryCache>();
    let session = use_session();

    let mut profile = use_signal(|| QueryState::<User>::Loading);
    let mut credit_score = use_signal(String::new);
    let mut epf_balance = use_signal(String::new);
    let mut prefilled = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut banner = use_signal(|| Option::<(BannerKind, String)>::None);

    let _loader = use_resource(move || {
        let client = client.clone();
        let cache = cache.clone();
        async move {
            let Some(user_id) = session().user_id().map(str::to_string) else {
                return;
            };
            let key = QueryKey::CurrentUser {
                user_id: user_id.clone(),
            };
            let fetch = {
                let client = client.clone();
                let user_id = user_id.clone();
                move || {
                    let client = client.clone();
                    let user_id = user_id.clone();
                    async move { client.current_user(&user_id).await }
                }
            };
            let result = cached_query(&cache, key, fetch).await;
            if let Ok(user) = &result {
                if !*prefilled.peek() {
                    credit_score.set(user.credit_score.to_string());
                    epf_balance.set(user.epf_balance.to_string());
                    prefilled.set(true);
                }
            }
            profile.set(QueryState::from_result(result));
        }
    });

    let save = {
        let client = use_context::<ApiClient>();
        let cache = use_context::<QueryCache>();
        move |_: FormEvent| {
            if submitting() {
                return;
            }
            let Some(user) = session().user else {
                return;
            };
            let patch = ProfilePatch {
                credit_score: credit_score().trim().parse().ok(),
                epf_balance: epf_balance().trim().parse().ok(),
            };
            submitting.set(true);
            let client = client.clone();
            let cache = cache.clone();
            spawn(async move {
                let result = run_mutation(
                    &cache,
                    Mutation::UpdateProfile,
                    client.update_profile(&user.user_id, &patch),
                )
                .await;
                submitting.set(false);
                match result {
                    Ok(_) => banner.set(Some((
                        BannerKind::Success,
                        "Profile updated successfully.".to_string(),
                    ))),
                    Err(e) => {
                        tracing::error!("failed to update profile: {e}");
                        banner.set(Some((
                            BannerKind::Error,
                            "Could not update the profile. Please try again.".to_string(),
                        )));
                    }
                }
            });
        }
    };

    let identity_block = match profile() {
        QueryState::Loading => rsx! {
            Spinner { label: "Loading profile…" }
        },
        QueryState::Failed(message) => rsx! {
            div { class: "load-error", "Could not load your profile: {message}" }
        },
        QueryState::Ready(user) => rsx! {
            div {
                class: "profile-identity",
                div {
                    class: "form-field",
                    label { "Name" }
                    p { class: "readonly-value", "{user.name}" }
                }
                div {
                    class: "form-field",
                    label { "Email" }
                    p { class: "readonly-value", "{user.email}" }
                }
            }
        },
    };

    let notice = banner().map(|(kind, message)| {
        rsx! {
            Banner { kind, message }
        }
    });

    rsx! {
        RequireAuth {
            div {
                class: "app-page",
                AppHeader {}
                main {
                    class: "app-main app-main-narrow",
                    h1 { "Profile" }
                    {identity_block}

                    form {
                        class: "entity-form",
                        onsubmit: save,
                        div {
                            class: "form-field",
                            label { r#for: "profile-credit", "Credit score" }
                            input {
                                id: "profile-credit",
                                r#type: "number",
                                min: "0",
                                max: "900",
                                value: "{credit_score}",
                                oninput: move |evt| credit_score.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-field",
                            label { r#for: "profile-epf", "Retirement (EPF) balance" }
                            input {
                                id: "profile-epf",
                                r#type: "number",
                                min: "0",
                                step: "0.01",
                                value: "{epf_balance}",
                                oninput: move |evt| epf_balance.set(evt.value()),
                            }
                        }

                        {notice}

                        Button {
                            disabled: submitting(),
                            if submitting() { "Saving…" } else { "Save changes" }
                        }
                    }
                }
            }
        }
    }
}
