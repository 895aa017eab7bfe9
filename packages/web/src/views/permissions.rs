//! Assistant data permissions: six flags controlling what FinAI may read.

use dioxus::prelude::*;

use api::{ApiClient, Permissions as PermissionFlags, User};
use store::{Mutation, QueryCache, QueryKey};
use ui::{cached_query, run_mutation, use_session, Banner, BannerKind, Button, QueryState, Spinner};

use crate::views::{AppHeader, RequireAuth};

#[component]
pub fn Permissions() -> Element {
    let client = use_context::<ApiClient>();
    let cache = use_context::<QueryCache>();
    let session = use_session();

    let mut profile = use_signal(|| QueryState::<User>::Loading);
    let mut flags = use_signal(PermissionFlags::default);
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
                    flags.set(user.permissions);
                    prefilled.set(true);
                }
            }
            profile.set(QueryState::from_result(result));
        }
    });

    let save = {
        let client = use_context::<ApiClient>();
        let cache = use_context::<QueryCache>();
        move |_| {
            if submitting() {
                return;
            }
            let Some(user) = session().user else {
                return;
            };
            let permissions = flags();
            submitting.set(true);
            let client = client.clone();
            let cache = cache.clone();
            spawn(async move {
                let result = run_mutation(
                    &cache,
                    Mutation::UpdatePermissions,
                    client.update_permissions(&user.user_id, &permissions),
                )
                .await;
                submitting.set(false);
                match result {
                    Ok(_) => banner.set(Some((
                        BannerKind::Success,
                        "AI access permissions updated successfully.".to_string(),
                    ))),
                    Err(e) => {
                        tracing::error!("failed to update permissions: {e}");
                        banner.set(Some((
                            BannerKind::Error,
                            "Could not update permissions. Please try again.".to_string(),
                        )));
                    }
                }
            });
        }
    };

    let toggles: &[(&str, &str, fn(&PermissionFlags) -> bool, fn(&mut PermissionFlags, bool))] = &[
        (
            "Assets",
            "Let the assistant read your asset list and totals",
            |f| f.perm_assets,
            |f, v| f.perm_assets = v,
        ),
        (
            "Liabilities",
            "Let the assistant read your outstanding balances",
            |f| f.perm_liabilities,
            |f, v| f.perm_liabilities = v,
        ),
        (
            "Transactions",
            "Let the assistant read individual transactions",
            |f| f.perm_transactions,
            |f, v| f.perm_transactions = v,
        ),
        (
            "Investments",
            "Let the assistant read your portfolio",
            |f| f.perm_investments,
            |f, v| f.perm_investments = v,
        ),
        (
            "Credit score",
            "Let the assistant see your credit score",
            |f| f.perm_credit_score,
            |f, v| f.perm_credit_score = v,
        ),
        (
            "Retirement balance",
            "Let the assistant see your EPF balance",
            |f| f.perm_epf_balance,
            |f, v| f.perm_epf_balance = v,
        ),
    ];

    let rows = toggles.iter().map(|&(title, hint, get, set)| {
        let checked = get(&flags());
        rsx! {
            div {
                key: "{title}",
                class: "permission-row",
                div {
                    class: "permission-text",
                    p { class: "permission-title", "{title}" }
                    p { class: "permission-hint", "{hint}" }
                }
                input {
                    r#type: "checkbox",
                    checked: checked,
                    onchange: move |evt| {
                        let mut flags = flags;
                        set(&mut flags.write(), evt.checked());
                    },
                }
            }
        }
    });

    let body = match profile() {
        QueryState::Loading => rsx! {
            Spinner { label: "Loading permissions…" }
        },
        QueryState::Failed(message) => rsx! {
            div { class: "load-error", "Error loading permissions: {message}" }
        },
        QueryState::Ready(_) => {
            let notice = banner().map(|(kind, message)| {
                rsx! {
                    Banner { kind, message }
                }
            });
            rsx! {
                div {
                    class: "permissions-card",
                    {rows}
                    {notice}
                    Button {
                        disabled: submitting(),
                        onclick: save,
                        if submitting() { "Saving…" } else { "Save changes" }
                    }
                }
            }
        }
    };

    rsx! {
        RequireAuth {
            div {
                class: "app-page",
                AppHeader {}
                main {
                    class: "app-main app-main-narrow",
                    h1 { "AI Data Permissions" }
                    p {
                        class: "page-subtitle",
                        "Choose exactly what the assistant may read. Changes apply to the next question you ask."
                    }
                    {body}
                }
            }
        }
    }
}
