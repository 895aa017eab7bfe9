use dioxus::prelude::*;

use api::{ApiClient, Asset};
use store::{Mutation, QueryCache};

use crate::components::{Banner, BannerKind};
use crate::forms::ASSET_TYPES;
use crate::format::label_from_snake;
use crate::hooks::run_mutation;
use crate::{use_session, Button};

#[component]
pub fn AssetForm(on_close: EventHandler<()>) -> Element {
    let client = use_context::<ApiClient>();
    let cache = use_context::<QueryCache>();
    let session = use_session();

    let mut name = use_signal(String::new);
    let mut kind = use_signal(String::new);
    let mut value = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let submit = move |_: FormEvent| {
        if submitting() {
            return;
        }
        let Some(user) = session().user else {
            return;
        };
        if name().trim().is_empty() || kind().is_empty() {
            error.set(Some("Name and type are required.".to_string()));
            return;
        }

        let asset = Asset {
            name: name().trim().to_string(),
            kind: kind(),
            value: value().parse().unwrap_or(0.0),
        };

        submitting.set(true);
        let client = client.clone();
        let cache = cache.clone();
        spawn(async move {
            let result = run_mutation(
                &cache,
                Mutation::AddAsset,
                client.add_asset(&user.user_id, &asset),
            )
            .await;
            submitting.set(false);
            match result {
                Ok(_) => {
                    name.set(String::new());
                    kind.set(String::new());
                    value.set(String::new());
                    error.set(None);
                    on_close.call(());
                }
                Err(e) => {
                    tracing::error!("failed to add asset: {e}");
                    error.set(Some("Could not save the asset. Please try again.".to_string()));
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
        form {
            class: "entity-form",
            onsubmit: submit,

            div {
                class: "form-field",
                label { r#for: "asset-name", "Asset Name" }
                input {
                    id: "asset-name",
                    r#type: "text",
                    placeholder: "e.g. Savings Account - HDFC",
                    required: true,
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "asset-type", "Type" }
                select {
                    id: "asset-type",
                    required: true,
                    value: "{kind}",
                    onchange: move |evt| kind.set(evt.value()),
                    option { value: "", "Select a type" }
                    for entry in ASSET_TYPES {
                        option { key: "{entry}", value: "{entry}", "{label_from_snake(entry)}" }
                    }
                }
            }

            div {
                class: "form-field",
                label { r#for: "asset-value", "Current Value" }
                input {
                    id: "asset-value",
                    r#type: "number",
                    min: "0",
                    step: "0.01",
                    placeholder: "0.00",
                    required: true,
                    value: "{value}",
                    oninput: move |evt| value.set(evt.value()),
                }
            }

            {banner}

            div {
                class: "form-actions",
                Button {
                    disabled: submitting(),
                    if submitting() { "Saving…" } else { "Add Asset" }
                }
            }
        }
    }
}
