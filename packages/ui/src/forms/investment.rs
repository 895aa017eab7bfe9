use dioxus::prelude::*;

use api::{ApiClient, Investment};
use store::{Mutation, QueryCache};

use crate::components::{Banner, BannerKind};
use crate::forms::INVESTMENT_TYPES;
use crate::format::label_from_snake;
use crate::hooks::run_mutation;
use crate::{use_session, Button};

#[component]
pub fn InvestmentForm(on_close: EventHandler<()>) -> Element {
    let client = use_context::<ApiClient>();
    let cache = use_context::<QueryCache>();
    let session = use_session();

    let mut name = use_signal(String::new);
    let mut ticker = use_signal(String::new);
    let mut kind = use_signal(String::new);
    let mut quantity = use_signal(String::new);
    let mut current_value = use_signal(String::new);
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

        let investment = Investment {
            name: name().trim().to_string(),
            ticker: ticker().trim().to_uppercase(),
            kind: kind(),
            quantity: quantity().parse().unwrap_or(0.0),
            current_value: current_value().parse().unwrap_or(0.0),
            purchase_date: None,
        };

        submitting.set(true);
        let client = client.clone();
        let cache = cache.clone();
        spawn(async move {
            let result = run_mutation(
                &cache,
                Mutation::AddInvestment,
                client.add_investment(&user.user_id, &investment),
            )
            .await;
            submitting.set(false);
            match result {
                Ok(_) => {
                    name.set(String::new());
                    ticker.set(String::new());
                    kind.set(String::new());
                    quantity.set(String::new());
                    current_value.set(String::new());
                    error.set(None);
                    on_close.call(());
                }
                Err(e) => {
                    tracing::error!("failed to add investment: {e}");
                    error.set(Some(
                        "Could not save the investment. Please try again.".to_string(),
                    ));
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
                label { r#for: "inv-name", "Investment Name" }
                input {
                    id: "inv-name",
                    r#type: "text",
                    placeholder: "e.g. Vanguard S&P 500",
                    required: true,
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "inv-ticker", "Ticker" }
                input {
                    id: "inv-ticker",
                    r#type: "text",
                    placeholder: "e.g. VOO",
                    value: "{ticker}",
                    oninput: move |evt| ticker.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "inv-type", "Type" }
                select {
                    id: "inv-type",
                    required: true,
                    value: "{kind}",
                    onchange: move |evt| kind.set(evt.value()),
                    option { value: "", "Select a type" }
                    for entry in INVESTMENT_TYPES {
                        option { key: "{entry}", value: "{entry}", "{label_from_snake(entry)}" }
                    }
                }
            }

            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { r#for: "inv-quantity", "Quantity" }
                    input {
                        id: "inv-quantity",
                        r#type: "number",
                        min: "0",
                        step: "any",
                        placeholder: "0",
                        required: true,
                        value: "{quantity}",
                        oninput: move |evt| quantity.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "inv-value", "Current Value" }
                    input {
                        id: "inv-value",
                        r#type: "number",
                        min: "0",
                        step: "0.01",
                        placeholder: "0.00",
                        required: true,
                        value: "{current_value}",
                        oninput: move |evt| current_value.set(evt.value()),
                    }
                }
            }

            {banner}

            div {
                class: "form-actions",
                Button {
                    disabled: submitting(),
                    if submitting() { "Saving…" } else { "Add Investment" }
                }
            }
        }
    }
}
