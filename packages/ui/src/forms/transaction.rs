use dioxus::prelude::*;

use api::{ApiClient, NewTransaction, TxKind};
use store::{Mutation, QueryCache};

use crate::components::{Banner, BannerKind};
use crate::forms::{normalized_amount, TRANSACTION_CATEGORIES};
use crate::format::label_from_snake;
use crate::hooks::run_mutation;
use crate::time::today_iso;
use crate::{use_session, Button};

#[component]
pub fn TransactionForm(on_close: EventHandler<()>) -> Element {
    let client = use_context::<ApiClient>();
    let cache = use_context::<QueryCache>();
    let session = use_session();

    let mut date = use_signal(today_iso);
    let mut description = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut amount = use_signal(String::new);
    let mut kind = use_signal(|| TxKind::Expense);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let submit = move |_: FormEvent| {
        if submitting() {
            return;
        }
        let Some(user) = session().user else {
            return;
        };
        if description().trim().is_empty() || category().is_empty() {
            error.set(Some("Description and category are required.".to_string()));
            return;
        }

        let entered: f64 = amount().parse().unwrap_or(0.0);
        let transaction = NewTransaction {
            date: date(),
            description: description().trim().to_string(),
            category: category(),
            amount: normalized_amount(kind(), entered),
            kind: kind(),
        };

        submitting.set(true);
        let client = client.clone();
        let cache = cache.clone();
        spawn(async move {
            let result = run_mutation(
                &cache,
                Mutation::AddTransaction,
                client.add_transaction(&user.user_id, &transaction),
            )
            .await;
            submitting.set(false);
            match result {
                Ok(_) => {
                    date.set(today_iso());
                    description.set(String::new());
                    category.set(String::new());
                    amount.set(String::new());
                    kind.set(TxKind::Expense);
                    error.set(None);
                    on_close.call(());
                }
                Err(e) => {
                    tracing::error!("failed to add transaction: {e}");
                    error.set(Some(
                        "Could not save the transaction. Please try again.".to_string(),
                    ));
                }
            }
        });
    };

    let kind_value = match kind() {
        TxKind::Income => "income",
        TxKind::Expense => "expense",
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
                label { r#for: "tx-date", "Date" }
                input {
                    id: "tx-date",
                    r#type: "date",
                    required: true,
                    value: "{date}",
                    oninput: move |evt| date.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "tx-description", "Description" }
                input {
                    id: "tx-description",
                    r#type: "text",
                    placeholder: "e.g. Grocery shopping",
                    required: true,
                    value: "{description}",
                    oninput: move |evt| description.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "tx-category", "Category" }
                select {
                    id: "tx-category",
                    required: true,
                    value: "{category}",
                    onchange: move |evt| category.set(evt.value()),
                    option { value: "", "Select a category" }
                    for name in TRANSACTION_CATEGORIES {
                        option { key: "{name}", value: "{name}", "{label_from_snake(name)}" }
                    }
                }
            }

            div {
                class: "form-field",
                label { r#for: "tx-type", "Type" }
                select {
                    id: "tx-type",
                    value: kind_value,
                    onchange: move |evt| {
                        kind.set(if evt.value() == "income" {
                            TxKind::Income
                        } else {
                            TxKind::Expense
                        });
                    },
                    option { value: "expense", "Expense" }
                    option { value: "income", "Income" }
                }
            }

            div {
                class: "form-field",
                label { r#for: "tx-amount", "Amount" }
                input {
                    id: "tx-amount",
                    r#type: "number",
                    min: "0",
                    step: "0.01",
                    placeholder: "0.00",
                    required: true,
                    value: "{amount}",
                    oninput: move |evt| amount.set(evt.value()),
                }
            }

            {banner}

            div {
                class: "form-actions",
                Button {
                    disabled: submitting(),
                    if submitting() { "Saving…" } else { "Add Transaction" }
                }
            }
        }
    }
}
