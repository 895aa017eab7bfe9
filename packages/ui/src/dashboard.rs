//! Dashboard widgets: the summary cards and the recent-transactions list.
//! Pure read/render over server-computed aggregates; loading, error and
//! empty states each render distinctly and no figure is recomputed here.

use dioxus::prelude::*;

use api::{ApiClient, DashboardSummary, RecentTransaction};
use store::{QueryCache, QueryKey};

use crate::components::Spinner;
use crate::format::{amount_class, format_currency, format_signed_amount, label_from_snake};
use crate::hooks::{cached_query, QueryState};
use crate::use_session;

#[component]
pub fn SummaryCards() -> Element {
    let client = use_context::<ApiClient>();
    let cache = use_context::<QueryCache>();
    let session = use_session();
    let mut summary = use_signal(|| QueryState::<DashboardSummary>::Loading);

    let _loader = use_resource(move || {
        let client = client.clone();
        let cache = cache.clone();
        async move {
            let Some(user_id) = session().user_id().map(str::to_string) else {
                return;
            };
            let key = QueryKey::DashboardSummary {
                user_id: user_id.clone(),
            };
            let fetch = {
                let client = client.clone();
                let user_id = user_id.clone();
                move || {
                    let client = client.clone();
                    let user_id = user_id.clone();
                    async move { client.dashboard_summary(&user_id).await }
                }
            };
            summary.set(QueryState::from_result(
                cached_query(&cache, key, fetch).await,
            ));
        }
    });

    match summary() {
        QueryState::Loading => rsx! {
            Spinner { label: "Loading summary…" }
        },
        QueryState::Failed(message) => rsx! {
            div { class: "load-error", "Could not load your summary: {message}" }
        },
        QueryState::Ready(data) => {
            let credit_score = if data.credit_score > 0 {
                data.credit_score.to_string()
            } else {
                "N/A".to_string()
            };
            let cards = [
                ("Total Assets", format_currency(data.total_assets)),
                ("Total Liabilities", format_currency(data.total_liabilities)),
                ("Retirement Balance", format_currency(data.epf_balance)),
                ("Credit Score", credit_score),
                (
                    "Investment Portfolio",
                    format_currency(data.investment_portfolio),
                ),
            ];
            rsx! {
                div {
                    class: "summary-cards",
                    for (title, value) in cards {
                        div {
                            key: "{title}",
                            class: "summary-card",
                            p { class: "summary-card-title", "{title}" }
                            p { class: "summary-card-value", "{value}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn RecentTransactionsList() -> Element {
    let client = use_context::<ApiClient>();
    let cache = use_context::<QueryCache>();
    let session = use_session();
    let mut recent = use_signal(|| QueryState::<Vec<RecentTransaction>>::Loading);

    let _loader = use_resource(move || {
        let client = client.clone();
        let cache = cache.clone();
        async move {
            let Some(user_id) = session().user_id().map(str::to_string) else {
                return;
            };
            let key = QueryKey::RecentTransactions {
                user_id: user_id.clone(),
            };
            let fetch = {
                let client = client.clone();
                let user_id = user_id.clone();
                move || {
                    let client = client.clone();
                    let user_id = user_id.clone();
                    async move { client.recent_transactions(&user_id).await }
                }
            };
            recent.set(QueryState::from_result(
                cached_query(&cache, key, fetch).await,
            ));
        }
    });

    let body = match recent() {
        QueryState::Loading => rsx! {
            Spinner { label: "Loading transactions…" }
        },
        QueryState::Failed(message) => rsx! {
            div { class: "load-error", "Could not load recent transactions: {message}" }
        },
        QueryState::Ready(rows) if rows.is_empty() => rsx! {
            p { class: "empty-state", "No transactions yet. Add your first one above." }
        },
        QueryState::Ready(rows) => rsx! {
            table {
                class: "tx-table",
                thead {
                    tr {
                        th { "Date" }
                        th { "Description" }
                        th { "Category" }
                        th { class: "tx-amount-col", "Amount" }
                    }
                }
                tbody {
                    for row in rows {
                        tr {
                            key: "{row.date}-{row.description}",
                            td { "{row.date}" }
                            td { "{row.description}" }
                            td {
                                span { class: "category-pill", "{label_from_snake(&row.category)}" }
                            }
                            td {
                                class: "tx-amount-col {amount_class(row.amount)}",
                                "{format_signed_amount(row.amount)}"
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        section {
            class: "recent-transactions",
            h2 { "Recent Transactions" }
            {body}
        }
    }
}
