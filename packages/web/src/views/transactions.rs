//! All-transactions page: server-backed pagination over a debounced filter
//! set. Page + filters form the cache key, so revisiting a combination
//! inside the freshness window renders without a request; while the next
//! page loads the previous rows stay visible, dimmed.

use std::time::Duration;

use dioxus::prelude::*;

use api::{ApiClient, KindFilter, TransactionFilters, TransactionsPage};
use store::{QueryCache, QueryKey};
use ui::format::{amount_class, format_signed_amount, label_from_snake};
use ui::forms::TRANSACTION_CATEGORIES;
use ui::icons::{FaChevronLeft, FaChevronRight, FaFilter};
use ui::{cached_query, Button, ButtonVariant, Icon, QueryState, Spinner};

use crate::views::{AppHeader, RequireAuth};

const PAGE_SIZE: u32 = 10;
const DEBOUNCE: Duration = Duration::from_millis(500);
const PAGE_WINDOW: u32 = 5;

/// Apply a debounced edit. Any effective filter change resets to page one;
/// an edit that ends where it started changes nothing.
fn commit_filters(
    draft: &TransactionFilters,
    committed: &mut TransactionFilters,
    page: &mut u32,
) -> bool {
    if draft == committed {
        return false;
    }
    *committed = draft.clone();
    *page = 1;
    true
}

/// The numbered pagination window: at most [`PAGE_WINDOW`] pages centered
/// on the current one, clamped to the valid range.
fn page_window(current: u32, total: u32) -> Vec<u32> {
    if total == 0 {
        return Vec::new();
    }
    // An out-of-range page is rendered as-is, so clamp before centering.
    let current = current.min(total);
    let mut start = current.saturating_sub(PAGE_WINDOW / 2).max(1);
    let end = (start + PAGE_WINDOW - 1).min(total);
    if end - start + 1 < PAGE_WINDOW {
        start = end.saturating_sub(PAGE_WINDOW - 1).max(1);
    }
    (start..=end).collect()
}

/// Schedule a debounced commit of the filter draft. Each edit supersedes the
/// previous timer via the generation counter.
fn schedule_commit(
    mut generation: Signal<u64>,
    draft: Signal<TransactionFilters>,
    mut committed: Signal<TransactionFilters>,
    mut page: Signal<u32>,
) {
    let scheduled = generation.peek().wrapping_add(1);
    generation.set(scheduled);
    spawn(async move {
        ui::platform::sleep(DEBOUNCE).await;
        if *generation.peek() != scheduled {
            return;
        }
        let pending = draft.peek().clone();
        let mut current_filters = committed.peek().clone();
        let mut current_page = *page.peek();
        if commit_filters(&pending, &mut current_filters, &mut current_page) {
            committed.set(current_filters);
            page.set(current_page);
        }
    });
}

#[component]
pub fn Transactions() -> Element {
    let client = use_context::<ApiClient>();
    let cache = use_context::<QueryCache>();
    let session = ui::use_session();

    let draft = use_signal(TransactionFilters::default);
    let committed = use_signal(TransactionFilters::default);
    let page = use_signal(|| 1u32);
    let generation = use_signal(|| 0u64);
    let mut show_filters = use_signal(|| false);
    let mut view = use_signal(|| QueryState::<TransactionsPage>::Loading);
    let mut shown = use_signal(|| Option::<TransactionsPage>::None);
    let mut fetching = use_signal(|| false);
    let mut refresh = use_signal(|| 0u32);

    let _loader = use_resource(move || {
        let client = client.clone();
        let cache = cache.clone();
        async move {
            let _ = refresh();
            let Some(user_id) = session().user_id().map(str::to_string) else {
                return;
            };
            let filters = committed();
            let current = page();

            fetching.set(true);
            let key = QueryKey::AllTransactions {
                user_id: user_id.clone(),
                page: current,
                filters: filters.canonical(),
            };
            let fetch = {
                let client = client.clone();
                let user_id = user_id.clone();
                let filters = filters.clone();
                move || {
                    let client = client.clone();
                    let user_id = user_id.clone();
                    let filters = filters.clone();
                    async move {
                        client
                            .all_transactions(&user_id, current, PAGE_SIZE, &filters)
                            .await
                    }
                }
            };
            let result = cached_query(&cache, key, fetch).await;
            fetching.set(false);
            match result {
                Ok(loaded) => {
                    shown.set(Some(loaded.clone()));
                    view.set(QueryState::Ready(loaded));
                }
                Err(e) => view.set(QueryState::Failed(e.to_string())),
            }
        }
    });

    let edit = move |apply: fn(&mut TransactionFilters, String), value: String| {
        let mut draft = draft;
        apply(&mut draft.write(), value);
        schedule_commit(generation, draft, committed, page);
    };

    let clear_filters = move |_| {
        let mut draft = draft;
        draft.set(TransactionFilters::default());
        schedule_commit(generation, draft, committed, page);
    };

    let current_page = shown().map(|p| p.current_page).unwrap_or(1);
    let total_pages = shown().map(|p| p.total_pages).unwrap_or(0);
    let total_count = shown().map(|p| p.total_count).unwrap_or(0);

    let range_text = if total_count > 0 {
        let from = (current_page as u64 - 1) * PAGE_SIZE as u64 + 1;
        let to = (current_page as u64 * PAGE_SIZE as u64).min(total_count);
        format!("Showing {from} to {to} of {total_count} transactions")
    } else {
        "No transactions found".to_string()
    };

    let filters_panel = if show_filters() {
        let kind_value = match draft().kind {
            KindFilter::All => "all",
            KindFilter::Income => "income",
            KindFilter::Expense => "expense",
        };
        rsx! {
            div {
                class: "filters-panel",
                div {
                    class: "form-field",
                    label { r#for: "flt-search", "Search" }
                    input {
                        id: "flt-search",
                        r#type: "text",
                        placeholder: "Search descriptions…",
                        value: "{draft().search}",
                        oninput: move |evt| edit(|f, v| f.search = v, evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "flt-category", "Category" }
                    select {
                        id: "flt-category",
                        value: "{draft().category}",
                        onchange: move |evt| edit(|f, v| f.category = v, evt.value()),
                        option { value: "", "All categories" }
                        for name in TRANSACTION_CATEGORIES {
                            option { key: "{name}", value: "{name}", "{label_from_snake(name)}" }
                        }
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "flt-type", "Type" }
                    select {
                        id: "flt-type",
                        value: kind_value,
                        onchange: move |evt| {
                            edit(|f, v| f.kind = KindFilter::from_value(&v), evt.value())
                        },
                        option { value: "all", "All" }
                        option { value: "income", "Income" }
                        option { value: "expense", "Expense" }
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { r#for: "flt-from", "From" }
                        input {
                            id: "flt-from",
                            r#type: "date",
                            value: "{draft().date_from}",
                            oninput: move |evt| edit(|f, v| f.date_from = v, evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "flt-to", "To" }
                        input {
                            id: "flt-to",
                            r#type: "date",
                            value: "{draft().date_to}",
                            oninput: move |evt| edit(|f, v| f.date_to = v, evt.value()),
                        }
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { r#for: "flt-min", "Min amount" }
                        input {
                            id: "flt-min",
                            r#type: "number",
                            step: "0.01",
                            value: "{draft().amount_min}",
                            oninput: move |evt| edit(|f, v| f.amount_min = v, evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "flt-max", "Max amount" }
                        input {
                            id: "flt-max",
                            r#type: "number",
                            step: "0.01",
                            value: "{draft().amount_max}",
                            oninput: move |evt| edit(|f, v| f.amount_max = v, evt.value()),
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: clear_filters,
                    "Clear filters"
                }
            }
        }
    } else {
        rsx! {}
    };

    let table = match (shown(), view()) {
        (None, QueryState::Loading) => rsx! {
            Spinner { label: "Loading transactions…" }
        },
        (None, QueryState::Failed(message)) => rsx! {
            div {
                class: "load-error",
                p { "Error loading transactions: {message}" }
                Button {
                    onclick: move |_| refresh.set(refresh() + 1),
                    "Retry"
                }
            }
        },
        (Some(page_data), _) => {
            let dimmed = if fetching() { "tx-table tx-table-pending" } else { "tx-table" };
            if page_data.transactions.is_empty() {
                rsx! {
                    p { class: "empty-state", "No transactions match these filters." }
                }
            } else {
                let rows = page_data.transactions.iter().enumerate().map(|(i, row)| {
                    let kind_label = match row.kind {
                        Some(api::TxKind::Income) => "Income",
                        Some(api::TxKind::Expense) => "Expense",
                        None => "—",
                    };
                    rsx! {
                        tr {
                            key: "{i}",
                            td { "{row.date}" }
                            td { "{row.description}" }
                            td {
                                span { class: "category-pill", "{label_from_snake(&row.category)}" }
                            }
                            td { "{kind_label}" }
                            td {
                                class: "tx-amount-col {amount_class(row.amount)}",
                                "{format_signed_amount(row.amount)}"
                            }
                        }
                    }
                });
                rsx! {
                    table {
                        class: "{dimmed}",
                        thead {
                            tr {
                                th { "Date" }
                                th { "Description" }
                                th { "Category" }
                                th { "Type" }
                                th { class: "tx-amount-col", "Amount" }
                            }
                        }
                        tbody {
                            {rows}
                        }
                    }
                }
            }
        }
        (None, QueryState::Ready(_)) => rsx! {},
    };

    let go_to = move |target: u32| {
        let mut page = page;
        page.set(target);
    };

    let pagination = if total_pages > 1 {
        let numbers = page_window(current_page, total_pages).into_iter().map(|number| {
            let class = if number == current_page {
                "page-btn page-btn-current"
            } else {
                "page-btn"
            };
            rsx! {
                button {
                    key: "{number}",
                    class: "{class}",
                    onclick: move |_| go_to(number),
                    "{number}"
                }
            }
        });
        rsx! {
            div {
                class: "pagination",
                button {
                    class: "page-btn",
                    disabled: current_page <= 1,
                    onclick: move |_| go_to(current_page - 1),
                    Icon { icon: FaChevronLeft, width: 12, height: 12 }
                }
                {numbers}
                button {
                    class: "page-btn",
                    disabled: current_page >= total_pages,
                    onclick: move |_| go_to(current_page + 1),
                    Icon { icon: FaChevronRight, width: 12, height: 12 }
                }
            }
        }
    } else {
        rsx! {}
    };

    rsx! {
        RequireAuth {
            div {
                class: "app-page",
                AppHeader {}
                main {
                    class: "app-main",
                    div {
                        class: "page-title-row",
                        div {
                            h1 { "All Transactions" }
                            p { class: "page-subtitle", "{range_text}" }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| show_filters.set(!show_filters()),
                            Icon { icon: FaFilter, width: 14, height: 14 }
                            if show_filters() { "Hide filters" } else { "Filters" }
                        }
                    }
                    {filters_panel}
                    {table}
                    {pagination}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_filter_change_resets_to_page_one() {
        let mut committed = TransactionFilters::default();
        let mut page = 5;

        let mut draft = committed.clone();
        draft.search = "rent".to_string();
        assert!(commit_filters(&draft, &mut committed, &mut page));
        assert_eq!(page, 1);
        assert_eq!(committed.search, "rent");

        page = 3;
        let mut draft = committed.clone();
        draft.kind = KindFilter::Income;
        assert!(commit_filters(&draft, &mut committed, &mut page));
        assert_eq!(page, 1);
    }

    #[test]
    fn an_unchanged_draft_keeps_the_current_page() {
        let mut committed = TransactionFilters::default();
        committed.category = "rent".to_string();
        let mut page = 4;

        let draft = committed.clone();
        assert!(!commit_filters(&draft, &mut committed, &mut page));
        assert_eq!(page, 4);
    }

    #[test]
    fn page_window_centers_on_the_current_page() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn page_window_shrinks_for_short_lists() {
        assert_eq!(page_window(1, 1), vec![1]);
        assert_eq!(page_window(2, 3), vec![1, 2, 3]);
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn page_window_clamps_an_out_of_range_page() {
        assert_eq!(page_window(99, 3), vec![1, 2, 3]);
    }
}
