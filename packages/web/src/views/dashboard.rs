use dioxus::prelude::*;

use ui::{ChartsPanel, ChatWidget, FormManager, RecentTransactionsList, SummaryCards};

use crate::views::{AppHeader, RequireAuth};
use crate::Route;

/// The main authenticated page: summary cards, quick-add forms, charts,
/// recent transactions and the floating assistant.
#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();

    rsx! {
        RequireAuth {
            div {
                class: "app-page",
                AppHeader {}
                main {
                    class: "app-main",
                    SummaryCards {}
                    FormManager {}
                    ChartsPanel {}
                    RecentTransactionsList {}
                }
                ChatWidget {
                    on_open_full: move |_| {
                        nav.push(Route::Chat {});
                    },
                }
            }
        }
    }
}
