use dioxus::prelude::*;

use ui::use_session;

use crate::Route;

/// Public landing page.
#[component]
pub fn Landing() -> Element {
    let session = use_session();

    let cta = if session().is_authenticated() {
        rsx! {
            Link { class: "btn btn-primary", to: Route::Dashboard {}, "Open your dashboard" }
        }
    } else {
        rsx! {
            Link { class: "btn btn-primary", to: Route::Signup {}, "Get started" }
            Link { class: "btn btn-outline", to: Route::Login {}, "Sign in" }
        }
    };

    rsx! {
        div {
            class: "landing",
            div {
                class: "landing-hero",
                h1 { "Financio" }
                p {
                    class: "landing-tagline",
                    "All your money in one place: accounts, investments, liabilities and an assistant that actually knows your numbers."
                }
                div { class: "landing-cta", {cta} }
            }
            div {
                class: "landing-features",
                div {
                    class: "landing-feature",
                    h3 { "See everything" }
                    p { "Summary cards and charts computed from your real data." }
                }
                div {
                    class: "landing-feature",
                    h3 { "Record anything" }
                    p { "Transactions, assets, investments and liabilities in two clicks." }
                }
                div {
                    class: "landing-feature",
                    h3 { "Ask questions" }
                    p { "A financial assistant with access only to what you allow." }
                }
            }
        }
    }
}
