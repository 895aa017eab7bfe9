use dioxus::prelude::*;

use ui::SessionProvider;
use views::{AiStudio, Chat, Dashboard, Landing, Login, Permissions, Profile, Signup, Transactions};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/app/dashboard")]
    Dashboard {},
    #[route("/app/transactions")]
    Transactions {},
    #[route("/app/permissions")]
    Permissions {},
    #[route("/app/profile")]
    Profile {},
    #[route("/app/ai-studio")]
    AiStudio {},
    #[route("/app/chat")]
    Chat {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    launch_app();
}

#[cfg(feature = "web")]
fn launch_app() {
    dioxus::launch(App);
}

// Renderer-less builds (native tests) still type-check the whole app.
#[cfg(not(feature = "web"))]
fn launch_app() {
    let _ = App;
    tracing::info!("built without the web renderer; nothing to serve");
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
