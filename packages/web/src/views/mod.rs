//! Page views. Shared chrome (header, auth guard) lives here too since it
//! needs the crate's `Route` type.

use dioxus::prelude::*;

use store::QueryCache;
use ui::icons::{FaRightFromBracket, FaWallet};
use ui::{sign_out, use_session, Icon, SessionHandle};

use crate::Route;

mod ai_studio;
mod chat;
mod dashboard;
mod landing;
mod login;
mod permissions;
mod profile;
mod signup;
mod transactions;

pub use ai_studio::AiStudio;
pub use chat::Chat;
pub use dashboard::Dashboard;
pub use landing::Landing;
pub use login::Login;
pub use permissions::Permissions;
pub use profile::Profile;
pub use signup::Signup;
pub use transactions::Transactions;

/// Redirect unauthenticated visitors of `/app/*` pages to the login route.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();

    if !session().loading && !session().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

/// Top navigation shared by the `/app/*` pages.
#[component]
pub fn AppHeader() -> Element {
    let client = use_context::<api::ApiClient>();
    let cache = use_context::<QueryCache>();
    let handle = use_context::<SessionHandle>();
    let session = use_session();
    let nav = use_navigator();

    let user_name = session()
        .user
        .map(|u| u.name)
        .unwrap_or_else(|| "Guest".to_string());

    let on_sign_out = move |_| {
        sign_out(&client, &cache, &handle, session);
        nav.push(Route::Login {});
    };

    rsx! {
        header {
            class: "app-header",
            Link {
                class: "app-brand",
                to: Route::Dashboard {},
                Icon { icon: FaWallet, width: 20, height: 20 }
                h2 { "Financio" }
            }
            nav {
                class: "app-nav",
                Link { to: Route::Dashboard {}, "Dashboard" }
                Link { to: Route::Transactions {}, "Transactions" }
                Link { to: Route::AiStudio {}, "AI Studio" }
                Link { to: Route::Profile {}, "Profile" }
                Link { to: Route::Permissions {}, "Permissions" }
            }
            div {
                class: "app-header-right",
                span { class: "app-user-name", "{user_name}" }
                button {
                    class: "sign-out",
                    title: "Sign out",
                    onclick: on_sign_out,
                    Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                }
            }
        }
    }
}
