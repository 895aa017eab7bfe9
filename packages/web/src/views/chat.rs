//! Full-page chat. Keeps its own log, independent of the widget's; the only
//! thing that crosses surfaces is the one-shot prompt in [`PendingPrompt`],
//! consumed here on mount.

use dioxus::prelude::*;

use api::ApiClient;
use ui::chat::{full_chat_greeting, ChatLog};
use ui::icons::FaChevronLeft;
use ui::time::clock_time;
use ui::{
    submit_chat, submit_chat_text, use_pending_prompt, use_session, ChatInputRow,
    ChatMessageList, Icon,
};

use crate::views::RequireAuth;
use crate::Route;

const FULL_CHAT_ANCHOR: &str = "full-chat-end";

#[component]
pub fn Chat() -> Element {
    let client = use_context::<ApiClient>();
    let session = use_session();
    let pending_prompt = use_pending_prompt();

    let log = use_signal(|| {
        let name = session
            .peek()
            .user
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_default();
        ChatLog::with_greeting(&full_chat_greeting(&name), clock_time())
    });
    let input = use_signal(String::new);

    // Consume the navigation handoff exactly once, after the first render.
    use_hook(|| {
        let client = client.clone();
        spawn(async move {
            if let Some(prompt) = pending_prompt.take() {
                submit_chat_text(log, &prompt, client, session, FULL_CHAT_ANCHOR);
            }
        });
    });

    // Auto-scroll on every appended entry.
    use_effect(move || {
        let _count = log().messages().len();
        ui::platform::scroll_into_view(FULL_CHAT_ANCHOR);
    });

    let send = {
        let client = client.clone();
        move || submit_chat(log, input, client.clone(), session, FULL_CHAT_ANCHOR)
    };

    let disabled = log().is_pending() || !session().is_authenticated();

    rsx! {
        RequireAuth {
            div {
                class: "full-chat-page",
                header {
                    class: "full-chat-header",
                    Link {
                        class: "back-link",
                        to: Route::Dashboard {},
                        Icon { icon: FaChevronLeft, width: 14, height: 14 }
                        span { "Back to dashboard" }
                    }
                    h1 { "FinAI Assistant" }
                    if log().is_pending() {
                        span { class: "chat-pending-hint", "Thinking…" }
                    }
                }
                div {
                    class: "full-chat-body",
                    ChatMessageList { log, anchor_id: FULL_CHAT_ANCHOR }
                }
                footer {
                    class: "full-chat-footer",
                    ChatInputRow {
                        input,
                        disabled: disabled,
                        placeholder: "Ask anything about your finances…",
                        on_submit: {
                            let send = send.clone();
                            move |_| send()
                        },
                    }
                }
            }
        }
    }
}
