//! Chat surface building blocks shared by the floating widget and the full
//! page: the rendered message list, the input row, and the one send path.
//!
//! Assistant bubbles render through the markdown pipeline; user bubbles stay
//! plain text. Every append scrolls the surface's anchor into view.

use dioxus::prelude::*;

use api::{ApiClient, ChatRequest};

use crate::chat::{ChatLog, Sender, WIDGET_GREETING};
use crate::icons::{FaExpand, FaMinus, FaPaperPlane, FaRobot, FaXmark};
use crate::markdown::MarkdownMessage;
use crate::platform::scroll_into_view;
use crate::session::SessionState;
use crate::time::clock_time;
use crate::Icon;

/// Submit the current input on a surface. Appends the optimistic user entry
/// (or refuses, per the log's rules), fires the request, and resolves the
/// log with the answer or the fixed error entry. One outstanding request per
/// surface: while the log is pending the input is disabled anyway, and
/// `begin_send` refuses re-entry regardless.
pub fn submit_chat(
    log: Signal<ChatLog>,
    mut input: Signal<String>,
    client: ApiClient,
    session: Signal<SessionState>,
    anchor_id: &'static str,
) {
    let text = input.peek().clone();
    if submit_chat_text(log, &text, client, session, anchor_id) {
        input.set(String::new());
    }
}

/// Same as [`submit_chat`] but for text that did not come from the input
/// field (the one-shot prompt handed over by navigation). Returns whether a
/// send actually started.
pub fn submit_chat_text(
    mut log: Signal<ChatLog>,
    text: &str,
    client: ApiClient,
    session: Signal<SessionState>,
    anchor_id: &'static str,
) -> bool {
    let user_id = match session.peek().user_id() {
        Some(id) => id.to_string(),
        None => return false,
    };

    let question = log.write().begin_send(text, Some(&user_id), clock_time());
    let Some(question) = question else {
        return false;
    };
    scroll_into_view(anchor_id);

    spawn(async move {
        let request = ChatRequest { user_id, question };
        match client.chat(&request).await {
            Ok(reply) => log.write().finish_success(&reply.answer, clock_time()),
            Err(e) => {
                tracing::error!("chat request failed: {e}");
                log.write().finish_error(clock_time());
            }
        }
        scroll_into_view(anchor_id);
    });
    true
}

/// The rendered, ordered message list with the scroll anchor at its tail.
#[component]
pub fn ChatMessageList(log: ReadOnlySignal<ChatLog>, anchor_id: &'static str) -> Element {
    let current = log();
    let pending = current.is_pending();
    let rows = current.messages().iter().map(|message| {
        let row_class = match message.sender {
            Sender::User => "chat-row chat-row-user",
            Sender::Assistant => "chat-row chat-row-assistant",
        };
        let body = match message.sender {
            Sender::Assistant => rsx! {
                MarkdownMessage { content: message.text.clone() }
            },
            Sender::User => rsx! {
                p { class: "chat-plain", "{message.text}" }
            },
        };
        rsx! {
            div {
                key: "{message.id}",
                class: "{row_class}",
                if message.sender == Sender::Assistant {
                    div { class: "chat-avatar",
                        Icon { icon: FaRobot, width: 14, height: 14 }
                    }
                }
                div {
                    class: "chat-bubble",
                    {body}
                    p { class: "chat-timestamp", "{message.timestamp}" }
                }
            }
        }
    });
    rsx! {
        div {
            class: "chat-messages",
            {rows}
            if pending {
                div {
                    class: "chat-row chat-row-assistant",
                    div { class: "chat-avatar",
                        Icon { icon: FaRobot, width: 14, height: 14 }
                    }
                    div { class: "chat-bubble chat-thinking", "Thinking…" }
                }
            }
            div { id: "{anchor_id}" }
        }
    }
}

/// Input + send button. Disabled while a request is pending or nobody is
/// signed in; Enter submits.
#[component]
pub fn ChatInputRow(
    input: Signal<String>,
    disabled: bool,
    placeholder: String,
    on_submit: EventHandler<()>,
) -> Element {
    let mut input = input;
    rsx! {
        div {
            class: "chat-input-row",
            input {
                class: "chat-input",
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{input}",
                disabled: disabled,
                oninput: move |evt| input.set(evt.value()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        on_submit.call(());
                    }
                },
            }
            button {
                class: "chat-send",
                disabled: disabled,
                onclick: move |_| on_submit.call(()),
                Icon { icon: FaPaperPlane, width: 14, height: 14 }
            }
        }
    }
}

const WIDGET_ANCHOR: &str = "chat-widget-end";

/// The floating dashboard chat. Its log is independent of the full page's;
/// "open full chat" is plain navigation and carries nothing over.
#[component]
pub fn ChatWidget(on_open_full: EventHandler<()>) -> Element {
    let client = use_context::<ApiClient>();
    let session = crate::use_session();
    let mut open = use_signal(|| false);
    let mut minimized = use_signal(|| false);
    let log = use_signal(|| ChatLog::with_greeting(WIDGET_GREETING, clock_time()));
    let input = use_signal(String::new);

    // Auto-scroll on every appended entry.
    use_effect(move || {
        let _count = log().messages().len();
        scroll_into_view(WIDGET_ANCHOR);
    });

    let send = {
        let client = client.clone();
        move || submit_chat(log, input, client.clone(), session, WIDGET_ANCHOR)
    };

    let disabled = log().is_pending() || !session().is_authenticated();
    let panel_class = if minimized() {
        "chat-panel chat-panel-minimized"
    } else {
        "chat-panel"
    };

    rsx! {
        div {
            class: "chat-fab-wrap",
            button {
                class: "chat-fab",
                onclick: move |_| open.set(!open()),
                Icon { icon: FaRobot, width: 20, height: 20 }
            }
        }

        if open() {
            div {
                class: "{panel_class}",
                div {
                    class: "chat-panel-header",
                    h3 {
                        Icon { icon: FaRobot, width: 16, height: 16 }
                        span { "FinAI Assistant" }
                        if log().is_pending() {
                            span { class: "chat-pending-hint", "Thinking…" }
                        }
                    }
                    div {
                        class: "chat-panel-actions",
                        button {
                            title: "Minimize",
                            onclick: move |_| minimized.set(!minimized()),
                            Icon { icon: FaMinus, width: 14, height: 14 }
                        }
                        button {
                            title: "Open full chat",
                            onclick: move |_| on_open_full.call(()),
                            Icon { icon: FaExpand, width: 14, height: 14 }
                        }
                        button {
                            title: "Close",
                            onclick: move |_| open.set(false),
                            Icon { icon: FaXmark, width: 14, height: 14 }
                        }
                    }
                }

                if !minimized() {
                    ChatMessageList { log, anchor_id: WIDGET_ANCHOR }
                    div {
                        class: "chat-panel-footer",
                        ChatInputRow {
                            input,
                            disabled: disabled,
                            placeholder: "Ask about your finances…",
                            on_submit: {
                                let send = send.clone();
                                move |_| send()
                            },
                        }
                        if !session().is_authenticated() {
                            p { class: "chat-signin-hint", "Sign in to use the assistant" }
                        }
                    }
                }
            }
        }
    }
}
