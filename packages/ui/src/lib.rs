//! This crate contains all shared UI for the workspace: the session context,
//! the data-fetch hooks over the query cache, the chat surfaces, the entity
//! forms and the dashboard widgets. Pages live in the `web` crate; anything
//! two pages share lives here.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod components;
pub use components::{Banner, BannerKind, Button, ButtonVariant, Modal, Spinner};

mod session;
pub use session::{
    establish_session, sign_out, use_pending_prompt, use_session, PendingPrompt, SessionHandle,
    SessionProvider, SessionState, SessionUser,
};

pub mod hooks;
pub use hooks::{cached_query, run_mutation, QueryState};

pub mod chat;
pub use chat::{ChatLog, ChatMessage, SendState, Sender};

mod chat_view;
pub use chat_view::{submit_chat, submit_chat_text, ChatInputRow, ChatMessageList, ChatWidget};

mod markdown;
pub use markdown::{render_markdown, MarkdownMessage};

pub mod forms;
pub use forms::{FormKind, FormManager};

mod dashboard;
pub use dashboard::{RecentTransactionsList, SummaryCards};

mod charts;
pub use charts::ChartsPanel;

pub mod format;
pub mod platform;
pub mod time;
