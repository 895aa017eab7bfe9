//! # Chat log state machine
//!
//! One [`ChatLog`] per chat surface (the floating widget and the full page
//! each keep their own — logs never merge). The machine is deliberately
//! small: `Idle → Pending → Idle`, on success or failure alike.
//!
//! Invariants the surfaces rely on:
//! - a submission appends exactly one user entry immediately (optimistic),
//! - each submission is resolved by exactly one assistant entry — the
//!   server's answer or the fixed error text, never both, never neither,
//! - while a request is pending the surface cannot start another one,
//! - a pending request cannot be cancelled; failures are not retried.

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// One entry of the ordered, append-only message list. Lives only in
/// component memory; nothing here survives a reload.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    /// Display clock time (`HH:MM`), stamped when the entry is appended.
    pub timestamp: String,
}

/// Whether this surface has a request in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendState {
    Idle,
    Pending,
}

/// The fixed assistant entry appended when a request fails. The original
/// error is logged, never shown.
pub const ASSISTANT_ERROR_TEXT: &str =
    "**Sorry, I ran into an error** while answering. Please try again in a moment.";

/// Greeting seeded into the floating widget.
pub const WIDGET_GREETING: &str = "Hello! I'm your **personal financial AI assistant**. I can help you:\n\n- Analyze your spending patterns\n- Review your investment portfolio\n- Answer questions about your finances\n\nWhat would you like to know today?";

/// Greeting seeded into the full-page chat.
pub fn full_chat_greeting(name: &str) -> String {
    let name = if name.trim().is_empty() { "there" } else { name };
    format!(
        "# Welcome to FinAI\n\nHi **{name}**! I'm your personal financial assistant.\n\n**Ready to get started?** Ask me anything about your finances."
    )
}

/// Ordered message list plus the per-surface send state.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    state: SendState,
    next_id: u64,
}

impl ChatLog {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            state: SendState::Idle,
            next_id: 1,
        }
    }

    /// A log seeded with one assistant greeting.
    pub fn with_greeting(text: &str, timestamp: String) -> Self {
        let mut log = Self::new();
        log.push(Sender::Assistant, text, timestamp);
        log
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn state(&self) -> SendState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == SendState::Pending
    }

    /// Try to start a send. Appends the user entry and flips to `Pending`,
    /// returning the question to post. Returns `None` — and appends nothing —
    /// for empty input, a missing user, or an already-pending surface.
    pub fn begin_send(
        &mut self,
        input: &str,
        user_id: Option<&str>,
        timestamp: String,
    ) -> Option<String> {
        let text = input.trim();
        if text.is_empty() || self.is_pending() || user_id.is_none() {
            return None;
        }
        self.push(Sender::User, text, timestamp);
        self.state = SendState::Pending;
        Some(text.to_string())
    }

    /// Resolve the pending send with the server's answer.
    pub fn finish_success(&mut self, answer: &str, timestamp: String) {
        if !self.is_pending() {
            return;
        }
        self.push(Sender::Assistant, answer, timestamp);
        self.state = SendState::Idle;
    }

    /// Resolve the pending send with the fixed error entry.
    pub fn finish_error(&mut self, timestamp: String) {
        if !self.is_pending() {
            return;
        }
        self.push(Sender::Assistant, ASSISTANT_ERROR_TEXT, timestamp);
        self.state = SendState::Idle;
    }

    fn push(&mut self, sender: Sender, text: &str, timestamp: String) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            sender,
            text: text.to_string(),
            timestamp,
        });
        self.next_id += 1;
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts() -> String {
        "12:00".to_string()
    }

    fn count(log: &ChatLog, sender: Sender) -> usize {
        log.messages().iter().filter(|m| m.sender == sender).count()
    }

    #[test]
    fn submission_appends_one_user_then_one_assistant_entry() {
        let mut log = ChatLog::new();
        let question = log.begin_send("What's my spending?", Some("u1"), ts());

        assert_eq!(question.as_deref(), Some("What's my spending?"));
        assert_eq!(count(&log, Sender::User), 1);
        assert_eq!(count(&log, Sender::Assistant), 0);
        assert!(log.is_pending());

        log.finish_success("Here's the breakdown.", ts());
        assert_eq!(count(&log, Sender::User), 1);
        assert_eq!(count(&log, Sender::Assistant), 1);
        assert_eq!(log.state(), SendState::Idle);

        // order: user entry first, then the assistant answer
        assert_eq!(log.messages()[0].sender, Sender::User);
        assert_eq!(log.messages()[1].sender, Sender::Assistant);
        assert_eq!(log.messages()[1].text, "Here's the breakdown.");
    }

    #[test]
    fn failure_appends_exactly_one_fixed_assistant_entry() {
        let mut log = ChatLog::new();
        log.begin_send("hello", Some("u1"), ts());
        log.finish_error(ts());

        assert_eq!(count(&log, Sender::Assistant), 1);
        assert_eq!(log.messages()[1].text, ASSISTANT_ERROR_TEXT);
        assert_eq!(log.state(), SendState::Idle);

        // resolving twice must not add a second assistant entry
        log.finish_error(ts());
        log.finish_success("late answer", ts());
        assert_eq!(count(&log, Sender::Assistant), 1);
    }

    #[test]
    fn input_is_trimmed_before_sending() {
        let mut log = ChatLog::new();
        let question = log.begin_send("  spaced out  ", Some("u1"), ts());
        assert_eq!(question.as_deref(), Some("spaced out"));
        assert_eq!(log.messages()[0].text, "spaced out");
    }

    #[test]
    fn empty_or_whitespace_input_appends_nothing() {
        let mut log = ChatLog::new();
        assert!(log.begin_send("", Some("u1"), ts()).is_none());
        assert!(log.begin_send("   \n", Some("u1"), ts()).is_none());
        assert!(log.messages().is_empty());
        assert_eq!(log.state(), SendState::Idle);
    }

    #[test]
    fn sending_requires_a_resolved_user() {
        let mut log = ChatLog::new();
        assert!(log.begin_send("hello?", None, ts()).is_none());
        assert!(log.messages().is_empty());
    }

    #[test]
    fn one_outstanding_request_per_surface() {
        let mut log = ChatLog::new();
        assert!(log.begin_send("first", Some("u1"), ts()).is_some());
        // second submission while pending is refused and appends nothing
        assert!(log.begin_send("second", Some("u1"), ts()).is_none());
        assert_eq!(count(&log, Sender::User), 1);

        log.finish_success("ok", ts());
        assert!(log.begin_send("second", Some("u1"), ts()).is_some());
        assert_eq!(count(&log, Sender::User), 2);
    }

    #[test]
    fn greeting_does_not_block_sending() {
        let mut log = ChatLog::with_greeting(WIDGET_GREETING, ts());
        assert_eq!(count(&log, Sender::Assistant), 1);
        assert!(!log.is_pending());
        assert!(log.begin_send("hi", Some("u1"), ts()).is_some());
    }

    #[test]
    fn message_ids_are_unique_and_increasing() {
        let mut log = ChatLog::with_greeting("hello", ts());
        log.begin_send("one", Some("u1"), ts());
        log.finish_success("two", ts());

        let ids: Vec<u64> = log.messages().iter().map(|m| m.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids.len(), sorted.len());
    }
}
