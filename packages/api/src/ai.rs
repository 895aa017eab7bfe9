//! Assistant endpoints: the chat round trip and the studio templates.

use crate::client::{ApiClient, ApiError};
use crate::types::{AiTemplate, ChatAnswer, ChatRequest};

impl ApiClient {
    /// POST `/api/v1/ai/chat` — one question, one answer. The chat surfaces
    /// guarantee a single outstanding request each; this function does not.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatAnswer, ApiError> {
        self.post_json("/api/v1/ai/chat", &[], request).await
    }

    /// GET `/api/v1/ai/templates`
    pub async fn ai_templates(&self) -> Result<Vec<AiTemplate>, ApiError> {
        self.get_json("/api/v1/ai/templates", &[]).await
    }
}

/// Built-in studio templates, used when the catalogue endpoint is
/// unreachable so the studio never renders empty.
pub fn fallback_templates() -> Vec<AiTemplate> {
    let entries = [
        (
            "investment-review",
            "Investment Portfolio Review",
            "investment",
            "show_chart",
            "Get personalized advice on your investment mix",
            "Review my investment portfolio and suggest improvements to my asset allocation.",
        ),
        (
            "budget-optimizer",
            "Monthly Budget Optimizer",
            "budgeting",
            "pie_chart",
            "Optimize your monthly spending",
            "Analyze my monthly budget and point out where I can cut spending.",
        ),
        (
            "spending-analysis",
            "Spending Pattern Analysis",
            "budgeting",
            "analytics",
            "Analyze your spending habits",
            "What are my biggest spending categories and how have they changed recently?",
        ),
        (
            "debt-payoff",
            "Debt Payoff Strategy",
            "loans",
            "payments",
            "Create a debt elimination plan",
            "Build me a payoff plan for my outstanding liabilities.",
        ),
    ];
    entries
        .into_iter()
        .map(|(id, title, category, icon, description, prompt)| AiTemplate {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
            prompt: Some(prompt.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_wire_shape() {
        let request = ChatRequest {
            user_id: "u1".to_string(),
            question: "What's my spending?".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"user_id": "u1", "question": "What's my spending?"})
        );
    }

    #[test]
    fn chat_answer_ignores_extra_fields() {
        let raw = r#"{"user_id": "u1", "question": "q", "answer": "Here is a breakdown."}"#;
        let answer: ChatAnswer = serde_json::from_str(raw).unwrap();
        assert_eq!(answer.answer, "Here is a breakdown.");
    }

    #[test]
    fn fallback_templates_all_carry_prompts() {
        let templates = fallback_templates();
        assert!(!templates.is_empty());
        assert!(templates.iter().all(|t| t.prompt.is_some()));
    }
}
