//! Flat DTOs exchanged with the gateway. The backend is the source of truth;
//! nothing here carries invariants beyond field presence.

use serde::{Deserialize, Serialize};

/// The authenticated user's profile as the gateway returns it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub credit_score: i64,
    #[serde(default)]
    pub epf_balance: f64,
    #[serde(default)]
    pub permissions: Permissions,
}

/// What the AI assistant is allowed to see. A fixed set of boolean flags;
/// the gateway enforces them, the client only edits them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Permissions {
    pub perm_assets: bool,
    pub perm_liabilities: bool,
    pub perm_transactions: bool,
    pub perm_investments: bool,
    pub perm_credit_score: bool,
    pub perm_epf_balance: bool,
}

impl Default for Permissions {
    fn default() -> Self {
        Self {
            perm_assets: true,
            perm_liabilities: true,
            perm_transactions: false,
            perm_investments: false,
            perm_credit_score: true,
            perm_epf_balance: false,
        }
    }
}

/// Income or expense. The stored amount's sign is expected to agree with
/// this (expense negative, income non-negative); the transaction form
/// normalizes it at submit time and nothing re-checks it afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

/// A transaction as submitted from the form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TxKind,
}

/// A transaction row from the paginated list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
    #[serde(rename = "type", default)]
    pub kind: Option<TxKind>,
}

/// A dashboard recent-transaction row (the gateway omits the kind here).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecentTransaction {
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
}

/// One page of the filtered transaction list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsPage {
    pub transactions: Vec<TransactionRecord>,
    pub total_count: u64,
    pub total_pages: u32,
    pub current_page: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Liability {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub outstanding_balance: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub name: String,
    pub ticker: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub quantity: f64,
    pub current_value: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub purchase_date: Option<String>,
}

/// Server-computed dashboard aggregates. Read-only from the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub epf_balance: f64,
    pub credit_score: i64,
    pub investment_portfolio: f64,
}

/// One labelled series of a dashboard chart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

/// All chart series for one period, computed server-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub spending_chart: ChartSeries,
    pub savings_chart: ChartSeries,
    pub investment_chart: ChartSeries,
    pub allocation_chart: ChartSeries,
    pub period: String,
}

/// Registration payload sent right after the identity provider confirms an
/// account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub user_id: String,
    pub name: String,
}

/// Partial profile update; absent fields stay untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epf_balance: Option<f64>,
}

/// The gateway's acknowledgement for write operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

/// Question sent to the assistant endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub question: String,
}

/// The assistant's reply. Only the answer text matters to the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
}

/// A prompt template from the AI studio catalogue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiTemplate {
    pub id: String,
    pub title: String,
    pub category: String,
    pub icon: String,
    pub description: String,
    /// The question the template submits. Older gateway builds omit it.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub prompt: Option<String>,
}

impl AiTemplate {
    /// The question to submit when the template is chosen.
    pub fn question(&self) -> &str {
        self.prompt.as_deref().unwrap_or(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tx_kind_uses_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&TxKind::Income).unwrap(), "\"income\"");
        assert_eq!(
            serde_json::to_string(&TxKind::Expense).unwrap(),
            "\"expense\""
        );
        assert_eq!(
            serde_json::from_str::<TxKind>("\"expense\"").unwrap(),
            TxKind::Expense
        );
    }

    #[test]
    fn new_transaction_serializes_kind_as_type() {
        let tx = NewTransaction {
            date: "2026-08-01".to_string(),
            description: "Groceries".to_string(),
            category: "groceries".to_string(),
            amount: -42.5,
            kind: TxKind::Expense,
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["amount"], -42.5);
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn transactions_page_decodes_camel_case_counters() {
        let raw = r#"{
            "transactions": [
                {"date": "2026-07-30", "description": "Rent", "category": "rent", "amount": -1200.0, "type": "expense"}
            ],
            "totalCount": 37,
            "totalPages": 4,
            "currentPage": 2
        }"#;
        let page: TransactionsPage = serde_json::from_str(raw).unwrap();
        assert_eq!(page.total_count, 37);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.transactions[0].kind, Some(TxKind::Expense));
    }

    #[test]
    fn recent_transaction_tolerates_missing_kind() {
        let raw = r#"{"date": "2026-07-30", "description": "Salary", "category": "salary", "amount": 5000.0}"#;
        let tx: RecentTransaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.amount, 5000.0);
    }

    #[test]
    fn profile_patch_omits_absent_fields() {
        let patch = ProfilePatch {
            credit_score: Some(760),
            epf_balance: None,
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["credit_score"], 760);
        assert!(json.get("epf_balance").is_none());
    }

    #[test]
    fn template_question_falls_back_to_description() {
        let mut template = AiTemplate {
            id: "budget".to_string(),
            title: "Budget".to_string(),
            category: "budgeting".to_string(),
            icon: "pie_chart".to_string(),
            description: "Optimize my monthly spending".to_string(),
            prompt: None,
        };
        assert_eq!(template.question(), "Optimize my monthly spending");
        template.prompt = Some("Review my budget in detail".to_string());
        assert_eq!(template.question(), "Review my budget in detail");
    }
}
