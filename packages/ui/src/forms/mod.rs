//! Modal entry forms for the four financial entities, plus the manager that
//! shows one at a time. Submission posts the DTO with the resolved user id,
//! applies the mutation's invalidation set, closes the modal and resets the
//! fields; failures show an inline banner and are logged.

use dioxus::prelude::*;

use api::TxKind;

use crate::components::Modal;
use crate::{Button, ButtonVariant};

mod asset;
mod investment;
mod liability;
mod transaction;

pub use asset::AssetForm;
pub use investment::InvestmentForm;
pub use liability::LiabilityForm;
pub use transaction::TransactionForm;

/// Option lists mirror what the gateway accepts.
pub const TRANSACTION_CATEGORIES: &[&str] = &[
    "salary",
    "freelance",
    "bonus",
    "groceries",
    "utilities",
    "rent",
    "dining",
    "shopping",
    "transportation",
    "healthcare",
    "entertainment",
    "education",
];

pub const ASSET_TYPES: &[&str] = &[
    "bank_account",
    "property",
    "vehicle",
    "jewelry",
    "investment",
    "bank_deposit",
    "cash",
    "electronics",
    "other",
];

pub const INVESTMENT_TYPES: &[&str] = &["stock", "mutual_fund", "etf", "bond", "crypto"];

pub const LIABILITY_TYPES: &[&str] = &[
    "student_loan",
    "credit_card",
    "personal_loan",
    "mortgage",
    "auto_loan",
    "medical_debt",
    "other",
];

/// Sign/kind agreement is enforced here, at submit time, and nowhere else:
/// an expense stores as a negative amount, an income as non-negative,
/// whatever sign the user typed.
pub fn normalized_amount(kind: TxKind, entered: f64) -> f64 {
    match kind {
        TxKind::Expense => -entered.abs(),
        TxKind::Income => entered.abs(),
    }
}

/// Which entity form is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Transaction,
    Asset,
    Investment,
    Liability,
}

impl FormKind {
    fn title(self) -> &'static str {
        match self {
            FormKind::Transaction => "Add Transaction",
            FormKind::Asset => "Add Asset",
            FormKind::Investment => "Add Investment",
            FormKind::Liability => "Add Liability",
        }
    }
}

/// The dashboard's "add" buttons and the single active modal.
#[component]
pub fn FormManager() -> Element {
    let mut active = use_signal(|| Option::<FormKind>::None);

    let close = move |_: ()| active.set(None);

    let modal = match active() {
        None => rsx! {},
        Some(kind) => {
            let body = match kind {
                FormKind::Transaction => rsx! { TransactionForm { on_close: close } },
                FormKind::Asset => rsx! { AssetForm { on_close: close } },
                FormKind::Investment => rsx! { InvestmentForm { on_close: close } },
                FormKind::Liability => rsx! { LiabilityForm { on_close: close } },
            };
            rsx! {
                Modal {
                    title: "{kind.title()}",
                    on_close: close,
                    {body}
                }
            }
        }
    };

    rsx! {
        div {
            class: "quick-actions",
            Button {
                onclick: move |_| active.set(Some(FormKind::Transaction)),
                "Add Transaction"
            }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| active.set(Some(FormKind::Asset)),
                "Add Asset"
            }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| active.set(Some(FormKind::Investment)),
                "Add Investment"
            }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| active.set(Some(FormKind::Liability)),
                "Add Liability"
            }
        }
        {modal}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expenses_store_negative_regardless_of_entered_sign() {
        assert_eq!(normalized_amount(TxKind::Expense, 50.0), -50.0);
        assert_eq!(normalized_amount(TxKind::Expense, -50.0), -50.0);
        assert_eq!(normalized_amount(TxKind::Expense, 0.0), 0.0);
    }

    #[test]
    fn income_stores_non_negative() {
        assert_eq!(normalized_amount(TxKind::Income, 5000.0), 5000.0);
        assert_eq!(normalized_amount(TxKind::Income, -5000.0), 5000.0);
    }
}
