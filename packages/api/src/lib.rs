//! # API crate — the wire layer of the Financio client
//!
//! Everything that talks to the two external collaborators lives here: the
//! REST gateway (dashboards, transactions, financial entities, the AI
//! assistant) and the identity provider (sign-in/sign-up). The UI never
//! builds a URL or touches a status code itself.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL + timeout, bearer injection, global 401 hook, JSON request plumbing |
//! | [`types`] | Flat DTOs exchanged with the gateway |
//! | [`identity`] | [`IdentityClient`] for the external identity provider's token endpoints |
//! | [`users`] | Current user, create user (409-tolerant), profile and permission updates |
//! | [`dashboard`] | Server-computed summary, chart series, recent transactions |
//! | [`transactions`] | Paginated/filtered transaction list and the filter → query-string rules |
//! | [`financial`] | Add transaction / asset / investment / liability |
//! | [`ai`] | Assistant chat and prompt templates |

pub mod ai;
pub mod client;
pub mod dashboard;
pub mod financial;
pub mod identity;
pub mod transactions;
pub mod types;
pub mod users;

pub use client::{ApiClient, ApiError};
pub use identity::{IdentityClient, IdentitySession};
pub use transactions::{KindFilter, TransactionFilters};
pub use types::*;
