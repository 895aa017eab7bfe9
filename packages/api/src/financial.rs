//! Write endpoints for the four financial entities. Each is a plain POST of
//! the entity DTO with the resolved user id; cache invalidation is the
//! caller's job (see the `store` crate's mutation table).

use crate::client::{ApiClient, ApiError};
use crate::types::{Ack, Asset, Investment, Liability, NewTransaction};

impl ApiClient {
    /// POST `/api/v1/transactions`
    pub async fn add_transaction(
        &self,
        user_id: &str,
        transaction: &NewTransaction,
    ) -> Result<Ack, ApiError> {
        self.post_json(
            "/api/v1/transactions",
            &[("user_id", user_id.to_string())],
            transaction,
        )
        .await
    }

    /// POST `/api/v1/assets`
    pub async fn add_asset(&self, user_id: &str, asset: &Asset) -> Result<Ack, ApiError> {
        self.post_json("/api/v1/assets", &[("user_id", user_id.to_string())], asset)
            .await
    }

    /// POST `/api/v1/investments`
    pub async fn add_investment(
        &self,
        user_id: &str,
        investment: &Investment,
    ) -> Result<Ack, ApiError> {
        self.post_json(
            "/api/v1/investments",
            &[("user_id", user_id.to_string())],
            investment,
        )
        .await
    }

    /// POST `/api/v1/liabilities`
    pub async fn add_liability(
        &self,
        user_id: &str,
        liability: &Liability,
    ) -> Result<Ack, ApiError> {
        self.post_json(
            "/api/v1/liabilities",
            &[("user_id", user_id.to_string())],
            liability,
        )
        .await
    }
}
