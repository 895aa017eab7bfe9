//! User endpoints: profile reads, registration, profile and permission
//! updates.

use crate::client::{ApiClient, ApiError};
use crate::types::{Ack, NewUser, Permissions, ProfilePatch, User};

impl ApiClient {
    /// GET `/api/v1/users/me`
    pub async fn current_user(&self, user_id: &str) -> Result<User, ApiError> {
        self.get_json("/api/v1/users/me", &[("user_id", user_id.to_string())])
            .await
    }

    /// POST `/api/v1/users/create`
    ///
    /// Runs after every successful identity sign-in, so a 409 ("already
    /// exists") is expected steady-state and treated as success.
    pub async fn create_user(&self, new_user: &NewUser) -> Result<(), ApiError> {
        match self
            .post_json::<_, Ack>("/api/v1/users/create", &[], new_user)
            .await
        {
            Ok(_) => Ok(()),
            Err(e) if e.is_conflict() => {
                tracing::debug!("user {} already registered", new_user.user_id);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// POST `/api/v1/users/update-profile`
    pub async fn update_profile(
        &self,
        user_id: &str,
        patch: &ProfilePatch,
    ) -> Result<Ack, ApiError> {
        self.post_json(
            "/api/v1/users/update-profile",
            &[("user_id", user_id.to_string())],
            patch,
        )
        .await
    }

    /// POST `/api/v1/users/update-permissions`
    pub async fn update_permissions(
        &self,
        user_id: &str,
        permissions: &Permissions,
    ) -> Result<Ack, ApiError> {
        self.post_json(
            "/api/v1/users/update-permissions",
            &[("user_id", user_id.to_string())],
            permissions,
        )
        .await
    }
}
