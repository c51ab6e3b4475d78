/// Auth operations and session caching.
use crate::api::client::ApiClient;
use crate::api::types::{LoginRequest, LoginResponse, RegisterRequest};
use crate::error::ApiError;
use crate::storage::models::UserProfile;
use crate::storage::KeyValue;

impl<S: KeyValue> ApiClient<S> {
    /// Sign in and cache the bearer token plus the user's profile; later
    /// requests pick the token up automatically.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        let response: LoginResponse = self
            .post_json(
                "/auth/login",
                &LoginRequest {
                    email: email.to_string(),
                    password: password.to_string(),
                },
            )
            .await?;

        self.session.set_token(&response.access_token)?;

        let profile = UserProfile {
            email: email.to_string(),
            full_name: None,
        };
        self.session.set_profile(&profile)?;
        log::debug!("Signed in as {}", email);
        Ok(profile)
    }

    pub async fn register(
        &self,
        email: &str,
        full_name: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.post_json_no_response(
            "/auth/register",
            &RegisterRequest {
                email: email.to_string(),
                full_name: full_name.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    /// Revoke the backend session and drop the local cache. The cache is
    /// cleared even when the revocation request fails, so a dead backend
    /// cannot pin the UI in a signed-in state.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.post_empty("/auth/logout").await;
        if let Err(ref e) = result {
            log::warn!("Logout request failed ({}), clearing session anyway", e);
        }
        self.session.clear()?;
        result
    }
}
