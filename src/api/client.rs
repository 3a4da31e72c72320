//! User API Client
//!
//! A JSON REST client for the user administration backend.

use crate::api::UserApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::http;
use crate::environment::Environment;
use crate::user::{Role, User};
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("user-admin/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
struct AddUserRequest<'a> {
    name: &'a str,
    email: &'a str,
    role: Role,
}

#[derive(Serialize)]
struct UpdateUserRequest<'a> {
    name: &'a str,
    role: Role,
}

#[derive(Debug, Clone)]
pub struct UserApiClient {
    client: Client,
    base_url: String,
}

impl UserApiClient {
    pub fn new(environment: Environment) -> Self {
        Self::with_base_url(environment.api_base_url())
    }

    /// Build a client against an explicit origin, e.g. a self-hosted backend
    /// configured with `set-backend`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(Duration::from_secs(http::CONNECT_TIMEOUT_SECS))
                .timeout(Duration::from_secs(http::REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn post_request<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("User-Agent", USER_AGENT)
            .json(body)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn put_request<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .put(&url)
            .header("Content-Type", "application/json")
            .header("User-Agent", USER_AGENT)
            .json(body)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn delete_request(&self, endpoint: &str) -> Result<(), ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .delete(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        // The ack body (the deleted document) carries no meaning here.
        Self::handle_response_status(response).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserApi for UserApiClient {
    async fn add_user(&self, name: &str, email: &str, role: Role) -> Result<User, ApiError> {
        self.post_request("users/addUser", &AddUserRequest { name, email, role })
            .await
    }

    async fn update_user(&self, id: &str, name: &str, role: Role) -> Result<User, ApiError> {
        let endpoint = format!("users/updateUser/{}", urlencoding::encode(id));
        self.put_request(&endpoint, &UpdateUserRequest { name, role })
            .await
    }

    async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let endpoint = format!("users/deleteUser/{}", urlencoding::encode(id));
        self.delete_request(&endpoint).await
    }

    async fn get_all_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_request("users/getUsers").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_normalizes_slashes() {
        let client = UserApiClient::with_base_url("http://localhost:5000/");
        assert_eq!(
            client.build_url("/users/getUsers"),
            "http://localhost:5000/users/getUsers"
        );
        assert_eq!(
            client.build_url("users/getUsers"),
            "http://localhost:5000/users/getUsers"
        );
    }

    #[test]
    fn decode_response_rejects_malformed_body() {
        let result: Result<Vec<User>, ApiError> =
            UserApiClient::decode_response(b"not json at all");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn update_request_body_has_no_email_field() {
        let body = UpdateUserRequest {
            name: "Alice",
            role: Role::Admin,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["name"], "Alice");
        assert_eq!(value["role"], "admin");
        assert!(value.get("email").is_none());
    }
}
