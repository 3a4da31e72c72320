use crate::api::error::ApiError;
use crate::user::{Role, User};

pub(crate) mod client;
pub use client::UserApiClient;
pub mod error;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// Backend operations for user administration. One method per REST endpoint.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait UserApi: Send + Sync {
    /// Create a new user and return the record the server stored.
    async fn add_user(&self, name: &str, email: &str, role: Role) -> Result<User, ApiError>;

    /// Update name and role of an existing user. Email is not updatable
    /// through this endpoint.
    async fn update_user(&self, id: &str, name: &str, role: Role) -> Result<User, ApiError>;

    /// Delete a user by id. The backend's ack body is discarded.
    async fn delete_user(&self, id: &str) -> Result<(), ApiError>;

    /// Fetch the full user collection, in server order.
    async fn get_all_users(&self) -> Result<Vec<User>, ApiError>;
}
