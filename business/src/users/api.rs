//! User-list API client.
//!
//! Performs the network IO for the loader command. Callers map the typed error into
//! whatever the UI shows.

use thiserror::Error;

use crate::http::{Client, HttpError};
use crate::users::User;

#[derive(Debug, Error)]
pub enum UsersApiError {
    #[error("request failed: {0}")]
    Transport(#[from] HttpError),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("failed to parse user list: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, UsersApiError>;

/// GET `url`, expecting a JSON array of users.
///
/// Anything but a 200 is an error, including other 2xx codes.
pub async fn list_users(url: &str) -> ApiResult<Vec<User>> {
    let response = Client::get(url)
        .header("accept", "application/json")
        .send()
        .await?;

    if response.status != 200 {
        return Err(UsersApiError::Status(response.status));
    }

    Ok(response.json()?)
}
