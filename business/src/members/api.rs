//! Members endpoint client.
//!
//! A single read-only call. Writes never leave the client, so there is nothing
//! else to talk to.

use thiserror::Error;

use crate::SEARCH_PARAM;
use crate::http::{Client, HttpError};
use crate::member::Member;

#[derive(Debug, Error)]
pub enum MembersApiError {
    #[error(transparent)]
    Request(#[from] HttpError),

    #[error("API returned status: {0}")]
    Status(u16),

    #[error("Failed to parse members response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A typed API result.
pub type ApiResult<T> = Result<T, MembersApiError>;

/// GET `{members_url}?search={term}`
///
/// The endpoint may ignore the term; filtering is always redone locally.
pub async fn list_members(members_url: &str, search: &str) -> ApiResult<Vec<Member>> {
    let response = Client::get(members_url)
        .header("accept", "application/json")
        .query(SEARCH_PARAM, search)
        .send()
        .await?;

    if !response.is_success() {
        return Err(MembersApiError::Status(response.status));
    }

    Ok(response.json()?)
}
