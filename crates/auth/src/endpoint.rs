use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Successful response from the token endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
}

/// Identity record for a logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub full_name: String,
    pub email: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenEndpointError {
    #[error("token endpoint rejected the credentials")]
    Rejected,

    #[error("token endpoint unreachable: {0}")]
    Unreachable(String),
}

/// Seam to the external token service.
///
/// The transport behind it (HTTP client, interceptors) is out of scope;
/// tests substitute scripted implementations.
pub trait TokenEndpoint: Send + Sync {
    fn request_token(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenGrant, TokenEndpointError>;

    /// Fetch the profile for a granted token. `Ok(None)` models a backend
    /// that accepted the credentials but has no profile record for them.
    fn fetch_profile(
        &self,
        access_token: &str,
    ) -> Result<Option<UserProfile>, TokenEndpointError>;
}
