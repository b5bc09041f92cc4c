use uuid::Uuid;

use crate::endpoint::{TokenEndpoint, TokenEndpointError, UserProfile};
use crate::store::SessionStore;

/// Development fallback credentials. Not a security mechanism.
pub const DEV_USERNAME: &str = "admin";
pub const DEV_PASSWORD: &str = "admin123";

const USER_KEY: &str = "user";
const TOKEN_KEY: &str = "token";

pub fn is_dev_credentials(username: &str, password: &str) -> bool {
    username == DEV_USERNAME && password == DEV_PASSWORD
}

pub fn dev_profile() -> UserProfile {
    UserProfile {
        username: "admin".to_string(),
        full_name: "Administrator".to_string(),
        email: "admin@example.com".to_string(),
    }
}

/// Mint a development token. Unique per call.
pub fn mint_dev_token() -> String {
    format!("mock-jwt-token-{}", Uuid::now_v7())
}

/// Stateful session: current user and token, mirrored into the backing
/// store so a later session can restore them.
pub struct AuthSession<S: SessionStore> {
    store: S,
    user: Option<UserProfile>,
    token: Option<String>,
}

impl<S: SessionStore> AuthSession<S> {
    /// Restore any persisted identity from the store.
    pub fn restore(store: S) -> Self {
        let token = store.get(TOKEN_KEY);
        let user = store
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok());
        Self { store, user, token }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn username(&self) -> &str {
        self.user.as_ref().map(|u| u.username.as_str()).unwrap_or("")
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Attempt a login against the token endpoint; on any endpoint failure,
    /// fall back to the hardcoded development credentials.
    ///
    /// Returns whether the caller may treat the login as successful. Note
    /// the quirk: a granted token is kept even when a later profile fetch
    /// fails and the call reports `false`.
    pub fn login(&mut self, endpoint: &dyn TokenEndpoint, username: &str, password: &str) -> bool {
        match self.login_via_endpoint(endpoint, username, password) {
            Ok(authenticated) => authenticated,
            Err(err) => {
                tracing::warn!(error = %err, "token endpoint login failed");

                if is_dev_credentials(username, password) {
                    let profile = dev_profile();
                    let token = mint_dev_token();
                    self.persist_user(&profile);
                    self.store.set(TOKEN_KEY, token.clone());
                    self.user = Some(profile);
                    self.token = Some(token);
                    return true;
                }

                false
            }
        }
    }

    /// Clear the session and its persisted identity.
    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
        self.store.remove(USER_KEY);
        self.store.remove(TOKEN_KEY);
    }

    fn login_via_endpoint(
        &mut self,
        endpoint: &dyn TokenEndpoint,
        username: &str,
        password: &str,
    ) -> Result<bool, TokenEndpointError> {
        let grant = endpoint.request_token(username, password)?;
        if grant.access_token.is_empty() {
            return Ok(false);
        }

        self.token = Some(grant.access_token.clone());
        self.store.set(TOKEN_KEY, grant.access_token.clone());

        match endpoint.fetch_profile(&grant.access_token)? {
            Some(profile) => {
                self.persist_user(&profile);
                self.user = Some(profile);
            }
            None if is_dev_credentials(username, password) => {
                let profile = dev_profile();
                self.persist_user(&profile);
                self.user = Some(profile);
            }
            // A token without a profile still counts as logged in.
            None => {}
        }

        Ok(true)
    }

    fn persist_user(&self, profile: &UserProfile) {
        if let Ok(raw) = serde_json::to_string(profile) {
            self.store.set(USER_KEY, raw);
        }
    }
}
