//! Identity provider interface.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::{Identity, Profile};

/// Issued session: the bearer token plus the identity it belongs to. The
/// token is the only client-side persistent state in the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: Identity,
}

#[async_trait(?Send)]
pub trait AuthClient {
    /// Currently signed-in identity, if any.
    fn current_identity(&self) -> Option<Identity>;

    /// Password sign-in; returns the member profile on success.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Profile, Error>;

    /// Registration with a chosen username and preferred language; creates
    /// the profile row and returns it.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        username: &str,
        preferred_language: &str,
    ) -> Result<Profile, Error>;

    /// Drop the current session.
    async fn sign_out(&self) -> Result<(), Error>;
}
