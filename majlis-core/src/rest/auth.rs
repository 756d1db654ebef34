//! Identity operations over the hosted auth endpoints.
use std::rc::Rc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::auth::{AuthClient, Session};
use crate::error::Error;
use crate::model::{Identity, Profile};
use crate::rest::{RestClient, TableQuery};

const SESSION_KEY: &str = "majlis.session";

pub struct RestAuth {
    client: Rc<RestClient>,
}

#[derive(Debug, Deserialize)]
struct TokenUser {
    id: String,
    #[serde(default)]
    email: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    user: Option<TokenUser>,
}

impl TokenResponse {
    /// A usable session requires both the token and the user record; sign-up
    /// flows that still await email confirmation return neither.
    fn into_session(self) -> Result<Session, Error> {
        match (self.access_token, self.user) {
            (Some(access_token), Some(user)) => Ok(Session {
                access_token,
                user: Identity {
                    id: user.id,
                    email: user.email,
                },
            }),
            _ => Err(Error::Store {
                code: None,
                message: String::from("auth response carried no session"),
            }),
        }
    }
}

impl RestAuth {
    #[must_use]
    pub fn new(client: Rc<RestClient>) -> Self {
        Self { client }
    }

    async fn profile_for(&self, user_id: &str) -> Result<Profile, Error> {
        let query = TableQuery::new("profiles").eq("id", user_id);
        self.client
            .maybe_single(&query)
            .await?
            .ok_or(Error::NotFound)
    }
}

#[async_trait(?Send)]
impl AuthClient for RestAuth {
    fn current_identity(&self) -> Option<Identity> {
        self.client.session().map(|s| s.user)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Profile, Error> {
        let response: TokenResponse = self
            .client
            .auth_post(
                "token?grant_type=password",
                &json!({ "email": email, "password": password }),
            )
            .await?;
        let session = response.into_session()?;
        let user_id = session.user.id.clone();
        self.client.set_session(Some(session));
        self.profile_for(&user_id).await
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        username: &str,
        preferred_language: &str,
    ) -> Result<Profile, Error> {
        let response: TokenResponse = self
            .client
            .auth_post("signup", &json!({ "email": email, "password": password }))
            .await?;
        let session = response.into_session()?;
        let user_id = session.user.id.clone();
        self.client.set_session(Some(session));

        let profile = Profile {
            id: user_id,
            username: username.to_string(),
            avatar_url: None,
            bio: String::new(),
            xp: 0,
            level: 1,
            preferred_language: preferred_language.to_string(),
            created_at: String::new(),
        };
        self.client.insert("profiles", &profile).await?;
        Ok(profile)
    }

    async fn sign_out(&self) -> Result<(), Error> {
        // Drop the session locally first; a failed network sign-out must not
        // leave the UI signed in.
        self.client.set_session(None);
        if let Err(err) = self.client.auth_post_empty("logout", &json!({})).await {
            log::error!("sign-out request failed: {err}");
        }
        Ok(())
    }
}

/// Mirror the session to browser storage so a reload stays signed in.
pub(super) fn persist_session(session: Option<&Session>) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = web_storage() {
            match session {
                Some(session) => {
                    if let Ok(serialized) = serde_json::to_string(session) {
                        let _ = storage.set_item(SESSION_KEY, &serialized);
                    }
                }
                None => {
                    let _ = storage.remove_item(SESSION_KEY);
                }
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (session, SESSION_KEY);
    }
}

/// Session restored from browser storage, if one was persisted.
pub(super) fn restore_session() -> Option<Session> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_storage()?;
        let serialized = storage.get_item(SESSION_KEY).ok().flatten()?;
        serde_json::from_str(&serialized).ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[cfg(target_arch = "wasm32")]
fn web_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|win| win.local_storage().ok().flatten())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_responses_without_a_session_are_rejected() {
        let missing_token = TokenResponse {
            access_token: None,
            user: Some(TokenUser {
                id: String::from("u1"),
                email: String::from("u1@example.com"),
            }),
        };
        assert!(missing_token.into_session().is_err());

        let complete = TokenResponse {
            access_token: Some(String::from("tok")),
            user: Some(TokenUser {
                id: String::from("u1"),
                email: String::from("u1@example.com"),
            }),
        };
        let session = complete.into_session().unwrap();
        assert_eq!(session.user.id, "u1");
        assert_eq!(session.access_token, "tok");
    }

    #[test]
    fn session_persistence_is_inert_off_the_browser() {
        persist_session(None);
        assert!(restore_session().is_none());
    }
}
