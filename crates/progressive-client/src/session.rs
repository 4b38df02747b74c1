//! Login state and local registration.
//!
//! Credential checking sits behind [`CredentialIssuer`].  The bundled
//! [`PlaceholderIssuer`] accepts any non-blank username/password and hands
//! out a fixed token; it is not a security boundary.  Whether the user is
//! logged in is decided solely by the presence of the stored token.

use serde::{Deserialize, Serialize};
use tracing::info;

use progressive_shared::constants::{
    KEY_REGISTERED_PASS, KEY_REGISTERED_USER, KEY_USER_TOKEN, PLACEHOLDER_TOKEN,
};
use progressive_shared::RecordError;
use progressive_store::{Gateway, KeyValueStore};

use crate::error::Result;

/// Turns credentials into a session token.
pub trait CredentialIssuer: Send + Sync {
    fn issue(&self, username: &str, password: &str) -> Result<String>;
}

/// Accepts any non-blank credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderIssuer;

impl CredentialIssuer for PlaceholderIssuer {
    fn issue(&self, username: &str, password: &str) -> Result<String> {
        require_filled("username", username)?;
        require_filled("password", password)?;
        Ok(PLACEHOLDER_TOKEN.to_string())
    }
}

/// Snapshot of the login state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

pub struct SessionManager<S: ?Sized, I> {
    gateway: Gateway<S>,
    issuer: I,
}

impl<S: KeyValueStore + ?Sized + 'static, I: CredentialIssuer> SessionManager<S, I> {
    pub fn new(gateway: Gateway<S>, issuer: I) -> Self {
        Self { gateway, issuer }
    }

    /// Read the stored session, e.g. at startup.
    pub async fn restore(&self) -> Result<Session> {
        let token = self.gateway.read_field(KEY_USER_TOKEN).await?;
        Ok(Session { token })
    }

    pub async fn is_authenticated(&self) -> Result<bool> {
        Ok(self.restore().await?.is_authenticated())
    }

    /// Exchange credentials for a token and persist it.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let token = self.issuer.issue(username.trim(), password)?;
        self.gateway
            .write_field(KEY_USER_TOKEN, token.clone())
            .await?;

        info!(username = username.trim(), "logged in");
        Ok(Session { token: Some(token) })
    }

    /// Forget the stored token.  Logging out twice is harmless.
    pub async fn logout(&self) -> Result<()> {
        let removed = self.gateway.remove_field(KEY_USER_TOKEN).await?;
        info!(had_session = removed, "logged out");
        Ok(())
    }

    /// Store a local account.  Does not log the user in.
    pub async fn register(&self, username: &str, password: &str, confirm: &str) -> Result<()> {
        require_filled("username", username)?;
        require_filled("password", password)?;
        require_filled("password confirmation", confirm)?;
        if password != confirm {
            return Err(RecordError::PasswordMismatch.into());
        }

        self.gateway
            .write_field(KEY_REGISTERED_USER, username.trim().to_string())
            .await?;
        self.gateway
            .write_field(KEY_REGISTERED_PASS, password.to_string())
            .await?;

        info!(username = username.trim(), "account registered");
        Ok(())
    }

    /// Username of the locally registered account, if any.
    pub async fn registered_username(&self) -> Result<Option<String>> {
        Ok(self.gateway.read_field(KEY_REGISTERED_USER).await?)
    }
}

fn require_filled(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RecordError::BlankField { field }.into());
    }
    Ok(())
}
