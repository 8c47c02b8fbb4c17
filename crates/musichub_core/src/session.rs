use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::storage::{FileStore, KeyValueStore};
use crate::token::{decode_token, encode_token};

/// Key under which the encoded session token is persisted.
pub const SESSION_KEY: &str = "musicapp_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub username: String,
    pub role: Role,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

struct Credential {
    id: &'static str,
    username: &'static str,
    password: &'static str,
    role: Role,
}

// Demo accounts. There is no other way to sign in.
const CREDENTIALS: [Credential; 2] = [
    Credential {
        id: "1",
        username: "admin",
        password: "admin123",
        role: Role::Admin,
    },
    Credential {
        id: "2",
        username: "user",
        password: "user123",
        role: Role::User,
    },
];

/// Username and password of the demo account holding `role`.
pub fn demo_credentials(role: Role) -> (&'static str, &'static str) {
    CREDENTIALS
        .iter()
        .find(|c| c.role == role)
        .map(|c| (c.username, c.password))
        .unwrap_or(("", ""))
}

/// Match a username/password pair against the demo accounts.
pub fn authenticate(username: &str, password: &str) -> Result<Identity, AuthError> {
    CREDENTIALS
        .iter()
        .find(|c| c.username == username && c.password == password)
        .map(|c| Identity {
            id: c.id.to_string(),
            username: c.username.to_string(),
            role: c.role,
        })
        .ok_or(AuthError::InvalidCredentials)
}

/// Holds zero or one signed-in [`Identity`] and mirrors it into a
/// [`KeyValueStore`] slot so it survives a restart.
///
/// The in-memory identity is authoritative for the running process: if the
/// slot cannot be written or cleared the failure is logged and the login or
/// logout still takes effect.
#[derive(Debug)]
pub struct SessionStore<S> {
    store: S,
    identity: Option<Identity>,
}

/// Session persisted to a file on disk, as used by the desktop app.
pub type FileSession = SessionStore<FileStore>;

impl<S> SessionStore<S> {
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S> SessionStore<S>
where
    S: KeyValueStore,
    S::Error: fmt::Display,
{
    /// Start a session from whatever token the slot holds.
    ///
    /// A token that cannot be read or decoded is removed and the session
    /// starts signed out. This never fails.
    pub fn restore(mut store: S) -> Self {
        let token = match store.get(SESSION_KEY) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Failed to read stored session: {}", e);
                if let Err(e) = store.remove(SESSION_KEY) {
                    tracing::warn!("Failed to clear stored session: {}", e);
                }
                None
            }
        };

        let identity = token.and_then(|token| match decode_token(&token) {
            Ok(identity) => {
                tracing::info!(username = %identity.username, role = %identity.role, "Restored session");
                Some(identity)
            }
            Err(e) => {
                tracing::debug!("Discarding stored session token: {}", e);
                if let Err(e) = store.remove(SESSION_KEY) {
                    tracing::warn!("Failed to clear stored session: {}", e);
                }
                None
            }
        });

        Self { store, identity }
    }

    /// Returns true when the pair matches a known account.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        self.try_login(username, password).is_ok()
    }

    /// Like [`login`](Self::login), but hands back the identity or the reason
    /// it was refused. A refused login leaves the current identity alone.
    pub fn try_login(&mut self, username: &str, password: &str) -> Result<Identity, AuthError> {
        let identity = match authenticate(username, password) {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(username, "Login refused");
                return Err(e);
            }
        };

        match encode_token(&identity) {
            Ok(token) => {
                if let Err(e) = self.store.set(SESSION_KEY, &token) {
                    tracing::warn!("Failed to persist session: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to encode session token: {}", e),
        }

        tracing::info!(username = %identity.username, role = %identity.role, "Signed in");
        self.identity = Some(identity.clone());
        Ok(identity)
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.store.remove(SESSION_KEY) {
            tracing::warn!("Failed to clear stored session: {}", e);
        }

        if let Some(identity) = self.identity.take() {
            tracing::info!(username = %identity.username, "Signed out");
        }
    }
}
