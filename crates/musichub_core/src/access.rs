//! Role checks for catalog mutations.
//!
//! Adding and deleting songs is limited to admins. Views obtain a
//! [`RequireAdmin`] before calling [`Catalog::add_song`] or
//! [`Catalog::delete_song`], and only render those controls when the check
//! passes.
//!
//! [`Catalog::add_song`]: crate::library::Catalog::add_song
//! [`Catalog::delete_song`]: crate::library::Catalog::delete_song

use crate::error::AccessError;
use crate::session::{Identity, SessionStore};

/// Proof that the current session belongs to an admin.
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin<'a>(pub &'a Identity);

impl<'a> RequireAdmin<'a> {
    pub fn check<S>(session: &'a SessionStore<S>) -> Result<Self, AccessError> {
        Self::check_identity(session.identity())
    }

    pub fn check_identity(identity: Option<&'a Identity>) -> Result<Self, AccessError> {
        let identity = identity.ok_or(AccessError::NotAuthenticated)?;
        if !identity.is_admin() {
            return Err(AccessError::Forbidden);
        }
        Ok(RequireAdmin(identity))
    }

    pub fn identity(&self) -> &'a Identity {
        self.0
    }
}
