//! Authentication seam
//!
//! The HTTP layer only depends on the [`Authenticator`] trait. The shipped
//! implementation is a deliberate mock: one configured credential pair logs
//! in and registration always succeeds without persisting anything. A real
//! deployment replaces it with a user store, a credential hasher, and a
//! token issuer behind the same trait.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::config::AuthSection;
use crate::ident::IdGenerator;
use crate::types::{Role, User};
use crate::{Error, Result};

/// Issued session: an opaque token plus the profile it belongs to
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Verify a credential pair and issue a session
    async fn login(&self, email: &str, password: &str) -> Result<Session>;

    /// Create an account and issue a session
    async fn register(&self, email: &str, password: &str, name: &str) -> Result<Session>;
}

/// Mock authenticator backed by a single fixed credential pair
pub struct DemoAuthenticator {
    demo_email: String,
    demo_password: String,
    ids: Arc<IdGenerator>,
}

impl DemoAuthenticator {
    pub fn new(auth: &AuthSection, ids: Arc<IdGenerator>) -> Self {
        Self {
            demo_email: auth.demo_email.clone(),
            demo_password: auth.demo_password.clone(),
            ids,
        }
    }
}

#[async_trait]
impl Authenticator for DemoAuthenticator {
    async fn login(&self, email: &str, password: &str) -> Result<Session> {
        if email != self.demo_email || password != self.demo_password {
            return Err(Error::unauthorized("Invalid credentials"));
        }

        Ok(Session {
            token: issue_token(),
            user: User {
                id: "1".to_string(),
                email: self.demo_email.clone(),
                name: "Demo Agent".to_string(),
                role: Role::Agent,
            },
        })
    }

    async fn register(&self, email: &str, _password: &str, name: &str) -> Result<Session> {
        // No uniqueness check and no persistence: the account exists only in
        // the response.
        Ok(Session {
            token: issue_token(),
            user: User {
                id: self.ids.next_id(),
                email: email.to_string(),
                name: name.to_string(),
                role: Role::Agent,
            },
        })
    }
}

fn issue_token() -> String {
    format!("tok_{}", Uuid::new_v4().simple())
}
