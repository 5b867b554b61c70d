//! Resolves the acting user from the `username` request header.
//!
//! # Design
//! The header value is taken at face value: there is no password, signature
//! or expiry, so anyone who knows a username can act as that user. This
//! matches the service's published contract.
//!
//! `CurrentUser` is an extractor, so a handler that lists it before its body
//! extractor never runs for an unknown user. It carries the username as an
//! owned handle; handlers hand it back to the registry under their own lock.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::ServerError;
use crate::Db;

pub const USERNAME_HEADER: &str = "username";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    username: String,
}

impl CurrentUser {
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl FromRequestParts<Db> for CurrentUser {
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, db: &Db) -> Result<Self, Self::Rejection> {
        let Some(username) = parts
            .headers
            .get(USERNAME_HEADER)
            .and_then(|value| value.to_str().ok())
        else {
            tracing::warn!("request without a readable username header");
            return Err(ServerError::UserNotFound);
        };

        if let Err(err) = db.read().await.identify(username) {
            tracing::warn!(%username, "unknown user");
            return Err(err);
        }

        Ok(CurrentUser {
            username: username.to_owned(),
        })
    }
}
