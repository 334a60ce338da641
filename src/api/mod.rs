use log::warn;
use reqwest::Client;

use crate::error::ClientError;
use crate::session::SessionStore;

pub mod admin;
pub mod auth;
pub mod candidates;
pub mod profile;

/// Everything a page needs to talk to the backend on behalf of the signed-in
/// user.
#[derive(Clone)]
pub struct ApiContext {
    pub client: Client,
    pub base_url: String,
    pub session: SessionStore,
}

impl ApiContext {
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            session,
        }
    }

    /// The stored bearer token. Without one the operation fails locally with
    /// its usual message.
    pub fn token(&self, failure: &'static str) -> Result<String, ClientError> {
        match self.session.token() {
            Some(token) => Ok(token),
            None => {
                warn!("No stored session: {}", failure);
                Err(ClientError::Request(failure))
            }
        }
    }
}
