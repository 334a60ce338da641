use log::{error, warn};

use crate::api::{self, ApiContext};
use crate::error::ClientError;
use crate::models::auth::LoginRequest;
use crate::request::RequestState;
use crate::router::Route;
use crate::session::Session;
use crate::validation::validate_login;

pub const INVALID_CREDENTIALS: &str = "Invalid Aadhaar number or password";

#[derive(Debug, Default)]
pub struct LoginPage {
    pub aadhar: String,
    pub password: String,
    pub state: RequestState<Route>,
}

impl LoginPage {
    pub fn begin(&mut self) {
        self.state.start();
    }

    /// Returns the route to open when the login went through.
    pub fn finish(&mut self, result: Result<Route, ClientError>) -> Option<Route> {
        self.state.finish(result);
        self.state.value().cloned()
    }
}

/// Exchanges credentials for a session, stores it, and picks the landing page.
pub async fn login(ctx: &ApiContext, aadhar: &str, password: &str) -> Result<Route, ClientError> {
    validate_login(aadhar, password)?;

    let request = LoginRequest {
        aadhar: aadhar.to_owned(),
        password: password.to_owned(),
    };
    let response = match api::auth::login(&ctx.client, &ctx.base_url, &request).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Login rejected: {}", e);
            return Err(ClientError::Request(INVALID_CREDENTIALS));
        }
    };

    let session = Session {
        token: response.token,
        role: response.role,
    };
    ctx.session.save(&session).map_err(|e| {
        error!("Failed to persist session: {}", e);
        ClientError::Storage
    })?;
    Ok(session.landing())
}
