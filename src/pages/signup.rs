use log::warn;

use crate::api::{self, ApiContext};
use crate::error::ClientError;
use crate::request::RequestState;
use crate::validation::{validate_signup, SignupForm};

pub const SIGNUP_FAILED: &str = "Sign up failed";
pub const SIGNUP_SUCCEEDED: &str = "User created successfully, please log in";

#[derive(Debug, Default)]
pub struct SignupPage {
    pub form: SignupForm,
    pub state: RequestState<&'static str>,
}

impl SignupPage {
    pub fn begin(&mut self) {
        self.state.start();
    }

    /// True when the account exists and the page should move on to login.
    pub fn finish(&mut self, result: Result<(), ClientError>) -> bool {
        self.state.finish(result.map(|()| SIGNUP_SUCCEEDED));
        self.state.value().is_some()
    }
}

pub async fn signup(ctx: &ApiContext, form: &SignupForm) -> Result<(), ClientError> {
    let request = validate_signup(form)?;
    api::auth::signup(&ctx.client, &ctx.base_url, &request)
        .await
        .map_err(|e| {
            warn!("Signup rejected: {}", e);
            ClientError::Request(SIGNUP_FAILED)
        })
}
