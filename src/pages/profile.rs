use log::warn;

use crate::api::{self, ApiContext};
use crate::error::ClientError;
use crate::models::auth::{ChangePasswordRequest, Role};
use crate::models::profile::UserProfile;
use crate::request::RequestState;
use crate::validation::validate_password_change;

pub const PROFILE_FAILED: &str = "Failed to load profile";
pub const PASSWORD_FAILED: &str = "Failed to change password";
pub const PASSWORD_CHANGED: &str = "Password changed successfully";

#[derive(Debug, Default)]
pub struct ProfileManager {
    pub profile: RequestState<UserProfile>,
    pub show_password_form: bool,
    pub old_password: String,
    pub new_password: String,
    pub password: RequestState<&'static str>,
}

impl ProfileManager {
    pub fn begin_fetch(&mut self) {
        self.profile.start();
    }

    pub fn finish_fetch(&mut self, result: Result<UserProfile, ClientError>) {
        self.profile.finish(result);
    }

    pub fn toggle_password_form(&mut self) {
        self.show_password_form = !self.show_password_form;
    }

    pub fn begin_password_change(&mut self) {
        self.password.start();
    }

    pub fn finish_password_change(&mut self, result: Result<(), ClientError>) {
        if result.is_ok() {
            self.old_password.clear();
            self.new_password.clear();
            self.show_password_form = false;
        }
        self.password.finish(result.map(|()| PASSWORD_CHANGED));
    }

    /// The voting page is only offered to users who have not voted yet.
    pub fn can_open_voting(&self) -> bool {
        self.profile.value().is_some_and(|p| !p.is_voted)
    }

    pub fn can_open_admin(&self) -> bool {
        self.profile.value().is_some_and(|p| p.role == Role::Admin)
    }
}

pub async fn fetch_profile(ctx: &ApiContext) -> Result<UserProfile, ClientError> {
    let token = ctx.token(PROFILE_FAILED)?;
    api::profile::get_profile(&ctx.client, &ctx.base_url, &token)
        .await
        .map_err(|e| {
            warn!("{}: {}", PROFILE_FAILED, e);
            ClientError::Request(PROFILE_FAILED)
        })
}

pub async fn change_password(
    ctx: &ApiContext,
    old_password: &str,
    new_password: &str,
) -> Result<(), ClientError> {
    validate_password_change(old_password, new_password)?;
    let token = ctx.token(PASSWORD_FAILED)?;
    let request = ChangePasswordRequest {
        old_password: old_password.to_owned(),
        new_password: new_password.to_owned(),
    };
    api::profile::change_password(&ctx.client, &ctx.base_url, &token, &request)
        .await
        .map_err(|e| {
            warn!("{}: {}", PASSWORD_FAILED, e);
            ClientError::Request(PASSWORD_FAILED)
        })
}
