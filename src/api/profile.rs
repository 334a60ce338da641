use crate::models::auth::ChangePasswordRequest;
use crate::models::profile::UserProfile;
use anyhow::Result;
use log::{error, info};
use reqwest::Client;

pub async fn get_profile(
    client: &Client,
    base_url: &str,
    token: &str,
) -> Result<UserProfile, anyhow::Error> {
    let url = format!("{}/users/profile", base_url);
    let resp = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await?;
    if resp.status().is_success() {
        let response = resp.json::<UserProfile>().await?;
        info!("Profile received");
        Ok(response)
    } else {
        error!("Failed to get profile: {}", resp.status());
        Err(anyhow::anyhow!("Failed to get profile"))
    }
}

pub async fn change_password(
    client: &Client,
    base_url: &str,
    token: &str,
    request: &ChangePasswordRequest,
) -> Result<(), anyhow::Error> {
    let url = format!("{}/users/profile/password", base_url);
    let resp = client
        .put(&url)
        .header("Authorization", format!("Bearer {}", token))
        .json(request)
        .send()
        .await?;
    if resp.status().is_success() {
        info!("Password changed");
        Ok(())
    } else {
        error!("Failed to change password: {}", resp.status());
        Err(anyhow::anyhow!("Failed to change password"))
    }
}
