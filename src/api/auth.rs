use crate::models::auth::{LoginRequest, LoginResponse, SignupRequest};
use anyhow::Result;
use log::{debug, error, info};
use reqwest::Client;

pub async fn login(
    client: &Client,
    base_url: &str,
    request: &LoginRequest,
) -> Result<LoginResponse, anyhow::Error> {
    debug!("Sending login request to {}", base_url);
    let url = format!("{}/auth/login", base_url);
    let resp = client.post(&url).json(request).send().await?;

    if resp.status().is_success() {
        let response = resp.json::<LoginResponse>().await?;
        info!("Login succeeded");
        Ok(response)
    } else {
        error!("Login failed: {}", resp.status());
        Err(anyhow::anyhow!("Login failed"))
    }
}

pub async fn signup(
    client: &Client,
    base_url: &str,
    request: &SignupRequest,
) -> Result<(), anyhow::Error> {
    let url = format!("{}/auth/signup", base_url);
    let resp = client.post(&url).json(request).send().await?;

    if resp.status().is_success() {
        info!("Signup succeeded");
        Ok(())
    } else {
        error!("Signup failed: {}", resp.status());
        Err(anyhow::anyhow!("Signup failed"))
    }
}
