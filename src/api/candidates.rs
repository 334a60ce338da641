use crate::models::auth::MessageResponse;
use crate::models::candidate::Candidate;
use anyhow::Result;
use log::{error, info};
use reqwest::Client;

pub async fn list_candidates(
    client: &Client,
    base_url: &str,
    token: &str,
) -> Result<Vec<Candidate>, anyhow::Error> {
    let url = format!("{}/candidates", base_url);
    let resp = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await?;
    if resp.status().is_success() {
        let response = resp.json::<Vec<Candidate>>().await?;
        info!("Received {} candidates", response.len());
        Ok(response)
    } else {
        error!("Failed to get candidates: {}", resp.status());
        Err(anyhow::anyhow!("Failed to get candidates"))
    }
}

pub async fn cast_vote(
    client: &Client,
    base_url: &str,
    candidate_id: &str,
    token: &str,
) -> Result<MessageResponse, anyhow::Error> {
    let url = format!("{}/candidates/{}/vote", base_url, candidate_id);
    let resp = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", token))
        .json(&serde_json::json!({}))
        .send()
        .await?;
    if resp.status().is_success() {
        let response = resp.json::<MessageResponse>().await.unwrap_or_default();
        info!("Vote recorded for candidate {}", candidate_id);
        Ok(response)
    } else {
        error!("Vote for candidate {} rejected: {}", candidate_id, resp.status());
        Err(anyhow::anyhow!("Failed to cast vote"))
    }
}
