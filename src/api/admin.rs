use crate::models::auth::MessageResponse;
use crate::models::candidate::{Candidate, CandidateRequest};
use anyhow::Result;
use log::{error, info};
use reqwest::Client;

pub async fn list_candidates(
    client: &Client,
    base_url: &str,
    token: &str,
) -> Result<Vec<Candidate>, anyhow::Error> {
    let url = format!("{}/admin/candidates", base_url);
    let resp = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await?;
    if resp.status().is_success() {
        let response = resp.json::<Vec<Candidate>>().await?;
        info!("Admin list returned {} candidates", response.len());
        Ok(response)
    } else {
        error!("Failed to get admin candidate list: {}", resp.status());
        Err(anyhow::anyhow!("Failed to get admin candidate list"))
    }
}

pub async fn create_candidate(
    client: &Client,
    base_url: &str,
    token: &str,
    request: &CandidateRequest,
) -> Result<(), anyhow::Error> {
    let url = format!("{}/admin/candidate", base_url);
    let resp = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", token))
        .json(request)
        .send()
        .await?;
    if resp.status().is_success() {
        info!("Candidate {} created", request.name);
        Ok(())
    } else {
        error!("Failed to create candidate: {}", resp.status());
        Err(anyhow::anyhow!("Failed to create candidate"))
    }
}

pub async fn update_candidate(
    client: &Client,
    base_url: &str,
    token: &str,
    candidate_id: &str,
    request: &CandidateRequest,
) -> Result<MessageResponse, anyhow::Error> {
    let url = format!("{}/admin/candidate/{}", base_url, candidate_id);
    let resp = client
        .put(&url)
        .header("Authorization", format!("Bearer {}", token))
        .json(request)
        .send()
        .await?;
    if resp.status().is_success() {
        let response = resp.json::<MessageResponse>().await.unwrap_or_default();
        info!("Candidate {} updated", candidate_id);
        Ok(response)
    } else {
        error!("Failed to update candidate {}: {}", candidate_id, resp.status());
        Err(anyhow::anyhow!("Failed to update candidate"))
    }
}

pub async fn delete_candidate(
    client: &Client,
    base_url: &str,
    token: &str,
    candidate_id: &str,
) -> Result<(), anyhow::Error> {
    let url = format!("{}/admin/candidate/{}", base_url, candidate_id);
    let resp = client
        .delete(&url)
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await?;
    if resp.status().is_success() {
        info!("Candidate {} deleted", candidate_id);
        Ok(())
    } else {
        error!("Failed to delete candidate {}: {}", candidate_id, resp.status());
        Err(anyhow::anyhow!("Failed to delete candidate"))
    }
}
