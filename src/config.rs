use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// How long a vote confirmation stays on screen.
pub const VOTE_NOTICE_DELAY: Duration = Duration::from_secs(3);
/// Pause between a successful signup and the jump back to the login page.
pub const SIGNUP_REDIRECT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub session_file: PathBuf,
    pub start_path: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = lookup("BALLOT_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        let api_url = api_url.trim().trim_end_matches('/').to_owned();

        let session_file = match lookup("BALLOT_SESSION_FILE") {
            Some(path) => PathBuf::from(path),
            None => {
                let home = lookup("HOME")
                    .ok_or_else(|| anyhow::anyhow!("HOME is not set and BALLOT_SESSION_FILE is missing"))?;
                PathBuf::from(home)
                    .join(".config")
                    .join("ballot-desk")
                    .join("session.json")
            }
        };

        Ok(Self {
            api_url,
            session_file,
            start_path: lookup("BALLOT_START_PATH"),
        })
    }
}
