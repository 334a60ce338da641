use log::warn;

use crate::api::{self, ApiContext};
use crate::error::ClientError;
use crate::models::candidate::Candidate;
use crate::models::profile::UserProfile;
use crate::request::RequestState;

pub const LOAD_FAILED: &str = "Failed to load candidates";
pub const REFRESH_FAILED: &str = "Failed to refresh candidate data";
pub const VOTE_FAILED: &str = "Failed to cast vote";
pub const ALREADY_VOTED: &str = "You have already voted";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Ascending => "Sort Asc",
            SortDirection::Descending => "Sort Desc",
        }
    }
}

#[derive(Debug, Default)]
pub struct CandidateDirectory {
    pub candidates: Vec<Candidate>,
    /// Direction the next `sort` applies.
    pub direction: SortDirection,
    pub load: RequestState<()>,
    pub vote: RequestState<String>,
    pub has_voted: bool,
}

impl CandidateDirectory {
    pub fn begin_load(&mut self) {
        self.load.start();
    }

    /// A failed load keeps whatever list was already on screen.
    pub fn finish_load(&mut self, result: Result<Vec<Candidate>, ClientError>) {
        let result = result.map(|candidates| self.candidates = candidates);
        self.load.finish(result);
    }

    /// Stable sort by vote count in the current direction, then flip the
    /// direction for the next press.
    pub fn sort(&mut self) {
        match self.direction {
            SortDirection::Ascending => self.candidates.sort_by_key(|c| c.vote_count),
            SortDirection::Descending => self
                .candidates
                .sort_by(|a, b| b.vote_count.cmp(&a.vote_count)),
        }
        self.direction = self.direction.toggled();
    }

    pub fn can_vote(&self) -> bool {
        !self.has_voted && !self.vote.is_loading()
    }

    pub fn note_profile(&mut self, profile: &UserProfile) {
        if profile.is_voted {
            self.has_voted = true;
        }
    }

    /// Refuses locally once this user is known to have voted.
    pub fn begin_vote(&mut self) -> Result<(), ClientError> {
        if self.has_voted {
            let err = ClientError::Request(ALREADY_VOTED);
            self.vote.finish::<ClientError>(Err(err.clone()));
            return Err(err);
        }
        self.vote.start();
        Ok(())
    }

    pub fn finish_vote(&mut self, candidate_id: &str, result: Result<String, ClientError>) {
        if result.is_ok() {
            if let Some(candidate) = self.candidates.iter_mut().find(|c| c.id == candidate_id) {
                candidate.vote_count += 1;
            }
            self.has_voted = true;
            if self.load.error().is_some() {
                self.load.reset();
            }
        }
        self.vote.finish(result);
    }

    /// Drops the success notice, unless a newer result replaced it meanwhile.
    pub fn clear_notice(&mut self, message: &str) {
        if self.vote.value().map(String::as_str) == Some(message) {
            self.vote.reset();
        }
    }
}

pub async fn list(ctx: &ApiContext) -> Result<Vec<Candidate>, ClientError> {
    fetch(ctx, LOAD_FAILED).await
}

pub async fn refresh(ctx: &ApiContext) -> Result<Vec<Candidate>, ClientError> {
    fetch(ctx, REFRESH_FAILED).await
}

async fn fetch(ctx: &ApiContext, failure: &'static str) -> Result<Vec<Candidate>, ClientError> {
    let token = ctx.token(failure)?;
    api::candidates::list_candidates(&ctx.client, &ctx.base_url, &token)
        .await
        .map_err(|e| {
            warn!("{}: {}", failure, e);
            ClientError::Request(failure)
        })
}

/// Casts a vote and returns the server's confirmation message.
pub async fn vote(ctx: &ApiContext, candidate_id: &str) -> Result<String, ClientError> {
    let token = ctx.token(VOTE_FAILED)?;
    api::candidates::cast_vote(&ctx.client, &ctx.base_url, candidate_id, &token)
        .await
        .map(|response| response.message)
        .map_err(|e| {
            warn!("{}: {}", VOTE_FAILED, e);
            ClientError::Request(VOTE_FAILED)
        })
}
