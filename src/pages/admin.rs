use log::{info, warn};

use crate::api::{self, ApiContext};
use crate::error::ClientError;
use crate::models::candidate::Candidate;
use crate::request::RequestState;
use crate::validation::{validate_candidate, CandidateForm};

pub const LOAD_FAILED: &str = "Failed to load candidates";
pub const CREATE_FAILED: &str = "Failed to create candidate";
pub const UPDATE_FAILED: &str = "Failed to update candidate";
pub const DELETE_FAILED: &str = "Failed to delete candidate";

/// A change to the candidate table.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Create(CandidateForm),
    Update { id: String, form: CandidateForm },
    Delete(String),
}

impl Mutation {
    fn failure(&self) -> &'static str {
        match self {
            Mutation::Create(_) => CREATE_FAILED,
            Mutation::Update { .. } => UPDATE_FAILED,
            Mutation::Delete(_) => DELETE_FAILED,
        }
    }
}

#[derive(Debug, Default)]
pub struct AdminConsole {
    pub candidates: Vec<Candidate>,
    pub form: CandidateForm,
    /// Candidate whose fields are in the form; `None` means the form adds a
    /// new one.
    pub editing: Option<String>,
    pub load: RequestState<()>,
    pub action: RequestState<String>,
}

impl AdminConsole {
    pub fn begin_load(&mut self) {
        self.load.start();
    }

    pub fn finish_load(&mut self, result: Result<Vec<Candidate>, ClientError>) {
        let result = result.map(|candidates| self.candidates = candidates);
        self.load.finish(result);
    }

    pub fn edit(&mut self, candidate: &Candidate) {
        self.form = CandidateForm {
            name: candidate.name.clone(),
            age: candidate.age.to_string(),
            party: candidate.party.clone(),
        };
        self.editing = Some(candidate.id.clone());
    }

    pub fn cancel_edit(&mut self) {
        self.form = CandidateForm::default();
        self.editing = None;
    }

    /// What the shared form's submit button does right now.
    pub fn submission(&self) -> Mutation {
        match &self.editing {
            Some(id) => Mutation::Update {
                id: id.clone(),
                form: self.form.clone(),
            },
            None => Mutation::Create(self.form.clone()),
        }
    }

    pub fn begin_mutation(&mut self) {
        self.action.start();
    }

    /// Returns true when the list should be fetched again.
    pub fn finish_mutation(
        &mut self,
        mutation: &Mutation,
        result: Result<String, ClientError>,
    ) -> bool {
        let succeeded = result.is_ok();
        if succeeded {
            match mutation {
                Mutation::Create(_) | Mutation::Update { .. } => self.cancel_edit(),
                Mutation::Delete(id) => {
                    if self.editing.as_deref() == Some(id.as_str()) {
                        self.cancel_edit();
                    }
                }
            }
        }
        self.action.finish(result);
        succeeded
    }
}

pub async fn list(ctx: &ApiContext) -> Result<Vec<Candidate>, ClientError> {
    let token = ctx.token(LOAD_FAILED)?;
    api::admin::list_candidates(&ctx.client, &ctx.base_url, &token)
        .await
        .map_err(|e| {
            warn!("{}: {}", LOAD_FAILED, e);
            ClientError::Request(LOAD_FAILED)
        })
}

/// Applies one change and returns the notice to show, which is the server's
/// message for updates and empty otherwise.
pub async fn perform(ctx: &ApiContext, mutation: &Mutation) -> Result<String, ClientError> {
    let failure = mutation.failure();
    let request_failed = |e: anyhow::Error| {
        warn!("{}: {}", failure, e);
        ClientError::Request(failure)
    };

    match mutation {
        Mutation::Create(form) => {
            let request = validate_candidate(form)?;
            let token = ctx.token(failure)?;
            api::admin::create_candidate(&ctx.client, &ctx.base_url, &token, &request)
                .await
                .map(|()| String::new())
                .map_err(request_failed)
        }
        Mutation::Update { id, form } => {
            let request = validate_candidate(form)?;
            let token = ctx.token(failure)?;
            api::admin::update_candidate(&ctx.client, &ctx.base_url, &token, id, &request)
                .await
                .map(|response| response.message)
                .map_err(request_failed)
        }
        Mutation::Delete(id) => {
            let token = ctx.token(failure)?;
            api::admin::delete_candidate(&ctx.client, &ctx.base_url, &token, id)
                .await
                .map(|()| String::new())
                .map_err(request_failed)
        }
    }
}

/// Applies a change and, when it went through, fetches the whole list again.
pub async fn perform_and_reload(
    ctx: &ApiContext,
    mutation: &Mutation,
) -> (
    Result<String, ClientError>,
    Option<Result<Vec<Candidate>, ClientError>>,
) {
    let result = perform(ctx, mutation).await;
    if result.is_err() {
        return (result, None);
    }
    info!("Reloading candidates after {:?}", mutation);
    (result, Some(list(ctx).await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::models::auth::Role;
    use crate::session::{Session, SessionStore};
    use serde_json::json;
    use wiremock::matchers::{bearer_token, body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup() -> (MockServer, ApiContext) {
        let server = MockServer::start().await;
        let session = SessionStore::in_memory();
        session
            .save(&Session {
                token: "admin-token".to_owned(),
                role: Role::Admin,
            })
            .unwrap();
        let ctx = ApiContext::new(server.uri(), session);
        (server, ctx)
    }

    fn ids(console: &AdminConsole) -> Vec<&str> {
        console.candidates.iter().map(|c| c.id.as_str()).collect()
    }

    fn form(name: &str, age: &str, party: &str) -> CandidateForm {
        CandidateForm {
            name: name.to_owned(),
            age: age.to_owned(),
            party: party.to_owned(),
        }
    }

    #[tokio::test]
    async fn delete_then_list_drops_the_candidate() {
        let (server, ctx) = setup().await;
        Mock::given(method("GET"))
            .and(path("/admin/candidates"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"_id": "c1", "name": "A", "age": 45, "party": "Red", "voteCount": 1},
                {"_id": "c2", "name": "B", "age": 50, "party": "Blue", "voteCount": 3}
            ])))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/admin/candidate/c1"))
            .and(bearer_token("admin-token"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let mut console = AdminConsole::default();
        console.begin_load();
        console.finish_load(list(&ctx).await);
        assert_eq!(ids(&console), vec!["c1", "c2"]);

        Mock::given(method("GET"))
            .and(path("/admin/candidates"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"_id": "c2", "name": "B", "age": 50, "party": "Blue", "voteCount": 3}
            ])))
            .mount(&server)
            .await;

        let mutation = Mutation::Delete("c1".to_owned());
        console.begin_mutation();
        let (result, reloaded) = perform_and_reload(&ctx, &mutation).await;
        assert!(console.finish_mutation(&mutation, result));
        console.finish_load(reloaded.unwrap());

        assert_eq!(ids(&console), vec!["c2"]);
    }

    #[tokio::test]
    async fn create_sends_form_and_resets_it() {
        let (server, ctx) = setup().await;
        Mock::given(method("POST"))
            .and(path("/admin/candidate"))
            .and(bearer_token("admin-token"))
            .and(body_json(json!({"name": "Ravi", "age": 44, "party": "Green"})))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/admin/candidates"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"_id": "c9", "name": "Ravi", "age": 44, "party": "Green", "voteCount": 0}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let mut console = AdminConsole {
            form: form("Ravi", "44", "Green"),
            ..Default::default()
        };
        let mutation = console.submission();
        assert!(matches!(mutation, Mutation::Create(_)));

        console.begin_mutation();
        let (result, reloaded) = perform_and_reload(&ctx, &mutation).await;
        assert!(console.finish_mutation(&mutation, result));
        console.finish_load(reloaded.unwrap());

        assert_eq!(console.form, CandidateForm::default());
        assert_eq!(ids(&console), vec!["c9"]);
    }

    #[tokio::test]
    async fn edit_turns_the_form_into_an_update() {
        let (server, ctx) = setup().await;
        Mock::given(method("PUT"))
            .and(path("/admin/candidate/c2"))
            .and(body_json(json!({"name": "B", "age": 51, "party": "Blue"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"message": "Candidate updated"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/admin/candidates"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let mut console = AdminConsole::default();
        console.edit(&Candidate {
            id: "c2".to_owned(),
            name: "B".to_owned(),
            age: 50,
            party: "Blue".to_owned(),
            vote_count: 3,
        });
        assert_eq!(console.form, form("B", "50", "Blue"));
        console.form.age = "51".to_owned();

        let mutation = console.submission();
        console.begin_mutation();
        let (result, _) = perform_and_reload(&ctx, &mutation).await;
        assert!(console.finish_mutation(&mutation, result));

        assert_eq!(console.action.value().map(String::as_str), Some("Candidate updated"));
        assert_eq!(console.editing, None);
    }

    #[tokio::test]
    async fn failures_skip_the_reload() {
        let (server, ctx) = setup().await;
        Mock::given(method("DELETE"))
            .and(path("/admin/candidate/c1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/admin/candidates"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let mut console = AdminConsole::default();
        let mutation = Mutation::Delete("c1".to_owned());
        let (result, reloaded) = perform_and_reload(&ctx, &mutation).await;
        assert!(reloaded.is_none());
        assert!(!console.finish_mutation(&mutation, result));
        assert_eq!(console.action.error(), Some(DELETE_FAILED));
    }

    #[tokio::test]
    async fn invalid_form_is_not_sent() {
        let (server, ctx) = setup().await;
        Mock::given(method("POST"))
            .and(path("/admin/candidate"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let mutation = Mutation::Create(form("Ravi", "", "Green"));
        assert_eq!(
            perform(&ctx, &mutation).await,
            Err(ClientError::Validation(ValidationError::AgeNotNumber))
        );
    }
}
