use std::sync::{Arc, Mutex, MutexGuard};

use log::debug;
use tokio::runtime::Handle;

use crate::api::ApiContext;
use crate::config::{SIGNUP_REDIRECT_DELAY, VOTE_NOTICE_DELAY};
use crate::pages::admin::{self, AdminConsole, Mutation};
use crate::pages::login::{self, LoginPage};
use crate::pages::profile::{self, ProfileManager};
use crate::pages::signup::{self, SignupPage};
use crate::pages::voting::{self, CandidateDirectory};
use crate::router::Route;
use crate::session;

/// What is on screen. Each page starts fresh whenever it is entered.
#[derive(Default)]
pub struct AppState {
    pub route: Route,
    pub login: LoginPage,
    pub signup: SignupPage,
    pub voting: CandidateDirectory,
    pub profile: ProfileManager,
    pub admin: AdminConsole,
}

impl AppState {
    pub fn enter(&mut self, route: Route) {
        match route {
            Route::Login => self.login = LoginPage::default(),
            Route::Signup => self.signup = SignupPage::default(),
            Route::Voting => self.voting = CandidateDirectory::default(),
            Route::Profile => self.profile = ProfileManager::default(),
            Route::Admin => self.admin = AdminConsole::default(),
            Route::NotFound(_) => {}
        }
        self.route = route;
    }
}

/// User intents that need the backend or change the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(Route),
    Logout,
    Login,
    Signup,
    RefreshCandidates,
    Vote(String),
    ChangePassword,
    SubmitCandidate,
    DeleteCandidate(String),
}

/// Runs actions on the tokio runtime and writes their results back into the
/// shared state, asking egui for a repaint each time.
#[derive(Clone)]
pub struct AppHandle {
    state: Arc<Mutex<AppState>>,
    api: ApiContext,
    runtime: Handle,
    repaint: egui::Context,
}

impl AppHandle {
    pub fn new(api: ApiContext, runtime: Handle, repaint: egui::Context) -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::default())),
            api,
            runtime,
            repaint,
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn api(&self) -> &ApiContext {
        &self.api
    }

    pub fn dispatch(&self, action: Action) {
        debug!("Dispatching {:?}", action);
        match action {
            Action::Navigate(route) => self.navigate(route),
            Action::Logout => {
                let route = session::logout(&self.api.session);
                self.navigate(route);
            }
            Action::Login => self.login(),
            Action::Signup => self.signup(),
            Action::RefreshCandidates => self.load_candidates(true),
            Action::Vote(candidate_id) => self.vote(candidate_id),
            Action::ChangePassword => self.change_password(),
            Action::SubmitCandidate => {
                let mutation = self.lock().admin.submission();
                self.mutate(mutation);
            }
            Action::DeleteCandidate(candidate_id) => self.mutate(Mutation::Delete(candidate_id)),
        }
    }

    fn navigate(&self, route: Route) {
        self.lock().enter(route.clone());
        match route {
            Route::Voting => {
                self.load_candidates(false);
                self.load_voter_status();
            }
            Route::Profile => self.load_profile(),
            Route::Admin => self.load_admin(),
            _ => {}
        }
        self.repaint.request_repaint();
    }

    fn login(&self) {
        let (aadhar, password) = {
            let mut state = self.lock();
            state.login.begin();
            (state.login.aadhar.clone(), state.login.password.clone())
        };
        let handle = self.clone();
        self.runtime.spawn(async move {
            let result = login::login(&handle.api, &aadhar, &password).await;
            let landing = handle.lock().login.finish(result);
            match landing {
                Some(route) => handle.navigate(route),
                None => handle.repaint.request_repaint(),
            }
        });
    }

    fn signup(&self) {
        let form = {
            let mut state = self.lock();
            state.signup.begin();
            state.signup.form.clone()
        };
        let handle = self.clone();
        self.runtime.spawn(async move {
            let result = signup::signup(&handle.api, &form).await;
            let created = handle.lock().signup.finish(result);
            handle.repaint.request_repaint();
            if created {
                tokio::time::sleep(SIGNUP_REDIRECT_DELAY).await;
                handle.navigate(Route::Login);
            }
        });
    }

    fn load_candidates(&self, refresh: bool) {
        self.lock().voting.begin_load();
        let handle = self.clone();
        self.runtime.spawn(async move {
            let result = if refresh {
                voting::refresh(&handle.api).await
            } else {
                voting::list(&handle.api).await
            };
            handle.lock().voting.finish_load(result);
            handle.repaint.request_repaint();
        });
    }

    /// The voting page asks for the profile too, so it can lock voting for
    /// users who already voted.
    fn load_voter_status(&self) {
        let handle = self.clone();
        self.runtime.spawn(async move {
            match profile::fetch_profile(&handle.api).await {
                Ok(user) => {
                    handle.lock().voting.note_profile(&user);
                    handle.repaint.request_repaint();
                }
                Err(e) => debug!("Voter status unavailable: {}", e),
            }
        });
    }

    fn vote(&self, candidate_id: String) {
        if self.lock().voting.begin_vote().is_err() {
            return;
        }
        let handle = self.clone();
        self.runtime.spawn(async move {
            let result = voting::vote(&handle.api, &candidate_id).await;
            let notice = result.as_ref().ok().cloned();
            handle.lock().voting.finish_vote(&candidate_id, result);
            handle.repaint.request_repaint();

            if let Some(message) = notice {
                tokio::time::sleep(VOTE_NOTICE_DELAY).await;
                handle.lock().voting.clear_notice(&message);
                handle.repaint.request_repaint();
            }
        });
    }

    fn load_profile(&self) {
        self.lock().profile.begin_fetch();
        let handle = self.clone();
        self.runtime.spawn(async move {
            let result = profile::fetch_profile(&handle.api).await;
            handle.lock().profile.finish_fetch(result);
            handle.repaint.request_repaint();
        });
    }

    fn change_password(&self) {
        let (old_password, new_password) = {
            let mut state = self.lock();
            state.profile.begin_password_change();
            (
                state.profile.old_password.clone(),
                state.profile.new_password.clone(),
            )
        };
        let handle = self.clone();
        self.runtime.spawn(async move {
            let result = profile::change_password(&handle.api, &old_password, &new_password).await;
            handle.lock().profile.finish_password_change(result);
            handle.repaint.request_repaint();
        });
    }

    fn load_admin(&self) {
        self.lock().admin.begin_load();
        let handle = self.clone();
        self.runtime.spawn(async move {
            let result = admin::list(&handle.api).await;
            handle.lock().admin.finish_load(result);
            handle.repaint.request_repaint();
        });
    }

    fn mutate(&self, mutation: Mutation) {
        self.lock().admin.begin_mutation();
        let handle = self.clone();
        self.runtime.spawn(async move {
            let (result, reloaded) = admin::perform_and_reload(&handle.api, &mutation).await;
            {
                let mut state = handle.lock();
                state.admin.finish_mutation(&mutation, result);
                if let Some(list) = reloaded {
                    state.admin.finish_load(list);
                }
            }
            handle.repaint.request_repaint();
        });
    }
}
