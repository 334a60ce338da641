use crate::models::auth::Role;
use crate::session::SessionStore;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Login,
    Signup,
    Voting,
    Profile,
    Admin,
    NotFound(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim() {
            "/" | "" => Route::Login,
            "/signup" => Route::Signup,
            "/voting" => Route::Voting,
            "/profile" => Route::Profile,
            "/admin" => Route::Admin,
            other => Route::NotFound(other.to_owned()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Login => "/",
            Route::Signup => "/signup",
            Route::Voting => "/voting",
            Route::Profile => "/profile",
            Route::Admin => "/admin",
            Route::NotFound(path) => path,
        }
    }

    /// Where a freshly logged-in user goes.
    pub fn landing_for(role: Role) -> Self {
        match role {
            Role::Admin => Route::Admin,
            Role::Voter => Route::Profile,
        }
    }

    /// The page the window opens on: a forced start path, else the stored
    /// session's landing page, else login.
    pub fn initial(start_path: Option<&str>, store: &SessionStore) -> Self {
        match start_path {
            Some(path) => Route::from_path(path),
            None => store
                .load()
                .map(|session| session.landing())
                .unwrap_or(Route::Login),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn known_paths_round_trip() {
        for route in [
            Route::Login,
            Route::Signup,
            Route::Voting,
            Route::Profile,
            Route::Admin,
        ] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(
            Route::from_path("/results"),
            Route::NotFound("/results".to_owned())
        );
    }

    #[test]
    fn landing_depends_on_role() {
        assert_eq!(Route::landing_for(Role::Admin), Route::Admin);
        assert_eq!(Route::landing_for(Role::Voter), Route::Profile);
    }

    #[test]
    fn opens_on_stored_landing_page() {
        let store = SessionStore::in_memory();
        assert_eq!(Route::initial(None, &store), Route::Login);

        store
            .save(&Session {
                token: "t1".to_owned(),
                role: Role::Admin,
            })
            .unwrap();
        assert_eq!(Route::initial(None, &store), Route::Admin);

        store
            .save(&Session {
                token: "t2".to_owned(),
                role: Role::Voter,
            })
            .unwrap();
        assert_eq!(Route::initial(None, &store), Route::Profile);
    }

    #[test]
    fn start_path_wins_over_session() {
        let store = SessionStore::in_memory();
        store
            .save(&Session {
                token: "t1".to_owned(),
                role: Role::Admin,
            })
            .unwrap();
        assert_eq!(Route::initial(Some("/voting"), &store), Route::Voting);
        assert_eq!(
            Route::initial(Some("/nowhere"), &store),
            Route::NotFound("/nowhere".to_owned())
        );
    }
}
