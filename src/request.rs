/// Lifecycle of one user-initiated operation.
///
/// Every page drives its operations through `Idle -> Loading -> Ok | Err`;
/// a failed operation stays in `Err` until the user submits again.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Ok(T),
    Err(String),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T> RequestState<T> {
    pub fn start(&mut self) {
        *self = RequestState::Loading;
    }

    pub fn finish<E: std::fmt::Display>(&mut self, result: Result<T, E>) {
        *self = match result {
            Ok(value) => RequestState::Ok(value),
            Err(e) => RequestState::Err(e.to_string()),
        };
    }

    pub fn reset(&mut self) {
        *self = RequestState::Idle;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            RequestState::Ok(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Err(reason) => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    #[test]
    fn walks_the_lifecycle() {
        let mut state: RequestState<u32> = RequestState::default();
        assert_eq!(state, RequestState::Idle);

        state.start();
        assert!(state.is_loading());

        state.finish::<ClientError>(Ok(7));
        assert_eq!(state.value(), Some(&7));
        assert_eq!(state.error(), None);

        state.start();
        state.finish(Err(ClientError::Request("Failed to load candidates")));
        assert_eq!(state.error(), Some("Failed to load candidates"));
        assert_eq!(state.value(), None);

        state.reset();
        assert_eq!(state, RequestState::Idle);
    }
}
