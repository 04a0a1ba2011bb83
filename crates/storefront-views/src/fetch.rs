//! Fetch lifecycle state shared by all view controllers.

/// The four mutually exclusive render states of a fetched section. Exactly
/// one holds at a time: `Loading` at fetch start, then either `Ready`,
/// `Empty` (success with zero results), or `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Failed(String),
    Empty,
    Ready(T),
}

impl<T> FetchState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed(_))
    }

    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        matches!(self, FetchState::Empty)
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, FetchState::Ready(_))
    }

    /// The ready payload, when present.
    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The user-visible error message, when failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_are_mutually_exclusive() {
        let state: FetchState<Vec<u8>> = FetchState::Loading;
        assert!(state.is_loading());
        assert!(!state.is_failed() && !state.is_empty_result() && !state.is_ready());

        let state: FetchState<Vec<u8>> = FetchState::Ready(vec![1]);
        assert!(state.is_ready());
        assert!(!state.is_loading() && !state.is_failed() && !state.is_empty_result());
    }

    #[test]
    fn accessors_return_payloads() {
        let state: FetchState<u8> = FetchState::Ready(7);
        assert_eq!(state.ready(), Some(&7));
        assert!(state.error().is_none());

        let state: FetchState<u8> = FetchState::Failed("boom".to_string());
        assert_eq!(state.error(), Some("boom"));
        assert!(state.ready().is_none());
    }
}
