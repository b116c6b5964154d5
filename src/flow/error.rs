use super::state::ViewState;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("{event} is not valid while in {state}")]
    InvalidTransition { event: &'static str, state: ViewState },
    #[error("analysis timer for attempt {attempt} fired during attempt {current} in {state}")]
    StaleTimer {
        attempt: u32,
        current: u32,
        state: ViewState,
    },
}
