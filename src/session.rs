//! Output fields and per-action request state
//!
//! Shared between the UI thread and request completion tasks behind a mutex.
//! Every mutation goes through `begin` or `complete`.

use crate::api::ApiError;
use crate::types::{Action, ActionOutcome};
use tracing::debug;

/// Identifies one dispatched request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub action: Action,
    pub generation: u64,
}

#[derive(Debug, Default)]
struct ActionState {
    generation: u64,
    outcome: ActionOutcome,
}

#[derive(Debug, Default)]
pub struct Session {
    converted: String,
    debugged: String,
    convert: ActionState,
    debug: ActionState,
}

impl Session {
    pub fn converted(&self) -> &str {
        &self.converted
    }

    pub fn debugged(&self) -> &str {
        &self.debugged
    }

    pub fn outcome(&self, action: Action) -> &ActionOutcome {
        &self.state(action).outcome
    }

    pub fn is_pending(&self, action: Action) -> bool {
        matches!(self.outcome(action), ActionOutcome::Pending)
    }

    /// Start a new request for `action`. Older tickets for it become stale.
    pub fn begin(&mut self, action: Action) -> Ticket {
        let state = self.state_mut(action);
        state.generation += 1;
        state.outcome = ActionOutcome::Pending;
        Ticket { action, generation: state.generation }
    }

    /// Apply a finished request. Returns false when the ticket was superseded.
    pub fn complete(&mut self, ticket: Ticket, result: Result<String, ApiError>) -> bool {
        if self.state(ticket.action).generation != ticket.generation {
            debug!(
                action = ticket.action.label(),
                generation = ticket.generation,
                "Dropping stale response"
            );
            return false;
        }

        match result {
            Ok(msg) => {
                match ticket.action {
                    Action::Convert => {
                        self.converted = msg;
                        self.debugged.clear();
                    }
                    Action::Debug => {
                        self.debugged = msg;
                        self.converted.clear();
                    }
                }
                self.state_mut(ticket.action).outcome = ActionOutcome::Success;
            }
            Err(e) => {
                self.state_mut(ticket.action).outcome = ActionOutcome::Failed(e.to_string());
            }
        }
        true
    }

    fn state(&self, action: Action) -> &ActionState {
        match action {
            Action::Convert => &self.convert,
            Action::Debug => &self.debug,
        }
    }

    fn state_mut(&mut self, action: Action) -> &mut ActionState {
        match action {
            Action::Convert => &mut self.convert,
            Action::Debug => &mut self.debug,
        }
    }
}
