//! Hook pipeline state machine
//!
//! A fixed sequence: GITIGNORE → LOWERCASE → BUILD → GIT_REMINDER → DONE,
//! with FAILED as the implicit terminal state. The pipeline advances past a
//! check when it is disabled, passes clean, or resolves advisory-only; it
//! stops at the first enforcing violation.

use crate::checks::{self, CheckContext, CheckOutcome};
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Gitignore,
    Lowercase,
    Build,
    GitReminder,
    Done,
    Failed,
}

impl PipelineState {
    /// Successor state on a non-blocking outcome.
    fn advance(self) -> Self {
        match self {
            PipelineState::Gitignore => PipelineState::Lowercase,
            PipelineState::Lowercase => PipelineState::Build,
            PipelineState::Build => PipelineState::GitReminder,
            PipelineState::GitReminder => PipelineState::Done,
            terminal => terminal,
        }
    }
}

/// Terminal result of a pipeline run.
#[derive(Debug)]
pub struct PipelineResult {
    pub state: PipelineState,
    pub blocked: Option<String>,
}

impl PipelineResult {
    pub fn succeeded(&self) -> bool {
        self.state == PipelineState::Done
    }
}

/// Drive the pipeline from `start` to a terminal state. Checks run strictly
/// one after another; environment errors propagate immediately.
pub fn run(ctx: &CheckContext, start: PipelineState) -> Result<PipelineResult> {
    let mut state = start;

    while !matches!(state, PipelineState::Done | PipelineState::Failed) {
        let outcome = dispatch(state, ctx)?;
        if let CheckOutcome::Blocking { reason } = outcome {
            return Ok(PipelineResult {
                state: PipelineState::Failed,
                blocked: Some(reason),
            });
        }
        state = state.advance();
    }

    Ok(PipelineResult {
        state,
        blocked: None,
    })
}

fn dispatch(state: PipelineState, ctx: &CheckContext) -> Result<CheckOutcome> {
    match state {
        PipelineState::Gitignore => checks::gitignore::run(ctx),
        PipelineState::Lowercase => checks::lowercase::run(ctx),
        PipelineState::Build => checks::build::run(ctx),
        PipelineState::GitReminder => checks::reminder::run(ctx),
        PipelineState::Done | PipelineState::Failed => Ok(CheckOutcome::Skipped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_advance_in_fixed_order() {
        let mut state = PipelineState::Gitignore;
        let mut order = vec![state];
        while state != PipelineState::Done {
            state = state.advance();
            order.push(state);
        }
        assert_eq!(
            order,
            vec![
                PipelineState::Gitignore,
                PipelineState::Lowercase,
                PipelineState::Build,
                PipelineState::GitReminder,
                PipelineState::Done,
            ]
        );
    }

    #[test]
    fn terminal_states_do_not_advance() {
        assert_eq!(PipelineState::Done.advance(), PipelineState::Done);
        assert_eq!(PipelineState::Failed.advance(), PipelineState::Failed);
    }
}
