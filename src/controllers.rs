use crate::{
    error::RosterResult,
    view::{Notification, ViewState},
};
use async_trait::async_trait;

pub mod marks;
pub mod students;

/// Asks the user whether a destructive action should go ahead.
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// An answer the user has already given, e.g. by submitting the confirmation dialog.
#[derive(Debug, Clone, Copy)]
pub struct Answered(pub bool);

#[async_trait]
impl Confirm for Answered {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

/// Proof of which fetch a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Counts the fetches issued for one list. Only the newest one may write its response.
#[derive(Debug, Default)]
pub struct Generation(u64);

impl Generation {
    pub fn issue(&mut self) -> Ticket {
        self.0 += 1;
        Ticket(self.0)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0 == ticket.0
    }
}

/// Puts the outcome of a mutation in front of the user. Returns whether it worked, which is
/// what decides if the caller resets its form and refetches.
pub(crate) fn settle(
    view: &mut ViewState,
    outcome: RosterResult<()>,
    success: Notification,
    fallback: &str,
) -> bool {
    match outcome {
        Ok(()) => {
            view.notice = Some(success);
            true
        }
        Err(e) => {
            warn!(?e, "Mutation failed");
            view.notice = Some(Notification::error(e.server_message().unwrap_or(fallback)));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::RosterError, view::NoticeKind};
    use reqwest::StatusCode;

    #[test]
    fn older_tickets_go_stale() {
        let mut generation = Generation::default();
        let first = generation.issue();
        assert!(generation.is_current(first));
        let second = generation.issue();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn failure_without_message_uses_fallback() {
        let mut view = ViewState::default();
        let worked = settle(
            &mut view,
            Err(RosterError::Rejected {
                status: StatusCode::BAD_REQUEST,
                message: None,
            }),
            Notification::success("Yes", "yes"),
            "Unknown error",
        );

        assert!(!worked);
        let notice = view.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Unknown error");
    }
}
