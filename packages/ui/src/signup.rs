//! # Signup handling
//!
//! Turns a submitted signup form (or an unregister click) into one backend request
//! and classifies the result into the three outcomes the board distinguishes:
//!
//! - **Success** (2xx): the server's `message`, styled `success`; the form is reset
//!   and the board reloaded.
//! - **Rejected** (non-2xx): the server's `detail`, or "An error occurred".
//! - **Failed** (request never completed, or an unreadable reply): a fixed
//!   "please try again" text. The error itself only goes to the log.

use std::time::Duration;

use api::{ActivityBackend, ApiError, SignupRequest};

use crate::board::refresh_board;
use crate::handle::BoardHandle;
use crate::message::Message;

pub const REJECTED_FALLBACK: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";

/// Values of the `#signup-form` fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

impl SignupForm {
    pub fn request(&self) -> SignupRequest {
        SignupRequest::new(self.activity.clone(), self.email.clone())
    }

    /// Clear every field, as a native form reset would.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupAction {
    Signup,
    Unregister,
}

impl SignupAction {
    fn failure_text(&self) -> &'static str {
        match self {
            SignupAction::Signup => SIGNUP_FAILED,
            SignupAction::Unregister => UNREGISTER_FAILED,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Accepted; carries the server's message.
    Accepted(String),
    /// Refused by the server; carries its `detail`, if any.
    Rejected(Option<String>),
    /// The request or its reply could not be completed.
    Failed(SignupAction),
}

impl SignupOutcome {
    fn from_result(action: SignupAction, result: Result<String, ApiError>) -> Self {
        match result {
            Ok(message) => SignupOutcome::Accepted(message),
            Err(ApiError::Rejected { detail, .. }) => SignupOutcome::Rejected(detail),
            Err(e) => {
                match action {
                    SignupAction::Signup => tracing::error!("Error signing up: {}", e),
                    SignupAction::Unregister => tracing::error!("Error unregistering: {}", e),
                }
                SignupOutcome::Failed(action)
            }
        }
    }

    /// Text and style for the message area.
    pub fn message(&self) -> Message {
        match self {
            SignupOutcome::Accepted(message) => Message::success(message.clone()),
            SignupOutcome::Rejected(Some(detail)) if !detail.is_empty() => {
                Message::error(detail.clone())
            }
            SignupOutcome::Rejected(_) => Message::error(REJECTED_FALLBACK),
            SignupOutcome::Failed(action) => Message::error(action.failure_text()),
        }
    }

    /// Whether the form should be cleared and the board reloaded.
    pub fn refreshes_board(&self) -> bool {
        matches!(self, SignupOutcome::Accepted(_))
    }
}

pub async fn submit_signup<B: ActivityBackend>(backend: &B, request: &SignupRequest) -> SignupOutcome {
    tracing::debug!("Signing up {} for {}", request.email, request.activity);
    let result = backend.signup(request).await;
    SignupOutcome::from_result(SignupAction::Signup, result)
}

pub async fn submit_unregister<B: ActivityBackend>(
    backend: &B,
    request: &SignupRequest,
) -> SignupOutcome {
    tracing::debug!("Unregistering {} from {}", request.email, request.activity);
    let result = backend.unregister(request).await;
    SignupOutcome::from_result(SignupAction::Unregister, result)
}

/// Submit the form held by `handle` and apply the outcome to the page.
///
/// The reply's message is shown with its hide timer armed. An accepted signup
/// also clears the form and reloads the board.
pub async fn handle_signup<B, H>(backend: &B, handle: &mut H, hide_after: Duration) -> SignupOutcome
where
    B: ActivityBackend,
    H: BoardHandle,
{
    let request = handle.form().request();
    let outcome = submit_signup(backend, &request).await;
    show_outcome(handle, &outcome, hide_after);
    if outcome.refreshes_board() {
        handle.reset_form();
        refresh_board(backend, handle).await;
    }
    outcome
}

/// Remove one participant and apply the outcome to the page. The form is left alone.
pub async fn handle_unregister<B, H>(
    backend: &B,
    handle: &mut H,
    request: &SignupRequest,
    hide_after: Duration,
) -> SignupOutcome
where
    B: ActivityBackend,
    H: BoardHandle,
{
    let outcome = submit_unregister(backend, request).await;
    show_outcome(handle, &outcome, hide_after);
    if outcome.refreshes_board() {
        refresh_board(backend, handle).await;
    }
    outcome
}

// Every outcome arms the hide timer, the transport-failure text included.
fn show_outcome<H: BoardHandle>(handle: &mut H, outcome: &SignupOutcome, hide_after: Duration) {
    handle.show_message(outcome.message(), hide_after);
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Activities, Activity, MemoryBackend, Participant, ServerReply, Settings};

    use crate::board::ListState;
    use crate::handle::PlainBoard;
    use crate::message::MessageKind;

    fn chess_club() -> MemoryBackend {
        let mut activities = Activities::new();
        activities.insert(
            "Chess Club",
            Activity::new("d", "Mon", 2).with_participants(vec![Participant::plain("a@b.com")]),
        );
        MemoryBackend::with_activities(activities)
    }

    fn filled_form() -> SignupForm {
        SignupForm {
            email: "x@y.com".to_string(),
            activity: "Chess Club".to_string(),
        }
    }

    fn filled_page() -> PlainBoard {
        PlainBoard {
            form: filled_form(),
            ..PlainBoard::default()
        }
    }

    fn hide_delay() -> Duration {
        Settings::default().message_hide_delay()
    }

    #[tokio::test]
    async fn test_success_resets_form_and_reloads() {
        let backend = chess_club();
        backend.push_reply(200, ServerReply::with_message("Signed up!"));
        let mut page = filled_page();
        refresh_board(&backend, &mut page).await;

        handle_signup(&backend, &mut page, hide_delay()).await;

        assert_eq!(page.message.text(), "Signed up!");
        assert_eq!(page.message.class(), "success");
        assert_eq!(page.form, SignupForm::default());
        assert_eq!(backend.fetch_count(), 2);
        assert_eq!(page.hide_timers, vec![Duration::from_millis(5000)]);
    }

    #[tokio::test]
    async fn test_rejection_shows_detail_without_reload() {
        let backend = chess_club();
        backend.push_reply(400, ServerReply::with_detail("Activity full"));
        let mut page = filled_page();

        handle_signup(&backend, &mut page, hide_delay()).await;

        assert_eq!(page.message.text(), "Activity full");
        assert_eq!(page.message.class(), "error");
        assert_eq!(page.form, filled_form());
        assert_eq!(backend.fetch_count(), 0);
        assert_eq!(page.board.list, ListState::Loading);
        assert_eq!(page.hide_timers.len(), 1);
    }

    #[tokio::test]
    async fn test_rejection_without_detail() {
        let backend = chess_club();
        backend.push_reply(500, ServerReply::default());
        let outcome = submit_signup(&backend, &filled_form().request()).await;
        assert_eq!(outcome, SignupOutcome::Rejected(None));
        assert_eq!(outcome.message(), Message::error("An error occurred"));
        assert!(!outcome.refreshes_board());
    }

    #[tokio::test]
    async fn test_network_down() {
        let backend = chess_club();
        backend.set_offline(true);
        let mut page = filled_page();

        let outcome = handle_signup(&backend, &mut page, hide_delay()).await;

        assert_eq!(outcome, SignupOutcome::Failed(SignupAction::Signup));
        assert_eq!(page.message.text(), "Failed to sign up. Please try again.");
        assert_eq!(page.message.current.as_ref().map(|m| m.kind), Some(MessageKind::Error));
        assert!(!page.message.hidden);
        assert_eq!(page.form, filled_form());
        assert_eq!(page.hide_timers, vec![Duration::from_millis(5000)]);
    }

    #[tokio::test]
    async fn test_unregister_round_trip() {
        let backend = chess_club();
        let request = SignupRequest::new("Chess Club", "a@b.com");
        let mut page = filled_page();

        let outcome = handle_unregister(&backend, &mut page, &request, hide_delay()).await;
        assert!(outcome.refreshes_board());
        assert_eq!(page.message.text(), "Unregistered a@b.com from Chess Club");
        assert_eq!(page.form, filled_form());
        let ListState::Ready(view) = &page.board.list else {
            panic!("board should have reloaded");
        };
        assert_eq!(view.cards[0].availability(), "2 spots left");

        handle_unregister(&backend, &mut page, &request, hide_delay()).await;
        assert_eq!(page.message.text(), "Student is not signed up for this activity");
        assert_eq!(backend.fetch_count(), 1);

        backend.set_offline(true);
        let outcome = submit_unregister(&backend, &request).await;
        assert_eq!(outcome.message(), Message::error(UNREGISTER_FAILED));
    }

    #[tokio::test]
    async fn test_real_signup_updates_availability() {
        let backend = chess_club();
        let mut page = filled_page();

        handle_signup(&backend, &mut page, hide_delay()).await;

        let ListState::Ready(view) = &page.board.list else {
            panic!("board should have reloaded");
        };
        assert_eq!(view.cards[0].availability(), "0 spots left");
        assert_eq!(view.cards[0].participants[1].display_name, "x");
    }
}
