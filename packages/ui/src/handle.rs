//! Where the board keeps its state between requests.
//!
//! [`handle_signup`](crate::signup::handle_signup) and friends only talk to a
//! [`BoardHandle`], so the page component can back it with signals while tests
//! use plain values.

use std::time::Duration;

use api::{Activities, ApiError};
use dioxus::prelude::*;

use crate::board::BoardState;
use crate::message::{schedule_hide, Message, MessageArea};
use crate::signup::SignupForm;

pub trait BoardHandle {
    /// Current values of the signup form.
    fn form(&self) -> SignupForm;

    fn reset_form(&mut self);

    /// Store the outcome of a fetch in the board state.
    fn apply_load(&mut self, result: Result<Activities, ApiError>);

    /// Show `message` and arm a timer that hides the area after `hide_after`.
    fn show_message(&mut self, message: Message, hide_after: Duration);
}

/// Board state held in component signals.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalBoard {
    pub board: Signal<BoardState>,
    pub form: Signal<SignupForm>,
    pub message: Signal<MessageArea>,
}

/// Create the signals behind one board.
pub fn use_signal_board() -> SignalBoard {
    SignalBoard {
        board: use_signal(BoardState::default),
        form: use_signal(SignupForm::default),
        message: use_signal(MessageArea::default),
    }
}

impl BoardHandle for SignalBoard {
    fn form(&self) -> SignupForm {
        self.form.read().clone()
    }

    fn reset_form(&mut self) {
        self.form.write().reset();
    }

    fn apply_load(&mut self, result: Result<Activities, ApiError>) {
        self.board.write().apply_load(result);
    }

    fn show_message(&mut self, message: Message, hide_after: Duration) {
        self.message.write().show(message);
        schedule_hide(self.message, hide_after);
    }
}

/// Board state in plain fields. Hide timers are recorded instead of started.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct PlainBoard {
    pub board: BoardState,
    pub form: SignupForm,
    pub message: MessageArea,
    pub hide_timers: Vec<Duration>,
}

#[cfg(test)]
impl BoardHandle for PlainBoard {
    fn form(&self) -> SignupForm {
        self.form.clone()
    }

    fn reset_form(&mut self) {
        self.form.reset();
    }

    fn apply_load(&mut self, result: Result<Activities, ApiError>) {
        self.board.apply_load(result);
    }

    fn show_message(&mut self, message: Message, hide_after: Duration) {
        self.message.show(message);
        self.hide_timers.push(hide_after);
    }
}
