//! This crate contains the activity board UI: view state, request handling and
//! the Dioxus components that render them.

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod board;
pub use board::{load_activities, refresh_board, ActivityCardView, BoardState, BoardView, ListState, ParticipantView};

pub mod display;
pub use display::{display_name, escape_html, initials, DisplayName};

pub mod handle;
pub use handle::{use_signal_board, BoardHandle, SignalBoard};

pub mod message;
pub use message::{run_hide_timer, schedule_hide, Message, MessageArea, MessageKind};

pub mod signup;
pub use signup::{handle_signup, handle_unregister, submit_signup, submit_unregister, SignupForm, SignupOutcome};

pub mod views;

mod activity_card;
pub use activity_card::{ActivityCard, ActivityList, ParticipantList};

mod signup_panel;
pub use signup_panel::SignupPanel;

mod message_banner;
pub use message_banner::MessageBanner;
