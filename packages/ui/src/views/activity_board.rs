use api::{HttpBackend, Settings, SignupRequest};
use dioxus::prelude::*;

use crate::board::{refresh_board, BoardState};
use crate::handle::use_signal_board;
use crate::signup::{handle_signup, handle_unregister};
use crate::{ActivityList, MessageBanner, SignupPanel};

/// The whole activity board: card list, signup form and message area.
///
/// Expects an [`HttpBackend`] and [`Settings`] in context. Loads the activity
/// list once on mount and again after every accepted signup or unregister.
/// Requests are not serialized: a second submission may start while a
/// previous one (or its reload) is still in flight.
#[component]
pub fn ActivityBoardView() -> Element {
    let backend = use_context::<HttpBackend>();
    let settings = use_context::<Settings>();
    let page = use_signal_board();
    let hide_after = settings.message_hide_delay();

    let loader_backend = backend.clone();
    let _loader = use_resource(move || {
        let backend = loader_backend.clone();
        let mut page = page;
        async move { refresh_board(&backend, &mut page).await }
    });

    let signup_backend = backend.clone();
    let on_submit = move |_: ()| {
        let backend = signup_backend.clone();
        let mut page = page;
        spawn(async move {
            handle_signup(&backend, &mut page, hide_after).await;
        });
    };

    let on_unregister = use_callback(move |request: SignupRequest| {
        let backend = backend.clone();
        let mut page = page;
        spawn(async move {
            handle_unregister(&backend, &mut page, &request, hide_after).await;
        });
    });

    let BoardState { list, options } = page.board.read().clone();

    rsx! {
        main {
            class: "activity-board",
            section {
                id: "activities-container",
                h3 { "Available Activities" }
                div {
                    id: "activities-list",
                    ActivityList { list: list, on_unregister: on_unregister }
                }
            }
            section {
                id: "signup-container",
                h3 { "Sign Up for an Activity" }
                SignupPanel {
                    form: page.form,
                    options: options,
                    on_submit: on_submit,
                }
                MessageBanner { area: page.message.read().clone() }
            }
        }
    }
}
