use api::SignupRequest;
use dioxus::prelude::*;

use crate::board::{card_markup, ActivityCardView, ListState, ParticipantView, LOAD_FAILED, NO_PARTICIPANTS};
use crate::icons::FaXmark;
use crate::Icon;

/// Contents of `#activities-list` for the current load state.
#[component]
pub fn ActivityList(list: ListState, on_unregister: EventHandler<SignupRequest>) -> Element {
    match list {
        ListState::Loading => rsx! { p { "Loading activities..." } },
        ListState::Failed => rsx! { p { "{LOAD_FAILED}" } },
        ListState::Ready(view) => rsx! {
            for card in view.cards.into_iter() {
                ActivityCard {
                    key: "{card.name}",
                    card: card,
                    on_unregister: on_unregister,
                }
            }
        },
    }
}

/// One `.activity-card`: details header plus the participants section.
#[component]
pub fn ActivityCard(card: ActivityCardView, on_unregister: EventHandler<SignupRequest>) -> Element {
    let markup = card_markup(&card);

    rsx! {
        div {
            class: "activity-card",
            div {
                class: "activity-details",
                dangerous_inner_html: "{markup}",
            }
            ParticipantList {
                activity: card.name.clone(),
                participants: card.participants.clone(),
                on_unregister: on_unregister,
            }
        }
    }
}

#[component]
pub fn ParticipantList(
    activity: String,
    participants: Vec<ParticipantView>,
    on_unregister: EventHandler<SignupRequest>,
) -> Element {
    let entries: Vec<(ParticipantView, Option<SignupRequest>)> = participants
        .into_iter()
        .map(|p| {
            let request = p
                .email
                .as_ref()
                .map(|email| SignupRequest::new(activity.clone(), email.clone()));
            (p, request)
        })
        .collect();
    let empty = entries.is_empty();

    rsx! {
        div {
            class: "participants-section",
            p { class: "participants-title", "Participants" }
            ul {
                class: "participants-list",
                if empty {
                    li { class: "participant empty", "{NO_PARTICIPANTS}" }
                }
                for (participant, request) in entries.into_iter() {
                    li {
                        class: "participant",
                        span { class: "avatar", "{participant.initial}" }
                        span { class: "name", "{participant.display_name}" }
                        if let Some(request) = request {
                            button {
                                class: "unregister",
                                r#type: "button",
                                title: "Unregister {participant.display_name}",
                                onclick: move |_| on_unregister.call(request.clone()),
                                Icon { icon: FaXmark, width: 12, height: 12 }
                            }
                        }
                    }
                }
            }
        }
    }
}
