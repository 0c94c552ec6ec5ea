use dioxus::prelude::*;

use crate::message::MessageArea;

/// The `#message` area. Classes: `success` / `error`, plus `hidden`.
#[component]
pub fn MessageBanner(area: MessageArea) -> Element {
    rsx! {
        div {
            id: "message",
            class: "{area.class()}",
            "{area.text()}"
        }
    }
}
