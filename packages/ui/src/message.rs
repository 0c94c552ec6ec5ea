use std::time::Duration;

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }
}

/// State of the `#message` area below the signup form.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageArea {
    pub current: Option<Message>,
    pub hidden: bool,
}

impl Default for MessageArea {
    fn default() -> Self {
        Self {
            current: None,
            hidden: true,
        }
    }
}

impl MessageArea {
    /// Replace the text and style and make the area visible.
    pub fn show(&mut self, message: Message) {
        self.current = Some(message);
        self.hidden = false;
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn text(&self) -> &str {
        self.current.as_ref().map(|m| m.text.as_str()).unwrap_or("")
    }

    pub fn class(&self) -> String {
        let kind = self.current.as_ref().map(|m| m.kind.css_class());
        match (kind, self.hidden) {
            (Some(kind), false) => kind.to_string(),
            (Some(kind), true) => format!("{kind} hidden"),
            (None, _) => "hidden".to_string(),
        }
    }
}

/// Hide the message area once `delay` has elapsed.
///
/// Earlier timers are not cancelled: a timer started for one message also hides
/// any message shown after it, even if that one has been visible for less than
/// `delay`.
pub fn schedule_hide(mut area: Signal<MessageArea>, delay: Duration) {
    spawn(run_hide_timer(delay, move || area.write().hide()));
}

/// Wait for `delay`, then run `hide`. The body of every timer [`schedule_hide`] arms.
pub async fn run_hide_timer(delay: Duration, hide: impl FnOnce()) {
    sleep(delay).await;
    hide();
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}
