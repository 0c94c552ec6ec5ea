use dioxus::prelude::*;

use crate::board::SELECT_PLACEHOLDER;
use crate::signup::SignupForm;

/// The `#signup-form`: email field and activity selector.
///
/// Browser validation (`type="email"`, `required`) runs before `on_submit` fires.
#[component]
pub fn SignupPanel(
    form: Signal<SignupForm>,
    options: Vec<String>,
    on_submit: EventHandler<()>,
) -> Element {
    let mut form = form;

    rsx! {
        form {
            id: "signup-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            div {
                class: "form-group",
                label { r#for: "email", "Student Email:" }
                input {
                    id: "email",
                    r#type: "email",
                    required: true,
                    placeholder: "your-email@mergington.edu",
                    value: form.read().email.clone(),
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }
            }
            div {
                class: "form-group",
                label { r#for: "activity", "Select Activity:" }
                select {
                    id: "activity",
                    required: true,
                    value: form.read().activity.clone(),
                    onchange: move |evt: FormEvent| form.write().activity = evt.value(),
                    option { value: "", "{SELECT_PLACEHOLDER}" }
                    for name in options.iter() {
                        option {
                            key: "{name}",
                            value: "{name}",
                            "{name}"
                        }
                    }
                }
            }
            button { r#type: "submit", "Sign Up" }
        }
    }
}
