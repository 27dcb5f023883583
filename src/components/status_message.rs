use dioxus::prelude::*;

/// Dismissible alert banner, success or error flavored.
#[component]
pub fn StatusMessage(mut status_msg: Signal<Option<(String, bool)>>) -> Element {
    let Some((message, is_error)) = status_msg.read().as_ref().cloned() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: if is_error { "alert alert-error" } else { "alert alert-success" },
            "{message}"
            button {
                class: "alert-dismiss",
                r#type: "button",
                "aria-label": "Dismiss",
                onclick: move |_| status_msg.set(None),
                "×"
            }
        }
    }
}
