use dioxus::prelude::*;

/// Locks page scroll while a modal is open.
#[cfg(feature = "web")]
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let style = body.style();
    if locked {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
}

#[cfg(not(feature = "web"))]
pub fn set_body_scroll_locked(_locked: bool) {}

/// Overlay dialog toggled through the `open` signal. Clicking the backdrop
/// or the close control hides it; clicks inside the content do not bubble
/// out to the backdrop.
#[component]
pub fn Modal(mut open: Signal<bool>, title: String, children: Element) -> Element {
    use_effect(move || {
        set_body_scroll_locked(*open.read());
    });
    use_drop(|| set_body_scroll_locked(false));

    if !*open.read() {
        return rsx! { "" };
    }

    rsx! {
        div {
            class: "modal-overlay active",
            onclick: move |_| open.set(false),
            div {
                class: "modal",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |ev| ev.stop_propagation(),
                header { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        "aria-label": "Close",
                        onclick: move |_| open.set(false),
                        "×"
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Host(open_initial: bool) -> Element {
        let open = use_signal(move || open_initial);
        rsx! {
            Modal { open, title: "Event details",
                p { "Doors at seven." }
            }
        }
    }

    #[test]
    fn closed_modal_renders_nothing() {
        let html = dioxus_ssr::render_element(rsx! { Host { open_initial: false } });
        assert_eq!(html, "");
    }

    #[test]
    fn open_modal_renders_title_and_body() {
        let html = dioxus_ssr::render_element(rsx! { Host { open_initial: true } });
        assert!(html.contains("modal-overlay active"));
        assert!(html.contains("Event details"));
        assert!(html.contains("Doors at seven."));
        assert!(html.contains("modal-close"));
    }
}
