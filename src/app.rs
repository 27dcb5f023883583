use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::auth;
use crate::events::EventsPage;
use crate::visitors::VisitorStatsFooter;

const GLOBAL_STYLE_CSS: &str = include_str!("../assets/style.css");

#[derive(Clone, Routable, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(App)]
    #[route("/")]
    EventsPage {},

    #[route("/:..segments")]
    EventsWithQuery { segments: Vec<String> },
}

pub fn root() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

#[component]
pub fn App() -> Element {
    use_future(|| crate::visitors::track_visitor());

    rsx! {
        document::Title { "Gigboard · What's on" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Link { rel: "icon", r#type: "image/png", href: "/assets/favicon.png" }
        document::Style { "{GLOBAL_STYLE_CSS}" }

        header { class: "site-header",
            nav { "aria-label": "Main navigation",
                span { class: "brand",
                    Link { to: Route::EventsPage {}, "Gigboard" }
                }
                if let Some(user) = auth::user() {
                    span { class: "nav-user", "Hi, {user.name}" }
                    button {
                        class: "nav-logout",
                        r#type: "button",
                        onclick: move |_| auth::logout(),
                        "Log out"
                    }
                } else {
                    a { href: "/creator/login", "For organizers" }
                }
            }
        }
        main { Outlet::<Route> {} }
        footer { class: "site-footer", VisitorStatsFooter {} }
    }
}

// The router wants a path segment to tell routes apart, but the listing page
// keeps its filter state in the query string alone. This catch-all absorbs
// stray trailing segments so query-only navigations still land on the
// listing.
#[component]
fn EventsWithQuery(segments: Vec<String>) -> Element {
    rsx! { EventsPage {} }
}
