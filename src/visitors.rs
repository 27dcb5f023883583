use dioxus::prelude::*;

use crate::api::Api;
use crate::dto::VisitorStats;
use crate::utils::{format_date_time, group_thousands};

/// Best-effort page-view ping. Telemetry never surfaces to the visitor, so
/// failures are only worth a debug line.
pub async fn track_visitor() {
    let payload = serde_json::json!({ "user_agent": user_agent() });
    if let Err(err) = Api::default().post_ok("/visitors", &payload).await {
        tracing::debug!("visitor tracking failed: {err}");
    }
}

#[cfg(feature = "web")]
fn user_agent() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    window.navigator().user_agent().unwrap_or_default()
}

#[cfg(not(feature = "web"))]
fn user_agent() -> String {
    String::new()
}

/// Visitor counter shown in the page footer. Renders nothing until the
/// stats arrive, and stays empty if they never do.
#[component]
pub fn VisitorStatsFooter() -> Element {
    let mut stats = use_signal(|| None::<VisitorStats>);

    use_future(move || async move {
        match Api::default().get::<VisitorStats>("/visitors/stats").await {
            Ok(data) => stats.set(Some(data)),
            Err(err) => tracing::debug!("failed to load visitor stats: {err}"),
        }
    });

    let Some(stats) = stats.read().clone() else {
        return rsx! { "" };
    };

    let last_seen = stats.last_visitor_date.as_deref().map(format_date_time);
    let location = [
        stats.last_visitor_city.as_deref(),
        stats.last_visitor_country.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ");

    rsx! {
        div { class: "visitor-stats",
            span { class: "visitor-count", "{group_thousands(stats.total_visitors)} visitors" }
            if let Some(last_seen) = last_seen {
                span { class: "visitor-last",
                    "Last visit: {last_seen}"
                    if !location.is_empty() {
                        " from {location}"
                    }
                }
            }
        }
    }
}
