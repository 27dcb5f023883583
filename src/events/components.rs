use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::api::Api;
use crate::auth;
use crate::components::{Pagination, scroll_to_top, set_location_query_string};
use crate::dto::{EventRecord, EventsData, RefOption};
use crate::utils::{format_currency, format_date};

use super::form::EventFormModal;
use super::query::{
    FilterState, build_query_url, build_request_query, page_in_range, parse_query_state,
};
use super::types::FilterOptions;

pub const PLACEHOLDER_IMAGE: &str = "/assets/images/placeholder.jpg";

const SEARCH_DEBOUNCE_MS: u32 = 500;

/// Owns the listing state: the current filters, the cached reference lists,
/// the last page of results, and the in-flight request bookkeeping. Signals
/// are `Copy`, so the whole controller is handed around by value.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct ListController {
    filters: Signal<FilterState>,
    options: Signal<FilterOptions>,
    data: Signal<Option<EventsData>>,
    error: Signal<Option<String>>,
    loading: Signal<bool>,
    request_seq: Signal<u64>,
    search_debounce: Signal<Option<Task>>,
}

impl ListController {
    /// Issues a fresh `GET /events` for the current filters. Responses are
    /// applied only while their sequence number is still current, so a
    /// visitor clicking through pages faster than the network answers always
    /// ends up with the page they asked for last.
    fn reload(mut self) {
        let seq = *self.request_seq.read() + 1;
        self.request_seq.set(seq);
        self.loading.set(true);
        spawn(async move {
            let query = build_request_query(&self.filters.read().clone());
            let result = Api::default()
                .get::<EventsData>(&format!("/events?{query}"))
                .await;
            if *self.request_seq.read() != seq {
                return;
            }
            self.loading.set(false);
            match result {
                Ok(page_data) => {
                    // The server clamps out-of-range pages; adopt its answer.
                    let mut filters = self.filters.read().clone();
                    if page_data.page >= 1 && filters.page != page_data.page {
                        filters.page = page_data.page;
                        self.filters.set(filters);
                    }
                    self.error.set(None);
                    self.data.set(Some(page_data));
                }
                Err(err) => {
                    tracing::error!("failed to load events: {err}");
                    self.error
                        .set(Some("Failed to load events. Please try again later.".to_string()));
                }
            }
        });
    }

    /// Applies a filter mutation: back to page 1, reload, and rewrite the
    /// address bar so the URL and the list stay in agreement.
    fn set_filter(mut self, mutate: impl FnOnce(&mut FilterState)) {
        let mut filters = self.filters.read().clone();
        mutate(&mut filters);
        filters.page = 1;
        self.filters.set(filters);
        self.reload();
        self.sync_url();
    }

    fn sync_url(self) {
        set_location_query_string(&build_query_url(&self.filters.read()));
    }

    fn go_to_page(mut self, page: usize) {
        let total_pages = self
            .data
            .read()
            .as_ref()
            .map(|data| data.total_pages)
            .unwrap_or(1);
        if !page_in_range(page, total_pages) {
            return;
        }
        let mut filters = self.filters.read().clone();
        filters.page = page;
        self.filters.set(filters);
        self.reload();
        self.sync_url();
        scroll_to_top();
    }

    /// Free-text search: the keystroke lands in the state immediately, the
    /// reload waits for a 500 ms quiet period. Each keystroke cancels the
    /// previously scheduled task.
    fn debounced_search(mut self, value: String) {
        let mut filters = self.filters.read().clone();
        filters.search = value;
        self.filters.set(filters);

        if let Some(task) = self.search_debounce.take() {
            task.cancel();
        }
        let task = spawn(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            self.search_debounce.set(None);
            self.set_filter(|_| {});
        });
        self.search_debounce.set(Some(task));
    }

    async fn load_options(mut self) {
        let api = Api::default();
        let mut options = FilterOptions::default();
        match api.get("/locations").await {
            Ok(locations) => options.locations = locations,
            Err(err) => tracing::error!("failed to load locations: {err}"),
        }
        match api.get("/event-types").await {
            Ok(event_types) => options.event_types = event_types,
            Err(err) => tracing::error!("failed to load event types: {err}"),
        }
        match api.get("/entrance-types").await {
            Ok(entrance_types) => options.entrance_types = entrance_types,
            Err(err) => tracing::error!("failed to load entrance types: {err}"),
        }
        self.options.set(options);
    }
}

#[component]
pub fn EventsPage() -> Element {
    let controller = ListController {
        filters: use_signal(parse_query_state),
        options: use_signal(FilterOptions::default),
        data: use_signal(|| None),
        error: use_signal(|| None),
        loading: use_signal(|| false),
        request_seq: use_signal(|| 0),
        search_debounce: use_signal(|| None),
    };
    let show_form = use_signal(|| false);

    use_future(move || async move {
        controller.load_options().await;
        controller.reload();
    });

    let data = controller.data.read().clone();
    let error = controller.error.read().clone();
    let refreshing = *controller.loading.read() && data.is_some();

    rsx! {
        section { class: "events-page",
            FilterBar { controller, show_form }
            if refreshing {
                div { class: "loading-indicator", "Updating…" }
            }
            div { class: "events-container",
                if let Some(message) = error {
                    div { class: "alert alert-error", "{message}" }
                } else if let Some(data) = data {
                    if data.events.is_empty() {
                        EmptyState {}
                    } else {
                        div { class: "event-grid",
                            for event in data.events.clone() {
                                EventCard { key: "{event.id}", event }
                            }
                        }
                        Pagination {
                            current_page: data.page,
                            total_pages: data.total_pages,
                            on_change: move |page| controller.go_to_page(page),
                        }
                    }
                } else {
                    div { class: "loading loading-lg", div { class: "spinner" } }
                }
            }
            EventFormModal {
                open: show_form,
                options: controller.options.read().clone(),
                on_created: move |_| controller.set_filter(|_| {}),
            }
        }
    }
}

#[component]
fn FilterBar(controller: ListController, mut show_form: Signal<bool>) -> Element {
    let filters = controller.filters.read().clone();
    let options = controller.options.read().clone();

    rsx! {
        form {
            class: "filter-form",
            onsubmit: move |ev: Event<FormData>| {
                ev.prevent_default();
                controller.set_filter(|_| {});
            },
            FilterSelect {
                label: "Location",
                value: filters.location_id,
                options: options.locations,
                on_change: move |id| controller.set_filter(move |f| f.location_id = id),
            }
            FilterSelect {
                label: "Event type",
                value: filters.event_type_id,
                options: options.event_types,
                on_change: move |id| controller.set_filter(move |f| f.event_type_id = id),
            }
            FilterSelect {
                label: "Entrance",
                value: filters.entrance_type_id,
                options: options.entrance_types,
                on_change: move |id| controller.set_filter(move |f| f.entrance_type_id = id),
            }
            label { class: "filter-label",
                "From"
                input {
                    class: "filter-input",
                    r#type: "date",
                    value: "{filters.date_from}",
                    onchange: move |ev| {
                        let value = ev.value();
                        controller.set_filter(move |f| f.date_from = value);
                    },
                }
            }
            label { class: "filter-label",
                "Search"
                input {
                    class: "filter-input",
                    r#type: "search",
                    placeholder: "Search events…",
                    value: "{filters.search}",
                    oninput: move |ev| controller.debounced_search(ev.value()),
                }
            }
            button { class: "btn btn-primary", r#type: "submit", "Filter" }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| {
                    if auth::require_auth() {
                        show_form.set(true);
                    }
                },
                "Post an Event"
            }
        }
    }
}

#[component]
fn FilterSelect(
    label: String,
    value: Option<u32>,
    options: Vec<RefOption>,
    on_change: EventHandler<Option<u32>>,
) -> Element {
    let selected = value.map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        label { class: "filter-label",
            "{label}"
            select {
                class: "filter-select",
                value: "{selected}",
                onchange: move |ev| on_change.call(ev.value().parse::<u32>().ok()),
                option { value: "", "All" }
                for opt in options {
                    option { value: "{opt.id}", "{opt.name}" }
                }
            }
        }
    }
}

#[component]
pub fn EventCard(event: EventRecord) -> Element {
    let mut image_src = use_signal(|| {
        event
            .image_url
            .clone()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
    });

    let date_line = match event.event_time.as_deref() {
        Some(time) if !time.is_empty() => format!("{} • {time}", format_date(&event.event_date)),
        _ => format_date(&event.event_date),
    };
    let price = format_currency(event.entrance_fee, "USD");
    let organizer = event
        .organization_name
        .clone()
        .filter(|name| !name.is_empty())
        .or_else(|| event.creator_name.clone())
        .unwrap_or_default();

    rsx! {
        article { class: "event-card",
            div { class: "event-card-image",
                img {
                    src: "{image_src}",
                    alt: "{event.title}",
                    onerror: move |_| image_src.set(PLACEHOLDER_IMAGE.to_string()),
                }
                span { class: "event-card-badge", "{event.event_type_name}" }
            }
            div { class: "event-card-content",
                div { class: "event-card-date", "{date_line}" }
                h3 { class: "event-card-title",
                    a { href: "/events/{event.id}", "{event.title}" }
                }
                div { class: "event-card-location", "{event.location_name}" }
                if !organizer.is_empty() {
                    p { class: "event-card-organizer", "by {organizer}" }
                }
            }
            footer { class: "event-card-footer",
                span { class: "event-card-price", "{price}" }
                span { class: "event-card-type", "{event.entrance_type_name}" }
            }
        }
    }
}

#[component]
pub fn EmptyState() -> Element {
    rsx! {
        div { class: "empty-state",
            div { class: "empty-state-icon", "🎭" }
            h3 { class: "empty-state-title", "No events found" }
            p { class: "empty-state-text",
                "Try adjusting your filters or check back later for new events."
            }
            a { class: "btn btn-primary", href: "/creator/register", "Post an Event" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> EventRecord {
        EventRecord {
            id: "0a6e9c3b-43c8-4d4a-9af3-0c6de8a10b77".to_string(),
            title: "Sunset Drum Circle".to_string(),
            event_date: "2026-08-22".to_string(),
            event_time: Some("18:30".to_string()),
            entrance_fee: 12.5,
            organization_name: Some("Harbor Arts Collective".to_string()),
            location_name: "North Beach".to_string(),
            event_type_name: "Music".to_string(),
            entrance_type_name: "Ticketed".to_string(),
            ..EventRecord::default()
        }
    }

    #[test]
    fn card_renders_formatted_fields() {
        let html = dioxus_ssr::render_element(rsx! { EventCard { event: sample_event() } });
        assert!(html.contains("Sunset Drum Circle"));
        assert!(html.contains("Sat, Aug 22, 2026 • 18:30"));
        assert!(html.contains("$12.50"));
        assert!(html.contains("North Beach"));
        assert!(html.contains("by Harbor Arts Collective"));
        assert!(html.contains(PLACEHOLDER_IMAGE), "missing image fallback in {html}");
    }

    #[test]
    fn card_escapes_untrusted_text() {
        let event = EventRecord {
            title: "<script>alert('pwn')</script>".to_string(),
            ..sample_event()
        };
        let html = dioxus_ssr::render_element(rsx! { EventCard { event } });
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn free_events_show_the_free_label() {
        let event = EventRecord {
            entrance_fee: 0.0,
            ..sample_event()
        };
        let html = dioxus_ssr::render_element(rsx! { EventCard { event } });
        assert!(html.contains("Free"));
    }

    #[test]
    fn empty_state_offers_a_call_to_action() {
        let html = dioxus_ssr::render_element(rsx! { EmptyState {} });
        assert!(html.contains("No events found"));
        assert!(html.contains("Post an Event"));
    }
}
