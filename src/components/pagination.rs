use dioxus::prelude::*;

/// The sliding window of page buttons: up to five pages centered on the
/// current one, clamped to `[1, total]`.
pub fn page_window(current: usize, total: usize) -> (usize, usize) {
    let start = current.saturating_sub(2).max(1);
    let end = (start + 4).min(total);
    (start, end)
}

#[component]
pub fn Pagination(
    current_page: usize,
    total_pages: usize,
    on_change: EventHandler<usize>,
) -> Element {
    if total_pages <= 1 {
        return rsx! { "" };
    }

    let (start, end) = page_window(current_page, total_pages);

    rsx! {
        nav { class: "pagination", "aria-label": "Pagination",
            button {
                class: "pagination-btn",
                r#type: "button",
                disabled: current_page == 1,
                onclick: move |_| on_change.call(current_page.saturating_sub(1)),
                "← Prev"
            }
            if start > 1 {
                button {
                    class: "pagination-btn",
                    r#type: "button",
                    onclick: move |_| on_change.call(1),
                    "1"
                }
                span { class: "pagination-ellipsis", "…" }
            }
            for page in start..=end {
                button {
                    class: "pagination-btn",
                    class: if page == current_page { "active" },
                    r#type: "button",
                    onclick: move |_| on_change.call(page),
                    "{page}"
                }
            }
            if end < total_pages {
                span { class: "pagination-ellipsis", "…" }
                button {
                    class: "pagination-btn",
                    r#type: "button",
                    onclick: move |_| on_change.call(total_pages),
                    "{total_pages}"
                }
            }
            button {
                class: "pagination-btn",
                r#type: "button",
                disabled: current_page == total_pages,
                onclick: move |_| on_change.call(current_page + 1),
                "Next →"
            }
        }
    }
}
