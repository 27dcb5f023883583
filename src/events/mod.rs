mod components;
mod form;
mod query;
mod types;

pub use components::{EmptyState, EventCard, EventsPage, PLACEHOLDER_IMAGE};
pub use form::EventFormModal;
pub use query::{
    FilterState, PAGE_SIZE, build_query_url, build_request_query, page_in_range, parse_query_state,
};
pub use types::FilterOptions;
