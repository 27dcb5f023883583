mod modal;
mod pagination;
mod query_params;
mod status_message;

pub use modal::{Modal, set_body_scroll_locked};
pub use pagination::{Pagination, page_window};
pub use query_params::{
    build_location_href, build_query_string, parse_location_query_pairs, scroll_to_top,
    set_location_query_string,
};
pub use status_message::StatusMessage;
