use crate::dto::RefOption;

/// The reference lists backing the filter selects, fetched once per page
/// load and kept for the lifetime of the listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterOptions {
    pub locations: Vec<RefOption>,
    pub event_types: Vec<RefOption>,
    pub entrance_types: Vec<RefOption>,
}
