use crate::components::{build_query_string, parse_location_query_pairs};

/// Cards per page of the public listing.
pub const PAGE_SIZE: usize = 12;

/// The visitor-selected criteria narrowing the event list, plus the current
/// page. Everything is optional; the page defaults to 1.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    pub location_id: Option<u32>,
    pub event_type_id: Option<u32>,
    pub entrance_type_id: Option<u32>,
    pub date_from: String,
    pub search: String,
    pub page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            location_id: None,
            event_type_id: None,
            entrance_type_id: None,
            date_from: String::new(),
            search: String::new(),
            page: 1,
        }
    }
}

impl FilterState {
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Self {
        let mut state = FilterState::default();
        for (key, value) in pairs {
            match key.as_str() {
                "location_id" => state.location_id = value.parse().ok(),
                "event_type_id" => state.event_type_id = value.parse().ok(),
                "entrance_type_id" => state.entrance_type_id = value.parse().ok(),
                "date_from" => state.date_from = value.clone(),
                "search" => state.search = value.clone(),
                "page" => state.page = value.parse().unwrap_or(1).max(1),
                _ => {}
            }
        }
        state
    }

    /// The query pairs written back to the address bar: empty values are
    /// omitted, and `page` only appears past the first page.
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(id) = self.location_id {
            params.push(("location_id".to_string(), id.to_string()));
        }
        if let Some(id) = self.event_type_id {
            params.push(("event_type_id".to_string(), id.to_string()));
        }
        if let Some(id) = self.entrance_type_id {
            params.push(("entrance_type_id".to_string(), id.to_string()));
        }
        if !self.date_from.is_empty() {
            params.push(("date_from".to_string(), self.date_from.clone()));
        }
        if !self.search.is_empty() {
            params.push(("search".to_string(), self.search.clone()));
        }
        if self.page > 1 {
            params.push(("page".to_string(), self.page.to_string()));
        }
        params
    }

    /// The query pairs sent to `GET /events`: always paged with the fixed
    /// page size, filters appended as selected.
    pub fn to_request_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), PAGE_SIZE.to_string()),
        ];
        let mut filters = self.to_query_params();
        filters.retain(|(key, _)| key != "page");
        params.extend(filters);
        params
    }
}

/// Reads the filter state out of the current URL.
pub fn parse_query_state() -> FilterState {
    FilterState::from_query_pairs(&parse_location_query_pairs())
}

/// Whether a page navigation target is legal; anything outside
/// `[1, total_pages]` is ignored by the controller.
pub fn page_in_range(page: usize, total_pages: usize) -> bool {
    (1..=total_pages).contains(&page)
}

pub fn build_query_url(state: &FilterState) -> String {
    build_query_string(&state.to_query_params())
}

pub fn build_request_query(state: &FilterState) -> String {
    build_query_string(&state.to_request_params())
}
