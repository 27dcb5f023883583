use gigboard_web::components::page_window;
use gigboard_web::events::{FilterState, PAGE_SIZE, build_query_url, build_request_query};
use gigboard_web::forms::{FieldValue, serialize_fields};

#[test]
fn filter_cycle_keeps_url_and_request_in_agreement() {
    // A visitor picks a location, types a search, then pages forward.
    let mut state = FilterState {
        location_id: Some(3),
        search: "fire show".to_string(),
        ..FilterState::default()
    };
    assert_eq!(build_query_url(&state), "location_id=3&search=fire%20show");

    state.page = 2;
    assert_eq!(
        build_query_url(&state),
        "location_id=3&search=fire%20show&page=2"
    );
    assert_eq!(
        build_request_query(&state),
        "page=2&limit=12&location_id=3&search=fire%20show"
    );

    // Reloading the page restores exactly the same state from the URL.
    let pairs: Vec<(String, String)> = build_query_url(&state)
        .split('&')
        .map(|pair| {
            let (key, value) = pair.split_once('=').expect("key=value pair");
            (
                key.to_string(),
                urlencoding::decode(value).expect("valid encoding").to_string(),
            )
        })
        .collect();
    assert_eq!(FilterState::from_query_pairs(&pairs), state);
}

#[test]
fn request_always_asks_for_a_full_page() {
    let state = FilterState::default();
    assert!(build_request_query(&state).contains(&format!("limit={PAGE_SIZE}")));
    assert!(build_request_query(&state).contains("page=1"));
}

#[test]
fn middle_page_window_matches_the_listing_controls() {
    // Page 7 of 10 shows 5..=9 between the first/last page shortcuts.
    assert_eq!(page_window(7, 10), (5, 9));
}

#[test]
fn submitted_filters_serialize_with_numeric_types() {
    let fields = serialize_fields([
        ("location_id", "3".to_string()),
        ("entrance_fee", "0".to_string()),
        ("search", String::new()),
    ]);
    assert_eq!(fields.get("location_id"), Some(&FieldValue::Int(3)));
    assert_eq!(fields.get("entrance_fee"), Some(&FieldValue::Float(0.0)));
    assert!(!fields.contains_key("search"));
}
