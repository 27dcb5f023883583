#[cfg(feature = "web")]
pub fn parse_location_query_pairs() -> Vec<(String, String)> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let Ok(search) = window.location().search() else {
        return Vec::new();
    };
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        return Vec::new();
    }
    search
        .split('&')
        .map(|pair| {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_query_value(raw_key), decode_query_value(raw_value))
        })
        .collect()
}

#[cfg(not(feature = "web"))]
pub fn parse_location_query_pairs() -> Vec<(String, String)> {
    Vec::new()
}

pub fn build_query_string(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn build_location_href(query_string: &str) -> String {
    let pathname = location_pathname();
    if query_string.is_empty() {
        pathname
    } else {
        format!("{pathname}?{query_string}")
    }
}

/// Rewrites the address bar query string in place, leaving history alone.
#[cfg(feature = "web")]
pub fn set_location_query_string(query_string: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let target = build_location_href(query_string);
    let Ok(history) = window.history() else {
        return;
    };
    let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&target));
}

#[cfg(not(feature = "web"))]
pub fn set_location_query_string(_query_string: &str) {}

#[cfg(feature = "web")]
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(not(feature = "web"))]
pub fn scroll_to_top() {}

#[cfg(feature = "web")]
fn decode_query_value(value: &str) -> String {
    let replaced = value.replace('+', " ");
    urlencoding::decode(&replaced)
        .map(|s| s.to_string())
        .unwrap_or(replaced)
}

#[cfg(feature = "web")]
fn location_pathname() -> String {
    let Some(window) = web_sys::window() else {
        return "/".to_string();
    };
    window
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string())
}

#[cfg(not(feature = "web"))]
fn location_pathname() -> String {
    "/".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_query_pairs() {
        let params = vec![
            ("search".to_string(), "fire show".to_string()),
            ("page".to_string(), "2".to_string()),
        ];
        assert_eq!(build_query_string(&params), "search=fire%20show&page=2");
    }

    #[test]
    fn empty_query_keeps_bare_pathname() {
        assert_eq!(build_location_href(""), "/");
        assert_eq!(build_location_href("page=2"), "/?page=2");
    }
}
