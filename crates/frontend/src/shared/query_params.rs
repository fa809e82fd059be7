//! URL query-string state
//!
//! Page state that should survive a reload (active tab, search text) is kept
//! in the query string. Writes go through `history.replaceState`, so they do
//! not add history entries. Only the written key is touched: segments owned
//! by other components (repeated keys, `tags[]=` style keys) are copied back
//! verbatim.

use web_sys::window;

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Raw `key=value` segments of `?a=1&b=2` (leading `?` optional)
fn segments(search: &str) -> impl Iterator<Item = &str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|s| !s.is_empty())
}

fn segment_key(segment: &str) -> String {
    decode(segment.split_once('=').map_or(segment, |(k, _)| k))
}

/// Decoded `(key, value)` pairs in URL order; repeated keys are kept
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    segments(search)
        .map(|segment| match segment.split_once('=') {
            Some((k, v)) => (decode(k), decode(v)),
            None => (decode(segment), String::new()),
        })
        .collect()
}

/// First value of `key` in `search`
pub fn param_value(search: &str, key: &str) -> Option<String> {
    parse_query(search)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

/// Returns `search` with `key` set to `value`, or removed when `value` is `None`.
/// The key keeps its position when present, otherwise it is appended.
/// The result starts with `?`, or is empty when no params remain.
pub fn with_param(search: &str, key: &str, value: Option<&str>) -> String {
    let mut result: Vec<String> = Vec::new();
    let mut written = false;

    for segment in segments(search) {
        if segment_key(segment) != key {
            result.push(segment.to_string());
            continue;
        }
        if let (Some(v), false) = (value, written) {
            result.push(format!("{}={}", urlencoding::encode(key), urlencoding::encode(v)));
            written = true;
        }
    }
    if let (Some(v), false) = (value, written) {
        result.push(format!("{}={}", urlencoding::encode(key), urlencoding::encode(v)));
    }

    if result.is_empty() {
        String::new()
    } else {
        format!("?{}", result.join("&"))
    }
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn read_param(key: &str) -> Option<String> {
    param_value(&current_search(), key)
}

/// Updates one key in the address bar without touching the others
pub fn write_param(key: &str, value: Option<&str>) -> Result<(), String> {
    let current = current_search();
    let next = with_param(&current, key, value);
    if next == current {
        return Ok(());
    }

    let w = window().ok_or("window is not available")?;
    let pathname = w
        .location()
        .pathname()
        .map_err(|e| format!("Failed to read location: {:?}", e))?;
    let history = w
        .history()
        .map_err(|e| format!("History API is not available: {:?}", e))?;
    history
        .replace_state_with_url(
            &wasm_bindgen::JsValue::NULL,
            "",
            Some(&format!("{}{}", pathname, next)),
        )
        .map_err(|e| format!("Failed to update URL: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let params = parse_query("?activeTab=charts&search=births");
        assert_eq!(
            params,
            vec![
                ("activeTab".to_string(), "charts".to_string()),
                ("search".to_string(), "births".to_string()),
            ]
        );
        assert!(parse_query("").is_empty());
        assert_eq!(param_value("?search=world+bank", "search").as_deref(), Some("world bank"));
        assert_eq!(param_value("?flag", "flag").as_deref(), Some(""));
        assert_eq!(param_value("?a=1", "page"), None);
    }

    #[test]
    fn test_with_param_preserves_other_keys() {
        let next = with_param("?foo=bar", "activeTab", Some("charts"));
        assert_eq!(next, "?foo=bar&activeTab=charts");
        assert_eq!(param_value(&next, "foo").as_deref(), Some("bar"));
    }

    #[test]
    fn test_with_param_keeps_repeated_foreign_keys() {
        assert_eq!(
            with_param("?id=1&id=2&x=1", "search", Some("q")),
            "?id=1&id=2&x=1&search=q"
        );
        assert_eq!(
            param_value("?id=1&id=2&page=explore", "page").as_deref(),
            Some("explore")
        );
    }

    #[test]
    fn test_with_param_keeps_bracketed_foreign_keys() {
        assert_eq!(
            with_param("?tags[]=a&tags[]=b&x=1", "search", Some("q")),
            "?tags[]=a&tags[]=b&x=1&search=q"
        );
        assert_eq!(
            with_param("?tags%5B%5D=a&search=old", "search", None),
            "?tags%5B%5D=a"
        );
    }

    #[test]
    fn test_with_param_replaces_in_place() {
        assert_eq!(
            with_param("?search=a&x=1&search=b", "search", Some("c")),
            "?search=c&x=1"
        );
    }

    #[test]
    fn test_with_param_removes_key() {
        assert_eq!(with_param("?search=x", "search", None), "");
        assert_eq!(with_param("?search=x&foo=1", "search", None), "?foo=1");
    }

    #[test]
    fn test_with_param_encodes_values() {
        let next = with_param("", "search", Some("world bank&co"));
        assert_eq!(next, "?search=world%20bank%26co");
        assert_eq!(param_value(&next, "search").as_deref(), Some("world bank&co"));
    }
}
