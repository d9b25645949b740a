//! Request handling and transformation.
//!
//! # Responsibilities
//! - Extract the target from the `url` query parameter
//! - Default the target scheme to https
//! - Carry every other query parameter over to the target
//!
//! # Design Decisions
//! - The first `url` value wins; all `url` pairs are dropped from the forwarded query
//! - Forwarded pairs keep their inbound order and repeated values
//! - The target string is not validated here; the client rejects it when the
//!   outbound request is built

use url::form_urlencoded;

use crate::http::error::ProxyError;

/// Query parameter carrying the target URL.
pub const TARGET_PARAM: &str = "url";

/// Derive the upstream URL from the inbound query string.
///
/// ```
/// # use fetch_proxy::http::request::build_target_url;
/// let target = build_target_url(Some("url=example.com&foo=bar")).unwrap();
/// assert_eq!(target, "https://example.com?foo=bar");
/// ```
pub fn build_target_url(query: Option<&str>) -> Result<String, ProxyError> {
    let pairs: Vec<(String, String)> = form_urlencoded::parse(query.unwrap_or_default().as_bytes())
        .into_owned()
        .collect();

    let target = pairs
        .iter()
        .find(|(key, _)| key == TARGET_PARAM)
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty())
        .ok_or(ProxyError::MissingParameter)?;

    let mut full = normalize_scheme(target);

    let mut forwarded = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in pairs.iter().filter(|(key, _)| key != TARGET_PARAM) {
        forwarded.append_pair(key, value);
        any = true;
    }

    if any {
        let encoded = forwarded.finish();
        full.push(if full.contains('?') { '&' } else { '?' });
        full.push_str(&encoded);
    }

    Ok(full)
}

/// Prefix `https://` unless the target already names http or https.
pub fn normalize_scheme(target: &str) -> String {
    if target.starts_with("http://") || target.starts_with("https://") {
        target.to_string()
    } else {
        format!("https://{target}")
    }
}
