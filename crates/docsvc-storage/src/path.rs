//! Object key helpers.

use url::form_urlencoded;

/// Prefix `path` with a driver's configured key prefix.
///
/// The two parts are joined with `/` only when the prefix is non-empty.
pub fn make_path_with_prefix(prefix: &str, path: &str) -> String {
    if prefix.is_empty() {
        return path.to_string();
    }
    format!("{prefix}/{path}")
}

/// Last segment of an object path.
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Percent-encode every segment of an object key, keeping the `/`
/// separators. Spaces become `%20`.
pub fn encode_key(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            form_urlencoded::byte_serialize(segment.as_bytes())
                .collect::<String>()
                .replace('+', "%20")
        })
        .collect::<Vec<_>>()
        .join("/")
}
