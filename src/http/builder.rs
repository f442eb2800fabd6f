use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::ApiError;

/// Join a request path onto the base URL.
/// - `""` → the base URL unchanged
/// - `health/` → `{base}/health/`
/// - `/users//` → `{base}/users//` (only the seam is collapsed)
/// - `scheme://…` and protocol-relative `//host/…` → returned as-is
pub fn join_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    if is_absolute_url(path) {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// `scheme://` or `//` prefix, where a scheme is a letter followed by letters,
/// digits, `+`, `-` or `.`. Case-insensitive.
fn is_absolute_url(path: &str) -> bool {
    let rest = match path.split_once(':') {
        Some((scheme, rest)) => {
            let mut chars = scheme.chars();
            let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
            if valid { rest } else { path }
        }
        None => path,
    };
    rest.starts_with("//")
}

/// Convert configured `(name, value)` pairs into a `HeaderMap`.
pub fn header_map(headers: &[(String, String)]) -> Result<HeaderMap, ApiError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| ApiError::InvalidHeader(format!("{key}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ApiError::InvalidHeader(format!("{key}: {e}")))?;
        map.insert(name, value);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8000/api";

    #[test]
    fn test_join_relative() {
        assert_eq!(join_url(BASE, "health/"), "http://localhost:8000/api/health/");
    }

    #[test]
    fn test_join_collapses_seam() {
        assert_eq!(join_url(BASE, "/health/"), "http://localhost:8000/api/health/");
        assert_eq!(
            join_url("http://localhost:8000/api/", "/health"),
            "http://localhost:8000/api/health"
        );
    }

    #[test]
    fn test_join_any_scheme_is_absolute() {
        assert_eq!(join_url(BASE, "ws://other.example.com/x"), "ws://other.example.com/x");
        assert_eq!(join_url(BASE, "HTTPS://Other.example.com"), "HTTPS://Other.example.com");
        assert_eq!(
            join_url(BASE, "git+ssh://host/repo"),
            "git+ssh://host/repo"
        );
    }

    #[test]
    fn test_join_protocol_relative_is_absolute() {
        assert_eq!(join_url(BASE, "//cdn.example.com/a"), "//cdn.example.com/a");
    }

    #[test]
    fn test_join_colon_without_scheme_is_relative() {
        assert_eq!(
            join_url(BASE, "items/a:b"),
            "http://localhost:8000/api/items/a:b"
        );
        assert_eq!(join_url(BASE, "1a://x"), "http://localhost:8000/api/1a://x");
        assert_eq!(join_url(BASE, "mailto:x"), "http://localhost:8000/api/mailto:x");
    }

    #[test]
    fn test_join_empty_path() {
        assert_eq!(join_url(BASE, ""), BASE);
    }

    #[test]
    fn test_join_root_slash() {
        assert_eq!(join_url(BASE, "/"), "http://localhost:8000/api/");
    }

    #[test]
    fn test_join_absolute_passthrough() {
        assert_eq!(
            join_url(BASE, "https://other.example.com/x"),
            "https://other.example.com/x"
        );
    }

    #[test]
    fn test_join_keeps_query() {
        assert_eq!(
            join_url(BASE, "items/?page=2"),
            "http://localhost:8000/api/items/?page=2"
        );
    }

    #[test]
    fn test_header_map() {
        let map = header_map(&[("Content-Type".into(), "application/json".into())]).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["content-type"], "application/json");
    }

    #[test]
    fn test_header_map_rejects_bad_name() {
        let err = header_map(&[("bad header".into(), "x".into())]).unwrap_err();
        assert!(matches!(err, ApiError::InvalidHeader(_)));
    }
}
