/// Environment variable holding the API host, e.g. `https://api.example.com`.
pub const API_URL_VAR: &str = "VITE_API_URL";
/// Host used when [`API_URL_VAR`] is unset or empty.
pub const DEFAULT_API_HOST: &str = "http://localhost:8000";
/// Path appended to the resolved host to form the base URL.
pub const API_PATH_SUFFIX: &str = "/api";

/// Resolve the API host through `lookup`.
/// Absent and empty values both fall back to [`DEFAULT_API_HOST`]; anything else
/// is returned untouched, including surrounding whitespace or a trailing slash.
pub fn resolve_host<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(API_URL_VAR)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_API_HOST.to_string())
}

/// Process environment lookup. Non-unicode values count as absent.
pub fn os_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
