//! Bounded route labels for request metrics and spans.

const KNOWN_ROUTES: [&str; 6] = [
    "/healthcheck",
    "/prices",
    "/prices/effective",
    "/metrics",
    "/api-doc/openapi.json",
    "/docs",
];

/// Maps a request path onto a fixed label set so arbitrary paths cannot grow
/// metric cardinality.
pub(super) fn route_label(path: &str) -> &'static str {
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    KNOWN_ROUTES
        .into_iter()
        .find(|route| *route == trimmed)
        .or_else(|| trimmed.starts_with("/docs/").then_some("/docs"))
        .unwrap_or("unmatched")
}
