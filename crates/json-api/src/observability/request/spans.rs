//! HTTP span and metric route naming.

/// Routes reported verbatim. Anything else is collapsed so that probes for
/// arbitrary paths cannot grow metric label cardinality.
const KNOWN_ROUTES: &[&str] = &[
    "/",
    "/healthcheck",
    "/api/auth/login",
    "/api/auth/logout",
    "/api/auth/verify",
    "/api/settings",
    "/api-doc/openapi.json",
];

const UNMATCHED_ROUTE: &str = "/{unmatched}";

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) route: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let route = route_label(path).to_owned();
    let otel_span_name = format!("{method} {route}");

    RequestSpanName {
        route,
        otel_span_name,
    }
}

fn route_label(path: &str) -> &str {
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    if KNOWN_ROUTES.contains(&trimmed) {
        return trimmed;
    }

    if trimmed == "/docs" || trimmed.starts_with("/docs/") {
        return "/docs";
    }

    UNMATCHED_ROUTE
}
