//! Allowed-origin guard and CORS headers.

use salvo::{
    http::{
        Method,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE, HOST, HeaderValue, ORIGIN,
        },
        uri::Uri,
    },
    prelude::*,
};
use tracing::warn;

const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, Authorization";
const PREFLIGHT_MAX_AGE: &str = "86400";

/// Rejects cross-origin requests from origins other than the configured one
/// and answers CORS preflights. Same-host requests always pass.
#[derive(Debug, Clone, Default)]
pub(crate) struct OriginGuard {
    allowed_origin: Option<String>,
}

impl OriginGuard {
    #[must_use]
    pub(crate) fn new(allowed_origin: Option<String>) -> Self {
        Self {
            allowed_origin: allowed_origin.filter(|origin| !origin.trim().is_empty()),
        }
    }

    fn is_allowed(&self, origin: Option<&str>, request_host: Option<&str>) -> bool {
        let (Some(allowed), Some(origin)) = (self.allowed_origin.as_deref(), origin) else {
            return true;
        };

        if origin.is_empty() || origin == allowed {
            return true;
        }

        match origin_host(origin) {
            Some(host) => request_host.is_some_and(|request_host| request_host == host),
            None => false,
        }
    }

    fn allow_origin_value(&self, origin: Option<&str>) -> HeaderValue {
        self.allowed_origin
            .as_deref()
            .or(origin.filter(|origin| !origin.is_empty()))
            .and_then(|value| HeaderValue::from_str(value).ok())
            .unwrap_or_else(|| HeaderValue::from_static("*"))
    }
}

#[handler]
impl OriginGuard {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let origin = req
            .headers()
            .get(ORIGIN)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        if !self.is_allowed(origin.as_deref(), request_host(req).as_deref()) {
            warn!(origin = origin.as_deref().unwrap_or_default(), "rejected cross-origin request");

            res.render(StatusError::forbidden().brief("Forbidden"));
            ctrl.skip_rest();

            return;
        }

        let allow_origin = self.allow_origin_value(origin.as_deref());

        if req.method() == Method::OPTIONS {
            let headers = res.headers_mut();

            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
            headers.insert(
                ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(ALLOW_METHODS),
            );
            headers.insert(
                ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static(ALLOW_HEADERS),
            );
            headers.insert(
                ACCESS_CONTROL_MAX_AGE,
                HeaderValue::from_static(PREFLIGHT_MAX_AGE),
            );

            res.status_code(StatusCode::NO_CONTENT);
            ctrl.skip_rest();

            return;
        }

        ctrl.call_next(req, depot, res).await;

        let headers = res.headers_mut();

        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        );
    }
}

/// Host (with port, if any) the request was addressed to.
fn request_host(req: &Request) -> Option<String> {
    req.headers()
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .or_else(|| req.uri().authority().map(|authority| authority.as_str().to_owned()))
        .map(|host| host.to_ascii_lowercase())
}

/// Host of an `Origin` header value. `None` when it is not an absolute URL.
fn origin_host(origin: &str) -> Option<String> {
    let uri = origin.parse::<Uri>().ok()?;

    uri.scheme()?;

    uri.authority()
        .map(|authority| authority.as_str().to_ascii_lowercase())
}
