//! Request helper extensions.

use farmstand_app::auth::ClientAddress;
use salvo::{http::header::AUTHORIZATION, prelude::Request};

pub(crate) trait RequestExt {
    /// Token from an `Authorization: Bearer <token>` header.
    fn bearer_token(&self) -> Option<&str>;

    /// Caller address used to partition login attempts.
    ///
    /// Prefers the first entry of `client_ip_header` when configured and
    /// present, then the socket peer IP without its port.
    fn client_address(&self, client_ip_header: Option<&str>) -> ClientAddress;
}

impl RequestExt for Request {
    fn bearer_token(&self) -> Option<&str> {
        let value = self.headers().get(AUTHORIZATION)?.to_str().ok()?;
        let (scheme, token) = value.split_once(' ')?;
        let token = token.trim();

        if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
            return None;
        }

        Some(token)
    }

    fn client_address(&self, client_ip_header: Option<&str>) -> ClientAddress {
        let forwarded = client_ip_header
            .and_then(|name| self.headers().get(name))
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|value| !value.is_empty());

        if let Some(address) = forwarded {
            return ClientAddress::new(address);
        }

        let remote = self.remote_addr();

        if let Some(addr) = remote.as_ipv4() {
            return ClientAddress::new(addr.ip().to_string());
        }

        if let Some(addr) = remote.as_ipv6() {
            return ClientAddress::new(addr.ip().to_string());
        }

        ClientAddress::unknown()
    }
}
