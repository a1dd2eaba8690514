//! Address extraction from the transport remote address.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::request::Parts,
};

use crate::rejection::InternalError;

/// Strips the port and any IPv6 brackets from a raw `host:port` string.
///
/// Accepts the two forms the transport layer produces: `host:port` (IPv4 or
/// hostname) and `[host]:port` (IPv6, the host itself contains colons). For
/// anything else the result is a best-effort prefix, never an error.
///
/// Known edge case: a bare unbracketed IPv6 address with no port is
/// mis-parsed to its first hextet (`"2001:db8::1"` yields `"2001"`).
pub fn host_of(raw: &str) -> &str {
    // Bracketed IPv6 form, e.g. "[2001:db8::1]:443".
    if raw.starts_with('[')
        && let Some(end) = raw.rfind(']')
        && end > 0
    {
        return &raw[1..end];
    }

    // "host:port" with the port as the only colon-delimited suffix.
    raw.split(':').next().unwrap_or(raw)
}

/// Extractor for the caller's bare host
///
/// Reads the transport remote address from [`ConnectInfo`] and strips the
/// port and any brackets, so the inner string never carries a trailing
/// `:port` segment or enclosing brackets.
///
/// Rejects with a 500 if `ConnectInfo` is absent, i.e. the router wasn't
/// served with [`into_make_service_with_connect_info`][connect-info].
///
/// [connect-info]: axum::Router::into_make_service_with_connect_info
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientHost(pub String);

impl<S> FromRequestParts<S> for ClientHost
where
    S: Sync,
{
    type Rejection = InternalError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ConnectInfo(addr) = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .ok_or("can't determine the client address, `ConnectInfo` is missing")?;
        Ok(Self(host_of(&addr.to_string()).to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use axum::{
        Router,
        body::Body,
        extract::ConnectInfo,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::{ClientHost, host_of};

    #[test]
    fn ipv4_with_port() {
        assert_eq!(host_of("1.2.3.4:5678"), "1.2.3.4");
    }

    #[test]
    fn bracketed_ipv6_loopback() {
        assert_eq!(host_of("[::1]:8080"), "::1");
    }

    #[test]
    fn bracketed_ipv6() {
        assert_eq!(host_of("[2001:db8::1]:443"), "2001:db8::1");
    }

    #[test]
    fn hostname_with_port() {
        assert_eq!(host_of("localhost:8080"), "localhost");
    }

    #[test]
    fn no_port() {
        assert_eq!(host_of("10.0.0.1"), "10.0.0.1");
    }

    #[test]
    fn unclosed_bracket_degrades_to_prefix() {
        assert_eq!(host_of("[::1"), "[");
    }

    #[test]
    fn bare_ipv6_misparses_to_first_hextet() {
        assert_eq!(host_of("2001:db8::1"), "2001");
    }

    #[test]
    fn empty_input() {
        assert_eq!(host_of(""), "");
    }

    #[test]
    fn deterministic() {
        let raw = "[2001:db8::1]:443";
        assert_eq!(host_of(raw), host_of(raw));
    }

    fn app() -> Router {
        Router::new().route("/", get(|ClientHost(host): ClientHost| async move { host }))
    }

    async fn body_string(body: Body) -> String {
        let bytes = body.collect().await.unwrap().to_bytes();
        String::from_utf8_lossy(&bytes).into()
    }

    fn request_from(addr: &str) -> Request<Body> {
        let addr: SocketAddr = addr.parse().unwrap();
        let mut req = Request::builder().uri("/").body(Body::empty()).unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        req
    }

    #[tokio::test]
    async fn extracts_from_connect_info() {
        let res = app().oneshot(request_from("203.0.113.5:54321")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_string(res.into_body()).await, "203.0.113.5");
    }

    #[tokio::test]
    async fn ipv6_connect_info_is_unbracketed() {
        let res = app().oneshot(request_from("[2001:db8::1]:443")).await.unwrap();
        assert_eq!(body_string(res.into_body()).await, "2001:db8::1");
    }

    #[tokio::test]
    async fn missing_connect_info_rejects_with_generic_body() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        // The detail stays in the log; clients only see the generic body.
        assert_eq!(body_string(res.into_body()).await, "internal error");
    }
}
