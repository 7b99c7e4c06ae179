use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::request::Parts,
};
use std::convert::Infallible;
use std::net::SocketAddr;

/// Client address for the login audit trail: the forwarded-for header when
/// present, else the socket peer, else "Unknown".
///
/// The header is client-controllable, so the value is informational audit
/// data only, never a trust signal.
pub struct ClientIp(pub String);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(forwarded) = parts.headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
            let forwarded = forwarded.trim();
            if !forwarded.is_empty() {
                return Ok(ClientIp(forwarded.to_string()));
            }
        }

        if let Some(ConnectInfo(addr)) = parts.extensions.get::<ConnectInfo<SocketAddr>>() {
            return Ok(ClientIp(addr.ip().to_string()));
        }

        Ok(ClientIp("Unknown".to_string()))
    }
}
