//! Request context extractor

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{Extensions, HeaderMap, request::Parts};
use platform::client::ClientFingerprint;

use crate::locale::Locale;

/// Who is calling and in which language to answer
#[derive(Debug, Clone)]
pub struct ClientContext {
    pub fingerprint: ClientFingerprint,
    pub locale: Locale,
}

impl ClientContext {
    /// `ConnectInfo` is only present when the server was started with it
    pub fn from_request_data(headers: &HeaderMap, extensions: &Extensions) -> Self {
        let direct_ip = extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());

        Self {
            fingerprint: ClientFingerprint::from_headers(headers, direct_ip),
            locale: Locale::from_headers(headers),
        }
    }
}

impl<S> FromRequestParts<S> for ClientContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_request_data(&parts.headers, &parts.extensions))
    }
}
