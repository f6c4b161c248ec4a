use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::{
    adapters::rate_limiter::{RateDecision, RateLimiter, UNKNOWN_CLIENT},
    application::error::ApplicationError,
};

pub const RATE_LIMIT_LIMIT: HeaderName = HeaderName::from_static("ratelimit-limit");
pub const RATE_LIMIT_REMAINING: HeaderName = HeaderName::from_static("ratelimit-remaining");

/// Middleware applying the per-client request quota to every route
pub async fn rate_limit(
    State(limiter): State<RateLimiter>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(UNKNOWN_CLIENT);

    match limiter.check(client) {
        RateDecision::Allowed { remaining } => {
            let mut response = next.run(request).await;
            let headers = response.headers_mut();
            headers.insert(RATE_LIMIT_LIMIT, HeaderValue::from(limiter.max_requests()));
            headers.insert(RATE_LIMIT_REMAINING, HeaderValue::from(remaining));
            response
        }
        RateDecision::Limited { retry_after } => {
            debug!("Rejecting request from {}: quota exhausted", client);
            let retry_secs = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
            let mut response = ApplicationError::TooManyRequests.into_response();
            let headers = response.headers_mut();
            headers.insert(header::RETRY_AFTER, HeaderValue::from(retry_secs));
            headers.insert(RATE_LIMIT_LIMIT, HeaderValue::from(limiter.max_requests()));
            headers.insert(RATE_LIMIT_REMAINING, HeaderValue::from(0u32));
            response
        }
    }
}
