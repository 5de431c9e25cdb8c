//! CTF Middleware

use crate::application::config::CtfConfig;
use crate::error::CtfError;
use axum::body::Body;
use axum::extract::{ConnectInfo, State};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::client::{extract_bearer_token, extract_client_ip};
use platform::crypto::secret_eq;
use std::net::SocketAddr;
use std::sync::Arc;

/// Middleware that requires `Authorization: Bearer <admin key>`.
///
/// Every verb gets the same bare 401 on failure.
pub async fn require_admin(
    State(config): State<Arc<CtfConfig>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let headers = req.headers();

    let authorized = extract_bearer_token(headers)
        .is_some_and(|token| secret_eq(token, &config.admin_key));

    if !authorized {
        let direct_ip = req
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|info| info.0.ip());
        let client_ip = extract_client_ip(headers, direct_ip);

        tracing::warn!(
            client_ip = ?client_ip,
            method = %req.method(),
            "Rejected admin request"
        );
        return Err(CtfError::Unauthorized.into_response());
    }

    Ok(next.run(req).await)
}
