use std::sync::Arc;

use auth::Exposure;
use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use http::header;
use http::HeaderMap;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::SecurityState;

/// Marks a request that already went through [`authenticate`].
#[derive(Debug, Clone, Copy)]
struct AuthFilterApplied;

/// Enforces the access policy before any handler runs.
///
/// Public routes pass untouched. Everything else needs a valid bearer token;
/// the verified `auth::Principal` is stored in the request extensions. Every
/// token failure gets the same 401 body and only the log says why.
pub async fn authenticate(
    State(security): State<SecurityState>,
    mut request: Request,
    next: Next,
) -> Response {
    if request.extensions().get::<AuthFilterApplied>().is_some() {
        return next.run(request).await;
    }
    request.extensions_mut().insert(AuthFilterApplied);

    let policy = Arc::clone(&security.access_policy);
    let required_roles = match policy.exposure(request.method(), request.uri().path()) {
        Exposure::Public => return next.run(request).await,
        Exposure::Authenticated => None,
        Exposure::Roles(roles) => Some(roles),
    };

    let Some(token) = bearer_token(request.headers()) else {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "Missing or malformed bearer token"
        );
        return ApiError::unauthenticated().into_response();
    };

    let principal = match security.authenticator.validate_token(token) {
        Ok(principal) => principal,
        Err(e) => {
            tracing::warn!(
                method = %request.method(),
                path = %request.uri().path(),
                reason = %e,
                "Token rejected"
            );
            return ApiError::unauthenticated().into_response();
        }
    };

    if let Some(roles) = required_roles {
        if !principal.has_any_role(roles) {
            tracing::warn!(
                subject = %principal.subject,
                path = %request.uri().path(),
                "Caller lacks a required role"
            );
            return ApiError::forbidden().into_response();
        }
    }

    tracing::debug!(subject = %principal.subject, "Request authenticated");
    request.extensions_mut().insert(principal);

    next.run(request).await
}

/// Strips any `Set-Cookie` header so no session identifier leaves the service.
pub async fn stateless_session(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    if response.headers().contains_key(header::SET_COOKIE) {
        tracing::warn!("Dropping Set-Cookie header from response");
        response.headers_mut().remove(header::SET_COOKIE);
    }

    response
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("Bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}
