use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Newtype wrapping the caller's session key, stored as a request extension.
#[derive(Debug, Clone)]
pub struct SessionId(pub String);

const SESSION_COOKIE: &str = "storeloc_session";

/// Settings for the session cookie middleware.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    max_age: Duration,
}

impl SessionConfig {
    #[must_use]
    pub fn new(max_age: Duration) -> Self {
        Self { max_age }
    }
}

/// Axum middleware that extracts or generates a request ID.
///
/// If the incoming request has an `x-request-id` header, that value is used.
/// Otherwise a new `UUIDv4` is generated. The ID is:
/// - Inserted into request extensions as [`RequestId`]
/// - Set on the response as the `x-request-id` header
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert("x-request-id", val);
    }

    res
}

/// Axum middleware that resolves the caller's session identity.
///
/// Reads the `storeloc_session` cookie; a caller without one is minted a new
/// `UUIDv4` session. The key is inserted into request extensions as
/// [`SessionId`], and freshly minted sessions get a `Set-Cookie` on the
/// response with `Max-Age` equal to the selection retention window.
pub async fn session_id(
    State(config): State<SessionConfig>,
    mut req: Request,
    next: Next,
) -> Response {
    let existing = extract_session_cookie(req.headers().get(COOKIE));

    let (id, minted) = match existing {
        Some(id) => (id.to_owned(), false),
        None => (Uuid::new_v4().to_string(), true),
    };

    req.extensions_mut().insert(SessionId(id.clone()));

    let mut res = next.run(req).await;

    if minted {
        let cookie = format!(
            "{SESSION_COOKIE}={id}; Max-Age={}; Path=/; HttpOnly",
            config.max_age.as_secs()
        );
        if let Ok(val) = HeaderValue::from_str(&cookie) {
            res.headers_mut().insert(SET_COOKIE, val);
        }
    }

    res
}

fn extract_session_cookie(value: Option<&HeaderValue>) -> Option<&str> {
    value
        .and_then(|v| v.to_str().ok())
        .and_then(|header| {
            header
                .split(';')
                .map(str::trim)
                .find_map(|pair| pair.strip_prefix(SESSION_COOKIE).and_then(|rest| rest.strip_prefix('=')))
        })
        .filter(|s| !s.is_empty())
}
