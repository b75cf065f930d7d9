//! Outcome to HTTP response mapping.
use axum::{
    http::{HeaderName, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use imds_core::router::{Outcome, Reply};
use imds_model::{metadata, token};
use serde::Serialize;

use crate::error::ApiError;

/// Lower-cased form of the token TTL advertisement header.
pub const TTL_HEADER: &str = "x-aws-ec2-metadata-token-ttl-seconds";

const APPLICATION_JSON: &str = "application/json";
const APPLICATION_TEXT: &str = "application/text";
const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Builds the wire response for a routed request.
///
/// The TTL header is attached to every response while v2 is enabled,
/// error replies included.
pub fn render(reply: Reply) -> Response {
    let mut response = render_outcome(reply.outcome).unwrap_or_else(IntoResponse::into_response);
    if reply.token_mode.is_enabled() {
        response
            .headers_mut()
            .insert(
                HeaderName::from_static(TTL_HEADER),
                HeaderValue::from_static(token::TTL_SECONDS),
            );
    }
    response
}

fn render_outcome(outcome: Outcome) -> Result<Response, ApiError> {
    let response = match outcome {
        Outcome::TokenIssued => ([(header::CONTENT_TYPE, TEXT_PLAIN)], token::VALUE).into_response(),
        Outcome::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED.into_response(),
        Outcome::NotYetVisible => StatusCode::NOT_FOUND.into_response(),
        Outcome::FeatureDisabled => {
            error_reply(StatusCode::NOT_FOUND, metadata::FEATURE_DISABLED_MESSAGE)
        }
        Outcome::Forbidden => StatusCode::FORBIDDEN.into_response(),
        Outcome::InstanceAction(action) => json(&action)?,
        Outcome::ScheduledEvents(events) => json(&events)?,
        Outcome::Text(value) => ([(header::CONTENT_TYPE, APPLICATION_TEXT)], value).into_response(),
        Outcome::EmptyJson => ([(header::CONTENT_TYPE, APPLICATION_JSON)], "{}").into_response(),
        Outcome::Internal(msg) => return Err(ApiError::Internal(msg)),
    };
    Ok(response)
}

fn json<T: Serialize>(value: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value)?;
    Ok(([(header::CONTENT_TYPE, APPLICATION_JSON)], body).into_response())
}

/// Plain-text error reply: message plus newline, no sniffing.
pub(crate) fn error_reply(status: StatusCode, message: &str) -> Response {
    (
        status,
        [
            (header::CONTENT_TYPE, TEXT_PLAIN),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ],
        format!("{message}\n"),
    )
        .into_response()
}
