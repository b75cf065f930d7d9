use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, Method, Uri},
    response::Response,
};
use imds_core::service::{MetadataHandler, MetadataRequest};
use imds_model::token;
use percent_encoding::percent_decode_str;
use tracing::info;

use crate::render::render;

/// HTTP surface of the metadata double.
pub struct HttpApi<H> {
    handler: Arc<H>,
}

impl<H> HttpApi<H>
where
    H: MetadataHandler,
{
    /// Create a new HTTP API around `handler`.
    pub fn new(handler: Arc<H>) -> Self {
        Self { handler }
    }

    /// Builds the axum router.
    ///
    /// Every method and path goes to a single dispatcher. The path is
    /// percent-decoded, then matched in the core router, so unknown paths
    /// still get `{}`.
    pub fn router(self) -> Router {
        Router::new()
            .fallback(dispatch::<H>)
            .with_state(self.handler)
    }
}

async fn dispatch<H>(
    State(handler): State<Arc<H>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response
where
    H: MetadataHandler,
{
    // Matching happens on the decoded path, so `instance%2Did` is `instance-id`.
    // Bytes that do not decode to UTF-8 become U+FFFD and match nothing.
    let path = percent_decode_str(uri.path()).decode_utf8_lossy();
    info!(%method, path = %path, "request received");

    let req = MetadataRequest {
        method: method.as_str(),
        path: &path,
        token: headers.get(token::HEADER).and_then(|v| v.to_str().ok()),
    };
    render(handler.handle(&req))
}
