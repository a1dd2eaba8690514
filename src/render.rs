//! Response rendering: plain-text and JSON representations of the host.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{extract::ClientHost, rejection::InternalError};

const TEXT_PLAIN: &str = "text/plain";
const APPLICATION_JSON: &str = "application/json";

/// A response body paired with the content type it is encoded as.
///
/// Written with status 200; the pairing is fixed by construction, so the
/// content type always matches the body encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    content_type: &'static str,
    body: Vec<u8>,
}

impl Rendered {
    /// The content type of the body.
    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    /// The body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl IntoResponse for Rendered {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}

#[derive(Serialize)]
struct IpBody<'a> {
    ip: &'a str,
}

/// Renders the host verbatim as `text/plain`.
pub fn text(host: &str) -> Rendered {
    Rendered {
        content_type: TEXT_PLAIN,
        body: host.as_bytes().to_vec(),
    }
}

/// Renders the host as the JSON object `{"ip": "<host>"}`.
pub fn json(host: &str) -> Result<Rendered, InternalError> {
    let body = serde_json::to_vec(&IpBody { ip: host })
        .map_err(|e| format!("JSON encoding failed: {e}"))?;
    Ok(Rendered {
        content_type: APPLICATION_JSON,
        body,
    })
}

/// Handler for `/`: the caller's address as plain text.
pub async fn text_handler(ClientHost(host): ClientHost) -> Rendered {
    text(&host)
}

/// Handler for `/json`: the caller's address as a JSON document.
pub async fn json_handler(ClientHost(host): ClientHost) -> Result<Rendered, InternalError> {
    json(&host)
}
