//! Per-request access logging, applied as a middleware layer.

use std::{fmt, net::SocketAddr, sync::Arc};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// One structured record per handled request
///
/// Serializes to a JSON object with exactly the keys `remote_addr`, `time`,
/// `method`, `path` and `protocol`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AccessRecord {
    /// Raw transport remote address in `host:port` form.
    pub remote_addr: String,
    /// RFC3339 timestamp, taken after the response was produced.
    pub time: String,
    /// HTTP method.
    pub method: String,
    /// URL path.
    pub path: String,
    /// Protocol string, e.g. `HTTP/1.1`.
    pub protocol: String,
}

/// Destination for access records
///
/// Production code uses [`AccessLog::to_tracing`]; tests inject a collecting
/// sink via [`AccessLog::new`]. The sink is assumed to serialize concurrent
/// writes itself.
#[derive(Clone)]
pub struct AccessLog {
    sink: Arc<dyn Fn(AccessRecord) + Send + Sync>,
}

impl AccessLog {
    /// A log handing each record to `sink`.
    pub fn new<F>(sink: F) -> Self
    where
        F: Fn(AccessRecord) + Send + Sync + 'static,
    {
        Self {
            sink: Arc::new(sink),
        }
    }

    /// A log writing each record as one JSON object per line through
    /// [`tracing`].
    pub fn to_tracing() -> Self {
        Self::new(|record| match serde_json::to_string(&record) {
            Ok(line) => tracing::info!(target: "echoip::access", "{line}"),
            Err(error) => {
                tracing::error!(target: "echoip::access", %error, "access record serialization failed");
            }
        })
    }

    fn emit(&self, record: AccessRecord) {
        (self.sink)(record);
    }
}

impl fmt::Debug for AccessLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessLog").finish_non_exhaustive()
    }
}

/// Middleware that runs the inner handler to completion, then emits exactly
/// one [`AccessRecord`].
///
/// The record is emitted strictly after the inner handler has returned its
/// response, so the timestamp reflects post-response time. Only attached
/// when verbose logging is on; see [`crate::server::app`].
pub async fn record_request(
    State(log): State<AccessLog>,
    request: Request,
    next: Next,
) -> Response {
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_default();
    let method = request.method().to_string();
    let path = request.uri().path().to_owned();
    let protocol = format!("{:?}", request.version());

    let response = next.run(request).await;

    log.emit(AccessRecord {
        remote_addr,
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        method,
        path,
        protocol,
    });
    response
}
