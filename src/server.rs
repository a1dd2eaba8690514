//! Router construction and listener lifecycle.

use std::net::SocketAddr;

use axum::{Router, middleware, routing::any};
use tokio::net::TcpListener;

use crate::{
    access_log::{self, AccessLog},
    config::Config,
    render,
};

/// Builds the service router.
///
/// `/` answers with the caller's address as plain text, `/json` as a JSON
/// document; both accept any method. With `access_log` set, both routes are
/// wrapped by the request-logging middleware; with `None` the router is
/// returned unchanged, with no wrapping at all.
pub fn app(access_log: Option<AccessLog>) -> Router {
    let router = Router::new()
        .route("/", any(render::text_handler))
        .route("/json", any(render::json_handler));
    match access_log {
        Some(log) => router.layer(middleware::from_fn_with_state(
            log,
            access_log::record_request,
        )),
        None => router,
    }
}

/// Binds the listener and serves until the process is stopped.
///
/// A bind failure is returned to the caller before any request is served;
/// it is fatal at startup. Per-request failures never reach this level.
pub async fn serve(config: &Config) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(port = config.port, "server starting");

    let access_log = config.verbose.then(AccessLog::to_tracing);
    axum::serve(
        listener,
        app(access_log).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
}
