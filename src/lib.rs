//! An identity-echo HTTP service
//!
//! Every request is answered with the caller's originating address:
//!
//! - `/` — the bare host as plain text
//! - `/json` — a JSON document of the form `{"ip": "<host>"}`
//!
//! The host comes from the transport remote address
//! ([`axum::extract::ConnectInfo`]), with the port and any IPv6 brackets
//! stripped. With verbose logging enabled, one structured record is emitted
//! per handled request, after its response has been produced.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::net::SocketAddr;
//!
//! use echoip::{AccessLog, app};
//!
//! #[tokio::main]
//! async fn main() {
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!
//!     axum::serve(
//!         listener,
//!         // `ConnectInfo` is required for address extraction
//!         app(Some(AccessLog::to_tracing())).into_make_service_with_connect_info::<SocketAddr>(),
//!     )
//!     .await
//!     .unwrap()
//! }
//! ```

pub mod access_log;
pub mod config;
pub mod extract;
pub mod rejection;
pub mod render;
pub mod server;

pub use access_log::{AccessLog, AccessRecord};
pub use config::Config;
pub use extract::{ClientHost, host_of};
pub use server::{app, serve};
