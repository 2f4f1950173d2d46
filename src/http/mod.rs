//! HTTP server module.
//!
//! Binds the configured address, serves the router over plain HTTP, and
//! drains in-flight connections on SIGTERM/SIGINT. TLS is expected to be
//! terminated by the ingress in front of the service.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
