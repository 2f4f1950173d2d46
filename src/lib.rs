//! cloud-status: runtime identity and liveness endpoints.
//!
//! Serves `GET /` with the greeting, cloud provider label, and hostname of the
//! instance, and `GET /health` as a liveness probe.

pub mod config;
pub mod error;
pub mod http;
pub mod identity;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
