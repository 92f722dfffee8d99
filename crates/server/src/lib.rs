//! Notes API Server - HTTP REST API for the notes service
//!
//! This crate exposes the id/hour classifiers and the note repositories over
//! HTTP. It provides:
//!
//! - **User lookup**: `GET /about/{id}` with strict id validation
//! - **Notes**: create, list, read, update and delete
//! - **Utilities**: string reversal and hour-of-day classification
//! - **Health & Metrics**: liveness/readiness probes and Prometheus metrics
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - Greeting (`Hello World!`)
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics
//! - `GET /about/{id}` - User by id (400 invalid id, 404 unknown user)
//! - `GET /reverse/{str}` - Reverse a string
//! - `GET /part-of-day?hour=N` - Classify a query-string hour
//! - `POST /part-of-day` - Classify a JSON hour, type-strict
//! - `GET /notes`, `POST /notes` - List or create notes
//! - `GET|PUT|DELETE /notes/{id}` - Read, replace or delete a note
//!
//! Every error response has the body `{ "error": "<message>" }`.

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ErrorResponse, ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
