//! API Module
//!
//! HTTP handlers and routing for the dedupe server REST API.
//!
//! # Endpoints
//! - `POST /check` - Record a key and report whether it is a duplicate
//! - `GET /size` - Number of tracked keys
//! - `DELETE /clear` - Drop every tracked key
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
