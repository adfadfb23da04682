// Lyrics API server
//
// HTTP surface over the lyrics retrieval pipeline: lookup, raw-text
// cleaning, and health endpoints.

pub mod app;
pub mod config;
pub mod routes;

pub use config::*;
