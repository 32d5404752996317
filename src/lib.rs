//! Porch: a minimal web server for static sites.
//!
//! Serves files from a fixed `public/` directory, answers `GET /api/hello`
//! with a fixed JSON greeting, and exposes `GET /health` as a liveness probe
//! for orchestration systems. The only runtime knob is the `PORT` environment
//! variable.

pub mod config;
pub mod http;
pub mod routes;
