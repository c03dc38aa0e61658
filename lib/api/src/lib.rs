//! # ScoutX API
//!
//! REST wrapper around the similarity engine. One query endpoint, one
//! liveness probe, permissive CORS for browser frontends:
//!
//! - `POST /api/similar-players` with `{"playerName": "..."}` returns the
//!   ranked similar-player records as JSON
//! - `GET /healthz` reports the indexed player count
//!
//! Player-not-found maps to 404, every other engine failure to 500.

pub mod rest;

pub use rest::RestApi;
