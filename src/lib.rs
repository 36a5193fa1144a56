//! A minimal HTTP gateway: one public endpoint (`GET /`) and one
//! credential-gated endpoint (`GET /secret`) behind HTTP Basic
//! Authentication, with a 404 fallback for everything else.
//!
//! The crate holds exactly one static credential pair, loaded from the
//! environment at startup; see `configuration`. All authentication decisions
//! live in `authentication`.

pub mod authentication;
pub mod configuration;
pub mod routes;
pub mod startup;
pub mod telemetry;
