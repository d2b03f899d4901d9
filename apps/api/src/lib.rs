//! UniMatch: university recommendations from a student profile.
//!
//! The scoring core (`recommendation`, `planning`) is pure and synchronous over
//! the static `catalog`; `routes` exposes it as a JSON API.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod planning;
pub mod recommendation;
pub mod report;
pub mod routes;
pub mod state;
