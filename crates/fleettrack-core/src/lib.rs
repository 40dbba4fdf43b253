//! Core infrastructure for the fleettrack backend.
//!
//! This crate contains the app state, the axum extractors, the bearer-token
//! authentication gate, role middleware, and credential hashing. The feature
//! crates build on it without depending on each other.

#![forbid(unsafe_code)]

pub mod app;
pub mod crypto;
pub mod extract;
pub mod perm;
pub mod prelude;
pub mod route_auth;

pub use app::{App, AppBuilderOpts, AppState};
pub use extract::{Auth, Identity};

// vim: ts=4
