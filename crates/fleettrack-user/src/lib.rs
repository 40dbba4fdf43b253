//! User management: the role-based scoping engine, the user lifecycle
//! handlers, and the login endpoint.

pub mod auth;
pub mod handler;
pub mod scope;

mod prelude;

// vim: ts=4
