//! Vehicle lifecycle: unscoped CRUD over the tracked fleet.

pub mod handler;

mod prelude;

// vim: ts=4
