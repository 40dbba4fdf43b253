//! Driver registry: CRUD handlers. Reads are open to any authenticated
//! caller; writes are gated on an admin-grade role at the router.

pub mod handler;

mod prelude;

// vim: ts=4
