//! Shared types, store adapter traits, and core utilities for the fleettrack
//! backend.
//!
//! This crate contains the foundational types shared between the server
//! crate, the feature crates, and the store adapter implementations.
//! Extracting these into a separate crate lets adapter crates compile in
//! parallel with the feature modules.

pub mod driver_store;
pub mod error;
pub mod prelude;
pub mod types;
pub mod user_store;
pub mod vehicle_store;
pub mod worker;

// vim: ts=4
