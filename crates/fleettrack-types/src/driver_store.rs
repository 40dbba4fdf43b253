//! Adapter trait for the driver registry.

use async_trait::async_trait;
use serde::Serialize;
use serde_with::skip_serializing_none;
use std::fmt::Debug;

use crate::prelude::*;

#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverRecord {
	pub driver_id: Box<str>,
	pub username: Box<str>,
	pub email: Box<str>,
	/// National identity card number.
	pub cin_number: Box<str>,
	pub phone_number: Box<str>,
	pub created_at: Timestamp,
}

#[derive(Debug)]
pub struct CreateDriverData<'a> {
	pub username: &'a str,
	pub email: &'a str,
	pub cin_number: &'a str,
	pub phone_number: &'a str,
}

#[derive(Debug, Default)]
pub struct UpdateDriverData {
	pub username: Patch<Box<str>>,
	pub email: Patch<Box<str>>,
	pub cin_number: Patch<Box<str>>,
	pub phone_number: Patch<Box<str>>,
}

/// Persistence for the driver registry. Both `email` and `cin_number` carry
/// unique indexes; violations surface as [`Error::Conflict`].
#[async_trait]
pub trait DriverStore: Debug + Send + Sync {
	async fn create_driver(&self, data: CreateDriverData<'_>) -> FtResult<DriverRecord>;
	async fn read_driver(&self, driver_id: &str) -> FtResult<DriverRecord>;
	async fn list_drivers(&self) -> FtResult<Vec<DriverRecord>>;
	async fn update_driver(&self, driver_id: &str, data: &UpdateDriverData)
	-> FtResult<DriverRecord>;
	async fn delete_driver(&self, driver_id: &str) -> FtResult<()>;
}

// vim: ts=4
