//! Adapter trait for the vehicle collection.
//!
//! Vehicles carry no ownership scoping: any caller reaching the handlers may
//! act on any record. Only `unique_id` and `name` are required; everything
//! else is telemetry or assignment data that arrives later.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt::Debug;

use crate::prelude::*;

/// Estimated arrival at one stop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopEta {
	pub stop_id: Box<str>,
	pub arrival_time: Timestamp,
}

/// Next-stop details pushed by the position pipeline.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleDetails {
	pub next_stop_id: Option<Box<str>>,
	pub next_stop_name: Option<Box<str>>,
	/// Distance in km.
	pub next_stop_distance: Option<f64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
	pub vehicle_id: Box<str>,
	pub unique_id: Box<str>,
	pub name: Box<str>,
	pub driver: Option<Box<str>>,
	pub category: Option<Box<str>>,
	pub latitude: Option<f64>,
	pub longitude: Option<f64>,
	pub temperature: Option<f64>,
	pub pression: Option<f64>,
	pub humidity: Option<f64>,
	pub flame: Option<bool>,
	pub position_id: Option<Box<str>>,
	pub assigned_route: Option<Box<str>>,
	pub assigned_trip: Option<Box<str>>,
	pub assigned_block: Option<Box<str>>,
	pub headsign: Option<Box<str>>,
	pub estimated_arrival_times: Option<Box<[StopEta]>>,
	pub current_shape_sequence: Option<i64>,
	pub user_id: Option<Box<str>>,
	#[serde(rename = "vehicle_details")]
	pub vehicle_details: Option<VehicleDetails>,
	pub updated_at: Timestamp,
}

/// Fields accepted at creation time. Assignment and ETA data only ever
/// arrive through updates.
#[derive(Debug, Default)]
pub struct CreateVehicleData<'a> {
	pub unique_id: &'a str,
	pub name: &'a str,
	pub driver: Option<&'a str>,
	pub temperature: Option<f64>,
	pub humidity: Option<f64>,
	pub pression: Option<f64>,
	pub flame: Option<bool>,
	pub latitude: Option<f64>,
	pub longitude: Option<f64>,
}

/// Merge-style update covering the whole document.
#[derive(Debug, Default)]
pub struct UpdateVehicleData {
	pub unique_id: Patch<Box<str>>,
	pub name: Patch<Box<str>>,
	pub driver: Patch<Box<str>>,
	pub category: Patch<Box<str>>,
	pub latitude: Patch<f64>,
	pub longitude: Patch<f64>,
	pub temperature: Patch<f64>,
	pub pression: Patch<f64>,
	pub humidity: Patch<f64>,
	pub flame: Patch<bool>,
	pub position_id: Patch<Box<str>>,
	pub assigned_route: Patch<Box<str>>,
	pub assigned_trip: Patch<Box<str>>,
	pub assigned_block: Patch<Box<str>>,
	pub headsign: Patch<Box<str>>,
	pub estimated_arrival_times: Patch<Box<[StopEta]>>,
	pub current_shape_sequence: Patch<i64>,
	pub user_id: Patch<Box<str>>,
	pub vehicle_details: Patch<VehicleDetails>,
	pub updated_at: Patch<Timestamp>,
}

/// Persistence for the vehicle collection. The unique index on `unique_id`
/// must surface as [`Error::Conflict`].
#[async_trait]
pub trait VehicleStore: Debug + Send + Sync {
	async fn create_vehicle(&self, data: CreateVehicleData<'_>) -> FtResult<VehicleRecord>;
	async fn read_vehicle(&self, vehicle_id: &str) -> FtResult<VehicleRecord>;
	async fn list_vehicles(&self) -> FtResult<Vec<VehicleRecord>>;
	async fn update_vehicle(&self, vehicle_id: &str, data: &UpdateVehicleData)
	-> FtResult<VehicleRecord>;
	async fn delete_vehicle(&self, vehicle_id: &str) -> FtResult<()>;
}

// vim: ts=4
