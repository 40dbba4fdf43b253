//! Vehicle handlers. No role scoping here: any caller reaching these routes
//! may act on any vehicle, unlike the user collection.

use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};
use serde::{Deserialize, Serialize};

use fleettrack_types::vehicle_store::{
	CreateVehicleData, StopEta, UpdateVehicleData, VehicleDetails, VehicleRecord,
};

use crate::prelude::*;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleReq {
	#[serde(default)]
	unique_id: Box<str>,
	#[serde(default)]
	name: Box<str>,
	driver: Option<Box<str>>,
	temperature: Option<f64>,
	humidity: Option<f64>,
	pression: Option<f64>,
	flame: Option<bool>,
	latitude: Option<f64>,
	longitude: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleReq {
	#[serde(default)]
	unique_id: Patch<Box<str>>,
	#[serde(default)]
	name: Patch<Box<str>>,
	#[serde(default)]
	driver: Patch<Box<str>>,
	#[serde(default)]
	category: Patch<Box<str>>,
	#[serde(default)]
	latitude: Patch<f64>,
	#[serde(default)]
	longitude: Patch<f64>,
	#[serde(default)]
	temperature: Patch<f64>,
	#[serde(default)]
	pression: Patch<f64>,
	#[serde(default)]
	humidity: Patch<f64>,
	#[serde(default)]
	flame: Patch<bool>,
	#[serde(default)]
	position_id: Patch<Box<str>>,
	#[serde(default)]
	assigned_route: Patch<Box<str>>,
	#[serde(default)]
	assigned_trip: Patch<Box<str>>,
	#[serde(default)]
	assigned_block: Patch<Box<str>>,
	#[serde(default)]
	headsign: Patch<Box<str>>,
	#[serde(default)]
	estimated_arrival_times: Patch<Box<[StopEta]>>,
	#[serde(default)]
	current_shape_sequence: Patch<i64>,
	#[serde(default)]
	user_id: Patch<Box<str>>,
	#[serde(default, rename = "vehicle_details")]
	vehicle_details: Patch<VehicleDetails>,
	#[serde(default)]
	updated_at: Patch<Timestamp>,
}

/// A client-supplied `updatedAt` wins; otherwise the merge is stamped now.
fn stamp_updated_at(updated_at: Patch<Timestamp>) -> Patch<Timestamp> {
	match updated_at {
		Patch::Undefined => Patch::Value(Timestamp::now()),
		patch => patch,
	}
}

#[derive(Debug, Serialize)]
pub struct MessageRes {
	pub message: Box<str>,
}

pub async fn post_vehicle(
	State(app): State<App>,
	Json(req): Json<CreateVehicleReq>,
) -> FtResult<(StatusCode, Json<VehicleRecord>)> {
	if req.unique_id.trim().is_empty() || req.name.trim().is_empty() {
		return Err(Error::ValidationError("uniqueId and name are required".into()));
	}

	let vehicle = app
		.vehicle_store
		.create_vehicle(CreateVehicleData {
			unique_id: &req.unique_id,
			name: &req.name,
			driver: req.driver.as_deref(),
			temperature: req.temperature,
			humidity: req.humidity,
			pression: req.pression,
			flame: req.flame,
			latitude: req.latitude,
			longitude: req.longitude,
		})
		.await?;

	info!(unique_id = %vehicle.unique_id, "vehicle created");

	Ok((StatusCode::CREATED, Json(vehicle)))
}

pub async fn get_vehicles(State(app): State<App>) -> FtResult<Json<Vec<VehicleRecord>>> {
	let vehicles = app.vehicle_store.list_vehicles().await?;

	Ok(Json(vehicles))
}

pub async fn get_vehicle(
	State(app): State<App>,
	Path(vehicle_id): Path<Box<str>>,
) -> FtResult<Json<VehicleRecord>> {
	let vehicle = app.vehicle_store.read_vehicle(&vehicle_id).await?;

	Ok(Json(vehicle))
}

pub async fn put_vehicle(
	State(app): State<App>,
	Path(vehicle_id): Path<Box<str>>,
	Json(req): Json<UpdateVehicleReq>,
) -> FtResult<Json<VehicleRecord>> {
	let vehicle = app
		.vehicle_store
		.update_vehicle(
			&vehicle_id,
			&UpdateVehicleData {
				unique_id: req.unique_id,
				name: req.name,
				driver: req.driver,
				category: req.category,
				latitude: req.latitude,
				longitude: req.longitude,
				temperature: req.temperature,
				pression: req.pression,
				humidity: req.humidity,
				flame: req.flame,
				position_id: req.position_id,
				assigned_route: req.assigned_route,
				assigned_trip: req.assigned_trip,
				assigned_block: req.assigned_block,
				headsign: req.headsign,
				estimated_arrival_times: req.estimated_arrival_times,
				current_shape_sequence: req.current_shape_sequence,
				user_id: req.user_id,
				vehicle_details: req.vehicle_details,
				updated_at: stamp_updated_at(req.updated_at),
			},
		)
		.await?;

	Ok(Json(vehicle))
}

pub async fn delete_vehicle(
	State(app): State<App>,
	Path(vehicle_id): Path<Box<str>>,
) -> FtResult<Json<MessageRes>> {
	app.vehicle_store.delete_vehicle(&vehicle_id).await?;

	info!(vehicle_id = %vehicle_id, "vehicle deleted");

	Ok(Json(MessageRes { message: "vehicle deleted successfully".into() }))
}


// vim: ts=4
