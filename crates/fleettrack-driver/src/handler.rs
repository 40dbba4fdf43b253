//! Driver handlers.

use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};
use serde::{Deserialize, Serialize};

use fleettrack_types::driver_store::{CreateDriverData, DriverRecord, UpdateDriverData};

use crate::prelude::*;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriverReq {
	username: Box<str>,
	email: Box<str>,
	cin_number: Box<str>,
	phone_number: Box<str>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverReq {
	#[serde(default)]
	username: Patch<Box<str>>,
	#[serde(default)]
	email: Patch<Box<str>>,
	#[serde(default)]
	cin_number: Patch<Box<str>>,
	#[serde(default)]
	phone_number: Patch<Box<str>>,
}

#[derive(Debug, Serialize)]
pub struct MessageRes {
	pub message: Box<str>,
}

pub async fn post_driver(
	State(app): State<App>,
	Json(req): Json<CreateDriverReq>,
) -> FtResult<(StatusCode, Json<ApiResponse<DriverRecord>>)> {
	let driver = app
		.driver_store
		.create_driver(CreateDriverData {
			username: &req.username,
			email: &req.email,
			cin_number: &req.cin_number,
			phone_number: &req.phone_number,
		})
		.await?;

	info!(email = %driver.email, "driver created");

	Ok((
		StatusCode::CREATED,
		Json(ApiResponse::new(driver).with_message("driver created successfully")),
	))
}

pub async fn get_drivers(State(app): State<App>) -> FtResult<Json<Vec<DriverRecord>>> {
	let drivers = app.driver_store.list_drivers().await?;

	Ok(Json(drivers))
}

pub async fn get_driver(
	State(app): State<App>,
	Path(driver_id): Path<Box<str>>,
) -> FtResult<Json<DriverRecord>> {
	let driver = app.driver_store.read_driver(&driver_id).await?;

	Ok(Json(driver))
}

pub async fn put_driver(
	State(app): State<App>,
	Path(driver_id): Path<Box<str>>,
	Json(req): Json<UpdateDriverReq>,
) -> FtResult<Json<ApiResponse<DriverRecord>>> {
	let driver = app
		.driver_store
		.update_driver(
			&driver_id,
			&UpdateDriverData {
				username: req.username,
				email: req.email,
				cin_number: req.cin_number,
				phone_number: req.phone_number,
			},
		)
		.await?;

	Ok(Json(ApiResponse::new(driver).with_message("driver updated successfully")))
}

pub async fn delete_driver(
	State(app): State<App>,
	Path(driver_id): Path<Box<str>>,
) -> FtResult<Json<MessageRes>> {
	app.driver_store.delete_driver(&driver_id).await?;

	info!(driver_id = %driver_id, "driver deleted");

	Ok(Json(MessageRes { message: "driver deleted successfully".into() }))
}

// vim: ts=4
