//! Vehicle collection operations. ETA lists and next-stop details are stored
//! as JSON columns.

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use crate::utils::*;
use fleettrack::prelude::*;
use fleettrack::vehicle_store::*;

const COLUMNS: &str = "vehicle_id, unique_id, name, driver, category, latitude, longitude, \
	temperature, pression, humidity, flame, position_id, assigned_route, assigned_trip, \
	assigned_block, headsign, estimated_arrival_times, current_shape_sequence, user_id, \
	vehicle_details, updated_at";

fn map_row(row: SqliteRow) -> FtResult<VehicleRecord> {
	let etas: Option<String> = row.try_get("estimated_arrival_times").or(Err(Error::DbError))?;
	let details: Option<String> = row.try_get("vehicle_details").or(Err(Error::DbError))?;

	Ok(VehicleRecord {
		vehicle_id: row.try_get("vehicle_id").or(Err(Error::DbError))?,
		unique_id: row.try_get("unique_id").or(Err(Error::DbError))?,
		name: row.try_get("name").or(Err(Error::DbError))?,
		driver: row.try_get("driver").or(Err(Error::DbError))?,
		category: row.try_get("category").or(Err(Error::DbError))?,
		latitude: row.try_get("latitude").or(Err(Error::DbError))?,
		longitude: row.try_get("longitude").or(Err(Error::DbError))?,
		temperature: row.try_get("temperature").or(Err(Error::DbError))?,
		pression: row.try_get("pression").or(Err(Error::DbError))?,
		humidity: row.try_get("humidity").or(Err(Error::DbError))?,
		flame: row.try_get("flame").or(Err(Error::DbError))?,
		position_id: row.try_get("position_id").or(Err(Error::DbError))?,
		assigned_route: row.try_get("assigned_route").or(Err(Error::DbError))?,
		assigned_trip: row.try_get("assigned_trip").or(Err(Error::DbError))?,
		assigned_block: row.try_get("assigned_block").or(Err(Error::DbError))?,
		headsign: row.try_get("headsign").or(Err(Error::DbError))?,
		estimated_arrival_times: match etas {
			Some(json) => Some(serde_json::from_str(&json).or(Err(Error::DbError))?),
			None => None,
		},
		current_shape_sequence: row.try_get("current_shape_sequence").or(Err(Error::DbError))?,
		user_id: row.try_get("user_id").or(Err(Error::DbError))?,
		vehicle_details: match details {
			Some(json) => Some(serde_json::from_str(&json).or(Err(Error::DbError))?),
			None => None,
		},
		updated_at: row.try_get("updated_at").map(Timestamp).or(Err(Error::DbError))?,
	})
}

pub(crate) async fn create(db: &SqlitePool, data: CreateVehicleData<'_>) -> FtResult<VehicleRecord> {
	let vehicle_id = uuid::Uuid::new_v4().to_string();

	sqlx::query(
		"INSERT INTO vehicles (vehicle_id, unique_id, name, driver, temperature, humidity,
			pression, flame, latitude, longitude, updated_at)
		VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, unixepoch())",
	)
	.bind(&vehicle_id)
	.bind(data.unique_id)
	.bind(data.name)
	.bind(data.driver)
	.bind(data.temperature)
	.bind(data.humidity)
	.bind(data.pression)
	.bind(data.flame)
	.bind(data.latitude)
	.bind(data.longitude)
	.execute(db)
	.await
	.map_err(map_write_err)?;

	read(db, &vehicle_id).await
}

pub(crate) async fn read(db: &SqlitePool, vehicle_id: &str) -> FtResult<VehicleRecord> {
	let res = sqlx::query(&format!("SELECT {} FROM vehicles WHERE vehicle_id = ?1", COLUMNS))
		.bind(vehicle_id)
		.fetch_one(db)
		.await;

	map_res(res, map_row)
}

pub(crate) async fn list(db: &SqlitePool) -> FtResult<Vec<VehicleRecord>> {
	let rows = sqlx::query(&format!("SELECT {} FROM vehicles ORDER BY updated_at DESC", COLUMNS))
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	rows.into_iter().map(map_row).collect()
}

pub(crate) async fn update(
	db: &SqlitePool,
	vehicle_id: &str,
	data: &UpdateVehicleData,
) -> FtResult<VehicleRecord> {
	let mut query = sqlx::QueryBuilder::new("UPDATE vehicles SET ");
	let mut has_updates = false;

	has_updates = push_patch!(query, has_updates, "unique_id", &data.unique_id, |v| &**v);
	has_updates = push_patch!(query, has_updates, "name", &data.name, |v| &**v);
	has_updates = push_patch!(query, has_updates, "driver", &data.driver, |v| &**v);
	has_updates = push_patch!(query, has_updates, "category", &data.category, |v| &**v);
	has_updates = push_patch!(query, has_updates, "latitude", &data.latitude, |v| *v);
	has_updates = push_patch!(query, has_updates, "longitude", &data.longitude, |v| *v);
	has_updates = push_patch!(query, has_updates, "temperature", &data.temperature, |v| *v);
	has_updates = push_patch!(query, has_updates, "pression", &data.pression, |v| *v);
	has_updates = push_patch!(query, has_updates, "humidity", &data.humidity, |v| *v);
	has_updates = push_patch!(query, has_updates, "flame", &data.flame, |v| *v);
	has_updates = push_patch!(query, has_updates, "position_id", &data.position_id, |v| &**v);
	has_updates = push_patch!(query, has_updates, "assigned_route", &data.assigned_route, |v| &**v);
	has_updates = push_patch!(query, has_updates, "assigned_trip", &data.assigned_trip, |v| &**v);
	has_updates = push_patch!(query, has_updates, "assigned_block", &data.assigned_block, |v| &**v);
	has_updates = push_patch!(query, has_updates, "headsign", &data.headsign, |v| &**v);
	has_updates = push_patch!(
		query,
		has_updates,
		"estimated_arrival_times",
		&data.estimated_arrival_times,
		|v| serde_json::to_string(v).unwrap_or_default()
	);
	has_updates = push_patch!(
		query,
		has_updates,
		"current_shape_sequence",
		&data.current_shape_sequence,
		|v| *v
	);
	has_updates = push_patch!(query, has_updates, "user_id", &data.user_id, |v| &**v);
	has_updates = push_patch!(query, has_updates, "vehicle_details", &data.vehicle_details, |v| {
		serde_json::to_string(v).unwrap_or_default()
	});
	has_updates = push_patch!(query, has_updates, "updated_at", &data.updated_at, |v| v.0);

	if has_updates {
		query.push(" WHERE vehicle_id=").push_bind(vehicle_id);

		let res = query.build().execute(db).await.map_err(map_write_err)?;
		if res.rows_affected() == 0 {
			return Err(Error::NotFound);
		}
	}

	read(db, vehicle_id).await
}

pub(crate) async fn delete(db: &SqlitePool, vehicle_id: &str) -> FtResult<()> {
	let res = sqlx::query("DELETE FROM vehicles WHERE vehicle_id=?")
		.bind(vehicle_id)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}

	Ok(())
}

// vim: ts=4
