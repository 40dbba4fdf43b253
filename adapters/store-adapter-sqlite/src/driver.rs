//! Driver registry operations.

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use crate::utils::*;
use fleettrack::driver_store::*;
use fleettrack::prelude::*;

const COLUMNS: &str = "driver_id, username, email, cin_number, phone_number, created_at";

fn map_row(row: SqliteRow) -> FtResult<DriverRecord> {
	Ok(DriverRecord {
		driver_id: row.try_get("driver_id").or(Err(Error::DbError))?,
		username: row.try_get("username").or(Err(Error::DbError))?,
		email: row.try_get("email").or(Err(Error::DbError))?,
		cin_number: row.try_get("cin_number").or(Err(Error::DbError))?,
		phone_number: row.try_get("phone_number").or(Err(Error::DbError))?,
		created_at: row.try_get("created_at").map(Timestamp).or(Err(Error::DbError))?,
	})
}

pub(crate) async fn create(db: &SqlitePool, data: CreateDriverData<'_>) -> FtResult<DriverRecord> {
	let driver_id = uuid::Uuid::new_v4().to_string();

	sqlx::query(
		"INSERT INTO drivers (driver_id, username, email, cin_number, phone_number, created_at)
		VALUES (?, ?, ?, ?, ?, unixepoch())",
	)
	.bind(&driver_id)
	.bind(data.username)
	.bind(data.email)
	.bind(data.cin_number)
	.bind(data.phone_number)
	.execute(db)
	.await
	.map_err(map_write_err)?;

	read(db, &driver_id).await
}

pub(crate) async fn read(db: &SqlitePool, driver_id: &str) -> FtResult<DriverRecord> {
	let res = sqlx::query(&format!("SELECT {} FROM drivers WHERE driver_id = ?1", COLUMNS))
		.bind(driver_id)
		.fetch_one(db)
		.await;

	map_res(res, map_row)
}

pub(crate) async fn list(db: &SqlitePool) -> FtResult<Vec<DriverRecord>> {
	let rows = sqlx::query(&format!("SELECT {} FROM drivers ORDER BY created_at DESC", COLUMNS))
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	rows.into_iter().map(map_row).collect()
}

pub(crate) async fn update(
	db: &SqlitePool,
	driver_id: &str,
	data: &UpdateDriverData,
) -> FtResult<DriverRecord> {
	let mut query = sqlx::QueryBuilder::new("UPDATE drivers SET ");
	let mut has_updates = false;

	has_updates = push_patch!(query, has_updates, "username", &data.username, |v| &**v);
	has_updates = push_patch!(query, has_updates, "email", &data.email, |v| &**v);
	has_updates = push_patch!(query, has_updates, "cin_number", &data.cin_number, |v| &**v);
	has_updates = push_patch!(query, has_updates, "phone_number", &data.phone_number, |v| &**v);

	if has_updates {
		query.push(" WHERE driver_id=").push_bind(driver_id);

		let res = query.build().execute(db).await.map_err(map_write_err)?;
		if res.rows_affected() == 0 {
			return Err(Error::NotFound);
		}
	}

	read(db, driver_id).await
}

pub(crate) async fn delete(db: &SqlitePool, driver_id: &str) -> FtResult<()> {
	let res = sqlx::query("DELETE FROM drivers WHERE driver_id=?")
		.bind(driver_id)
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
