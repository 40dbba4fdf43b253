//! SQLite store adapter for fleettrack.
//!
//! One pool, one database file, three collections. The unique indexes
//! created in [`schema`] enforce the duplicate-key invariants at write time.

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;

use fleettrack::driver_store::{self, DriverStore};
use fleettrack::prelude::*;
use fleettrack::user_store::{self, UserFilter, UserStore};
use fleettrack::vehicle_store::{self, VehicleStore};

mod driver;
mod schema;
mod user;
mod utils;
mod vehicle;

#[derive(Debug)]
pub struct StoreAdapterSqlite {
	db: SqlitePool,
}

impl StoreAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> FtResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| warn!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| warn!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		Ok(Self { db })
	}
}

#[async_trait]
impl UserStore for StoreAdapterSqlite {
	async fn create_user(
		&self,
		data: user_store::CreateUserData<'_>,
	) -> FtResult<user_store::UserRecord> {
		user::create(&self.db, data).await
	}

	async fn read_user(&self, user_id: &str) -> FtResult<user_store::UserRecord> {
		user::read(&self.db, user_id).await
	}

	async fn read_user_by_email(&self, email: &str) -> FtResult<user_store::UserRecord> {
		user::read_by_email(&self.db, email).await
	}

	async fn find_user(
		&self,
		user_id: &str,
		filter: &UserFilter<'_>,
	) -> FtResult<user_store::UserRecord> {
		user::find(&self.db, user_id, filter).await
	}

	async fn list_users(&self, filter: &UserFilter<'_>) -> FtResult<Vec<user_store::UserRecord>> {
		user::list(&self.db, filter).await
	}

	async fn update_user(
		&self,
		user_id: &str,
		data: &user_store::UpdateUserData,
	) -> FtResult<user_store::UserRecord> {
		user::update(&self.db, user_id, data).await
	}

	async fn delete_user(&self, user_id: &str) -> FtResult<()> {
		user::delete(&self.db, user_id).await
	}

	async fn delete_user_owned(&self, user_id: &str, admin_email: &str) -> FtResult<()> {
		user::delete_owned(&self.db, user_id, admin_email).await
	}
}

#[async_trait]
impl VehicleStore for StoreAdapterSqlite {
	async fn create_vehicle(
		&self,
		data: vehicle_store::CreateVehicleData<'_>,
	) -> FtResult<vehicle_store::VehicleRecord> {
		vehicle::create(&self.db, data).await
	}

	async fn read_vehicle(&self, vehicle_id: &str) -> FtResult<vehicle_store::VehicleRecord> {
		vehicle::read(&self.db, vehicle_id).await
	}

	async fn list_vehicles(&self) -> FtResult<Vec<vehicle_store::VehicleRecord>> {
		vehicle::list(&self.db).await
	}

	async fn update_vehicle(
		&self,
		vehicle_id: &str,
		data: &vehicle_store::UpdateVehicleData,
	) -> FtResult<vehicle_store::VehicleRecord> {
		vehicle::update(&self.db, vehicle_id, data).await
	}

	async fn delete_vehicle(&self, vehicle_id: &str) -> FtResult<()> {
		vehicle::delete(&self.db, vehicle_id).await
	}
}

#[async_trait]
impl DriverStore for StoreAdapterSqlite {
	async fn create_driver(
		&self,
		data: driver_store::CreateDriverData<'_>,
	) -> FtResult<driver_store::DriverRecord> {
		driver::create(&self.db, data).await
	}

	async fn read_driver(&self, driver_id: &str) -> FtResult<driver_store::DriverRecord> {
		driver::read(&self.db, driver_id).await
	}

	async fn list_drivers(&self) -> FtResult<Vec<driver_store::DriverRecord>> {
		driver::list(&self.db).await
	}

	async fn update_driver(
		&self,
		driver_id: &str,
		data: &driver_store::UpdateDriverData,
	) -> FtResult<driver_store::DriverRecord> {
		driver::update(&self.db, driver_id, data).await
	}

	async fn delete_driver(&self, driver_id: &str) -> FtResult<()> {
		driver::delete(&self.db, driver_id).await
	}
}

// vim: ts=4
