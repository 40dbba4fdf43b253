//! Database schema. The unique indexes here are the authoritative race
//! guards for duplicate keys; application-level pre-checks only buy an
//! earlier error message.

use sqlx::sqlite::SqlitePool;

pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Users //
	///////////
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS users (
		user_id text NOT NULL,
		username text NOT NULL,
		email text NOT NULL,
		password_hash text NOT NULL,
		role text NOT NULL DEFAULT 'consultant',
		myadmin text NOT NULL,
		agencies json NOT NULL DEFAULT '[]',
		created_at datetime DEFAULT (unixepoch()),
		PRIMARY KEY(user_id)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users(email)")
		.execute(&mut *tx)
		.await?;

	// Vehicles //
	//////////////
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS vehicles (
		vehicle_id text NOT NULL,
		unique_id text NOT NULL,
		name text NOT NULL,
		driver text,
		category text,
		latitude real,
		longitude real,
		temperature real,
		pression real,
		humidity real,
		flame boolean,
		position_id text,
		assigned_route text,
		assigned_trip text,
		assigned_block text,
		headsign text,
		estimated_arrival_times json,
		current_shape_sequence integer,
		user_id text,
		vehicle_details json,
		updated_at datetime DEFAULT (unixepoch()),
		PRIMARY KEY(vehicle_id)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_vehicles_unique_id ON vehicles(unique_id)")
		.execute(&mut *tx)
		.await?;

	// Drivers //
	/////////////
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS drivers (
		driver_id text NOT NULL,
		username text NOT NULL,
		email text NOT NULL,
		cin_number text NOT NULL,
		phone_number text NOT NULL,
		created_at datetime DEFAULT (unixepoch()),
		PRIMARY KEY(driver_id)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_drivers_email ON drivers(email)")
		.execute(&mut *tx)
		.await?;
	sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_drivers_cin ON drivers(cin_number)")
		.execute(&mut *tx)
		.await?;

	tx.commit().await
}

// vim: ts=4
