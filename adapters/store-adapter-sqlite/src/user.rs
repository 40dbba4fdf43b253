//! User collection operations.
//!
//! Scoped reads translate a [`UserFilter`] into a WHERE clause, so a record
//! outside the caller's scope is indistinguishable from a missing one.

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use crate::utils::*;
use fleettrack::prelude::*;
use fleettrack::user_store::*;

const COLUMNS: &str =
	"user_id, username, email, password_hash, role, myadmin, agencies, created_at";

fn map_row(row: SqliteRow) -> FtResult<UserRecord> {
	let role: Box<str> = row.try_get("role").or(Err(Error::DbError))?;
	let agencies: String = row.try_get("agencies").or(Err(Error::DbError))?;

	Ok(UserRecord {
		user_id: row.try_get("user_id").or(Err(Error::DbError))?,
		username: row.try_get("username").or(Err(Error::DbError))?,
		email: row.try_get("email").or(Err(Error::DbError))?,
		password_hash: row.try_get("password_hash").or(Err(Error::DbError))?,
		role: Role::parse(&role).ok_or(Error::DbError)?,
		myadmin: row.try_get("myadmin").or(Err(Error::DbError))?,
		agencies: serde_json::from_str(&agencies).or(Err(Error::DbError))?,
		created_at: row.try_get("created_at").map(Timestamp).or(Err(Error::DbError))?,
	})
}

pub(crate) async fn create(db: &SqlitePool, data: CreateUserData<'_>) -> FtResult<UserRecord> {
	let user_id = uuid::Uuid::new_v4().to_string();
	let agencies = serde_json::to_string(data.agencies).or(Err(Error::DbError))?;

	sqlx::query(
		"INSERT INTO users (user_id, username, email, password_hash, role, myadmin, agencies, created_at)
		VALUES (?, ?, ?, ?, ?, ?, ?, unixepoch())",
	)
	.bind(&user_id)
	.bind(data.username)
	.bind(data.email)
	.bind(data.password_hash)
	.bind(data.role.as_str())
	.bind(data.myadmin)
	.bind(&agencies)
	.execute(db)
	.await
	.map_err(map_write_err)?;

	read(db, &user_id).await
}

pub(crate) async fn read(db: &SqlitePool, user_id: &str) -> FtResult<UserRecord> {
	let res = sqlx::query(&format!("SELECT {} FROM users WHERE user_id = ?1", COLUMNS))
		.bind(user_id)
		.fetch_one(db)
		.await;

	map_res(res, map_row)
}

pub(crate) async fn read_by_email(db: &SqlitePool, email: &str) -> FtResult<UserRecord> {
	let res = sqlx::query(&format!("SELECT {} FROM users WHERE email = ?1", COLUMNS))
		.bind(email)
		.fetch_one(db)
		.await;

	map_res(res, map_row)
}

pub(crate) async fn find(
	db: &SqlitePool,
	user_id: &str,
	filter: &UserFilter<'_>,
) -> FtResult<UserRecord> {
	let mut query = sqlx::QueryBuilder::new(format!("SELECT {} FROM users WHERE user_id=", COLUMNS));
	query.push_bind(user_id);

	match filter {
		UserFilter::All => {}
		UserFilter::AdminScope { email } => {
			query
				.push(" AND (myadmin=")
				.push_bind(*email)
				.push(" OR email=")
				.push_bind(*email)
				.push(")");
		}
		UserFilter::SelfScope { email } => {
			query.push(" AND email=").push_bind(*email);
		}
	}

	let res = query.build().fetch_one(db).await;

	map_res(res, map_row)
}

pub(crate) async fn list(db: &SqlitePool, filter: &UserFilter<'_>) -> FtResult<Vec<UserRecord>> {
	let mut query = sqlx::QueryBuilder::new(format!("SELECT {} FROM users", COLUMNS));

	match filter {
		UserFilter::All => {}
		UserFilter::AdminScope { email } => {
			query
				.push(" WHERE myadmin=")
				.push_bind(*email)
				.push(" OR email=")
				.push_bind(*email);
		}
		UserFilter::SelfScope { email } => {
			query.push(" WHERE email=").push_bind(*email);
		}
	}
	query.push(" ORDER BY created_at DESC");

	let rows = query.build().fetch_all(db).await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	rows.into_iter().map(map_row).collect()
}

pub(crate) async fn update(
	db: &SqlitePool,
	user_id: &str,
	data: &UpdateUserData,
) -> FtResult<UserRecord> {
	let mut query = sqlx::QueryBuilder::new("UPDATE users SET ");
	let mut has_updates = false;

	has_updates = push_patch!(query, has_updates, "username", &data.username, |v| &**v);
	has_updates = push_patch!(query, has_updates, "email", &data.email, |v| &**v);
	has_updates = push_patch!(query, has_updates, "password_hash", &data.password_hash, |v| &**v);
	has_updates = push_patch!(query, has_updates, "role", &data.role, |v| v.as_str());
	has_updates = push_patch!(query, has_updates, "myadmin", &data.myadmin, |v| &**v);
	has_updates = push_patch!(query, has_updates, "agencies", &data.agencies, |v| serde_json::to_string(v)
		.unwrap_or_default());

	if has_updates {
		query.push(" WHERE user_id=").push_bind(user_id);

		let res = query.build().execute(db).await.map_err(map_write_err)?;
		if res.rows_affected() == 0 {
			return Err(Error::NotFound);
		}
	}

	read(db, user_id).await
}

pub(crate) async fn delete(db: &SqlitePool, user_id: &str) -> FtResult<()> {
	let res = sqlx::query("DELETE FROM users WHERE user_id=?")
		.bind(user_id)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}

	Ok(())
}

pub(crate) async fn delete_owned(db: &SqlitePool, user_id: &str, admin_email: &str) -> FtResult<()> {
	let res = sqlx::query("DELETE FROM users WHERE user_id=? AND myadmin=?")
		.bind(user_id)
		.bind(admin_email)
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
