//! Shared helpers for the SQLite adapter: error mapping and the `push_patch!`
//! macro used by the dynamic UPDATE builders.

use fleettrack::prelude::*;
use sqlx::sqlite::SqliteRow;

/// Apply one `Patch` field to a dynamic UPDATE query.
/// Returns the new `has_updates` value.
macro_rules! push_patch {
	// Bindable values (strings, numbers, bools)
	($query:expr, $has_updates:expr, $field:literal, $patch:expr) => {{
		match $patch {
			Patch::Undefined => $has_updates,
			Patch::Null => {
				if $has_updates {
					$query.push(", ");
				}
				$query.push(concat!($field, "=NULL"));
				true
			}
			Patch::Value(v) => {
				if $has_updates {
					$query.push(", ");
				}
				$query.push(concat!($field, "=")).push_bind(v);
				true
			}
		}
	}};
	// Values that need conversion before binding
	($query:expr, $has_updates:expr, $field:literal, $patch:expr, |$v:ident| $convert:expr) => {{
		match $patch {
			Patch::Undefined => $has_updates,
			Patch::Null => {
				if $has_updates {
					$query.push(", ");
				}
				$query.push(concat!($field, "=NULL"));
				true
			}
			Patch::Value($v) => {
				if $has_updates {
					$query.push(", ");
				}
				$query.push(concat!($field, "=")).push_bind($convert);
				true
			}
		}
	}};
}

pub(crate) use push_patch;

/// Log database error for debugging
pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Map a single-row query result, translating SQL errors
pub(crate) fn map_res<T, F>(row: Result<SqliteRow, sqlx::Error>, f: F) -> FtResult<T>
where
	F: FnOnce(SqliteRow) -> FtResult<T>,
{
	match row {
		Ok(row) => f(row),
		Err(sqlx::Error::RowNotFound) => Err(Error::NotFound),
		Err(err) => {
			inspect(&err);
			Err(Error::DbError)
		}
	}
}

/// Map a write error. Unique-index violations become `Conflict` (the indexes
/// are the authoritative duplicate guards); NOT NULL and CHECK violations
/// become `ValidationError` with the raw constraint message.
pub(crate) fn map_write_err(err: sqlx::Error) -> Error {
	if let sqlx::Error::Database(db) = &err {
		match db.kind() {
			sqlx::error::ErrorKind::UniqueViolation => return Error::Conflict(db.message().into()),
			sqlx::error::ErrorKind::NotNullViolation | sqlx::error::ErrorKind::CheckViolation => {
				return Error::ValidationError(db.message().into());
			}
			_ => {}
		}
	}
	inspect(&err);
	Error::DbError
}

// vim: ts=4
