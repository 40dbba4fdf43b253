//! Error taxonomy shared by the server, the feature crates, and the store
//! adapters.
//!
//! `NotFound` covers both a truly absent record and one that exists outside
//! the caller's scope; the boundary never distinguishes the two.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub type FtResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Missing record, or a record outside the caller's visibility scope.
	NotFound,
	/// Role or ownership denial.
	PermissionDenied,
	/// Missing or invalid bearer credential.
	Unauthorized,
	/// Unique-key violation. The store index is the authoritative guard;
	/// application-level pre-checks only produce this earlier.
	Conflict(Box<str>),
	ValidationError(String),
	DbError,
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::PermissionDenied => write!(f, "access denied"),
			Error::Unauthorized => write!(f, "authentication required"),
			Error::Conflict(msg) => write!(f, "{}", msg),
			Error::ValidationError(msg) => write!(f, "{}", msg),
			Error::DbError => write!(f, "database error"),
			Error::Internal(msg) => write!(f, "{}", msg),
			Error::Io(err) => write!(f, "{}", err),
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let status = match self {
			Error::NotFound => StatusCode::NOT_FOUND,
			Error::PermissionDenied => StatusCode::FORBIDDEN,
			Error::Unauthorized => StatusCode::UNAUTHORIZED,
			Error::Conflict(_) | Error::ValidationError(_) => StatusCode::BAD_REQUEST,
			Error::DbError | Error::Internal(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
		};

		(status, Json(json!({ "message": self.to_string() }))).into_response()
	}
}


// vim: ts=4
