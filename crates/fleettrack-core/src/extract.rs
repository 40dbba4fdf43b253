//! Custom extractors for fleettrack-specific data

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::prelude::*;

/// Caller identity resolved by the authentication gate. Immutable for the
/// duration of one request; every core function takes it as an explicit
/// parameter.
#[derive(Clone, Debug)]
pub struct Identity {
	pub user_id: Box<str>,
	pub email: Box<str>,
	pub role: Role,
	pub agencies: Box<[Box<str>]>,
}

// Auth //
//******//
/// Identity extracted from request extensions (set by the auth middleware).
#[derive(Clone, Debug)]
pub struct Auth(pub Identity);

impl<S> FromRequestParts<S> for Auth
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		if let Some(auth) = parts.extensions.get::<Auth>().cloned() {
			Ok(auth)
		} else {
			Err(Error::Unauthorized)
		}
	}
}

// vim: ts=4
