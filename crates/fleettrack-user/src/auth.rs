//! Login endpoint.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use fleettrack_core::{crypto, route_auth};
use fleettrack_types::user_store::UserView;

use crate::prelude::*;

#[derive(Debug, Deserialize)]
pub struct LoginReq {
	email: Box<str>,
	password: Box<str>,
}

#[derive(Debug, Serialize)]
pub struct Login {
	pub token: Box<str>,
	#[serde(flatten)]
	pub user: UserView,
}

/// POST /api/session/login
///
/// Both unknown email and wrong password take the slow path, so response
/// timing does not reveal which one failed.
pub async fn post_login(
	State(app): State<App>,
	Json(req): Json<LoginReq>,
) -> FtResult<Json<Login>> {
	let user = match app.user_store.read_user_by_email(&req.email).await {
		Ok(user) => user,
		Err(_) => {
			tokio::time::sleep(Duration::from_secs(1)).await;
			warn!(email = %req.email, "login failed, unknown email");
			return Err(Error::PermissionDenied);
		}
	};

	if crypto::check_password(&app.worker, req.password, user.password_hash.clone()).await.is_err() {
		tokio::time::sleep(Duration::from_secs(1)).await;
		warn!(email = %user.email, "login failed, bad password");
		return Err(Error::PermissionDenied);
	}

	let identity = Identity {
		user_id: user.user_id.clone(),
		email: user.email.clone(),
		role: user.role,
		agencies: user.agencies.clone(),
	};
	let token = route_auth::generate_access_token(&app.opts.jwt_secret, &identity)?;

	info!(email = %user.email, role = %user.role, "login");

	Ok(Json(Login { token, user: user.into() }))
}

// vim: ts=4
