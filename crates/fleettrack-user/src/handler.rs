//! User lifecycle handlers.
//!
//! Thin adapters over the scoping engine in [`crate::scope`]: each handler
//! computes a verdict or filter, then drives the store. The store's unique
//! index on `email` is the authoritative duplicate guard; the pre-check in
//! `post_user` only buys an early error.

use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};
use serde::{Deserialize, Serialize};

use fleettrack_core::crypto;
use fleettrack_types::user_store::{CreateUserData, UpdateUserData, UserView};

use crate::prelude::*;
use crate::scope::{self, CreateScope, DeleteDenial, DeleteMode};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserReq {
	username: Box<str>,
	email: Box<str>,
	password: Box<str>,
	#[serde(default)]
	role: Role,
	#[serde(default)]
	myadmin: Option<Box<str>>,
	#[serde(default)]
	agencies: Box<[Box<str>]>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserReq {
	#[serde(default)]
	username: Patch<Box<str>>,
	#[serde(default)]
	email: Patch<Box<str>>,
	#[serde(default)]
	password: Patch<Box<str>>,
	#[serde(default)]
	role: Patch<Role>,
	#[serde(default)]
	myadmin: Patch<Box<str>>,
	#[serde(default)]
	agencies: Patch<Box<[Box<str>]>>,
}

#[derive(Debug, Serialize)]
pub struct MessageRes {
	pub message: Box<str>,
}

pub async fn post_user(
	State(app): State<App>,
	Auth(identity): Auth,
	Json(req): Json<CreateUserReq>,
) -> FtResult<(StatusCode, Json<ApiResponse<UserView>>)> {
	// Duplicate check runs before any role logic.
	if app.user_store.read_user_by_email(&req.email).await.is_ok() {
		return Err(Error::Conflict("user already exists".into()));
	}

	let (myadmin, agencies): (&str, &[Box<str>]) = match scope::authorize_create(&identity, req.role)? {
		CreateScope::Inherited { myadmin, agencies } => (myadmin, agencies),
		CreateScope::Verbatim => {
			let myadmin = req
				.myadmin
				.as_deref()
				.ok_or_else(|| Error::ValidationError("myadmin is required".into()))?;
			(myadmin, &req.agencies)
		}
	};

	let password_hash = crypto::hash_password(&app.worker, req.password.clone()).await?;

	let user = app
		.user_store
		.create_user(CreateUserData {
			username: &req.username,
			email: &req.email,
			password_hash: &password_hash,
			role: req.role,
			myadmin,
			agencies,
		})
		.await?;

	info!(email = %user.email, role = %user.role, creator = %identity.email, "user created");

	Ok((
		StatusCode::OK,
		Json(ApiResponse::new(UserView::from(user)).with_message("user created successfully")),
	))
}

pub async fn get_users(
	State(app): State<App>,
	Auth(identity): Auth,
) -> FtResult<Json<Vec<UserView>>> {
	let filter = scope::visible_users(&identity);
	let users = app.user_store.list_users(&filter).await?;

	Ok(Json(users.into_iter().map(UserView::from).collect()))
}

pub async fn get_user(
	State(app): State<App>,
	Auth(identity): Auth,
	Path(user_id): Path<Box<str>>,
) -> FtResult<Json<UserView>> {
	let filter = scope::visible_users(&identity);
	let user = app.user_store.find_user(&user_id, &filter).await?;

	Ok(Json(user.into()))
}

pub async fn put_user(
	State(app): State<App>,
	Auth(identity): Auth,
	Path(user_id): Path<Box<str>>,
	Json(req): Json<UpdateUserReq>,
) -> FtResult<(StatusCode, Json<ApiResponse<UserView>>)> {
	let target = app.user_store.read_user(&user_id).await?;

	let touches_email_or_role = !req.email.is_undefined() || !req.role.is_undefined();
	scope::authorize_update(&identity, &target, touches_email_or_role)?;

	// A null password patch carries no meaning; treat it as absent.
	let password_hash = match req.password {
		Patch::Value(password) => Patch::Value(crypto::hash_password(&app.worker, password).await?),
		_ => Patch::Undefined,
	};

	let user = app
		.user_store
		.update_user(
			&user_id,
			&UpdateUserData {
				username: req.username,
				email: req.email,
				password_hash,
				role: req.role,
				myadmin: req.myadmin,
				agencies: req.agencies,
			},
		)
		.await?;

	info!(target = %user.email, subject = %identity.email, "user updated");

	Ok((
		StatusCode::OK,
		Json(ApiResponse::new(UserView::from(user)).with_message("user updated successfully")),
	))
}

pub async fn delete_user(
	State(app): State<App>,
	Auth(identity): Auth,
	Path(user_id): Path<Box<str>>,
) -> FtResult<Json<MessageRes>> {
	let target = app.user_store.read_user(&user_id).await?;

	match scope::authorize_delete(&identity, &target)? {
		DeleteMode::Unconditional => app.user_store.delete_user(&user_id).await?,
		DeleteMode::Owned => {
			if target.myadmin != identity.email {
				warn!(
					subject = %identity.email,
					target = %target.email,
					denial = ?DeleteDenial::NotOwned,
					"user delete masked as not found"
				);
				return Err(Error::NotFound);
			}
			// The owned delete re-checks myadmin in the store, so a
			// concurrent ownership change cannot slip through.
			app.user_store.delete_user_owned(&user_id, &identity.email).await?
		}
	}

	info!(target = %target.email, subject = %identity.email, "user deleted");

	Ok(Json(MessageRes { message: "user deleted successfully".into() }))
}

// vim: ts=4
