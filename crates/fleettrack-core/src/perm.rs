//! Role middleware

use axum::{
	extract::Request,
	middleware::Next,
	response::Response,
};

use crate::extract::Auth;
use crate::prelude::*;

/// Middleware that checks if the current user holds an admin-grade role.
///
/// Runs after `require_auth`, so the identity is already in the request
/// extensions.
pub async fn require_admin(Auth(identity): Auth, req: Request, next: Next) -> Result<Response, Error> {
	if !matches!(identity.role, Role::Admin | Role::SuperAdmin) {
		warn!(
			subject = %identity.email,
			role = ?identity.role,
			"Permission denied - admin role required"
		);
		return Err(Error::PermissionDenied);
	}

	Ok(next.run(req).await)
}

// vim: ts=4
