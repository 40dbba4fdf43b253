//! Bearer-token authentication gate.
//!
//! `require_auth` resolves the `Authorization` header into an [`Identity`]
//! and inserts it as a request extension; handlers receive it through the
//! [`Auth`] extractor.

const TOKEN_EXPIRE: u64 = 8; /* hours */

use axum::{
	body::Body,
	extract::State,
	http::Request,
	middleware::Next,
	response::Response,
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use std::time;

use crate::extract::{Auth, Identity};
use crate::prelude::*;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AuthClaims {
	/// User id.
	pub sub: Box<str>,
	pub email: Box<str>,
	pub r: Role,
	#[serde(default)]
	pub ag: Box<[Box<str>]>,
	pub exp: u64,
}

pub fn generate_access_token(secret: &str, identity: &Identity) -> FtResult<Box<str>> {
	let expire = time::SystemTime::now()
		.duration_since(time::UNIX_EPOCH)
		.map_err(|_| Error::Internal("system clock before epoch".into()))?
		.as_secs() + 3600 * TOKEN_EXPIRE;

	let token = jsonwebtoken::encode(
		&jsonwebtoken::Header::new(Algorithm::HS256),
		&AuthClaims {
			sub: identity.user_id.clone(),
			email: identity.email.clone(),
			r: identity.role,
			ag: identity.agencies.clone(),
			exp: expire,
		},
		&jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
	)
	.map_err(|_| Error::Internal("token signing failed".into()))?
	.into();

	Ok(token)
}

fn validate_token(secret: &str, token: &str) -> FtResult<Identity> {
	let decoding_key = DecodingKey::from_secret(secret.as_bytes());

	let token_data = decode::<AuthClaims>(token, &decoding_key, &Validation::new(Algorithm::HS256))
		.map_err(|_| Error::Unauthorized)?;

	Ok(Identity {
		user_id: token_data.claims.sub,
		email: token_data.claims.email,
		role: token_data.claims.r,
		agencies: token_data.claims.ag,
	})
}

pub async fn require_auth(
	State(app): State<App>,
	mut req: Request<Body>,
	next: Next,
) -> FtResult<Response> {
	let auth_header = req
		.headers()
		.get("Authorization")
		.and_then(|h| h.to_str().ok())
		.ok_or(Error::Unauthorized)?;

	let token = auth_header.strip_prefix("Bearer ").ok_or(Error::Unauthorized)?;
	let identity = validate_token(&app.opts.jwt_secret, token)?;

	req.extensions_mut().insert(Auth(identity));

	Ok(next.run(req).await)
}


// vim: ts=4
