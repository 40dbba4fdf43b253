//! Adapter trait for the user collection.
//!
//! The scoping engine computes a [`UserFilter`] per caller; the adapter owns
//! the translation of that filter into queries. A record outside the filter
//! is indistinguishable from a missing one at this boundary.

use async_trait::async_trait;
use serde::Serialize;
use serde_with::skip_serializing_none;
use std::fmt::Debug;

use crate::prelude::*;

/// Stored user record. Carries the password hash, so it never serializes;
/// responses are built from [`UserView`].
#[derive(Clone, Debug)]
pub struct UserRecord {
	pub user_id: Box<str>,
	pub username: Box<str>,
	pub email: Box<str>,
	pub password_hash: Box<str>,
	pub role: Role,
	/// Email of the administrator owning this account.
	pub myadmin: Box<str>,
	pub agencies: Box<[Box<str>]>,
	pub created_at: Timestamp,
}

/// Serializable projection of a user. There is no password field at all, so
/// no response can leak a hash.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
	pub user_id: Box<str>,
	pub username: Box<str>,
	pub email: Box<str>,
	pub role: Role,
	pub myadmin: Box<str>,
	pub agencies: Box<[Box<str>]>,
	pub created_at: Timestamp,
}

impl From<UserRecord> for UserView {
	fn from(user: UserRecord) -> Self {
		UserView {
			user_id: user.user_id,
			username: user.username,
			email: user.email,
			role: user.role,
			myadmin: user.myadmin,
			agencies: user.agencies,
			created_at: user.created_at,
		}
	}
}

/// Data needed to create a new user. The password is hashed before it
/// reaches the store.
#[derive(Debug)]
pub struct CreateUserData<'a> {
	pub username: &'a str,
	pub email: &'a str,
	pub password_hash: &'a str,
	pub role: Role,
	pub myadmin: &'a str,
	pub agencies: &'a [Box<str>],
}

/// Merge-style update of a user record.
#[derive(Debug, Default)]
pub struct UpdateUserData {
	pub username: Patch<Box<str>>,
	pub email: Patch<Box<str>>,
	pub password_hash: Patch<Box<str>>,
	pub role: Patch<Role>,
	pub myadmin: Patch<Box<str>>,
	pub agencies: Patch<Box<[Box<str>]>>,
}

/// Visibility filter over the user collection, computed per caller by the
/// scoping engine.
#[derive(Clone, Debug, PartialEq)]
pub enum UserFilter<'a> {
	/// Every record.
	All,
	/// Records owned by this admin (`myadmin` match), plus the admin's own.
	AdminScope { email: &'a str },
	/// The caller's own record only.
	SelfScope { email: &'a str },
}

/// Persistence for the user collection.
///
/// The unique index on `email` is the authoritative duplicate guard:
/// implementations must surface a unique violation as [`Error::Conflict`].
#[async_trait]
pub trait UserStore: Debug + Send + Sync {
	async fn create_user(&self, data: CreateUserData<'_>) -> FtResult<UserRecord>;

	/// Unscoped read by id, for ownership checks before mutations.
	async fn read_user(&self, user_id: &str) -> FtResult<UserRecord>;

	async fn read_user_by_email(&self, email: &str) -> FtResult<UserRecord>;

	/// Scoped read by id; a record outside the filter reads as `NotFound`.
	async fn find_user(&self, user_id: &str, filter: &UserFilter<'_>) -> FtResult<UserRecord>;

	async fn list_users(&self, filter: &UserFilter<'_>) -> FtResult<Vec<UserRecord>>;

	async fn update_user(&self, user_id: &str, data: &UpdateUserData) -> FtResult<UserRecord>;

	async fn delete_user(&self, user_id: &str) -> FtResult<()>;

	/// Deletes only when the record's `myadmin` matches; a non-matching
	/// owner reads as `NotFound`.
	async fn delete_user_owned(&self, user_id: &str, admin_email: &str) -> FtResult<()>;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_user_view_has_no_password() {
		let view = UserView::from(UserRecord {
			user_id: "u1".into(),
			username: "alice".into(),
			email: "alice@example.com".into(),
			password_hash: "$2b$12$secret".into(),
			role: Role::Admin,
			myadmin: "root@example.com".into(),
			agencies: ["ag1".into()].into(),
			created_at: Timestamp(1700000000),
		});

		let json = serde_json::to_value(&view).unwrap();
		assert!(json.get("password").is_none());
		assert!(json.get("passwordHash").is_none());
		assert_eq!(json["email"], "alice@example.com");
		assert_eq!(json["role"], "admin");
	}
}

// vim: ts=4
