//! User store tests: uniqueness, scoped reads, updates, and owned deletes.

use fleettrack::error::Error;
use fleettrack::types::{Patch, Role};
use fleettrack::user_store::{CreateUserData, UpdateUserData, UserFilter, UserStore};
use fleettrack_store_adapter_sqlite::StoreAdapterSqlite;
use tempfile::TempDir;

async fn create_store() -> (StoreAdapterSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");

	let store = StoreAdapterSqlite::new(temp_dir.path().join("store.db"))
		.await
		.expect("Failed to create store");

	(store, temp_dir)
}

fn consultant<'a>(username: &'a str, email: &'a str, myadmin: &'a str) -> CreateUserData<'a> {
	CreateUserData {
		username,
		email,
		password_hash: "$2b$12$hash",
		role: Role::Consultant,
		myadmin,
		agencies: &[],
	}
}

#[tokio::test]
async fn test_create_and_read_user() {
	let (store, _temp) = create_store().await;

	let created = store
		.create_user(consultant("alice", "alice@x.com", "admin@x.com"))
		.await
		.expect("Should create user");

	assert_eq!(created.email.as_ref(), "alice@x.com");
	assert_eq!(created.role, Role::Consultant);

	let read = store.read_user(&created.user_id).await.expect("Should read user back");
	assert_eq!(read.username.as_ref(), "alice");
	assert_eq!(read.myadmin.as_ref(), "admin@x.com");

	let by_email = store.read_user_by_email("alice@x.com").await.expect("Should read by email");
	assert_eq!(by_email.user_id, created.user_id);
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
	let (store, _temp) = create_store().await;

	store
		.create_user(consultant("alice", "alice@x.com", "admin@x.com"))
		.await
		.expect("Should create user");

	let res = store.create_user(consultant("alice2", "alice@x.com", "other@x.com")).await;

	assert!(
		matches!(res, Err(Error::Conflict(_))),
		"Duplicate email should be a conflict, got {:?}",
		res
	);
}

#[tokio::test]
async fn test_list_users_scoping() {
	let (store, _temp) = create_store().await;

	let agencies: [Box<str>; 1] = ["ag1".into()];
	let admin = CreateUserData {
		username: "admin",
		email: "a@x.com",
		password_hash: "$2b$12$hash",
		role: Role::Admin,
		myadmin: "root@x.com",
		agencies: &agencies,
	};
	store.create_user(admin).await.expect("Should create admin");
	store
		.create_user(consultant("c1", "c1@x.com", "a@x.com"))
		.await
		.expect("Should create c1");
	store
		.create_user(consultant("c2", "c2@x.com", "other@x.com"))
		.await
		.expect("Should create c2");

	let all = store.list_users(&UserFilter::All).await.expect("Should list all");
	assert_eq!(all.len(), 3);

	// Admin sees their own record plus the records they own.
	let scoped = store
		.list_users(&UserFilter::AdminScope { email: "a@x.com" })
		.await
		.expect("Should list scoped");
	let mut emails: Vec<&str> = scoped.iter().map(|u| u.email.as_ref()).collect();
	emails.sort();
	assert_eq!(emails, ["a@x.com", "c1@x.com"]);

	let own = store
		.list_users(&UserFilter::SelfScope { email: "c2@x.com" })
		.await
		.expect("Should list self scope");
	assert_eq!(own.len(), 1);
	assert_eq!(own[0].email.as_ref(), "c2@x.com");
}

#[tokio::test]
async fn test_find_user_masks_out_of_scope() {
	let (store, _temp) = create_store().await;

	let c2 = store
		.create_user(consultant("c2", "c2@x.com", "other@x.com"))
		.await
		.expect("Should create c2");

	// Visible without a scope restriction.
	assert!(store.find_user(&c2.user_id, &UserFilter::All).await.is_ok());

	// Same id outside the admin's scope reads as NotFound.
	let res = store.find_user(&c2.user_id, &UserFilter::AdminScope { email: "a@x.com" }).await;
	assert!(matches!(res, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_update_user_merges() {
	let (store, _temp) = create_store().await;

	let created = store
		.create_user(consultant("alice", "alice@x.com", "admin@x.com"))
		.await
		.expect("Should create user");

	let updated = store
		.update_user(
			&created.user_id,
			&UpdateUserData {
				username: Patch::Value("alicia".into()),
				role: Patch::Value(Role::Admin),
				agencies: Patch::Value(["ag9".into()].into()),
				..Default::default()
			},
		)
		.await
		.expect("Should update user");

	assert_eq!(updated.username.as_ref(), "alicia");
	assert_eq!(updated.role, Role::Admin);
	assert_eq!(updated.agencies.len(), 1);
	// Untouched fields survive the merge.
	assert_eq!(updated.email.as_ref(), "alice@x.com");
	assert_eq!(updated.myadmin.as_ref(), "admin@x.com");
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
	let (store, _temp) = create_store().await;

	let res = store
		.update_user(
			"missing",
			&UpdateUserData { username: Patch::Value("x".into()), ..Default::default() },
		)
		.await;

	assert!(matches!(res, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_delete_user_owned() {
	let (store, _temp) = create_store().await;

	let owned = store
		.create_user(consultant("c1", "c1@x.com", "a@x.com"))
		.await
		.expect("Should create c1");
	let foreign = store
		.create_user(consultant("c2", "c2@x.com", "other@x.com"))
		.await
		.expect("Should create c2");

	// Ownership mismatch reads as NotFound and deletes nothing.
	let res = store.delete_user_owned(&foreign.user_id, "a@x.com").await;
	assert!(matches!(res, Err(Error::NotFound)));
	assert!(store.read_user(&foreign.user_id).await.is_ok());

	store.delete_user_owned(&owned.user_id, "a@x.com").await.expect("Should delete owned user");
	assert!(matches!(
		store.read_user(&owned.user_id).await,
		Err(Error::NotFound)
	));
}

// vim: ts=4
