//! Driver store tests.

use fleettrack::driver_store::{CreateDriverData, DriverStore, UpdateDriverData};
use fleettrack::error::Error;
use fleettrack::types::Patch;
use fleettrack_store_adapter_sqlite::StoreAdapterSqlite;
use tempfile::TempDir;

async fn create_store() -> (StoreAdapterSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");

	let store = StoreAdapterSqlite::new(temp_dir.path().join("store.db"))
		.await
		.expect("Failed to create store");

	(store, temp_dir)
}

fn driver<'a>(username: &'a str, email: &'a str, cin: &'a str) -> CreateDriverData<'a> {
	CreateDriverData { username, email, cin_number: cin, phone_number: "555-0100" }
}

#[tokio::test]
async fn test_create_and_read_driver() {
	let (store, _temp) = create_store().await;

	let created = store
		.create_driver(driver("driss", "driss@x.com", "AB123456"))
		.await
		.expect("Should create driver");

	let read = store.read_driver(&created.driver_id).await.expect("Should read driver");
	assert_eq!(read.email.as_ref(), "driss@x.com");
	assert_eq!(read.cin_number.as_ref(), "AB123456");
}

#[tokio::test]
async fn test_duplicate_email_and_cin_are_conflicts() {
	let (store, _temp) = create_store().await;

	store
		.create_driver(driver("driss", "driss@x.com", "AB123456"))
		.await
		.expect("Should create driver");

	let dup_email = store.create_driver(driver("other", "driss@x.com", "CD789012")).await;
	assert!(matches!(dup_email, Err(Error::Conflict(_))));

	let dup_cin = store.create_driver(driver("other", "other@x.com", "AB123456")).await;
	assert!(matches!(dup_cin, Err(Error::Conflict(_))));
}

#[tokio::test]
async fn test_update_driver() {
	let (store, _temp) = create_store().await;

	let created = store
		.create_driver(driver("driss", "driss@x.com", "AB123456"))
		.await
		.expect("Should create driver");

	let updated = store
		.update_driver(
			&created.driver_id,
			&UpdateDriverData {
				phone_number: Patch::Value("555-0199".into()),
				..Default::default()
			},
		)
		.await
		.expect("Should update driver");

	assert_eq!(updated.phone_number.as_ref(), "555-0199");
	assert_eq!(updated.email.as_ref(), "driss@x.com");
}

#[tokio::test]
async fn test_delete_driver() {
	let (store, _temp) = create_store().await;

	let created = store
		.create_driver(driver("driss", "driss@x.com", "AB123456"))
		.await
		.expect("Should create driver");

	store.delete_driver(&created.driver_id).await.expect("Should delete driver");

	let res = store.read_driver(&created.driver_id).await;
	assert!(matches!(res, Err(Error::NotFound)));

	let res = store.delete_driver(&created.driver_id).await;
	assert!(matches!(res, Err(Error::NotFound)));
}

// vim: ts=4
