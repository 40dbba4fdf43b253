//! User handler tests against an in-memory store: duplicate-email
//! precedence on create, and password patch handling on update.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Json;
use axum::extract::{Path, State};
use serde_json::json;

use fleettrack_core::{App, AppBuilderOpts, AppState, Auth, Identity};
use fleettrack_types::driver_store::{
	CreateDriverData, DriverRecord, DriverStore, UpdateDriverData,
};
use fleettrack_types::error::{Error, FtResult};
use fleettrack_types::types::{Patch, Role, Timestamp};
use fleettrack_types::user_store::{
	CreateUserData, UpdateUserData, UserFilter, UserRecord, UserStore,
};
use fleettrack_types::vehicle_store::{
	CreateVehicleData, UpdateVehicleData, VehicleRecord, VehicleStore,
};
use fleettrack_types::worker::WorkerPool;
use fleettrack_user::handler::{self, CreateUserReq, UpdateUserReq};

#[derive(Debug, Default)]
struct MemoryUserStore {
	users: Mutex<Vec<UserRecord>>,
}

impl MemoryUserStore {
	fn seed(&self, username: &str, email: &str, password_hash: &str, role: Role, myadmin: &str) -> Box<str> {
		let mut users = self.users.lock().unwrap();
		let user_id: Box<str> = format!("u{}", users.len() + 1).into();
		users.push(UserRecord {
			user_id: user_id.clone(),
			username: username.into(),
			email: email.into(),
			password_hash: password_hash.into(),
			role,
			myadmin: myadmin.into(),
			agencies: [].into(),
			created_at: Timestamp(1700000000),
		});
		user_id
	}

	fn record(&self, user_id: &str) -> Option<UserRecord> {
		self.users.lock().unwrap().iter().find(|u| u.user_id.as_ref() == user_id).cloned()
	}
}

fn in_filter(user: &UserRecord, filter: &UserFilter<'_>) -> bool {
	match filter {
		UserFilter::All => true,
		UserFilter::AdminScope { email } => {
			user.myadmin.as_ref() == *email || user.email.as_ref() == *email
		}
		UserFilter::SelfScope { email } => user.email.as_ref() == *email,
	}
}

#[async_trait]
impl UserStore for MemoryUserStore {
	async fn create_user(&self, data: CreateUserData<'_>) -> FtResult<UserRecord> {
		let mut users = self.users.lock().unwrap();
		if users.iter().any(|u| u.email.as_ref() == data.email) {
			return Err(Error::Conflict("user already exists".into()));
		}

		let user = UserRecord {
			user_id: format!("u{}", users.len() + 1).into(),
			username: data.username.into(),
			email: data.email.into(),
			password_hash: data.password_hash.into(),
			role: data.role,
			myadmin: data.myadmin.into(),
			agencies: data.agencies.into(),
			created_at: Timestamp::now(),
		};
		users.push(user.clone());

		Ok(user)
	}

	async fn read_user(&self, user_id: &str) -> FtResult<UserRecord> {
		self.record(user_id).ok_or(Error::NotFound)
	}

	async fn read_user_by_email(&self, email: &str) -> FtResult<UserRecord> {
		self.users
			.lock()
			.unwrap()
			.iter()
			.find(|u| u.email.as_ref() == email)
			.cloned()
			.ok_or(Error::NotFound)
	}

	async fn find_user(&self, user_id: &str, filter: &UserFilter<'_>) -> FtResult<UserRecord> {
		self.users
			.lock()
			.unwrap()
			.iter()
			.find(|u| u.user_id.as_ref() == user_id && in_filter(u, filter))
			.cloned()
			.ok_or(Error::NotFound)
	}

	async fn list_users(&self, filter: &UserFilter<'_>) -> FtResult<Vec<UserRecord>> {
		Ok(self.users.lock().unwrap().iter().filter(|u| in_filter(u, filter)).cloned().collect())
	}

	async fn update_user(&self, user_id: &str, data: &UpdateUserData) -> FtResult<UserRecord> {
		let mut users = self.users.lock().unwrap();
		let user =
			users.iter_mut().find(|u| u.user_id.as_ref() == user_id).ok_or(Error::NotFound)?;

		if let Patch::Value(v) = &data.username {
			user.username = v.clone();
		}
		if let Patch::Value(v) = &data.email {
			user.email = v.clone();
		}
		if let Patch::Value(v) = &data.password_hash {
			user.password_hash = v.clone();
		}
		if let Patch::Value(v) = &data.role {
			user.role = *v;
		}
		if let Patch::Value(v) = &data.myadmin {
			user.myadmin = v.clone();
		}
		if let Patch::Value(v) = &data.agencies {
			user.agencies = v.clone();
		}

		Ok(user.clone())
	}

	async fn delete_user(&self, user_id: &str) -> FtResult<()> {
		let mut users = self.users.lock().unwrap();
		let before = users.len();
		users.retain(|u| u.user_id.as_ref() != user_id);
		if users.len() == before { Err(Error::NotFound) } else { Ok(()) }
	}

	async fn delete_user_owned(&self, user_id: &str, admin_email: &str) -> FtResult<()> {
		let mut users = self.users.lock().unwrap();
		let before = users.len();
		users.retain(|u| !(u.user_id.as_ref() == user_id && u.myadmin.as_ref() == admin_email));
		if users.len() == before { Err(Error::NotFound) } else { Ok(()) }
	}
}

#[derive(Debug)]
struct NullVehicleStore;

#[async_trait]
impl VehicleStore for NullVehicleStore {
	async fn create_vehicle(&self, _data: CreateVehicleData<'_>) -> FtResult<VehicleRecord> {
		Err(Error::NotFound)
	}

	async fn read_vehicle(&self, _vehicle_id: &str) -> FtResult<VehicleRecord> {
		Err(Error::NotFound)
	}

	async fn list_vehicles(&self) -> FtResult<Vec<VehicleRecord>> {
		Ok(Vec::new())
	}

	async fn update_vehicle(
		&self,
		_vehicle_id: &str,
		_data: &UpdateVehicleData,
	) -> FtResult<VehicleRecord> {
		Err(Error::NotFound)
	}

	async fn delete_vehicle(&self, _vehicle_id: &str) -> FtResult<()> {
		Err(Error::NotFound)
	}
}

#[derive(Debug)]
struct NullDriverStore;

#[async_trait]
impl DriverStore for NullDriverStore {
	async fn create_driver(&self, _data: CreateDriverData<'_>) -> FtResult<DriverRecord> {
		Err(Error::NotFound)
	}

	async fn read_driver(&self, _driver_id: &str) -> FtResult<DriverRecord> {
		Err(Error::NotFound)
	}

	async fn list_drivers(&self) -> FtResult<Vec<DriverRecord>> {
		Ok(Vec::new())
	}

	async fn update_driver(
		&self,
		_driver_id: &str,
		_data: &UpdateDriverData,
	) -> FtResult<DriverRecord> {
		Err(Error::NotFound)
	}

	async fn delete_driver(&self, _driver_id: &str) -> FtResult<()> {
		Err(Error::NotFound)
	}
}

fn test_app(store: Arc<MemoryUserStore>) -> App {
	Arc::new(AppState {
		opts: AppBuilderOpts {
			listen: "127.0.0.1:0".into(),
			db_dir: PathBuf::from(".").into_boxed_path(),
			jwt_secret: "test-secret".into(),
			root_password: None,
		},
		worker: Arc::new(WorkerPool::new(1, 1)),
		user_store: store,
		vehicle_store: Arc::new(NullVehicleStore),
		driver_store: Arc::new(NullDriverStore),
	})
}

fn identity(user_id: &str, email: &str, role: Role) -> Identity {
	Identity { user_id: user_id.into(), email: email.into(), role, agencies: [].into() }
}

#[tokio::test]
async fn test_duplicate_email_conflict_precedes_role_check() {
	let store = Arc::new(MemoryUserStore::default());
	store.seed("bob", "taken@x.com", "$2b$12$hash", Role::Consultant, "a@x.com");
	let app = test_app(store);

	// A consultant may create nobody, but the duplicate check runs first.
	let consultant = identity("u9", "c@x.com", Role::Consultant);
	let req: CreateUserReq = serde_json::from_value(json!({
		"username": "dup",
		"email": "taken@x.com",
		"password": "pw",
	}))
	.unwrap();
	let res = handler::post_user(State(app.clone()), Auth(consultant.clone()), Json(req)).await;
	assert!(
		matches!(res, Err(Error::Conflict(_))),
		"existing email must be a conflict before the role verdict"
	);

	// Same for an admin requesting a role it may not create.
	let admin = identity("u8", "a@x.com", Role::Admin);
	let req: CreateUserReq = serde_json::from_value(json!({
		"username": "dup2",
		"email": "taken@x.com",
		"password": "pw",
		"role": "admin",
	}))
	.unwrap();
	let res = handler::post_user(State(app.clone()), Auth(admin), Json(req)).await;
	assert!(matches!(res, Err(Error::Conflict(_))));

	// A fresh email falls through to the role verdict.
	let req: CreateUserReq = serde_json::from_value(json!({
		"username": "new",
		"email": "fresh@x.com",
		"password": "pw",
	}))
	.unwrap();
	let res = handler::post_user(State(app), Auth(consultant), Json(req)).await;
	assert!(matches!(res, Err(Error::PermissionDenied)));
}

#[tokio::test]
async fn test_update_password_is_rehashed() {
	let store = Arc::new(MemoryUserStore::default());
	let user_id = store.seed("alice", "alice@x.com", "$2b$12$original", Role::Consultant, "a@x.com");
	let app = test_app(store.clone());

	let req: UpdateUserReq = serde_json::from_value(json!({ "password": "s3cret" })).unwrap();
	handler::put_user(
		State(app),
		Auth(identity("u9", "alice@x.com", Role::Consultant)),
		Path(user_id.clone()),
		Json(req),
	)
	.await
	.expect("Should update user");

	let stored = store.record(&user_id).expect("Record should survive the update");
	assert!(
		stored.password_hash.starts_with("$2"),
		"stored password must be a bcrypt hash, got {}",
		stored.password_hash
	);
	assert_ne!(stored.password_hash.as_ref(), "s3cret");
	assert_ne!(stored.password_hash.as_ref(), "$2b$12$original");
}

#[tokio::test]
async fn test_null_password_patch_leaves_hash() {
	let store = Arc::new(MemoryUserStore::default());
	let user_id = store.seed("alice", "alice@x.com", "$2b$12$original", Role::Consultant, "a@x.com");
	let app = test_app(store.clone());

	let req: UpdateUserReq =
		serde_json::from_value(json!({ "password": null, "username": "renamed" })).unwrap();
	handler::put_user(
		State(app),
		Auth(identity("u9", "alice@x.com", Role::Consultant)),
		Path(user_id.clone()),
		Json(req),
	)
	.await
	.expect("Should update user");

	// The null patch carries no meaning; the rest of the merge still lands.
	let stored = store.record(&user_id).expect("Record should survive the update");
	assert_eq!(stored.password_hash.as_ref(), "$2b$12$original");
	assert_eq!(stored.username.as_ref(), "renamed");
}

// vim: ts=4
