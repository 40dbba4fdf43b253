//! App state type

use std::{path::Path, sync::Arc};

use fleettrack_types::driver_store::DriverStore;
use fleettrack_types::user_store::UserStore;
use fleettrack_types::vehicle_store::VehicleStore;
use fleettrack_types::worker::WorkerPool;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,
	pub worker: Arc<WorkerPool>,

	pub user_store: Arc<dyn UserStore>,
	pub vehicle_store: Arc<dyn VehicleStore>,
	pub driver_store: Arc<dyn DriverStore>,
}

pub type App = Arc<AppState>;

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
	pub db_dir: Box<Path>,
	pub jwt_secret: Box<str>,
	/// Initial password for the seeded root admin account. Seeding is
	/// skipped when unset and the account does not exist yet.
	pub root_password: Option<Box<str>>,
}

// vim: ts=4
