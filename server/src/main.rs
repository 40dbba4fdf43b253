//! fleettrack server binary.
//!
//! Wires the SQLite store adapter into the app state, seeds the root admin
//! account, and serves the REST API.

use std::{env, path::PathBuf, sync::Arc};

use fleettrack_core::{App, AppBuilderOpts, AppState};
use fleettrack_store_adapter_sqlite::StoreAdapterSqlite;
use fleettrack_types::prelude::*;
use fleettrack_types::worker::WorkerPool;

mod bootstrap;
mod routes;

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.init();

	if let Err(err) = run().await {
		error!("fatal: {}", err);
		std::process::exit(1);
	}
}

async fn run() -> FtResult<()> {
	let opts = AppBuilderOpts {
		listen: env::var("FLEETTRACK_LISTEN").unwrap_or_else(|_| "127.0.0.1:8080".into()).into(),
		db_dir: PathBuf::from(env::var("FLEETTRACK_DB_DIR").unwrap_or_else(|_| "./data".into()))
			.into(),
		jwt_secret: env::var("FLEETTRACK_JWT_SECRET")
			.map_err(|_| Error::Internal("FLEETTRACK_JWT_SECRET is not set".into()))?
			.into(),
		root_password: env::var("FLEETTRACK_ROOT_PASSWORD").ok().map(Into::into),
	};

	tokio::fs::create_dir_all(&opts.db_dir).await?;

	let store = Arc::new(StoreAdapterSqlite::new(opts.db_dir.join("fleettrack.db")).await?);
	let worker = Arc::new(WorkerPool::new(2, 2));

	let listen = opts.listen.clone();
	let app: App = Arc::new(AppState {
		opts,
		worker,
		user_store: store.clone(),
		vehicle_store: store.clone(),
		driver_store: store,
	});

	bootstrap::seed_root_admin(&app).await?;

	let router = routes::init(app);

	info!("fleettrack {} listening on {}", fleettrack_core::app::VERSION, listen);
	let listener = tokio::net::TcpListener::bind(listen.as_ref()).await?;
	axum::serve(listener, router).await?;

	Ok(())
}

// vim: ts=4
