//! Router assembly.
//!
//! Users sit behind the bearer gate; driver writes additionally require an
//! admin-grade role; vehicle routes carry no gate at all, matching the
//! deliberate asymmetry with the user collection.

use axum::{
	Router,
	extract::DefaultBodyLimit,
	middleware,
	routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use fleettrack_core::{App, perm::require_admin, route_auth::require_auth};
use fleettrack_driver::handler as driver;
use fleettrack_user::{auth, handler as user};
use fleettrack_vehicle::handler as vehicle;

pub fn init(app: App) -> Router {
	let user_router = Router::new()
		.route("/api/users", post(user::post_user).get(user::get_users))
		.route(
			"/api/users/{id}",
			get(user::get_user).put(user::put_user).delete(user::delete_user),
		)
		.layer(middleware::from_fn_with_state(app.clone(), require_auth));

	let driver_read_router = Router::new()
		.route("/api/drivers", get(driver::get_drivers))
		.route("/api/drivers/{id}", get(driver::get_driver));

	let driver_write_router = Router::new()
		.route("/api/drivers", post(driver::post_driver))
		.route("/api/drivers/{id}", put(driver::put_driver).delete(driver::delete_driver))
		.layer(middleware::from_fn(require_admin));

	let driver_router = driver_read_router
		.merge(driver_write_router)
		.layer(middleware::from_fn_with_state(app.clone(), require_auth));

	let vehicle_router = Router::new()
		.route("/api/vehicles", get(vehicle::get_vehicles).post(vehicle::post_vehicle))
		.route(
			"/api/vehicles/{id}",
			get(vehicle::get_vehicle).put(vehicle::put_vehicle).delete(vehicle::delete_vehicle),
		);

	let public_router = Router::new().route("/api/session/login", post(auth::post_login));

	Router::new()
		.merge(public_router)
		.merge(user_router)
		.merge(driver_router)
		.merge(vehicle_router)
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::permissive())
		.layer(DefaultBodyLimit::max(50 * 1024 * 1024))
		.with_state(app)
}

// vim: ts=4
