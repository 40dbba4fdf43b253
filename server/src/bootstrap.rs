//! First-start seeding.

use fleettrack_core::{App, crypto};
use fleettrack_types::prelude::*;
use fleettrack_types::user_store::CreateUserData;
use fleettrack_user::scope::ROOT_ADMIN_EMAIL;

/// Create the root admin account if it does not exist yet. Without a
/// configured password the seed is skipped; the server still runs, but no
/// one can manage users until the account exists.
pub async fn seed_root_admin(app: &App) -> FtResult<()> {
	if app.user_store.read_user_by_email(ROOT_ADMIN_EMAIL).await.is_ok() {
		return Ok(());
	}

	let Some(password) = app.opts.root_password.clone() else {
		warn!("Root admin account missing and FLEETTRACK_ROOT_PASSWORD not set, skipping seed");
		return Ok(());
	};

	let password_hash = crypto::hash_password(&app.worker, password).await?;

	app.user_store
		.create_user(CreateUserData {
			username: "superadmin",
			email: ROOT_ADMIN_EMAIL,
			password_hash: &password_hash,
			role: Role::SuperAdmin,
			myadmin: ROOT_ADMIN_EMAIL,
			agencies: &[],
		})
		.await?;

	info!("Root admin account created");

	Ok(())
}

// vim: ts=4
