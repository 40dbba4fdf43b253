//! Credential hashing, offloaded to the worker pool.

const BCRYPT_COST: u32 = 12;

use fleettrack_types::worker::WorkerPool;

use crate::prelude::*;

fn hash_password_sync(password: Box<str>) -> FtResult<Box<str>> {
	// A hashing fault is an infrastructure error, not a denial.
	let hash = bcrypt::hash(password.as_ref(), BCRYPT_COST)
		.map_err(|_| Error::Internal("password hashing failed".into()))?;

	Ok(hash.into())
}

pub async fn hash_password(worker: &WorkerPool, password: Box<str>) -> FtResult<Box<str>> {
	worker.try_run_immed(move || hash_password_sync(password)).await
}

fn check_password_sync(password: Box<str>, password_hash: Box<str>) -> FtResult<()> {
	let res =
		bcrypt::verify(password.as_ref(), &password_hash).map_err(|_| Error::PermissionDenied)?;
	if !res {
		Err(Error::PermissionDenied)
	} else {
		Ok(())
	}
}

/// Verify a password against a stored hash. Returns `PermissionDenied` on
/// mismatch; the caller decides how to surface the failure.
pub async fn check_password(
	worker: &WorkerPool,
	password: Box<str>,
	password_hash: Box<str>,
) -> FtResult<()> {
	worker.try_run_immed(move || check_password_sync(password, password_hash)).await
}


// vim: ts=4
