//! Authorization and scoping decisions for the user collection.
//!
//! Every function here is pure: it takes the caller [`Identity`] and the
//! relevant target data, and returns either a verdict or a filter. Handlers
//! own the store calls; nothing in this module touches persisted state.

use fleettrack_types::user_store::{UserFilter, UserRecord};

use crate::prelude::*;

/// The one privileged account. Seeded at bootstrap, immutable except by the
/// holder of this email, never deletable.
pub const ROOT_ADMIN_EMAIL: &str = "trackingemkatech@gmail.com";

pub fn is_root_admin(user: &UserRecord) -> bool {
	user.role == Role::SuperAdmin && user.email.as_ref() == ROOT_ADMIN_EMAIL
}

/// Visibility filter for list and get-by-id. Total over the role enum, so
/// there is no "unknown role" arm to deny.
pub fn visible_users(identity: &Identity) -> UserFilter<'_> {
	match identity.role {
		Role::SuperAdmin => UserFilter::All,
		Role::Admin => UserFilter::AdminScope { email: &identity.email },
		Role::Consultant => UserFilter::SelfScope { email: &identity.email },
	}
}

/// How the ownership fields of a new user are determined.
#[derive(Clone, Debug, PartialEq)]
pub enum CreateScope<'a> {
	/// Admin caller: `myadmin` and `agencies` come from the caller, the
	/// payload values are ignored.
	Inherited { myadmin: &'a str, agencies: &'a [Box<str>] },
	/// Superadmin caller: payload values are taken verbatim.
	Verbatim,
}

/// Create verdict. Admins may only spawn consultants scoped to themselves;
/// consultants may not create anyone.
pub fn authorize_create(identity: &Identity, requested_role: Role) -> FtResult<CreateScope<'_>> {
	match identity.role {
		Role::SuperAdmin => Ok(CreateScope::Verbatim),
		Role::Admin if requested_role == Role::Consultant => Ok(CreateScope::Inherited {
			myadmin: &identity.email,
			agencies: &identity.agencies,
		}),
		Role::Admin => Err(Error::PermissionDenied),
		Role::Consultant => Err(Error::PermissionDenied),
	}
}

/// Update verdict. The root admin record may only be touched by the holder
/// of that email, and its `email` and `role` never change. Any other target
/// is open to any authenticated caller, matching the read/update asymmetry
/// of the original access model.
pub fn authorize_update(
	identity: &Identity,
	target: &UserRecord,
	touches_email_or_role: bool,
) -> FtResult<()> {
	if is_root_admin(target) {
		if identity.email.as_ref() != ROOT_ADMIN_EMAIL {
			return Err(Error::PermissionDenied);
		}
		if touches_email_or_role {
			return Err(Error::PermissionDenied);
		}
	}

	Ok(())
}

/// How a permitted delete is executed against the store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeleteMode {
	/// Superadmin: delete by id, no ownership constraint.
	Unconditional,
	/// Admin: delete only records whose `myadmin` is the caller's email.
	Owned,
}

/// Why an admin-scoped delete came back empty. The boundary collapses both
/// to `NotFound`; logging keeps them apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeleteDenial {
	Absent,
	NotOwned,
}

pub fn authorize_delete(identity: &Identity, target: &UserRecord) -> FtResult<DeleteMode> {
	if is_root_admin(target) {
		return Err(Error::PermissionDenied);
	}

	match identity.role {
		Role::SuperAdmin => Ok(DeleteMode::Unconditional),
		Role::Admin => {
			// No self-deletion, even though the ownership check would pass.
			if identity.user_id == target.user_id {
				return Err(Error::PermissionDenied);
			}
			Ok(DeleteMode::Owned)
		}
		Role::Consultant => Err(Error::PermissionDenied),
	}
}


// vim: ts=4
