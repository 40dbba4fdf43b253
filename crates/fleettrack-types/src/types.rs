//! Common types used throughout the fleettrack backend.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

// Timestamp //
//***********//
/// Unix timestamp in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub i64);

impl Timestamp {
	pub fn now() -> Timestamp {
		let res = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
		Timestamp(res.as_secs() as i64)
	}
}

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for Timestamp {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for Timestamp {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Timestamp(i64::deserialize(deserializer)?))
	}
}

// Role //
//******//
/// Closed role set. Every permission decision in the user subsystem matches
/// on this enum; handlers never compare role strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	SuperAdmin,
	Admin,
	#[default]
	Consultant,
}

impl Role {
	pub fn as_str(&self) -> &'static str {
		match self {
			Role::SuperAdmin => "superadmin",
			Role::Admin => "admin",
			Role::Consultant => "consultant",
		}
	}

	pub fn parse(s: &str) -> Option<Role> {
		match s {
			"superadmin" => Some(Role::SuperAdmin),
			"admin" => Some(Role::Admin),
			"consultant" => Some(Role::Consultant),
			_ => None,
		}
	}
}

impl std::fmt::Display for Role {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

// Patch //
//*******//
/// Three-state update field: distinguishes a field absent from the request
/// (`Undefined`), an explicit `null`, and a new value. Used for the
/// merge-style update operations.
#[derive(Clone, Debug, PartialEq)]
pub enum Patch<T> {
	Undefined,
	Null,
	Value(T),
}

impl<T> Patch<T> {
	pub fn is_undefined(&self) -> bool {
		matches!(self, Patch::Undefined)
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Patch::Null)
	}

	pub fn is_value(&self) -> bool {
		matches!(self, Patch::Value(_))
	}

	pub fn value(&self) -> Option<&T> {
		match self {
			Patch::Value(v) => Some(v),
			_ => None,
		}
	}

	/// `None` for `Undefined`, `Some(None)` for `Null`, `Some(Some(_))` for a value.
	pub fn as_option(&self) -> Option<Option<&T>> {
		match self {
			Patch::Undefined => None,
			Patch::Null => Some(None),
			Patch::Value(v) => Some(Some(v)),
		}
	}

	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Patch<U> {
		match self {
			Patch::Undefined => Patch::Undefined,
			Patch::Null => Patch::Null,
			Patch::Value(v) => Patch::Value(f(v)),
		}
	}
}

impl<T> Default for Patch<T> {
	fn default() -> Self {
		Patch::Undefined
	}
}

impl<T: Serialize> Serialize for Patch<T> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		match self {
			Patch::Value(v) => v.serialize(serializer),
			_ => serializer.serialize_none(),
		}
	}
}

/// Fields annotated `#[serde(default)]` deserialize to `Undefined` when
/// absent; an explicit `null` becomes `Null`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(match Option::<T>::deserialize(deserializer)? {
			Some(v) => Patch::Value(v),
			None => Patch::Null,
		})
	}
}

// ApiResponse //
//*************//
/// Success envelope for mutating operations: the document itself, flattened,
/// plus a human-readable message.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
	#[serde(flatten)]
	pub data: T,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<Box<str>>,
}

impl<T> ApiResponse<T> {
	pub fn new(data: T) -> Self {
		ApiResponse { data, message: None }
	}

	pub fn with_message(mut self, message: impl Into<Box<str>>) -> Self {
		self.message = Some(message.into());
		self
	}
}


// vim: ts=4
