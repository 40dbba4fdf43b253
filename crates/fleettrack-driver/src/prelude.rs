pub use fleettrack_core::App;
pub use fleettrack_types::error::{Error, FtResult};
pub use fleettrack_types::types::{ApiResponse, Patch, Timestamp};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
