//! Opaque user identity and display-name lookup.
//!
//! Gantry never issues or verifies credentials; authentication happens
//! upstream. The core only needs an opaque user identifier for ownership
//! scoping, plus a read-only directory lookup so todo listings can be
//! enriched with the owner's display name.

pub mod adapters;
pub mod domain;
pub mod ports;

pub use domain::{ParseUserIdError, UserId, UserProfile};
pub use ports::{UserDirectory, UserDirectoryError, UserDirectoryResult};
