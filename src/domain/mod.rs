//! Domain logic - pure version rules independent of files and git

pub mod bump_mode;
pub mod version;

pub use bump_mode::{resolve_bump_mode, BumpResolution};
pub use version::{Version, VersionBump};
