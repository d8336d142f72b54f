//! Profile state, persistence boundary, and change buffering.
//!
//! The engine itself never touches storage: the hosting application loads a
//! [`ProfileState`] through a [`ProfileRepository`] and hands its pieces to
//! the calculation functions. This module provides the YAML-file repository
//! and an explicit pending-change buffer with caller-driven flushing.
//!
//! # Example
//!
//! ```no_run
//! use roster_engine::profile::{ProfileRepository, YamlProfileRepository};
//!
//! let repo = YamlProfileRepository::new("./config/profile.yaml");
//! let profile = repo.load_profile().unwrap();
//! let breakdown = profile.monthly_payroll(6, 2025);
//! println!("June total: {}", breakdown.total);
//! ```

mod pending;
mod repository;
mod state;

pub use pending::PendingProfile;
pub use repository::{ProfileRepository, YamlProfileRepository};
pub use state::ProfileState;
