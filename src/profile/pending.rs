//! Explicit pending-change buffering.
//!
//! Profile edits are staged as values and written only when the caller
//! flushes, eagerly or on its own schedule. There is no hidden timer state;
//! cancellation is an explicit operation that returns the discarded value.

use crate::error::EngineResult;

use super::repository::ProfileRepository;
use super::state::ProfileState;

/// A staged profile edit awaiting an explicit flush.
///
/// Staging replaces any previously staged value, so the buffer always holds
/// at most the latest full profile. A failed flush keeps the staged value so
/// the caller can retry.
///
/// # Example
///
/// ```no_run
/// use roster_engine::profile::{PendingProfile, ProfileState, YamlProfileRepository};
///
/// let repo = YamlProfileRepository::new("./config/profile.yaml");
/// let mut pending = PendingProfile::new();
///
/// pending.stage(ProfileState::default());
/// assert!(pending.is_dirty());
///
/// pending.flush(&repo)?;
/// assert!(!pending.is_dirty());
/// # Ok::<(), roster_engine::error::EngineError>(())
/// ```
#[derive(Debug, Default)]
pub struct PendingProfile {
    staged: Option<ProfileState>,
}

impl PendingProfile {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages a profile, replacing any previously staged value.
    pub fn stage(&mut self, profile: ProfileState) {
        self.staged = Some(profile);
    }

    /// Returns `true` when a staged value is awaiting a flush.
    pub fn is_dirty(&self) -> bool {
        self.staged.is_some()
    }

    /// Discards the staged value, returning it for inspection.
    pub fn cancel(&mut self) -> Option<ProfileState> {
        self.staged.take()
    }

    /// Writes the staged value through the repository, if any.
    ///
    /// Returns `true` if a profile was written, `false` if the buffer was
    /// clean. On error the staged value is kept for retry.
    pub fn flush(&mut self, repo: &dyn ProfileRepository) -> EngineResult<bool> {
        let Some(profile) = self.staged.as_ref() else {
            return Ok(false);
        };
        repo.save_profile(profile)?;
        self.staged = None;
        Ok(true)
    }
}
