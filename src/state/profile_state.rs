//! ProfileState - Editable Profile Draft State
//!
//! The profile screen edits a draft copy of the host-owned profile; the
//! committed value and the buffer are explicit so dirtiness is a field-wise
//! comparison, not a render-timing artifact.

use crate::domain::user::UserProfile;
use crate::helpers::draft::Draft;

/// State for the profile screen
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    pub profile: Draft<UserProfile>,
    pub editing: bool,
    pub saving: bool,
    pub loading: bool,
    /// Transient success banner text
    pub success: Option<String>,
    pub error: Option<String>,
}

impl ProfileState {
    /// Replace the committed profile from the host, discarding local edits
    pub fn load(&mut self, profile: UserProfile) {
        self.profile.reset(profile);
        self.loading = false;
        self.editing = false;
    }

    pub fn start_edit(&mut self) {
        self.editing = true;
        self.success = None;
        self.error = None;
    }

    /// Discard edits and leave edit mode
    pub fn cancel_edit(&mut self) {
        self.profile.revert();
        self.editing = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.profile.is_dirty()
    }

    /// Hand back the draft for saving, when there is something to save
    pub fn begin_save(&mut self) -> Option<UserProfile> {
        if self.saving || !self.profile.is_dirty() {
            return None;
        }
        self.saving = true;
        self.error = None;
        Some(self.profile.draft().clone())
    }

    /// The source accepted the save
    pub fn save_succeeded(&mut self) {
        self.profile.commit();
        self.saving = false;
        self.editing = false;
        self.success = Some("Profile updated".to_string());
    }

    /// The source rejected the save; edits stay in the buffer
    pub fn save_failed(&mut self, message: impl Into<String>) {
        self.saving = false;
        self.error = Some(message.into());
    }

    /// Banner timer expired
    pub fn clear_success(&mut self) {
        self.success = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> UserProfile {
        UserProfile {
            id: "u1".into(),
            name: name.to_string(),
            email: "a@b.c".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_clean_profile_does_not_save() {
        let mut state = ProfileState::default();
        state.load(profile("Ada"));
        assert!(state.begin_save().is_none());
    }

    #[test]
    fn test_edit_save_commit_cycle() {
        let mut state = ProfileState::default();
        state.load(profile("Ada"));
        state.start_edit();
        state.profile.draft_mut().name = "Ada L".into();
        assert!(state.is_dirty());

        let draft = state.begin_save().expect("draft");
        assert_eq!(draft.name, "Ada L");
        assert!(state.saving);
        // re-entrant save blocked while in flight
        assert!(state.begin_save().is_none());

        state.save_succeeded();
        assert!(!state.is_dirty());
        assert!(!state.editing);
        assert_eq!(state.profile.committed().name, "Ada L");
        assert!(state.success.is_some());

        state.clear_success();
        assert!(state.success.is_none());
    }

    #[test]
    fn test_cancel_reverts_draft() {
        let mut state = ProfileState::default();
        state.load(profile("Ada"));
        state.start_edit();
        state.profile.draft_mut().name = "Someone Else".into();
        state.cancel_edit();
        assert!(!state.is_dirty());
        assert_eq!(state.profile.draft().name, "Ada");
    }

    #[test]
    fn test_failed_save_keeps_edits() {
        let mut state = ProfileState::default();
        state.load(profile("Ada"));
        state.start_edit();
        state.profile.draft_mut().name = "Ada L".into();
        let _ = state.begin_save();
        state.save_failed("host rejected");
        assert!(state.is_dirty());
        assert!(state.error.is_some());
        assert!(!state.saving);
    }
}
