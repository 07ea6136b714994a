//! Draft state for editable copies of externally owned data.
//!
//! Holds the committed value next to the edit buffer so dirtiness is an
//! explicit comparison instead of an artifact of re-render timing.

/// A committed value paired with an uncommitted edit buffer
#[derive(Debug, Clone, Default)]
pub struct Draft<T: Clone + PartialEq> {
    committed: T,
    draft: T,
}

impl<T: Clone + PartialEq> Draft<T> {
    /// Create a draft seeded from a committed value
    pub fn new(committed: T) -> Self {
        Self {
            draft: committed.clone(),
            committed,
        }
    }

    /// The committed value
    pub fn committed(&self) -> &T {
        &self.committed
    }

    /// The edit buffer
    pub fn draft(&self) -> &T {
        &self.draft
    }

    /// Mutable access to the edit buffer
    pub fn draft_mut(&mut self) -> &mut T {
        &mut self.draft
    }

    /// Whether the buffer differs from the committed value
    pub fn is_dirty(&self) -> bool {
        self.draft != self.committed
    }

    /// Discard edits, restoring the committed value
    pub fn revert(&mut self) {
        self.draft = self.committed.clone();
    }

    /// Accept the buffer as the new committed value
    pub fn commit(&mut self) {
        self.committed = self.draft.clone();
    }

    /// Replace the committed value from the host, discarding local edits
    pub fn reset(&mut self, committed: T) {
        self.draft = committed.clone();
        self.committed = committed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_after_new() {
        let d = Draft::new("a".to_string());
        assert!(!d.is_dirty());
    }

    #[test]
    fn test_dirty_after_edit() {
        let mut d = Draft::new("a".to_string());
        d.draft_mut().push('b');
        assert!(d.is_dirty());
        assert_eq!(d.committed(), "a");
    }

    #[test]
    fn test_revert_restores_committed() {
        let mut d = Draft::new("a".to_string());
        d.draft_mut().push('b');
        d.revert();
        assert!(!d.is_dirty());
        assert_eq!(d.draft(), "a");
    }

    #[test]
    fn test_commit_accepts_edits() {
        let mut d = Draft::new("a".to_string());
        d.draft_mut().push('b');
        d.commit();
        assert!(!d.is_dirty());
        assert_eq!(d.committed(), "ab");
    }

    #[test]
    fn test_reset_discards_edits() {
        let mut d = Draft::new("a".to_string());
        d.draft_mut().push('b');
        d.reset("c".to_string());
        assert!(!d.is_dirty());
        assert_eq!(d.draft(), "c");
    }
}
