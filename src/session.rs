//! Session-scoped variable locks
//!
//! A session pins terms to chosen functional definitions for its lifetime.
//! The record preserves first-insertion order for reporting; re-locking a
//! term updates its definition without moving it. Sharing a record across
//! threads requires external synchronization by the caller.

use crate::models::LockedVariable;
use indexmap::IndexMap;
use tracing::info;

/// Insertion-ordered record of locked variables.
#[derive(Debug, Clone, Default)]
pub struct LockRecord {
    entries: IndexMap<String, LockedVariable>,
}

impl LockRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the lock for a term.
    ///
    /// Overwriting keeps the term at its original position. Emits an
    /// informational event; nothing observes it.
    pub fn lock(&mut self, term: impl Into<String>, definition: LockedVariable) {
        let term = term.into();
        info!(term = %term, kind = %definition.kind, "variable locked");
        self.entries.insert(term, definition);
    }

    pub fn get(&self, term: &str) -> Option<&LockedVariable> {
        self.entries.get(term)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Locked terms in first-insertion order
    pub fn terms(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LockedVariable)> {
        self.entries.iter()
    }

    /// Owned copy of the record for embedding in reports
    pub fn snapshot(&self) -> IndexMap<String, LockedVariable> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(kind: &str) -> LockedVariable {
        LockedVariable {
            kind: kind.to_string(),
            range: vec!["a".to_string(), "b".to_string()],
            context_dependent: true,
            depends_on: vec!["context".to_string()],
            locked_from_reified_form: "constant".to_string(),
        }
    }

    #[test]
    fn test_lock_and_get() {
        let mut record = LockRecord::new();
        record.lock("safety", definition("signal clarity metric"));
        assert_eq!(record.len(), 1);
        assert_eq!(
            record.get("safety").expect("locked").kind,
            "signal clarity metric"
        );
    }

    #[test]
    fn test_relock_overwrites_in_place() {
        let mut record = LockRecord::new();
        record.lock("safety", definition("first"));
        record.lock("boundaries", definition("second"));
        record.lock("safety", definition("third"));

        assert_eq!(record.len(), 2);
        assert_eq!(record.terms(), vec!["safety", "boundaries"]);
        assert_eq!(record.get("safety").expect("locked").kind, "third");
    }

    #[test]
    fn test_snapshot_preserves_order() {
        let mut record = LockRecord::new();
        record.lock("c", definition("1"));
        record.lock("a", definition("2"));
        record.lock("b", definition("3"));
        let snapshot = record.snapshot();
        let terms: Vec<&String> = snapshot.keys().collect();
        assert_eq!(terms, vec!["c", "a", "b"]);
    }
}
