use std::collections::HashMap;

use parking_lot::RwLock;

use crate::models::{Thought, ThoughtId};

/// Process-lifetime store mapping `ThoughtId -> Thought`.
///
/// Uses interior mutability (RwLock) so concurrent request handlers can share
/// it behind an `Arc` without `&mut self`; get/list take a read lock, put a
/// write lock. Entries live until the process exits.
pub struct ThoughtStore {
    thoughts: RwLock<HashMap<ThoughtId, Thought>>,
}

impl ThoughtStore {
    pub fn new() -> Self {
        ThoughtStore {
            thoughts: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a thought. Absence is a normal outcome the caller branches on.
    pub fn get(&self, id: ThoughtId) -> Option<Thought> {
        self.thoughts.read().get(&id).cloned()
    }

    /// Insert or overwrite the record at `id`. Used for both creation and
    /// whole-record update.
    pub fn put(&self, id: ThoughtId, thought: Thought) {
        self.thoughts.write().insert(id, thought);
    }

    /// Snapshot of all stored thoughts, in arbitrary order.
    pub fn list(&self) -> Vec<Thought> {
        self.thoughts.read().values().cloned().collect()
    }
}

impl Default for ThoughtStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample(title: &str) -> Thought {
        Thought {
            id: ThoughtId::new(),
            created_time: Utc::now(),
            title: title.to_string(),
            content: format!("{title} content"),
        }
    }

    #[test]
    fn test_put_then_get() {
        let store = ThoughtStore::new();
        let thought = sample("t1");

        store.put(thought.id, thought.clone());
        assert_eq!(store.get(thought.id), Some(thought));
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store = ThoughtStore::new();
        assert_eq!(store.get(ThoughtId::new()), None);
    }

    #[test]
    fn test_put_overwrites_existing() {
        let store = ThoughtStore::new();
        let original = sample("before");
        store.put(original.id, original.clone());

        let replacement = Thought {
            title: "after".to_string(),
            ..original.clone()
        };
        store.put(original.id, replacement.clone());

        assert_eq!(store.list().len(), 1);
        assert_eq!(store.get(original.id), Some(replacement));
    }

    #[test]
    fn test_list_snapshots_all_entries() {
        let store = ThoughtStore::new();
        assert!(store.list().is_empty());

        let a = sample("a");
        let b = sample("b");
        store.put(a.id, a.clone());
        store.put(b.id, b.clone());

        let mut titles: Vec<String> = store.list().into_iter().map(|t| t.title).collect();
        titles.sort();
        assert_eq!(titles, vec!["a".to_string(), "b".to_string()]);
    }
}
