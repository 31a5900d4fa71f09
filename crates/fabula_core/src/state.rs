//! Story variables mutated during a turn.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Variable store for one in-flight story turn.
///
/// Instruction extensions write computed values here; drivers may read and
/// update it around each turn. A state belongs to a single turn at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StoryState {
    data: HashMap<String, Value>,
}

impl StoryState {
    /// Creates a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a value from the state.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Gets a string value from the state.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    /// Sets a value in the state, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        debug!(key = %key, value = %value, "Setting story variable");
        self.data.insert(key, value)
    }

    /// Removes a value from the state.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        debug!(key = %key, "Removing story variable");
        self.data.remove(key)
    }

    /// Checks if a key exists in the state.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Gets all keys in the state.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(|s| s.as_str())
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the state holds no variables.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Clears all state.
    pub fn clear(&mut self) {
        debug!("Clearing story state");
        self.data.clear();
    }
}

impl FromIterator<(String, Value)> for StoryState {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_story_state() {
        let mut state = StoryState::new();

        state.set("score", 3);
        assert_eq!(state.get("score"), Some(&json!(3)));

        assert_eq!(state.set("score", 4), Some(json!(3)));
        assert!(state.contains_key("score"));
        assert!(!state.contains_key("nonexistent"));

        state.set("name", "Ada");
        assert_eq!(state.get_str("name"), Some("Ada"));
        assert_eq!(state.get_str("score"), None);

        assert_eq!(state.remove("score"), Some(json!(4)));
        assert_eq!(state.len(), 1);

        state.clear();
        assert!(state.is_empty());
    }
}
