//! Parsed-pattern cache shared by every call on a formatter.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::parser::{ParseError, parse_message_with_depth};
use crate::types::Message;

/// Maps pattern text to its parsed [`Message`].
///
/// Entries are never evicted. Two threads missing on the same pattern may
/// both parse it; the first insert wins and both get the retained entry.
#[derive(Debug, Default)]
pub struct PatternCache {
    entries: RwLock<HashMap<String, Arc<Message>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_parse(&self, pattern: &str, max_depth: usize) -> Result<Arc<Message>, ParseError> {
        {
            let entries = self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(message) = entries.get(pattern) {
                return Ok(Arc::clone(message));
            }
        }
        tracing::debug!(pattern, "pattern cache miss");
        let parsed = Arc::new(parse_message_with_depth(pattern, max_depth)?);
        let mut entries = self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        let retained = entries.entry(pattern.to_string()).or_insert(parsed);
        Ok(Arc::clone(retained))
    }

    pub fn len(&self) -> usize {
        self.entries.read().map_or_else(|poisoned| poisoned.into_inner().len(), |e| e.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::DEFAULT_MAX_DEPTH;

    #[test]
    fn test_second_lookup_reuses_entry() {
        let cache = PatternCache::new();
        let first = cache.get_or_parse("Hello {name}", DEFAULT_MAX_DEPTH).expect("valid");
        let second = cache.get_or_parse("Hello {name}", DEFAULT_MAX_DEPTH).expect("valid");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cache = PatternCache::new();
        assert!(cache.get_or_parse("Hello {name", DEFAULT_MAX_DEPTH).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_misses_converge() {
        let cache = PatternCache::new();
        let results: Vec<Arc<Message>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| cache.get_or_parse("{n, plural, other {#}}", DEFAULT_MAX_DEPTH)))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("no panic").expect("valid"))
                .collect()
        });
        assert_eq!(cache.len(), 1);
        let retained = cache.get_or_parse("{n, plural, other {#}}", DEFAULT_MAX_DEPTH).expect("valid");
        assert!(results.iter().all(|message| **message == *retained));
    }
}
