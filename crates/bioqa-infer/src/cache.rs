//! LRU query cache for embeddings.
//!
//! Sits in front of the ONNX encoder so repeated queries skip inference.
//! Default: 1000 entries, 1-hour TTL.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use ndarray::Array1;
use parking_lot::Mutex;

struct Entry {
    embedding: Array1<f32>,
    inserted_at: Instant,
}

struct Inner {
    entries: HashMap<String, Entry>,
    order: VecDeque<String>,
    capacity: usize,
    ttl: Duration,
}

/// Thread-safe LRU + TTL cache keyed by query text.
pub struct EmbeddingCache {
    inner: Mutex<Inner>,
}

impl EmbeddingCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::with_capacity(capacity),
                order: VecDeque::with_capacity(capacity),
                capacity,
                ttl,
            }),
        }
    }

    /// Cache with default settings (1000 entries, 1hr TTL).
    pub fn default_cache() -> Self {
        Self::new(1000, Duration::from_secs(3600))
    }

    /// Get a cached embedding. Returns `None` on miss or expired entry.
    pub fn get(&self, text: &str) -> Option<Array1<f32>> {
        let mut inner = self.inner.lock();
        let ttl = inner.ttl;

        // Clone out before touching the recency order.
        let hit = inner
            .entries
            .get(text)
            .map(|e| (e.inserted_at.elapsed() < ttl, e.embedding.clone()));

        match hit {
            Some((true, embedding)) => {
                if let Some(pos) = inner.order.iter().position(|k| k == text) {
                    let key = inner.order.remove(pos).unwrap();
                    inner.order.push_back(key);
                }
                Some(embedding)
            }
            Some((false, _)) => {
                inner.entries.remove(text);
                inner.order.retain(|k| k != text);
                None
            }
            None => None,
        }
    }

    /// Insert an embedding, evicting the least recently used entry when
    /// the cache is full.
    pub fn put(&self, text: String, embedding: Array1<f32>) {
        let mut inner = self.inner.lock();

        if inner.entries.contains_key(&text) {
            inner.order.retain(|k| k != &text);
        } else {
            while inner.entries.len() >= inner.capacity {
                match inner.order.pop_front() {
                    Some(oldest) => {
                        inner.entries.remove(&oldest);
                    }
                    None => break,
                }
            }
        }

        inner.order.push_back(text.clone());
        inner.entries.insert(
            text,
            Entry {
                embedding,
                inserted_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        inner.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_hit_and_miss() {
        let cache = EmbeddingCache::new(8, Duration::from_secs(3600));
        assert!(cache.get("query").is_none());

        cache.put("query".into(), array![1.0, 0.0]);
        assert_eq!(cache.get("query").unwrap(), array![1.0, 0.0]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_lru_eviction() {
        let cache = EmbeddingCache::new(2, Duration::from_secs(3600));
        cache.put("a".into(), array![1.0]);
        cache.put("b".into(), array![2.0]);

        // Touch "a" so "b" becomes least recently used.
        cache.get("a");
        cache.put("c".into(), array![3.0]);

        assert!(cache.get("a").is_some());
        assert!(cache.get("b").is_none());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_ttl_expiry() {
        let cache = EmbeddingCache::new(8, Duration::from_millis(1));
        cache.put("ephemeral".into(), array![1.0]);
        std::thread::sleep(Duration::from_millis(5));
        assert!(cache.get("ephemeral").is_none());
    }

    #[test]
    fn test_reinsert_updates() {
        let cache = EmbeddingCache::new(2, Duration::from_secs(3600));
        cache.put("a".into(), array![1.0]);
        cache.put("a".into(), array![9.0]);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("a").unwrap(), array![9.0]);
    }
}
