use crate::kv::{KeyValueStore, StoreError};
use crate::types::BEST_SCORE_KEY;

/// The persisted best score, cached in memory.
///
/// Reads once at load; writes only when a run beats the stored value.
#[derive(Debug)]
pub struct BestScore<S> {
    store: S,
    value: u32,
}

impl<S: KeyValueStore> BestScore<S> {
    /// Load from `store`. A missing or garbled value reads as 0.
    pub fn load(store: S) -> Self {
        let value = match store.get(BEST_SCORE_KEY) {
            None => 0,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(v) => v,
                Err(err) => {
                    tracing::warn!(key = BEST_SCORE_KEY, value = %raw, error = %err, "ignoring unreadable best score");
                    0
                }
            },
        };
        Self { store, value }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Persist `score` if it beats the current best. Returns whether it did.
    pub fn record(&mut self, score: u32) -> Result<bool, StoreError> {
        if score <= self.value {
            return Ok(false);
        }
        self.store.set(BEST_SCORE_KEY, &score.to_string())?;
        tracing::info!(previous = self.value, best = score, "new best score saved");
        self.value = score;
        Ok(true)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn missing_and_garbled_read_as_zero() {
        assert_eq!(BestScore::load(MemoryStore::new()).value(), 0);
        let garbled = MemoryStore::new().with_entry(BEST_SCORE_KEY, "twelve");
        assert_eq!(BestScore::load(garbled).value(), 0);
        let negative = MemoryStore::new().with_entry(BEST_SCORE_KEY, "-4");
        assert_eq!(BestScore::load(negative).value(), 0);
    }

    #[test]
    fn writes_only_on_improvement() {
        let store = MemoryStore::new().with_entry(BEST_SCORE_KEY, "10");
        let mut best = BestScore::load(store);
        assert_eq!(best.value(), 10);

        assert!(!best.record(7).unwrap());
        assert!(!best.record(10).unwrap());
        assert_eq!(best.store().writes(), 0);

        assert!(best.record(11).unwrap());
        assert_eq!(best.value(), 11);
        assert_eq!(best.store().writes(), 1);
        assert_eq!(best.store().get(BEST_SCORE_KEY).as_deref(), Some("11"));
    }
}
