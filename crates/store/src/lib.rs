//! Best-score persistence.
//!
//! - [`kv`]: the string key-value store trait with memory and JSON file backends
//! - [`best`]: the best score on top of any store, written only on improvement
//!
//! # Example
//!
//! ```
//! use tui_snake_store::{BestScore, MemoryStore};
//!
//! let mut best = BestScore::load(MemoryStore::new());
//! assert_eq!(best.value(), 0);
//! assert!(best.record(3).unwrap());
//! assert!(!best.record(2).unwrap());
//! assert_eq!(best.value(), 3);
//! ```

pub mod best;
pub mod kv;

pub use tui_snake_types as types;

pub use best::BestScore;
pub use kv::{default_scores_path, JsonFileStore, KeyValueStore, MemoryStore, StoreError};
