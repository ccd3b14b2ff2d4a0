//! In-memory store backend.
//!
//! A row store held in RAM: a `Vec<Task>` in insertion order plus an
//! autoincrement id counter, mimicking the relational table the core
//! was designed against. Data is lost on exit unless the store is
//! wrapped with JSONL persistence (see [`load_from_jsonl`] and
//! [`save_to_jsonl`]).
//!
//! # Row Order
//!
//! `select_all` returns rows in id-ascending order, which is the
//! "natural row order" the Task Cache mirrors (ids are autoincrement,
//! so fresh inserts append). A row re-inserted by undo-of-delete goes
//! back to its id position, the way an id-keyed table scan would
//! return it.
//!
//! # Thread Safety
//!
//! The inner structure is wrapped in `Arc<Mutex<>>` so the trait can be
//! implemented for a cloneable handle in async contexts. Operations
//! are short and serialized; there is no background work.

mod inner;
mod jsonl;
mod trait_impl;

use crate::store::TaskStore;
use inner::InMemoryStoreInner;
use std::sync::Arc;
use tokio::sync::Mutex;

pub use jsonl::{load_from_jsonl, save_to_jsonl, LoadWarning};

/// Thread-safe in-memory store handle.
pub(crate) type InMemoryStore = Arc<Mutex<InMemoryStoreInner>>;

/// Create a new empty in-memory store.
pub fn new_in_memory_store() -> Box<dyn TaskStore> {
    Box::new(Arc::new(Mutex::new(InMemoryStoreInner::new())))
}
