//! Storage layer for productstore - a JSON-file-backed record store.
//!
//! `RecordStore` keeps the whole product collection in memory and rewrites the
//! backing after every successful mutation. The `Backing` trait is the seam between
//! the two; `JsonFileBacking` is the production implementation.

mod json_file;
mod record_store;
mod traits;

pub use json_file::JsonFileBacking;
pub use record_store::{LoadStatus, RecordStore};
pub use traits::Backing;
