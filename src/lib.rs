//! productstore - a file-persisted product record store
//!
//! Loads a JSON array of products at startup, serves reads and writes from memory,
//! and rewrites the whole file after each successful mutation.

pub mod domain;
pub mod error;
pub mod storage;

pub use domain::{NewProduct, Product, ProductPatch};
pub use error::{Result, StoreError};
pub use storage::{JsonFileBacking, LoadStatus, RecordStore};
