//! Domain types for productstore
//!
//! - Product: the persisted record
//! - NewProduct: an unvalidated candidate for insertion
//! - ProductPatch: a partial update that can never touch `id`

pub mod product;

pub use product::{NewProduct, Product, ProductPatch};
