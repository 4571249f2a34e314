//! Persistence seam for the record store.

use crate::domain::Product;
use crate::error::Result;

/// A place the full product collection can be read from and written to.
///
/// Writes always replace the whole collection; there is no incremental append.
pub trait Backing {
    /// Read the full collection.
    fn read(&self) -> Result<Vec<Product>>;

    /// Replace the stored collection with `products`.
    fn write(&self, products: &[Product]) -> Result<()>;

    /// Human-readable name of the target, used in log lines.
    fn describe(&self) -> String;
}
