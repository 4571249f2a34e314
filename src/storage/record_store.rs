//! The product record store: in-memory collection synced to a backing after every mutation.

use std::path::Path;

use log::{debug, error, info, warn};

use super::json_file::JsonFileBacking;
use super::traits::Backing;
use crate::domain::{NewProduct, Product, ProductPatch};
use crate::error::{Result, StoreError};

/// How construction went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Backing parsed; `count` records loaded
    Loaded { count: usize },
    /// Backing did not exist yet
    Missing,
    /// Backing was unreadable or malformed; store started empty
    Failed { reason: String },
}

/// Ordered collection of products plus the id counter.
#[derive(Debug)]
pub struct RecordStore<B: Backing = JsonFileBacking> {
    records: Vec<Product>,
    /// `None` once `u64::MAX` is in use
    next_id: Option<u64>,
    backing: B,
    load_status: LoadStatus,
    synced: bool,
}

impl RecordStore<JsonFileBacking> {
    /// Open the store backed by a JSON file at `path`.
    ///
    /// Never fails: a missing or corrupt file yields an empty store.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::with_backing(JsonFileBacking::new(path))
    }
}

impl<B: Backing> RecordStore<B> {
    /// Load the store from an arbitrary backing, recovering to empty on failure.
    pub fn with_backing(backing: B) -> Self {
        let (records, load_status) = match backing.read() {
            Ok(records) => {
                let count = records.len();
                info!("Loaded {} products from {}", count, backing.describe());
                (records, LoadStatus::Loaded { count })
            }
            Err(e) if e.is_missing_file() => {
                warn!("No product file at {}, starting empty", backing.describe());
                (Vec::new(), LoadStatus::Missing)
            }
            Err(e) => {
                let err = StoreError::Load(e.to_string());
                warn!("{} ({}), starting empty", err, backing.describe());
                (
                    Vec::new(),
                    LoadStatus::Failed {
                        reason: e.to_string(),
                    },
                )
            }
        };

        let next_id = match records.iter().map(|p| p.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(0),
        };
        if next_id.is_none() {
            warn!("Highest loaded id is u64::MAX, no further products can be added");
        }

        Self {
            records,
            next_id,
            backing,
            load_status,
            synced: true,
        }
    }

    /// Write the full collection to the backing.
    pub fn save(&mut self) -> Result<()> {
        match self.backing.write(&self.records) {
            Ok(()) => {
                debug!("Saved {} products to {}", self.records.len(), self.backing.describe());
                self.synced = true;
                Ok(())
            }
            Err(e) => {
                self.synced = false;
                Err(StoreError::Persist(e.to_string()))
            }
        }
    }

    /// Persist after a mutation. Failures are logged and leave memory ahead of disk.
    fn persist(&mut self) {
        if let Err(e) = self.save() {
            error!("{} ({})", e, self.backing.describe());
        }
    }

    /// Validate, check code uniqueness, assign the next id, append and persist.
    pub fn add_product(&mut self, candidate: NewProduct) -> Result<Product> {
        candidate.validate()?;

        if self.records.iter().any(|p| p.code == candidate.code) {
            return Err(StoreError::DuplicateCode(candidate.code));
        }

        let id = self.next_id.ok_or(StoreError::IdsExhausted)?;
        self.next_id = id.checked_add(1);

        let product = candidate.into_product(id);
        self.records.push(product.clone());
        self.persist();

        info!("Added product {} ({})", product.id, product.code);
        Ok(product)
    }

    pub fn get_product_by_id(&self, id: u64) -> Result<&Product> {
        self.records
            .iter()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Replace the product with a copy carrying the patched fields.
    ///
    /// Only the price is checked; required fields and code uniqueness are not.
    pub fn update_product(&mut self, id: u64, patch: ProductPatch) -> Result<Product> {
        let index = self.position(id)?;
        patch.validate()?;

        let updated = self.records[index].with_patch(&patch);
        self.records[index] = updated.clone();
        self.persist();

        info!("Updated product {}", id);
        Ok(updated)
    }

    /// Remove a product. Its id is never handed out again.
    pub fn delete_product(&mut self, id: u64) -> Result<Product> {
        let index = self.position(id)?;

        let removed = self.records.remove(index);
        self.persist();

        info!("Deleted product {} ({})", removed.id, removed.code);
        Ok(removed)
    }

    fn position(&self, id: u64) -> Result<usize> {
        self.records
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The id the next successful add will receive, `None` when ids are exhausted.
    pub fn next_id(&self) -> Option<u64> {
        self.next_id
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// False when the most recent persist attempt failed.
    pub fn is_synced(&self) -> bool {
        self.synced
    }

    pub fn backing(&self) -> &B {
        &self.backing
    }
}
