//! Product record and the inputs used to create and modify it
//!
//! `Product` is what the store persists. `NewProduct` is the unvalidated candidate
//! handed to `add_product`, and `ProductPatch` carries the fields an update overwrites.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// A stored product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Assigned by the store, never changes
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    /// Path or reference to an image
    pub thumbnail: String,
    /// Unique across the collection
    pub code: String,
    pub stock: i64,
}

impl Product {
    /// Build the record that results from applying `patch`.
    ///
    /// Fields absent from the patch are copied verbatim; `id` is always kept.
    pub fn with_patch(&self, patch: &ProductPatch) -> Self {
        Self {
            id: self.id,
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            price: patch.price.unwrap_or(self.price),
            thumbnail: patch
                .thumbnail
                .clone()
                .unwrap_or_else(|| self.thumbnail.clone()),
            code: patch.code.clone().unwrap_or_else(|| self.code.clone()),
            stock: patch.stock.unwrap_or(self.stock),
        }
    }
}

/// Candidate product without an id
///
/// Every field defaults when deserialized so that an incomplete JSON object
/// fails validation instead of parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    /// `None` means the caller never supplied a stock value
    pub stock: Option<i64>,
}

impl NewProduct {
    /// Names of required fields that are empty or absent, in declaration order.
    ///
    /// A price of zero counts as absent, so free products cannot be added.
    /// Infinite and NaN prices count as absent too; JSON has no encoding for them.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push("title");
        }
        if self.description.is_empty() {
            missing.push("description");
        }
        if self.price == 0.0 || !self.price.is_finite() {
            missing.push("price");
        }
        if self.thumbnail.is_empty() {
            missing.push("thumbnail");
        }
        if self.code.is_empty() {
            missing.push("code");
        }
        if self.stock.is_none() {
            missing.push("stock");
        }
        missing
    }

    /// Check that every required field is present
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(StoreError::Validation { missing })
        }
    }

    /// Turn a validated candidate into a record with the given id
    pub(crate) fn into_product(self, id: u64) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            thumbnail: self.thumbnail,
            code: self.code,
            stock: self.stock.unwrap_or_default(),
        }
    }
}

/// Partial update for a product
///
/// There is no `id` field; an incoming JSON patch that names `id` is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
}

impl ProductPatch {
    /// True when the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.thumbnail.is_none()
            && self.code.is_none()
            && self.stock.is_none()
    }

    /// Reject values that cannot round-trip through the backing file.
    ///
    /// Only the price is checked; empty text and duplicate codes are allowed.
    pub fn validate(&self) -> Result<()> {
        match self.price {
            Some(price) if !price.is_finite() => Err(StoreError::InvalidPrice(price)),
            _ => Ok(()),
        }
    }

    /// Set the price
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the stock
    pub fn stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Set the code
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}
