use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{Invoice, InvoiceUpdate};
use super::errors::InvoiceError;

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
  async fn insert(&self, invoice: Invoice) -> Result<Invoice, InvoiceError>;
  /// Applies the update to the row matching `id`; reports `NotFound` when no
  /// row matches.
  async fn update(&self, id: Uuid, update: InvoiceUpdate) -> Result<(), InvoiceError>;
  /// Removes the row matching `id`; reports `NotFound` when no row matches.
  async fn delete(&self, id: Uuid) -> Result<(), InvoiceError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, InvoiceError>;
  async fn list(&self) -> Result<Vec<Invoice>, InvoiceError>;
}

/// Cache of rendered pages keyed by route path.
#[async_trait]
pub trait PageCache: Send + Sync {
  async fn get(&self, path: &str) -> Result<Option<String>, InvoiceError>;
  async fn put(&self, path: &str, html: &str) -> Result<(), InvoiceError>;
  async fn invalidate(&self, path: &str) -> Result<(), InvoiceError>;
}
