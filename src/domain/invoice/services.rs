use std::sync::Arc;
use uuid::Uuid;

use super::entities::{Invoice, InvoiceUpdate};
use super::errors::InvoiceError;
use super::form::InvoiceDraft;
use super::ports::{InvoiceRepository, PageCache};

/// Route whose rendered page is cached and invalidated by mutations.
pub const INVOICES_PATH: &str = "/dashboard/invoices";

/// Coordinates the repository and the listing-page cache.
///
/// The invariant enforced here: the cache is invalidated exactly once per
/// successful mutation, and only after the statement has completed without
/// error. A failed statement leaves the cache untouched.
pub struct InvoiceService {
  repo: Arc<dyn InvoiceRepository>,
  cache: Arc<dyn PageCache>,
}

impl InvoiceService {
  pub fn new(repo: Arc<dyn InvoiceRepository>, cache: Arc<dyn PageCache>) -> Self {
    Self { repo, cache }
  }

  pub async fn create_invoice(&self, draft: InvoiceDraft) -> Result<Invoice, InvoiceError> {
    let invoice = Invoice::create(draft.customer_id, &draft.amount, draft.status);
    let invoice = self.repo.insert(invoice).await?;
    self.invalidate_listing().await;
    Ok(invoice)
  }

  pub async fn update_invoice(&self, id: Uuid, draft: InvoiceDraft) -> Result<(), InvoiceError> {
    let update = InvoiceUpdate {
      customer_id: draft.customer_id,
      amount_cents: draft.amount.cents(),
      status: draft.status,
    };
    self.repo.update(id, update).await?;
    self.invalidate_listing().await;
    Ok(())
  }

  pub async fn delete_invoice(&self, id: Uuid) -> Result<(), InvoiceError> {
    self.repo.delete(id).await?;
    self.invalidate_listing().await;
    Ok(())
  }

  pub async fn get_invoice(&self, id: Uuid) -> Result<Invoice, InvoiceError> {
    self
      .repo
      .find_by_id(id)
      .await?
      .ok_or(InvoiceError::NotFound(id))
  }

  pub async fn list_invoices(&self) -> Result<Vec<Invoice>, InvoiceError> {
    self.repo.list().await
  }

  async fn invalidate_listing(&self) {
    // The row is already mutated at this point; a stale cache entry is worth
    // a warning, not a failed request.
    if let Err(e) = self.cache.invalidate(INVOICES_PATH).await {
      tracing::warn!("Failed to invalidate cached listing page: {}", e);
    }
  }
}
