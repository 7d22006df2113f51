pub mod action;
pub mod create_invoice;
pub mod delete_invoice;
pub mod get_invoice;
pub mod list_invoices;
pub mod update_invoice;

pub use action::ActionState;
pub use create_invoice::{CreateInvoiceCommand, CreateInvoiceUseCase};
pub use delete_invoice::{DeleteInvoiceCommand, DeleteInvoiceUseCase};
pub use get_invoice::{GetInvoiceUseCase, InvoiceDetailsResponse};
pub use list_invoices::{InvoiceListItemDto, ListInvoicesResponse, ListInvoicesUseCase};
pub use update_invoice::{UpdateInvoiceCommand, UpdateInvoiceUseCase};

#[cfg(test)]
pub(crate) mod test_support {
  use async_trait::async_trait;
  use std::sync::atomic::{AtomicBool, Ordering};
  use std::sync::{Arc, Mutex};
  use uuid::Uuid;

  use crate::domain::invoice::{
    Invoice, InvoiceError, InvoiceRepository, InvoiceService, InvoiceUpdate, PageCache,
  };

  use super::{CreateInvoiceCommand, CreateInvoiceUseCase};

  /// In-memory repository recording every row; `fail_next` simulates a
  /// connectivity loss on the next statement.
  #[derive(Default)]
  pub struct MockInvoiceRepository {
    pub rows: Mutex<Vec<Invoice>>,
    fail_next: AtomicBool,
  }

  impl MockInvoiceRepository {
    pub fn fail_next(&self) {
      self.fail_next.store(true, Ordering::SeqCst);
    }

    fn check_fail(&self) -> Result<(), InvoiceError> {
      if self.fail_next.swap(false, Ordering::SeqCst) {
        Err(InvoiceError::Database(sqlx::Error::PoolTimedOut))
      } else {
        Ok(())
      }
    }
  }

  #[async_trait]
  impl InvoiceRepository for MockInvoiceRepository {
    async fn insert(&self, invoice: Invoice) -> Result<Invoice, InvoiceError> {
      self.check_fail()?;
      self.rows.lock().unwrap().push(invoice.clone());
      Ok(invoice)
    }

    async fn update(&self, id: Uuid, update: InvoiceUpdate) -> Result<(), InvoiceError> {
      self.check_fail()?;
      let mut rows = self.rows.lock().unwrap();
      match rows.iter_mut().find(|r| r.id == id) {
        Some(row) => {
          row.customer_id = update.customer_id;
          row.amount_cents = update.amount_cents;
          row.status = update.status;
          Ok(())
        }
        None => Err(InvoiceError::NotFound(id)),
      }
    }

    async fn delete(&self, id: Uuid) -> Result<(), InvoiceError> {
      self.check_fail()?;
      let mut rows = self.rows.lock().unwrap();
      let before = rows.len();
      rows.retain(|r| r.id != id);
      if rows.len() == before {
        Err(InvoiceError::NotFound(id))
      } else {
        Ok(())
      }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, InvoiceError> {
      self.check_fail()?;
      Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Invoice>, InvoiceError> {
      self.check_fail()?;
      let mut rows = self.rows.lock().unwrap().clone();
      rows.sort_by(|a, b| b.date.cmp(&a.date));
      Ok(rows)
    }
  }

  /// Cache double that records invalidated paths.
  #[derive(Default)]
  pub struct RecordingCache {
    invalidated: Mutex<Vec<String>>,
  }

  impl RecordingCache {
    pub fn invalidated(&self) -> Vec<String> {
      self.invalidated.lock().unwrap().clone()
    }

    pub fn clear(&self) {
      self.invalidated.lock().unwrap().clear();
    }
  }

  #[async_trait]
  impl PageCache for RecordingCache {
    async fn get(&self, _path: &str) -> Result<Option<String>, InvoiceError> {
      Ok(None)
    }

    async fn put(&self, _path: &str, _html: &str) -> Result<(), InvoiceError> {
      Ok(())
    }

    async fn invalidate(&self, path: &str) -> Result<(), InvoiceError> {
      self.invalidated.lock().unwrap().push(path.to_string());
      Ok(())
    }
  }

  pub fn service() -> (
    Arc<InvoiceService>,
    Arc<MockInvoiceRepository>,
    Arc<RecordingCache>,
  ) {
    let repo = Arc::new(MockInvoiceRepository::default());
    let cache = Arc::new(RecordingCache::default());
    let service = Arc::new(InvoiceService::new(repo.clone(), cache.clone()));
    (service, repo, cache)
  }

  pub fn command(
    customer_id: Option<&str>,
    amount: Option<&str>,
    status: Option<&str>,
  ) -> CreateInvoiceCommand {
    CreateInvoiceCommand {
      customer_id: customer_id.map(String::from),
      amount: amount.map(String::from),
      status: status.map(String::from),
    }
  }

  /// `{customer_id: "cust_1", amount: "45.00", status: "pending"}`
  pub fn valid_command() -> CreateInvoiceCommand {
    command(Some("cust_1"), Some("45.00"), Some("pending"))
  }

  /// Service with one invoice created through the real create use case.
  pub async fn seeded_service() -> (
    Arc<InvoiceService>,
    Arc<MockInvoiceRepository>,
    Arc<RecordingCache>,
  ) {
    let (service, repo, cache) = service();
    CreateInvoiceUseCase::new(service.clone())
      .execute(valid_command())
      .await;
    (service, repo, cache)
  }
}
