use thiserror::Error;
use uuid::Uuid;

use super::value_objects::ValueObjectError;

#[derive(Debug, Error)]
pub enum InvoiceError {
  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("Invoice not found: {0}")]
  NotFound(Uuid),

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("Cache error: {0}")]
  Cache(String),
}
