use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{InvoiceError, InvoiceService, InvoiceStatus};

use super::list_invoices::format_cents;

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceDetailsResponse {
  pub id: Uuid,
  pub customer_id: String,
  /// Amount in major units, suitable for pre-filling the edit form.
  pub amount: String,
  pub status: InvoiceStatus,
}

/// Fetches a single invoice to pre-fill the edit form.
pub struct GetInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl GetInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(&self, id: Uuid) -> Result<InvoiceDetailsResponse, InvoiceError> {
    let invoice = self.invoice_service.get_invoice(id).await?;
    Ok(InvoiceDetailsResponse {
      id: invoice.id,
      customer_id: invoice.customer_id.into_inner(),
      amount: format_cents(invoice.amount_cents),
      status: invoice.status,
    })
  }
}
