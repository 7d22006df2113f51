use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{Invoice, InvoiceError, InvoiceService, InvoiceStatus};

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceListItemDto {
  pub id: Uuid,
  pub customer_id: String,
  pub amount_cents: i64,
  /// Amount formatted back to major units for display, e.g. "45.00".
  pub amount: String,
  pub status: InvoiceStatus,
  pub date: NaiveDate,
}

impl From<Invoice> for InvoiceListItemDto {
  fn from(invoice: Invoice) -> Self {
    let amount = format_cents(invoice.amount_cents);
    Self {
      id: invoice.id,
      customer_id: invoice.customer_id.into_inner(),
      amount_cents: invoice.amount_cents,
      amount,
      status: invoice.status,
      date: invoice.date,
    }
  }
}

pub(crate) fn format_cents(cents: i64) -> String {
  format!("{}.{:02}", cents / 100, cents % 100)
}

#[derive(Debug, Serialize)]
pub struct ListInvoicesResponse {
  pub invoices: Vec<InvoiceListItemDto>,
}

pub struct ListInvoicesUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl ListInvoicesUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(&self) -> Result<ListInvoicesResponse, InvoiceError> {
    let invoices = self
      .invoice_service
      .list_invoices()
      .await?
      .into_iter()
      .map(InvoiceListItemDto::from)
      .collect();

    Ok(ListInvoicesResponse { invoices })
  }
}
