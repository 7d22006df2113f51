use serde::Deserialize;
use std::sync::Arc;

use crate::domain::invoice::{INVOICES_PATH, InvoiceForm, InvoiceService};

use super::action::ActionState;

/// Raw form fields for the create action; any date supplied by the caller is
/// ignored, the invoice date is stamped server-side.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateInvoiceCommand {
  pub customer_id: Option<String>,
  pub amount: Option<String>,
  pub status: Option<String>,
}

pub struct CreateInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl CreateInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(&self, command: CreateInvoiceCommand) -> ActionState {
    let form = InvoiceForm {
      customer_id: command.customer_id,
      amount: command.amount,
      status: command.status,
    };

    let draft = match form.validate() {
      Ok(draft) => draft,
      Err(errors) => {
        return ActionState::Invalid {
          errors,
          message: "Missing Fields. Failed to Create Invoice.".to_string(),
        };
      }
    };

    match self.invoice_service.create_invoice(draft).await {
      Ok(invoice) => {
        tracing::info!(invoice_id = %invoice.id, "Invoice created");
        ActionState::Navigate {
          location: INVOICES_PATH.to_string(),
        }
      }
      Err(e) => {
        tracing::error!("Failed to create invoice: {}", e);
        ActionState::Failed {
          message: "Database Error: Failed to create invoice".to_string(),
        }
      }
    }
  }
}
