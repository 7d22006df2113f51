use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{INVOICES_PATH, InvoiceForm, InvoiceService};

use super::action::ActionState;

/// Raw form fields for the update action. `id` identifies the existing row;
/// the invoice date is never part of an update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInvoiceCommand {
  pub id: Option<String>,
  pub customer_id: Option<String>,
  pub amount: Option<String>,
  pub status: Option<String>,
}

pub struct UpdateInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl UpdateInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(&self, command: UpdateInvoiceCommand) -> ActionState {
    let id = match command.id.as_deref().map(Uuid::parse_str) {
      Some(Ok(id)) => id,
      _ => {
        return ActionState::Failed {
          message: "Missing Fields. Failed to Update Invoice.".to_string(),
        };
      }
    };

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

    match self.invoice_service.update_invoice(id, draft).await {
      Ok(()) => ActionState::Navigate {
        location: INVOICES_PATH.to_string(),
      },
      Err(e) => {
        tracing::error!(invoice_id = %id, "Failed to update invoice: {}", e);
        ActionState::Failed {
          message: "Database Error: Failed to Update Invoice.".to_string(),
        }
      }
    }
  }
}
