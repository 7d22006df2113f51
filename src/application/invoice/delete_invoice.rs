use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::InvoiceService;

use super::action::ActionState;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteInvoiceCommand {
  pub id: Option<String>,
}

/// Deletes an invoice and reports the result in place; unlike create and
/// update this action never navigates away from the listing.
pub struct DeleteInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl DeleteInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(&self, command: DeleteInvoiceCommand) -> ActionState {
    let id = match command.id.as_deref().map(Uuid::parse_str) {
      Some(Ok(id)) => id,
      _ => {
        return ActionState::Failed {
          message: "Missing Fields. Failed to Delete Invoice.".to_string(),
        };
      }
    };

    match self.invoice_service.delete_invoice(id).await {
      Ok(()) => {
        tracing::info!(invoice_id = %id, "Invoice deleted");
        ActionState::Done {
          message: "Deleted Invoice.".to_string(),
        }
      }
      Err(e) => {
        tracing::error!(invoice_id = %id, "Failed to delete invoice: {}", e);
        ActionState::Failed {
          message: "Database Error: Failed to Delete Invoice.".to_string(),
        }
      }
    }
  }
}
