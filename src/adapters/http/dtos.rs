use serde::{Deserialize, Serialize};

/// Create-invoice form body. Fields are optional at the transport layer so a
/// missing input reaches validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateInvoiceFormDto {
  pub customer_id: Option<String>,
  pub amount: Option<String>,
  pub status: Option<String>,
}

/// Update-invoice form body; `id` travels as a hidden field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateInvoiceFormDto {
  pub id: Option<String>,
  pub customer_id: Option<String>,
  pub amount: Option<String>,
  pub status: Option<String>,
}

/// Delete-invoice form body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteInvoiceFormDto {
  pub id: Option<String>,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,
}
