use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::value_objects::{Amount, CustomerId, InvoiceStatus};

/// Raw form fields as submitted by the browser, before any coercion.
///
/// Every field is optional at this level; missing fields become validation
/// errors, not deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceForm {
  pub customer_id: Option<String>,
  pub amount: Option<String>,
  pub status: Option<String>,
}

/// Per-field validation messages, keyed the way the form renders them.
///
/// Serializes to a mapping whose keys are the offending fields only, each an
/// ordered list of human-readable messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub customer_id: Vec<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub amount: Vec<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub status: Vec<String>,
}

impl FieldErrors {
  pub fn is_empty(&self) -> bool {
    self.customer_id.is_empty() && self.amount.is_empty() && self.status.is_empty()
  }
}

/// Typed, validated invoice input ready for persistence.
#[derive(Debug, Clone)]
pub struct InvoiceDraft {
  pub customer_id: CustomerId,
  pub amount: Amount,
  pub status: InvoiceStatus,
}

impl InvoiceForm {
  /// Validates and coerces the raw fields into a typed draft.
  ///
  /// Returns either the draft or the full set of field errors; validation
  /// never stops at the first failure so the form can show every problem at
  /// once.
  pub fn validate(&self) -> Result<InvoiceDraft, FieldErrors> {
    let mut errors = FieldErrors::default();

    let customer_id = self
      .customer_id
      .as_deref()
      .and_then(|raw| CustomerId::new(raw).ok());
    if customer_id.is_none() {
      errors
        .customer_id
        .push("Please select a customer".to_string());
    }

    let amount = self.amount.as_deref().and_then(|raw| Amount::from_str(raw).ok());
    if amount.is_none() {
      errors
        .amount
        .push("Amount must be greater than 0".to_string());
    }

    let status = self
      .status
      .as_deref()
      .and_then(|raw| InvoiceStatus::from_str(raw).ok());
    if status.is_none() {
      errors
        .status
        .push("Please select a valid status".to_string());
    }

    match (customer_id, amount, status) {
      (Some(customer_id), Some(amount), Some(status)) => Ok(InvoiceDraft {
        customer_id,
        amount,
        status,
      }),
      _ => Err(errors),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn form(customer_id: Option<&str>, amount: Option<&str>, status: Option<&str>) -> InvoiceForm {
    InvoiceForm {
      customer_id: customer_id.map(String::from),
      amount: amount.map(String::from),
      status: status.map(String::from),
    }
  }

  #[test]
  fn test_valid_form() {
    let draft = form(Some("cust_1"), Some("45.00"), Some("pending"))
      .validate()
      .unwrap();
    assert_eq!(draft.customer_id.value(), "cust_1");
    assert_eq!(draft.amount.cents(), 4500);
    assert_eq!(draft.status, InvoiceStatus::Pending);
  }

  #[test]
  fn test_empty_customer_id() {
    let errors = form(Some(""), Some("10"), Some("paid")).validate().unwrap_err();
    assert_eq!(errors.customer_id, vec!["Please select a customer"]);
    assert!(errors.amount.is_empty());
    assert!(errors.status.is_empty());
  }

  #[test]
  fn test_missing_customer_id() {
    let errors = form(None, Some("10"), Some("paid")).validate().unwrap_err();
    assert_eq!(errors.customer_id, vec!["Please select a customer"]);
  }

  #[test]
  fn test_amount_rejections() {
    for bad in ["0", "-5", "abc", ""] {
      let errors = form(Some("cust_1"), Some(bad), Some("paid"))
        .validate()
        .unwrap_err();
      assert_eq!(errors.amount, vec!["Amount must be greater than 0"], "input {:?}", bad);
    }
  }

  #[test]
  fn test_invalid_status() {
    let errors = form(Some("cust_1"), Some("10"), Some("overdue"))
      .validate()
      .unwrap_err();
    assert_eq!(errors.status, vec!["Please select a valid status"]);
  }

  #[test]
  fn test_all_fields_missing() {
    let errors = InvoiceForm::default().validate().unwrap_err();
    assert_eq!(errors.customer_id.len(), 1);
    assert_eq!(errors.amount.len(), 1);
    assert_eq!(errors.status.len(), 1);
  }

  #[test]
  fn test_field_errors_serialize_offending_keys_only() {
    let errors = form(Some("cust_1"), Some("0"), Some("paid"))
      .validate()
      .unwrap_err();
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(
      json,
      serde_json::json!({ "amount": ["Amount must be greater than 0"] })
    );
  }
}
