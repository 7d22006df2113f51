use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{Amount, CustomerId, InvoiceStatus};

/// Persisted invoice row.
///
/// `id` and `date` are assigned at creation and never change afterwards;
/// updates only touch customer, amount, and status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
  pub id: Uuid,
  pub customer_id: CustomerId,
  /// Amount in minor units (cents), always non-negative.
  pub amount_cents: i64,
  pub status: InvoiceStatus,
  pub date: NaiveDate,
}

impl Invoice {
  /// Builds a new invoice with a fresh id and today's date.
  pub fn create(customer_id: CustomerId, amount: &Amount, status: InvoiceStatus) -> Self {
    Self {
      id: Uuid::new_v4(),
      customer_id,
      amount_cents: amount.cents(),
      status,
      date: Utc::now().date_naive(),
    }
  }
}

/// Mutable portion of an invoice; `id` and `date` are deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceUpdate {
  pub customer_id: CustomerId,
  pub amount_cents: i64,
  pub status: InvoiceStatus,
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn test_create_stamps_id_and_today() {
    let amount = Amount::new(dec!(45.00)).unwrap();
    let invoice = Invoice::create(
      CustomerId::new("cust_1").unwrap(),
      &amount,
      InvoiceStatus::Pending,
    );

    assert_eq!(invoice.amount_cents, 4500);
    assert_eq!(invoice.status, InvoiceStatus::Pending);
    assert_eq!(invoice.date, Utc::now().date_naive());
  }

  #[test]
  fn test_create_assigns_unique_ids() {
    let amount = Amount::new(dec!(1)).unwrap();
    let a = Invoice::create(
      CustomerId::new("cust_1").unwrap(),
      &amount,
      InvoiceStatus::Paid,
    );
    let b = Invoice::create(
      CustomerId::new("cust_1").unwrap(),
      &amount,
      InvoiceStatus::Paid,
    );
    assert_ne!(a.id, b.id);
  }
}
