use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueObjectError {
  #[error("Invalid customer: {0}")]
  InvalidCustomer(String),
  #[error("Invalid amount: {0}")]
  InvalidAmount(String),
  #[error("Invalid status: {0}")]
  InvalidStatus(String),
}

// Customer reference as submitted by the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerId(String);

impl CustomerId {
  pub fn new(value: &str) -> Result<Self, ValueObjectError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidCustomer(
        "Customer id cannot be empty".to_string(),
      ));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn value(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for CustomerId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Monetary amount in major currency units; persisted as integer cents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount {
  value: Decimal,
  cents: i64,
}

impl Amount {
  pub fn new(value: Decimal) -> Result<Self, ValueObjectError> {
    if value <= Decimal::ZERO {
      return Err(ValueObjectError::InvalidAmount(
        "Amount must be greater than zero".to_string(),
      ));
    }
    let cents = (value * Decimal::ONE_HUNDRED)
      .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
      .to_i64()
      .ok_or_else(|| ValueObjectError::InvalidAmount("Amount is too large".to_string()))?;
    Ok(Self { value, cents })
  }

  pub fn value(&self) -> Decimal {
    self.value
  }

  /// Amount in minor units, rounded to the nearest cent.
  pub fn cents(&self) -> i64 {
    self.cents
  }
}

impl FromStr for Amount {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let value = Decimal::from_str(s.trim())
      .map_err(|_| ValueObjectError::InvalidAmount(format!("Not a number: {}", s)))?;
    Self::new(value)
  }
}

impl fmt::Display for Amount {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:.2}", self.value)
  }
}

// Invoice Status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
  Pending,
  Paid,
}

impl InvoiceStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      InvoiceStatus::Pending => "pending",
      InvoiceStatus::Paid => "paid",
    }
  }
}

impl FromStr for InvoiceStatus {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    // Exact match only; the form submits the enum values verbatim
    match s {
      "pending" => Ok(InvoiceStatus::Pending),
      "paid" => Ok(InvoiceStatus::Paid),
      _ => Err(ValueObjectError::InvalidStatus(format!(
        "Unknown status: {}",
        s
      ))),
    }
  }
}

impl fmt::Display for InvoiceStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn test_customer_id() {
    assert!(CustomerId::new("cust_1").is_ok());
    assert!(CustomerId::new("").is_err());
    assert!(CustomerId::new("   ").is_err());
    assert_eq!(CustomerId::new(" cust_1 ").unwrap().value(), "cust_1");
  }

  #[test]
  fn test_amount_positive_only() {
    assert!(Amount::new(dec!(10)).is_ok());
    assert!(Amount::new(dec!(0)).is_err());
    assert!(Amount::new(dec!(-5)).is_err());
  }

  #[test]
  fn test_amount_cents_exact() {
    assert_eq!(Amount::new(dec!(45.00)).unwrap().cents(), 4500);
    assert_eq!(Amount::new(dec!(0.01)).unwrap().cents(), 1);
    assert_eq!(Amount::new(dec!(123.45)).unwrap().cents(), 12345);
    assert_eq!(Amount::new(dec!(10)).unwrap().cents(), 1000);
  }

  #[test]
  fn test_amount_rounds_sub_cent_input() {
    assert_eq!(Amount::new(dec!(1.005)).unwrap().cents(), 101);
    assert_eq!(Amount::new(dec!(1.004)).unwrap().cents(), 100);
  }

  #[test]
  fn test_amount_from_str() {
    assert_eq!(Amount::from_str("45.00").unwrap().cents(), 4500);
    assert_eq!(Amount::from_str(" 10 ").unwrap().cents(), 1000);
    assert!(Amount::from_str("abc").is_err());
    assert!(Amount::from_str("").is_err());
    assert!(Amount::from_str("-1").is_err());
    assert!(Amount::from_str("0").is_err());
  }

  #[test]
  fn test_status_exact_values() {
    assert_eq!(
      InvoiceStatus::from_str("pending").unwrap(),
      InvoiceStatus::Pending
    );
    assert_eq!(InvoiceStatus::from_str("paid").unwrap(), InvoiceStatus::Paid);
    assert!(InvoiceStatus::from_str("Paid").is_err());
    assert!(InvoiceStatus::from_str("overdue").is_err());
    assert!(InvoiceStatus::from_str("").is_err());
  }

  #[test]
  fn test_status_serializes_lowercase() {
    assert_eq!(
      serde_json::to_string(&InvoiceStatus::Pending).unwrap(),
      "\"pending\""
    );
  }
}
