use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::invoice::{
  CustomerId, Invoice, InvoiceStatus, InvoiceUpdate, errors::InvoiceError,
  ports::InvoiceRepository,
};

#[derive(Debug, FromRow)]
struct InvoiceRow {
  id: Uuid,
  customer_id: String,
  amount: i64,
  status: String,
  date: NaiveDate,
}

impl TryFrom<InvoiceRow> for Invoice {
  type Error = InvoiceError;

  fn try_from(row: InvoiceRow) -> Result<Self, Self::Error> {
    let customer_id = CustomerId::new(&row.customer_id)?;
    let status = InvoiceStatus::from_str(&row.status)?;

    Ok(Invoice {
      id: row.id,
      customer_id,
      amount_cents: row.amount,
      status,
      date: row.date,
    })
  }
}

pub struct PostgresInvoiceRepository {
  pool: PgPool,
}

impl PostgresInvoiceRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl InvoiceRepository for PostgresInvoiceRepository {
  async fn insert(&self, invoice: Invoice) -> Result<Invoice, InvoiceError> {
    let row = sqlx::query_as::<_, InvoiceRow>(
      r#"
            INSERT INTO invoices (id, customer_id, amount, status, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, customer_id, amount, status, date
            "#,
    )
    .bind(invoice.id)
    .bind(invoice.customer_id.value())
    .bind(invoice.amount_cents)
    .bind(invoice.status.as_str())
    .bind(invoice.date)
    .fetch_one(&self.pool)
    .await?;

    row.try_into()
  }

  async fn update(&self, id: Uuid, update: InvoiceUpdate) -> Result<(), InvoiceError> {
    // `date` is deliberately absent from the SET list
    let result = sqlx::query(
      r#"
            UPDATE invoices
            SET customer_id = $2, amount = $3, status = $4
            WHERE id = $1
            "#,
    )
    .bind(id)
    .bind(update.customer_id.value())
    .bind(update.amount_cents)
    .bind(update.status.as_str())
    .execute(&self.pool)
    .await?;

    if result.rows_affected() == 0 {
      return Err(InvoiceError::NotFound(id));
    }
    Ok(())
  }

  async fn delete(&self, id: Uuid) -> Result<(), InvoiceError> {
    let result = sqlx::query(
      r#"
            DELETE FROM invoices
            WHERE id = $1
            "#,
    )
    .bind(id)
    .execute(&self.pool)
    .await?;

    if result.rows_affected() == 0 {
      return Err(InvoiceError::NotFound(id));
    }
    Ok(())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, InvoiceError> {
    let row = sqlx::query_as::<_, InvoiceRow>(
      r#"
            SELECT id, customer_id, amount, status, date
            FROM invoices
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    row.map(|r| r.try_into()).transpose()
  }

  async fn list(&self) -> Result<Vec<Invoice>, InvoiceError> {
    let rows = sqlx::query_as::<_, InvoiceRow>(
      r#"
            SELECT id, customer_id, amount, status, date
            FROM invoices
            ORDER BY date DESC, id
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;

  #[test]
  fn test_row_conversion() {
    let row = InvoiceRow {
      id: Uuid::new_v4(),
      customer_id: "cust_1".to_string(),
      amount: 4500,
      status: "pending".to_string(),
      date: Utc::now().date_naive(),
    };

    let invoice: Invoice = row.try_into().unwrap();
    assert_eq!(invoice.customer_id.value(), "cust_1");
    assert_eq!(invoice.amount_cents, 4500);
    assert_eq!(invoice.status, InvoiceStatus::Pending);
  }

  #[test]
  fn test_row_conversion_rejects_unknown_status() {
    let row = InvoiceRow {
      id: Uuid::new_v4(),
      customer_id: "cust_1".to_string(),
      amount: 4500,
      status: "archived".to_string(),
      date: Utc::now().date_naive(),
    };

    assert!(Invoice::try_from(row).is_err());
  }
}
