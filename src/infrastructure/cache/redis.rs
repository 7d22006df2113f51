use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use crate::domain::invoice::{InvoiceError, PageCache};

/// Rendered-page cache backed by Redis, shared across server instances.
///
/// Keys are route paths prefixed with `page:`; entries live until a mutation
/// invalidates them.
#[derive(Clone)]
pub struct RedisPageCache {
  conn: ConnectionManager,
}

impl RedisPageCache {
  pub fn new(conn: ConnectionManager) -> Self {
    Self { conn }
  }

  fn key(path: &str) -> String {
    format!("page:{}", path)
  }
}

#[async_trait]
impl PageCache for RedisPageCache {
  async fn get(&self, path: &str) -> Result<Option<String>, InvoiceError> {
    let mut conn = self.conn.clone();
    conn
      .get::<_, Option<String>>(Self::key(path))
      .await
      .map_err(|e| InvoiceError::Cache(e.to_string()))
  }

  async fn put(&self, path: &str, html: &str) -> Result<(), InvoiceError> {
    let mut conn = self.conn.clone();
    conn
      .set::<_, _, ()>(Self::key(path), html)
      .await
      .map_err(|e| InvoiceError::Cache(e.to_string()))
  }

  async fn invalidate(&self, path: &str) -> Result<(), InvoiceError> {
    let mut conn = self.conn.clone();
    conn
      .del::<_, ()>(Self::key(path))
      .await
      .map_err(|e| InvoiceError::Cache(e.to_string()))
  }
}
