use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::invoice::{InvoiceError, PageCache};

/// Process-local page cache for tests and single-instance development runs.
#[derive(Default)]
pub struct MemoryPageCache {
  pages: Mutex<HashMap<String, String>>,
}

impl MemoryPageCache {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl PageCache for MemoryPageCache {
  async fn get(&self, path: &str) -> Result<Option<String>, InvoiceError> {
    Ok(self.pages.lock().unwrap().get(path).cloned())
  }

  async fn put(&self, path: &str, html: &str) -> Result<(), InvoiceError> {
    self
      .pages
      .lock()
      .unwrap()
      .insert(path.to_string(), html.to_string());
    Ok(())
  }

  async fn invalidate(&self, path: &str) -> Result<(), InvoiceError> {
    self.pages.lock().unwrap().remove(path);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_put_get_invalidate() {
    let cache = MemoryPageCache::new();
    assert_eq!(cache.get("/dashboard/invoices").await.unwrap(), None);

    cache.put("/dashboard/invoices", "<html>").await.unwrap();
    assert_eq!(
      cache.get("/dashboard/invoices").await.unwrap().as_deref(),
      Some("<html>")
    );

    cache.invalidate("/dashboard/invoices").await.unwrap();
    assert_eq!(cache.get("/dashboard/invoices").await.unwrap(), None);
  }

  #[tokio::test]
  async fn test_invalidate_missing_entry_is_a_no_op() {
    let cache = MemoryPageCache::new();
    assert!(cache.invalidate("/dashboard/invoices").await.is_ok());
  }
}
