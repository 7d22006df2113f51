use std::sync::Arc;
use tera::Tera;

use super::errors::ApiError;

/// Tera wrapper shared across handlers.
#[derive(Clone)]
pub struct TemplateEngine {
  tera: Arc<Tera>,
}

impl TemplateEngine {
  pub fn new() -> Result<Self, tera::Error> {
    let mut tera = Tera::new("templates/**/*.html.tera")?;
    tera.autoescape_on(vec![".html.tera", ".html"]);

    Ok(Self {
      tera: Arc::new(tera),
    })
  }

  /// Renders a page template, mapping template failures to an internal error.
  pub fn render_page(
    &self,
    template: &str,
    context: &tera::Context,
  ) -> Result<String, ApiError> {
    self
      .tera
      .render(template, context)
      .map_err(|e| ApiError::Internal(format!("Template error: {}", e)))
  }
}
