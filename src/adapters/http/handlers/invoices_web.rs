use actix_web::{HttpResponse, http::header, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::adapters::http::dtos::{
  CreateInvoiceFormDto, DeleteInvoiceFormDto, UpdateInvoiceFormDto,
};
use crate::adapters::http::{errors::ApiError, templates::TemplateEngine};
use crate::application::invoice::{
  ActionState, CreateInvoiceCommand, CreateInvoiceUseCase, DeleteInvoiceCommand,
  DeleteInvoiceUseCase, GetInvoiceUseCase, ListInvoicesUseCase, UpdateInvoiceCommand,
  UpdateInvoiceUseCase,
};
use crate::domain::invoice::{INVOICES_PATH, PageCache};

fn html_response(html: String) -> HttpResponse {
  HttpResponse::Ok().content_type("text/html").body(html)
}

fn see_other(location: &str) -> HttpResponse {
  HttpResponse::SeeOther()
    .insert_header((header::LOCATION, location))
    .finish()
}

/// Inserts the failure parts of an action state into a template context.
fn insert_state(context: &mut tera::Context, state: &ActionState) {
  match state {
    ActionState::Invalid { errors, message } => {
      context.insert("errors", errors);
      context.insert("message", message);
    }
    ActionState::Failed { message } | ActionState::Done { message } => {
      context.insert("message", message);
    }
    ActionState::Navigate { .. } => {}
  }
}

// GET /dashboard/invoices - Cached listing page
pub async fn invoices_page(
  templates: web::Data<TemplateEngine>,
  page_cache: web::Data<Arc<dyn PageCache>>,
  list_invoices_use_case: web::Data<Arc<ListInvoicesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  match page_cache.get(INVOICES_PATH).await {
    Ok(Some(html)) => return Ok(html_response(html)),
    Ok(None) => {}
    Err(e) => tracing::warn!("Page cache read failed: {}", e),
  }

  let response = list_invoices_use_case.execute().await?;

  let mut context = tera::Context::new();
  context.insert("invoices", &response.invoices);

  let html = templates.render_page("pages/invoices.html.tera", &context)?;

  if let Err(e) = page_cache.put(INVOICES_PATH, &html).await {
    tracing::warn!("Page cache write failed: {}", e);
  }

  Ok(html_response(html))
}

// GET /dashboard/invoices/create - Show invoice creation form
pub async fn invoice_create_page(
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, ApiError> {
  let mut context = tera::Context::new();
  context.insert("form", &CreateInvoiceFormDto::default());

  let html = templates.render_page("pages/invoice_create.html.tera", &context)?;
  Ok(html_response(html))
}

// POST /dashboard/invoices/create - Create a new invoice
pub async fn create_invoice_submit(
  form: web::Form<CreateInvoiceFormDto>,
  templates: web::Data<TemplateEngine>,
  create_invoice_use_case: web::Data<Arc<CreateInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let form = form.into_inner();

  let state = create_invoice_use_case
    .execute(CreateInvoiceCommand {
      customer_id: form.customer_id.clone(),
      amount: form.amount.clone(),
      status: form.status.clone(),
    })
    .await;

  if let ActionState::Navigate { location } = &state {
    return Ok(see_other(location));
  }

  // Re-render the form with the submitted values and inline errors
  let mut context = tera::Context::new();
  context.insert("form", &form);
  insert_state(&mut context, &state);

  let html = templates.render_page("pages/invoice_create.html.tera", &context)?;
  Ok(html_response(html))
}

// GET /dashboard/invoices/{id}/edit - Show invoice edit form
pub async fn invoice_edit_page(
  path: web::Path<Uuid>,
  templates: web::Data<TemplateEngine>,
  get_invoice_use_case: web::Data<Arc<GetInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let invoice = get_invoice_use_case.execute(path.into_inner()).await?;

  let form = UpdateInvoiceFormDto {
    id: Some(invoice.id.to_string()),
    customer_id: Some(invoice.customer_id),
    amount: Some(invoice.amount),
    status: Some(invoice.status.as_str().to_string()),
  };

  let mut context = tera::Context::new();
  context.insert("form", &form);

  let html = templates.render_page("pages/invoice_edit.html.tera", &context)?;
  Ok(html_response(html))
}

// POST /dashboard/invoices/edit - Update an existing invoice
pub async fn update_invoice_submit(
  form: web::Form<UpdateInvoiceFormDto>,
  templates: web::Data<TemplateEngine>,
  update_invoice_use_case: web::Data<Arc<UpdateInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let form = form.into_inner();

  let state = update_invoice_use_case
    .execute(UpdateInvoiceCommand {
      id: form.id.clone(),
      customer_id: form.customer_id.clone(),
      amount: form.amount.clone(),
      status: form.status.clone(),
    })
    .await;

  if let ActionState::Navigate { location } = &state {
    return Ok(see_other(location));
  }

  let mut context = tera::Context::new();
  context.insert("form", &form);
  insert_state(&mut context, &state);

  let html = templates.render_page("pages/invoice_edit.html.tera", &context)?;
  Ok(html_response(html))
}

// POST /dashboard/invoices/delete - Delete an invoice in place
//
// Invoked from the listing without navigating away, so the outcome comes
// back as data rather than a redirect.
pub async fn delete_invoice_submit(
  form: web::Form<DeleteInvoiceFormDto>,
  delete_invoice_use_case: web::Data<Arc<DeleteInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let state = delete_invoice_use_case
    .execute(DeleteInvoiceCommand {
      id: form.into_inner().id,
    })
    .await;

  Ok(HttpResponse::Ok().json(state))
}
