use actix_web::web;
use std::sync::Arc;

use crate::application::invoice::{
  CreateInvoiceUseCase, DeleteInvoiceUseCase, GetInvoiceUseCase, ListInvoicesUseCase,
  UpdateInvoiceUseCase,
};
use crate::domain::invoice::PageCache;

use super::handlers::invoices_web;
use super::templates::TemplateEngine;

/// Everything the invoice web UI needs, wired once in `main`.
pub struct InvoiceRouteDependencies {
  pub templates: TemplateEngine,
  pub page_cache: Arc<dyn PageCache>,
  pub create_invoice_use_case: Arc<CreateInvoiceUseCase>,
  pub update_invoice_use_case: Arc<UpdateInvoiceUseCase>,
  pub delete_invoice_use_case: Arc<DeleteInvoiceUseCase>,
  pub list_invoices_use_case: Arc<ListInvoicesUseCase>,
  pub get_invoice_use_case: Arc<GetInvoiceUseCase>,
}

/// Configure invoice web UI routes
///
/// # Routes
///
/// - GET /dashboard/invoices - Invoice listing page (served from the page
///   cache when a rendered copy exists)
/// - GET /dashboard/invoices/create - Invoice creation form
/// - POST /dashboard/invoices/create - Create an invoice
/// - GET /dashboard/invoices/{id}/edit - Invoice edit form
/// - POST /dashboard/invoices/edit - Update an invoice
/// - POST /dashboard/invoices/delete - Delete an invoice
pub fn configure_invoice_routes(cfg: &mut web::ServiceConfig, deps: InvoiceRouteDependencies) {
  cfg.service(
    web::scope("/dashboard/invoices")
      .app_data(web::Data::new(deps.templates))
      .app_data(web::Data::new(deps.page_cache))
      .app_data(web::Data::new(deps.create_invoice_use_case))
      .app_data(web::Data::new(deps.update_invoice_use_case))
      .app_data(web::Data::new(deps.delete_invoice_use_case))
      .app_data(web::Data::new(deps.list_invoices_use_case))
      .app_data(web::Data::new(deps.get_invoice_use_case))
      .route("", web::get().to(invoices_web::invoices_page))
      .route("/create", web::get().to(invoices_web::invoice_create_page))
      .route(
        "/create",
        web::post().to(invoices_web::create_invoice_submit),
      )
      .route(
        "/{id}/edit",
        web::get().to(invoices_web::invoice_edit_page),
      )
      .route("/edit", web::post().to(invoices_web::update_invoice_submit))
      .route(
        "/delete",
        web::post().to(invoices_web::delete_invoice_submit),
      ),
  );
}
