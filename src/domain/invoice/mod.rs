pub mod entities;
pub mod errors;
pub mod form;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{Invoice, InvoiceUpdate};
pub use errors::InvoiceError;
pub use form::{FieldErrors, InvoiceDraft, InvoiceForm};
pub use ports::{InvoiceRepository, PageCache};
pub use services::{INVOICES_PATH, InvoiceService};
pub use value_objects::{Amount, CustomerId, InvoiceStatus, ValueObjectError};
