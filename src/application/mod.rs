//! Application layer
//!
//! Use cases orchestrating the domain service. Form-submission actions
//! (`create`, `update`, `delete`) take raw field values and return an
//! `ActionState`; read use cases return plain DTOs.

pub mod invoice;
