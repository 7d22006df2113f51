use serde::Serialize;

use crate::domain::invoice::FieldErrors;

/// Outcome of a form-submission action, returned as data.
///
/// Redirects are modeled as a value rather than a control transfer, so the
/// HTTP adapter decides how to realize them and nothing relies on code after
/// a redirect being unreachable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionState {
  /// The mutation succeeded; the browser should move to `location`.
  Navigate { location: String },
  /// Form input failed validation; the database was never touched.
  Invalid {
    errors: FieldErrors,
    message: String,
  },
  /// The statement failed; no cache invalidation, no navigation.
  Failed { message: String },
  /// Completed in place, without navigation.
  Done { message: String },
}

impl ActionState {
  pub fn message(&self) -> Option<&str> {
    match self {
      ActionState::Navigate { .. } => None,
      ActionState::Invalid { message, .. } => Some(message),
      ActionState::Failed { message } => Some(message),
      ActionState::Done { message } => Some(message),
    }
  }
}
