//! Per-form reconciliation: which field is the source of truth for an edit,
//! and which other fields it rewrites.

pub mod controller;
pub mod form;
pub mod reconcile;

pub use controller::FormController;
pub use form::{Edit, Field, FormMode, FormSnapshot};
pub use reconcile::{reconcile, Reconciliation};
