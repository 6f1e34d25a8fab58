pub mod prompts;
pub mod render;

pub use prompts::{prompt_edit, prompt_yes_no, resolve_field, FieldMatch};
pub use render::{display_analysis, display_progress, display_reconciliation, form_lines};
