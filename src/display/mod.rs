//! Record printing with explicit display configuration.

mod config;
mod records;
mod wrap;

pub use config::{DisplayConfig, Separator};
pub use records::{print_records, render_records};
pub use wrap::wrap_text;
