//! Data structures for exploratory text analysis.

mod table;
mod term;

pub use table::{Cell, ColumnTable, Records};
pub use term::Term;
