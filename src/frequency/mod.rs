//! Term frequency aggregation: exclusion, counting and top-k ranking.

mod analysis;
mod exclude;
mod rank;
mod table;

pub use analysis::{TermAnalysis, TermRanking};
pub use exclude::filter_excluded;
pub use rank::{top_k, RankedTerm};
pub use table::{count_frequencies, FrequencyTable};
