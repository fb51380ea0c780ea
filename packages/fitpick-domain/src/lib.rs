pub mod filter;
pub mod query;
pub mod score;
pub mod select;
pub mod text;

mod types;

pub use types::{BudgetWindow, CandidateItem, Gender, ItemType, SearchRequest, Site};

/// The pipeline never returns more than this many items.
pub const TOP_PICKS: usize = 4;
