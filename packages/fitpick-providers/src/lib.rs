pub mod offline;
pub mod rakuten;

mod error;

pub use error::{Error, Result};

use fitpick_domain::BudgetWindow;

/// Outbound fetch parameters for a candidate source. Bounds are inclusive;
/// `None` means the bound is omitted from the outgoing request entirely, since
/// backing services may reject extreme literal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchQuery {
	pub keyword: String,
	pub min_price: Option<u64>,
	pub max_price: Option<u64>,
	pub hits: u32,
}
impl FetchQuery {
	pub fn from_window(keyword: impl Into<String>, window: BudgetWindow, hits: u32) -> Self {
		Self {
			keyword: keyword.into(),
			min_price: (window.min > 0).then_some(window.min),
			max_price: window.max,
			hits,
		}
	}
}
