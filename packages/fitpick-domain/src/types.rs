use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
	Tops,
	Outer,
	Bottoms,
	Onepiece,
	Shoes,
	Bags,
	Others,
}
impl ItemType {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Tops => "tops",
			Self::Outer => "outer",
			Self::Bottoms => "bottoms",
			Self::Onepiece => "onepiece",
			Self::Shoes => "shoes",
			Self::Bags => "bags",
			Self::Others => "others",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
	Mens,
	Womens,
}
impl Gender {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Mens => "mens",
			Self::Womens => "womens",
		}
	}

	/// The marketplace-facing search token for this gender.
	pub fn query_token(self) -> &'static str {
		match self {
			Self::Mens => "メンズ",
			Self::Womens => "レディース",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
	Amazon,
	Zozo,
	Rakuten,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
	pub free_text: String,
	pub item_type: ItemType,
	pub budget_min: u64,
	pub budget_max: u64,
	pub gender: Option<Gender>,
	#[serde(default)]
	pub season: Vec<String>,
	#[serde(default)]
	pub color: Vec<String>,
	#[serde(default)]
	pub material: Vec<String>,
	pub mood: Option<String>,
	#[serde(default)]
	pub exclude: Vec<String>,
}
impl SearchRequest {
	/// Derives the effective budget window. A `budget_max` at or above the
	/// ceiling collapses to unlimited; a crossed window is straightened so that
	/// `min <= max` always holds afterwards.
	pub fn budget_window(&self, ceiling: u64) -> BudgetWindow {
		let max = (self.budget_max < ceiling).then_some(self.budget_max.max(self.budget_min));

		BudgetWindow { min: self.budget_min, max }
	}
}

/// Effective budget bounds; `max == None` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetWindow {
	pub min: u64,
	pub max: Option<u64>,
}
impl BudgetWindow {
	pub fn contains(self, price: u64) -> bool {
		price >= self.min && self.max.map(|max| price <= max).unwrap_or(true)
	}

	/// Midpoint of the window, undefined while the window is unlimited. Total
	/// over the whole u64 range; a straightened window can hold huge bounds.
	pub fn midpoint(self) -> Option<u64> {
		self.max.map(|max| self.min.midpoint(max))
	}

	/// The rescue stage searches a wider window: min scaled down by 20%, max up
	/// by 20%. An unlimited max stays unlimited.
	pub fn widened(self) -> Self {
		Self {
			min: (self.min as f64 * 0.8).floor() as u64,
			max: self.max.map(|max| (max as f64 * 1.2).floor() as u64),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateItem {
	pub id: String,
	pub site: Site,
	pub name: String,
	pub price: u64,
	pub image_url: Option<String>,
	pub url: String,
	pub brand: Option<String>,
	pub summary: Option<String>,
	pub score: Option<i64>,
	pub size_prediction: Option<String>,
}
impl CandidateItem {
	/// Name and summary joined, the text every keyword check runs against.
	pub fn search_text(&self) -> String {
		match self.summary.as_deref() {
			Some(summary) => format!("{} {summary}", self.name),
			None => self.name.clone(),
		}
	}
}
