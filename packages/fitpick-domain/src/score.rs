use std::collections::HashSet;

use crate::{BudgetWindow, CandidateItem, SearchRequest, query, text};

const BASE_SCORE: f64 = 50.0;
const TAG_BONUS: f64 = 10.0;
const KEYWORD_BONUS: f64 = 5.0;
const MAX_KEYWORD_HITS: usize = 4;

/// Deterministic relevance score, meaningful only relative to other
/// candidates of the same request. The base credits the item-type (30) and
/// budget (20) matches the upstream query and filter already guarantee.
pub fn score_candidate(item: &CandidateItem, request: &SearchRequest, window: BudgetWindow) -> i64 {
	let item_text = text::normalize(&item.search_text());
	let mut score = BASE_SCORE;

	if any_tag_matches(&request.color, &item_text) {
		score += TAG_BONUS;
	}
	if any_tag_matches(&request.season, &item_text) {
		score += TAG_BONUS;
	}
	if any_tag_matches(&request.material, &item_text) {
		score += TAG_BONUS;
	}
	if request.mood.as_deref().map(|mood| tag_matches(mood, &item_text)).unwrap_or(false) {
		score += TAG_BONUS;
	}

	let keywords: HashSet<String> = query::extract_keywords(&request.free_text).into_iter().collect();
	let hits = keywords.iter().filter(|keyword| item_text.contains(keyword.as_str())).count();

	score += KEYWORD_BONUS * hits.min(MAX_KEYWORD_HITS) as f64;

	// Linear price-proximity bonus, gone once the item sits 10k units away
	// from the window midpoint. An unlimited window has no midpoint.
	if let Some(midpoint) = window.midpoint() {
		let distance = item.price.abs_diff(midpoint) as f64;

		score += (5.0 - distance / 2_000.0).max(0.0);
	}

	score.round() as i64
}

fn any_tag_matches(tags: &[String], item_text: &str) -> bool {
	tags.iter().any(|tag| tag_matches(tag, item_text))
}

fn tag_matches(tag: &str, item_text: &str) -> bool {
	let normalized = text::normalize(tag);

	!normalized.is_empty() && item_text.contains(&normalized)
}

#[cfg(test)]
mod tests {
	use super::score_candidate;
	use crate::{BudgetWindow, CandidateItem, ItemType, SearchRequest, Site};

	const WINDOW: BudgetWindow = BudgetWindow { min: 2_000, max: Some(10_000) };

	fn item(name: &str, price: u64) -> CandidateItem {
		CandidateItem {
			id: "item-1".to_string(),
			site: Site::Rakuten,
			name: name.to_string(),
			price,
			image_url: None,
			url: "https://example.com/item-1".to_string(),
			brand: None,
			summary: None,
			score: None,
			size_prediction: None,
		}
	}

	fn request() -> SearchRequest {
		SearchRequest {
			free_text: "".to_string(),
			item_type: ItemType::Tops,
			budget_min: 2_000,
			budget_max: 10_000,
			gender: None,
			season: Vec::new(),
			color: Vec::new(),
			material: Vec::new(),
			mood: None,
			exclude: Vec::new(),
		}
	}

	#[test]
	fn base_score_applies_without_any_match() {
		// Midpoint 6000, distance 10000 => no proximity bonus.
		assert_eq!(score_candidate(&item("ニット", 16_000), &request(), WINDOW), 50);
	}

	#[test]
	fn tag_bonuses_are_capped_per_category() {
		let mut request = request();
		request.color = vec!["白".to_string(), "ホワイト".to_string()];

		// Both colors match but the color bonus is credited once.
		let scored = score_candidate(&item("白 ホワイト ブラウス", 16_000), &request, WINDOW);

		assert_eq!(scored, 60);
	}

	#[test]
	fn mood_and_material_each_add_ten() {
		let mut request = request();
		request.material = vec!["リネン".to_string()];
		request.mood = Some("きれいめ".to_string());

		let scored = score_candidate(&item("きれいめ リネン シャツ", 16_000), &request, WINDOW);

		assert_eq!(scored, 70);
	}

	#[test]
	fn keyword_hits_cap_at_twenty() {
		let mut request = request();
		request.free_text = "白 長袖 綿 無地 襟付き".to_string();

		let scored =
			score_candidate(&item("白 長袖 綿 無地 襟付き シャツ", 16_000), &request, WINDOW);

		assert_eq!(scored, 70);
	}

	#[test]
	fn proximity_bonus_peaks_at_the_midpoint() {
		assert_eq!(score_candidate(&item("ニット", 6_000), &request(), WINDOW), 55);
		assert_eq!(score_candidate(&item("ニット", 8_000), &request(), WINDOW), 54);
	}

	#[test]
	fn proximity_bonus_is_zero_for_unlimited_windows() {
		let window = BudgetWindow { min: 2_000, max: None };

		assert_eq!(score_candidate(&item("ニット", 2_000), &request(), window), 50);
	}

	#[test]
	fn score_is_deterministic() {
		let candidate = item("白 ブラウス", 5_000);
		let request = request();

		assert_eq!(
			score_candidate(&candidate, &request, WINDOW),
			score_candidate(&candidate, &request, WINDOW)
		);
	}
}
