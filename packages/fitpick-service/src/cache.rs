use fitpick_domain::{BudgetWindow, SearchRequest, text};

const CACHE_KEY_VERSION: &str = "v1";
const BUDGET_BUCKET: u64 = 1_000;
const UNLIMITED_TOKEN: &str = "unlimited";

/// Deterministic fingerprint of the effective request. Budgets are bucketed
/// to the nearest 1000 and tag lists sorted after normalization, so requests
/// differing only in tag order or free-text whitespace share a key.
pub fn build_cache_key(request: &SearchRequest, window: BudgetWindow) -> String {
	let max_key = match window.max {
		Some(max) => bucket(max).to_string(),
		None => UNLIMITED_TOKEN.to_string(),
	};

	[
		CACHE_KEY_VERSION.to_string(),
		request.item_type.as_str().to_string(),
		bucket(window.min).to_string(),
		max_key,
		request.gender.map(|gender| gender.as_str().to_string()).unwrap_or_default(),
		normalize_tags(&request.season),
		normalize_tags(&request.color),
		normalize_tags(&request.material),
		text::normalize(request.mood.as_deref().unwrap_or("")),
		text::normalize(&request.free_text),
	]
	.join(":")
}

fn bucket(value: u64) -> u64 {
	(value / BUDGET_BUCKET) * BUDGET_BUCKET
}

fn normalize_tags(tags: &[String]) -> String {
	let mut normalized: Vec<String> =
		tags.iter().map(|tag| text::normalize(tag)).filter(|tag| !tag.is_empty()).collect();

	normalized.sort();

	normalized.join(",")
}

#[cfg(test)]
mod tests {
	use super::build_cache_key;
	use fitpick_domain::{Gender, ItemType, SearchRequest};

	const CEILING: u64 = 20_000;

	fn request() -> SearchRequest {
		SearchRequest {
			free_text: "白い トップス".to_string(),
			item_type: ItemType::Tops,
			budget_min: 3_500,
			budget_max: 12_900,
			gender: Some(Gender::Womens),
			season: vec!["春".to_string(), "秋".to_string()],
			color: vec!["白".to_string()],
			material: Vec::new(),
			mood: None,
			exclude: Vec::new(),
		}
	}

	#[test]
	fn key_is_version_prefixed_and_bucketed() {
		let request = request();
		let key = build_cache_key(&request, request.budget_window(CEILING));

		assert_eq!(key, "v1:tops:3000:12000:womens:春,秋:白:::白い トップス");
	}

	#[test]
	fn tag_order_does_not_change_the_key() {
		let mut reordered = request();
		reordered.season = vec!["秋".to_string(), "春".to_string()];

		let request = request();

		assert_eq!(
			build_cache_key(&request, request.budget_window(CEILING)),
			build_cache_key(&reordered, reordered.budget_window(CEILING))
		);
	}

	#[test]
	fn free_text_whitespace_does_not_change_the_key() {
		let mut spaced = request();
		spaced.free_text = " 白い　 トップス\n".to_string();

		let request = request();

		assert_eq!(
			build_cache_key(&request, request.budget_window(CEILING)),
			build_cache_key(&spaced, spaced.budget_window(CEILING))
		);
	}

	#[test]
	fn ceiling_budgets_collapse_to_the_unlimited_token() {
		let mut unlimited = request();
		unlimited.budget_max = 25_000;

		let key = build_cache_key(&unlimited, unlimited.budget_window(CEILING));

		assert!(key.contains(":unlimited:"));
	}

	#[test]
	fn exclude_words_do_not_affect_the_key() {
		// Matches the upstream behavior: the fingerprint covers the effective
		// search inputs, and exclusions only prune fetched candidates.
		let mut with_exclusions = request();
		with_exclusions.exclude = vec!["花柄".to_string()];

		let request = request();

		assert_eq!(
			build_cache_key(&request, request.budget_window(CEILING)),
			build_cache_key(&with_exclusions, with_exclusions.budget_window(CEILING))
		);
	}
}
