use std::collections::HashSet;

use regex::Regex;

use crate::{
	BudgetWindow, CandidateItem, SearchRequest, TOP_PICKS, filter::should_exclude,
	score::score_candidate,
};

/// A candidate whose post-penalty score falls below this is dropped rather
/// than padding the result to four.
const MIN_ACCEPT_SCORE: i64 = 40;
const SAME_BRAND_PENALTY: i64 = 10;
const SAME_NAME_TOKEN_PENALTY: i64 = 8;
/// Effectively exclusive: no achievable score survives it.
const SAME_IMAGE_PENALTY: i64 = 1_000;
const NAME_KEY_PREFIX_CHARS: usize = 80;

/// Greedy diversity selection over the candidate pool: filter, score, stable
/// descending sort, then walk the list refusing near-duplicates (same URL,
/// image, or name key) and penalizing resemblance to already-selected items.
/// Returned items carry their post-penalty score.
pub fn select_top_four(
	candidates: &[CandidateItem],
	request: &SearchRequest,
	window: BudgetWindow,
) -> Vec<CandidateItem> {
	let mut scored: Vec<CandidateItem> = candidates
		.iter()
		.filter(|item| !should_exclude(item, request, window))
		.cloned()
		.map(|mut item| {
			item.score = Some(score_candidate(&item, request, window));

			item
		})
		.collect();

	// Stable sort: ties keep source order, which keeps reruns deterministic.
	scored.sort_by(|a, b| b.score.cmp(&a.score));

	let mut selected: Vec<CandidateItem> = Vec::new();
	let mut seen_urls: HashSet<String> = HashSet::new();
	let mut seen_images: HashSet<String> = HashSet::new();
	let mut seen_name_keys: HashSet<String> = HashSet::new();

	for mut item in scored {
		if seen_urls.contains(&item.url) {
			continue;
		}

		let image_key = item.image_url.as_deref().map(normalize_image_identity);

		if image_key.as_ref().map(|key| seen_images.contains(key)).unwrap_or(false) {
			continue;
		}

		let name_key = name_key(&item);

		if seen_name_keys.contains(&name_key) {
			continue;
		}

		let score = item.score.unwrap_or(0) - diversity_penalty(&selected, &item);

		if score < MIN_ACCEPT_SCORE {
			continue;
		}

		item.score = Some(score);

		seen_urls.insert(item.url.clone());

		if let Some(key) = image_key {
			seen_images.insert(key);
		}

		seen_name_keys.insert(name_key);
		selected.push(item);

		if selected.len() == TOP_PICKS {
			break;
		}
	}

	selected
}

/// Deduction for resembling an already-selected item: same brand, same
/// leading name token, or the same normalized image.
pub fn diversity_penalty(selected: &[CandidateItem], candidate: &CandidateItem) -> i64 {
	let candidate_token = first_name_token(candidate);
	let candidate_image = candidate.image_url.as_deref().map(normalize_image_identity);
	let mut penalty = 0;

	for item in selected {
		if item.brand.is_some() && item.brand == candidate.brand {
			penalty += SAME_BRAND_PENALTY;
		}
		if first_name_token(item) == candidate_token {
			penalty += SAME_NAME_TOKEN_PENALTY;
		}

		let item_image = item.image_url.as_deref().map(normalize_image_identity);

		if item_image.is_some() && item_image == candidate_image {
			penalty += SAME_IMAGE_PENALTY;
		}
	}

	penalty
}

/// Collapses a product image URL to an identity that survives mirror hosts
/// and size variants: the last two non-empty path segments, lowercased. URLs
/// without a recognizable scheme and path fall back to stripping the query
/// string and any embedded size hint.
pub fn normalize_image_identity(url: &str) -> String {
	let without_query = url.split(['?', '#']).next().unwrap_or(url);

	if let Some((_, rest)) = without_query.split_once("://") {
		let segments: Vec<&str> =
			rest.split('/').skip(1).filter(|segment| !segment.is_empty()).collect();

		if !segments.is_empty() {
			let tail = &segments[segments.len().saturating_sub(2)..];

			return tail.join("/").to_lowercase();
		}
	}

	let stripped = Regex::new(r"_ex=\d+x\d+")
		.map(|re| re.replace_all(without_query, "").into_owned())
		.unwrap_or_else(|_| without_query.to_string());

	stripped.to_lowercase()
}

/// Brand and name collapsed to a comparison key: lowercased, punctuation and
/// whitespace stripped, truncated so minor suffix variation does not defeat
/// deduplication.
pub fn name_key(item: &CandidateItem) -> String {
	let mut combined = String::new();

	if let Some(brand) = item.brand.as_deref() {
		combined.push_str(brand);
	}

	combined.push_str(&item.name);

	combined
		.chars()
		.filter(|ch| ch.is_alphanumeric())
		.flat_map(|ch| ch.to_lowercase())
		.take(NAME_KEY_PREFIX_CHARS)
		.collect()
}

fn first_name_token(item: &CandidateItem) -> Option<&str> {
	item.name.split_whitespace().next()
}
