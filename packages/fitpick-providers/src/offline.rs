use fitpick_domain::{CandidateItem, Site};

use crate::FetchQuery;

const POOL_SIZE: u64 = 8;
const PRICE_STEP: u64 = 1_200;
const BRANDS: [&str; 4] = ["Fitpick Studio", "Atelier Hem", "Maison Nord", "Closet Lab"];

/// Deterministic placeholder candidates, used when the deployment runs
/// without marketplace credentials. Names echo the query keyword, prices step
/// up from the requested minimum, and URLs are distinct so the whole
/// selection pipeline, dedup included, is exercisable offline.
pub fn fixture_candidates(query: &FetchQuery) -> Vec<CandidateItem> {
	let label = query.keyword.split_whitespace().next().unwrap_or("アイテム").to_string();
	let base_price = query.min_price.unwrap_or(1_000);

	(0..POOL_SIZE)
		.map(|idx| CandidateItem {
			id: format!("offline-{idx}"),
			site: if idx % 2 == 0 { Site::Amazon } else { Site::Zozo },
			name: format!("サンプル{} {label} アイテム", idx + 1),
			price: base_price.saturating_add(idx * PRICE_STEP),
			image_url: None,
			url: format!("https://example.com/offline/{idx}"),
			brand: Some(BRANDS[idx as usize % BRANDS.len()].to_string()),
			summary: Some("オフライン環境向けのサンプル候補".to_string()),
			score: None,
			size_prediction: None,
		})
		.collect()
}
