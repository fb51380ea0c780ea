use std::collections::HashMap;

use time::Duration;

use crate::{Error, FitpickService, Result, cache};
use fitpick_domain::{CandidateItem, SearchRequest, TOP_PICKS, filter, query, select};
use fitpick_providers::FetchQuery;

/// Advisory note when no candidates could be fetched at all.
const NOTE_NO_CANDIDATES: &str = "候補を取得できませんでした";
/// Advisory note when the final selection holds fewer than four items.
const NOTE_UNDER_FILLED: &str = "候補が不足しています";

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
	/// Every query actually issued, primary first.
	pub query_plan: Vec<String>,
	pub items: Vec<CandidateItem>,
	pub used_cache: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub note: Option<String>,
}

impl FitpickService {
	/// Runs the full two-stage pipeline: cache probe, primary fetch,
	/// filter/score/select, conditional rescue with a widened budget window,
	/// then cache write. Source failures degrade the result, never the request.
	pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
		validate(&request)?;

		let window = request.budget_window(self.cfg.search.budget_ceiling);
		let key = cache::build_cache_key(&request, window);

		if let Some(mut cached) = self.cache.get(&key).await {
			cached.used_cache = true;

			return Ok(cached);
		}

		let mut plan = query::build_queries(&request, self.cfg.search.max_queries).into_iter();
		let Some(primary) = plan.next() else {
			return Err(Error::InvalidRequest {
				message: "Request yields no usable query.".to_string(),
			});
		};
		let rescue = plan.next();
		let mut issued = vec![primary.clone()];
		let fetch = FetchQuery::from_window(primary.as_str(), window, self.cfg.search.fetch_hits);
		let mut pool = match self.source.fetch(&self.cfg.source, &fetch).await {
			Ok(candidates) => candidates,
			Err(err) => {
				tracing::warn!(%err, query = %primary, "Primary fetch failed.");

				return Ok(SearchResponse {
					query_plan: issued,
					items: Vec::new(),
					used_cache: false,
					note: Some(NOTE_NO_CANDIDATES.to_string()),
				});
			},
		};
		let non_excluded =
			pool.iter().filter(|item| !filter::should_exclude(item, &request, window)).count();
		let mut items = select::select_top_four(&pool, &request, window);

		let needs_rescue = non_excluded < self.cfg.search.candidate_floor as usize
			|| items.len() < TOP_PICKS;

		// The planner already guarantees the rescue query is distinct and
		// non-trivial when it exists.
		if needs_rescue && let Some(rescue) = rescue {
			let fetch = FetchQuery::from_window(
				rescue.as_str(),
				window.widened(),
				self.cfg.search.fetch_hits,
			);

			issued.push(rescue);

			match self.source.fetch(&self.cfg.source, &fetch).await {
				Ok(extra) if !extra.is_empty() => {
					pool = merge_by_url(pool, extra);
					items = select::select_top_four(&pool, &request, window);
				},
				Ok(_) => {},
				Err(err) => {
					tracing::debug!(%err, "Rescue fetch failed; keeping initial results.");
				},
			}
		}

		let items = annotate_size_predictions(items);
		let note = (items.len() < TOP_PICKS).then(|| NOTE_UNDER_FILLED.to_string());
		let payload = SearchResponse { query_plan: issued, items, used_cache: false, note };

		self.cache.put(&key, &payload, Duration::hours(self.cfg.cache.ttl_hours)).await;

		Ok(payload)
	}
}

fn validate(request: &SearchRequest) -> Result<()> {
	if request.free_text.trim().is_empty() {
		return Err(Error::InvalidRequest { message: "freeText must be non-empty.".to_string() });
	}

	Ok(())
}

/// Merges the rescue batch into the initial pool keyed by canonical URL:
/// first-seen position, last-seen value.
fn merge_by_url(initial: Vec<CandidateItem>, extra: Vec<CandidateItem>) -> Vec<CandidateItem> {
	let mut order: Vec<String> = Vec::new();
	let mut by_url: HashMap<String, CandidateItem> = HashMap::new();

	for item in initial.into_iter().chain(extra) {
		if !by_url.contains_key(&item.url) {
			order.push(item.url.clone());
		}

		by_url.insert(item.url.clone(), item);
	}

	order.into_iter().filter_map(|url| by_url.remove(&url)).collect()
}

/// Placeholder sizing: alternate "M"/"L" by selection index. Deliberately
/// naive; not a sizing model.
fn annotate_size_predictions(items: Vec<CandidateItem>) -> Vec<CandidateItem> {
	items
		.into_iter()
		.enumerate()
		.map(|(idx, mut item)| {
			item.size_prediction = Some(if idx % 2 == 0 { "M" } else { "L" }.to_string());

			item
		})
		.collect()
}
