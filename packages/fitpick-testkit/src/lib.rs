use std::{
	collections::VecDeque,
	sync::Mutex,
};

use fitpick_config::{Cache, Config, Search, Service, Source};
use fitpick_domain::{CandidateItem, ItemType, SearchRequest, Site};
use fitpick_providers::FetchQuery;
use fitpick_service::{BoxFuture, CandidateSource};

/// A config with the defaults the pipeline tests assume: offline source,
/// memory-only cache, rescue floor at 10.
pub fn config() -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:8080".to_string(),
			log_level: "info".to_string(),
		},
		search: Search {
			max_queries: 6,
			candidate_floor: 10,
			fetch_hits: 30,
			budget_ceiling: 20_000,
		},
		source: Source {
			mode: "offline".to_string(),
			endpoint: String::new(),
			application_id: None,
			timeout_ms: 1_000,
		},
		cache: Cache { ttl_hours: 12, durable_path: None },
	}
}

pub fn search_request(free_text: &str, item_type: ItemType) -> SearchRequest {
	SearchRequest {
		free_text: free_text.to_string(),
		item_type,
		budget_min: 3_000,
		budget_max: 12_000,
		gender: None,
		season: Vec::new(),
		color: Vec::new(),
		material: Vec::new(),
		mood: None,
		exclude: Vec::new(),
	}
}

pub fn candidate(id: &str, name: &str, price: u64) -> CandidateItem {
	CandidateItem {
		id: id.to_string(),
		site: Site::Rakuten,
		name: name.to_string(),
		price,
		image_url: Some(format!("https://img.example.com/shop/{id}/main.jpg")),
		url: format!("https://example.com/{id}"),
		brand: None,
		summary: None,
		score: None,
		size_prediction: None,
	}
}

/// Candidate source fed from a script of fetch outcomes, one per call, in
/// order. Records every issued `FetchQuery`; once the script runs out, calls
/// return zero results.
pub struct ScriptedSource {
	batches: Mutex<VecDeque<fitpick_providers::Result<Vec<CandidateItem>>>>,
	issued: Mutex<Vec<FetchQuery>>,
}
impl ScriptedSource {
	pub fn new(
		batches: impl IntoIterator<Item = fitpick_providers::Result<Vec<CandidateItem>>>,
	) -> Self {
		Self {
			batches: Mutex::new(batches.into_iter().collect()),
			issued: Mutex::new(Vec::new()),
		}
	}

	/// Every query issued so far, in call order.
	pub fn issued(&self) -> Vec<FetchQuery> {
		self.issued.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}
}
impl CandidateSource for ScriptedSource {
	fn fetch<'a>(
		&'a self,
		_cfg: &'a fitpick_config::Source,
		query: &'a FetchQuery,
	) -> BoxFuture<'a, fitpick_providers::Result<Vec<CandidateItem>>> {
		Box::pin(async move {
			self.issued.lock().unwrap_or_else(|err| err.into_inner()).push(query.clone());

			self.batches
				.lock()
				.unwrap_or_else(|err| err.into_inner())
				.pop_front()
				.unwrap_or_else(|| Ok(Vec::new()))
		})
	}
}
